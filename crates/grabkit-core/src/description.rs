//! Serializable description of the objects a scene starts with.

use crate::rapier::math::{Point, Real, Vector};
use crate::scene::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    pub name: String,
    pub position: [Real; 3],
    #[serde(default = "default_half_extents")]
    pub half_extents: [Real; 3],
    #[serde(default = "default_color")]
    pub color: [f32; 4],
    #[serde(default = "default_draggable")]
    pub draggable: bool,
}

fn default_half_extents() -> [Real; 3] {
    [0.5; 3]
}

fn default_color() -> [f32; 4] {
    Rgba::WHITE.into()
}

fn default_draggable() -> bool {
    true
}

impl ObjectDescription {
    pub fn position(&self) -> Point<Real> {
        Point::from(self.position)
    }

    pub fn half_extents(&self) -> Vector<Real> {
        Vector::from(self.half_extents)
    }

    pub fn color(&self) -> Rgba {
        Rgba::from(self.color)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub objects: Vec<ObjectDescription>,
}

impl SceneDescription {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Three draggable cubes standing on a fixed pedestal.
    pub fn demo() -> Self {
        let object = |name: &str, position, half_extents, color, draggable| ObjectDescription {
            name: name.to_string(),
            position,
            half_extents,
            color,
            draggable,
        };

        Self {
            objects: vec![
                object(
                    "Pedestal",
                    [0.0, -0.25, 0.0],
                    [4.0, 0.25, 2.0],
                    [0.4, 0.4, 0.45, 1.0],
                    false,
                ),
                object(
                    "Red cube",
                    [-2.0, 0.5, 0.0],
                    [0.5; 3],
                    [0.9, 0.2, 0.2, 1.0],
                    true,
                ),
                object(
                    "Green cube",
                    [0.0, 0.5, 0.0],
                    [0.5; 3],
                    [0.2, 0.8, 0.3, 1.0],
                    true,
                ),
                object(
                    "Blue cube",
                    [2.0, 0.75, 0.0],
                    [0.75; 3],
                    [0.2, 0.4, 0.9, 1.0],
                    true,
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let scene = SceneDescription::from_json(
            r#"{ "objects": [ { "name": "Crate", "position": [1, 2, 3] } ] }"#,
        )
        .unwrap();

        let object = &scene.objects[0];
        assert_eq!(object.position(), Point::new(1.0, 2.0, 3.0));
        assert_eq!(object.half_extents(), Vector::repeat(0.5));
        assert_eq!(object.color(), Rgba::WHITE);
        assert!(object.draggable);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(
            SceneDescription::from_json(r#"{ "objects": [ { "name": 3 } ] }"#).is_err()
        );
    }

    #[test]
    fn demo_scene_has_a_fixed_pedestal() {
        let demo = SceneDescription::demo();
        assert_eq!(demo.objects.iter().filter(|o| !o.draggable).count(), 1);
        assert_eq!(demo.objects.iter().filter(|o| o.draggable).count(), 3);
    }
}
