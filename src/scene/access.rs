use super::{DraggableTag, SceneObject};
use crate::styling::{color_to_rgba, rgba_to_color};
use bevy::ecs::query::QueryData;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_rapier::pipeline::QueryFilter;
use bevy_rapier::plugin::RapierContext;
use grabkit_core::parry::query::Ray;
use grabkit_core::rapier::math::{Point, Real};
use grabkit_core::raycast::{RayHit, SceneQuery};
use grabkit_core::scene::{BlendMode, MaterialBackend, RenderQueue, Rgba, SceneObjects};
use grabkit_core::InteractionError;

#[derive(QueryData)]
#[query_data(mutable)]
pub struct SceneObjectData {
    pub entity: Entity,
    pub transform: &'static mut Transform,
    pub visibility: &'static mut Visibility,
    pub draggable: Option<&'static DraggableTag>,
    pub name: Option<&'static Name>,
    pub material: Option<&'static Handle<StandardMaterial>>,
}

/// Scene objects, their materials, and the physics ray-cast pipeline.
#[derive(SystemParam)]
pub struct SceneAccess<'w, 's> {
    physics: Res<'w, RapierContext>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    objects: Query<'w, 's, SceneObjectData, With<SceneObject>>,
}

impl SceneAccess<'_, '_> {
    fn material(&self, object: Entity) -> Result<&StandardMaterial, InteractionError> {
        let data = self
            .objects
            .get(object)
            .map_err(|_| InteractionError::StaleHandle)?;
        data.material
            .and_then(|handle| self.materials.get(handle))
            .ok_or(InteractionError::MissingMaterial)
    }

    fn material_mut(&mut self, object: Entity) -> Result<&mut StandardMaterial, InteractionError> {
        let data = self
            .objects
            .get(object)
            .map_err(|_| InteractionError::StaleHandle)?;
        let handle = data.material.ok_or(InteractionError::MissingMaterial)?.clone();
        self.materials
            .get_mut(&handle)
            .ok_or(InteractionError::MissingMaterial)
    }
}

impl SceneObjects for SceneAccess<'_, '_> {
    type Handle = Entity;

    fn exists(&self, object: Entity) -> bool {
        self.objects.contains(object)
    }

    fn is_draggable(&self, object: Entity) -> bool {
        self.objects
            .get(object)
            .map(|data| data.draggable.is_some())
            .unwrap_or(false)
    }

    fn is_visible(&self, object: Entity) -> bool {
        self.objects
            .get(object)
            .map(|data| *data.visibility != Visibility::Hidden)
            .unwrap_or(false)
    }

    fn set_visible(&mut self, object: Entity, visible: bool) -> Result<(), InteractionError> {
        let mut data = self
            .objects
            .get_mut(object)
            .map_err(|_| InteractionError::StaleHandle)?;
        *data.visibility = if visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        Ok(())
    }

    fn position(&self, object: Entity) -> Option<Point<Real>> {
        self.objects
            .get(object)
            .ok()
            .map(|data| data.transform.translation.into())
    }

    fn set_position(
        &mut self,
        object: Entity,
        position: Point<Real>,
    ) -> Result<(), InteractionError> {
        let mut data = self
            .objects
            .get_mut(object)
            .map_err(|_| InteractionError::StaleHandle)?;
        data.transform.translation = position.into();
        Ok(())
    }

    fn name(&self, object: Entity) -> Option<String> {
        let data = self.objects.get(object).ok()?;
        Some(
            data.name
                .map(|name| name.as_str().to_string())
                .unwrap_or_else(|| format!("{:?}", object)),
        )
    }

    fn handles(&self) -> Vec<Entity> {
        let mut handles: Vec<_> = self.objects.iter().map(|data| data.entity).collect();
        // Spawn order.
        handles.sort();
        handles
    }
}

impl MaterialBackend for SceneAccess<'_, '_> {
    fn color(&self, object: Entity) -> Result<Rgba, InteractionError> {
        Ok(color_to_rgba(self.material(object)?.base_color))
    }

    fn set_color(&mut self, object: Entity, color: Rgba) -> Result<(), InteractionError> {
        self.material_mut(object)?.base_color = rgba_to_color(color);
        Ok(())
    }

    fn blend_mode(&self, object: Entity) -> Result<BlendMode, InteractionError> {
        Ok(blend_mode_of(self.material(object)?.alpha_mode))
    }

    fn set_blend_mode(&mut self, object: Entity, mode: BlendMode) -> Result<(), InteractionError> {
        self.material_mut(object)?.alpha_mode = alpha_mode_of(mode);
        Ok(())
    }
}

fn blend_mode_of(alpha_mode: AlphaMode) -> BlendMode {
    match alpha_mode {
        AlphaMode::Opaque => BlendMode::OPAQUE,
        AlphaMode::Mask(_) => BlendMode {
            queue: RenderQueue::AlphaTest,
            ..BlendMode::OPAQUE
        },
        _ => BlendMode::TRANSPARENT,
    }
}

/// Bevy derives the depth writes and the render phase from the alpha mode.
fn alpha_mode_of(mode: BlendMode) -> AlphaMode {
    match (mode.alpha_blend, mode.queue) {
        (true, _) => AlphaMode::Blend,
        (false, RenderQueue::AlphaTest) => AlphaMode::Mask(0.5),
        (false, _) => AlphaMode::Opaque,
    }
}

impl SceneQuery for SceneAccess<'_, '_> {
    fn cast_ray(
        &self,
        ray: &Ray,
        max_toi: Real,
        predicate: &dyn Fn(Entity) -> bool,
    ) -> Option<RayHit<Entity>> {
        let filter = |entity: Entity| self.objects.contains(entity) && predicate(entity);
        self.physics
            .cast_ray(
                ray.origin.into(),
                ray.dir.into(),
                max_toi,
                true,
                QueryFilter::default().predicate(&filter),
            )
            .map(|(object, toi)| RayHit { object, toi })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_preset_blends() {
        let alpha_mode = alpha_mode_of(BlendMode::TRANSPARENT);
        assert_eq!(alpha_mode, AlphaMode::Blend);

        let mode = blend_mode_of(alpha_mode);
        assert_eq!(mode, BlendMode::TRANSPARENT);
        assert!(mode.alpha_blend);
        assert!(!mode.depth_write);
    }

    #[test]
    fn opaque_preset_writes_depth() {
        assert_eq!(alpha_mode_of(BlendMode::OPAQUE), AlphaMode::Opaque);
        assert_eq!(blend_mode_of(AlphaMode::Opaque), BlendMode::OPAQUE);
    }

    #[test]
    fn alpha_test_maps_to_mask() {
        let mode = blend_mode_of(AlphaMode::Mask(0.3));
        assert_eq!(mode.queue, RenderQueue::AlphaTest);
        assert!(!mode.alpha_blend);
        assert_eq!(alpha_mode_of(mode), AlphaMode::Mask(0.5));
    }

    #[test]
    fn other_blending_modes_read_as_transparent() {
        let blending = [
            AlphaMode::Premultiplied,
            AlphaMode::Add,
            AlphaMode::Multiply,
        ];
        for alpha_mode in blending {
            assert_eq!(blend_mode_of(alpha_mode), BlendMode::TRANSPARENT);
        }
    }
}
