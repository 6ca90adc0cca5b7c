//! A self-contained scene made of axis-aligned boxes.
//!
//! Implements every host trait of the core. Useful for headless callers and tests.

use crate::description::SceneDescription;
use crate::error::InteractionError;
use crate::parry::bounding_volume::Aabb;
use crate::parry::query::{Ray, RayCast};
use crate::rapier::math::{Point, Real, Vector};
use crate::raycast::{RayHit, SceneQuery};
use crate::scene::{BlendMode, MaterialBackend, Rgba, SceneObjects};
use std::collections::BTreeMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MemoryMaterial {
    pub color: Rgba,
    pub blend: BlendMode,
}

#[derive(Clone, Debug)]
pub struct MemoryObject {
    pub name: String,
    pub position: Point<Real>,
    pub half_extents: Vector<Real>,
    pub visible: bool,
    pub draggable: bool,
    pub material: Option<MemoryMaterial>,
}

impl MemoryObject {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            self.position - self.half_extents,
            self.position + self.half_extents,
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryScene {
    objects: BTreeMap<ObjectId, MemoryObject>,
    next_id: u32,
}

impl MemoryScene {
    pub fn from_description(description: &SceneDescription) -> Self {
        let mut scene = Self::default();
        for object in &description.objects {
            scene.add_box(
                &object.name,
                object.position(),
                object.half_extents(),
                object.color(),
                object.draggable,
            );
        }
        scene
    }

    pub fn add_object(&mut self, object: MemoryObject) -> ObjectId {
        // Ids are never reused so stale handles stay stale.
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, object);
        id
    }

    pub fn add_box(
        &mut self,
        name: &str,
        position: Point<Real>,
        half_extents: Vector<Real>,
        color: Rgba,
        draggable: bool,
    ) -> ObjectId {
        self.add_object(MemoryObject {
            name: name.to_string(),
            position,
            half_extents,
            visible: true,
            draggable,
            material: Some(MemoryMaterial {
                color,
                blend: BlendMode::OPAQUE,
            }),
        })
    }

    pub fn remove(&mut self, object: ObjectId) -> Option<MemoryObject> {
        self.objects.remove(&object)
    }

    pub fn get(&self, object: ObjectId) -> Option<&MemoryObject> {
        self.objects.get(&object)
    }

    pub fn get_mut(&mut self, object: ObjectId) -> Option<&mut MemoryObject> {
        self.objects.get_mut(&object)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn object(&self, object: ObjectId) -> Result<&MemoryObject, InteractionError> {
        self.objects
            .get(&object)
            .ok_or(InteractionError::StaleHandle)
    }

    fn object_mut(&mut self, object: ObjectId) -> Result<&mut MemoryObject, InteractionError> {
        self.objects
            .get_mut(&object)
            .ok_or(InteractionError::StaleHandle)
    }

    fn material(&self, object: ObjectId) -> Result<&MemoryMaterial, InteractionError> {
        self.object(object)?
            .material
            .as_ref()
            .ok_or(InteractionError::MissingMaterial)
    }

    fn material_mut(&mut self, object: ObjectId) -> Result<&mut MemoryMaterial, InteractionError> {
        self.object_mut(object)?
            .material
            .as_mut()
            .ok_or(InteractionError::MissingMaterial)
    }
}

impl SceneObjects for MemoryScene {
    type Handle = ObjectId;

    fn exists(&self, object: ObjectId) -> bool {
        self.objects.contains_key(&object)
    }

    fn is_draggable(&self, object: ObjectId) -> bool {
        self.get(object).map(|o| o.draggable).unwrap_or(false)
    }

    fn is_visible(&self, object: ObjectId) -> bool {
        self.get(object).map(|o| o.visible).unwrap_or(false)
    }

    fn set_visible(&mut self, object: ObjectId, visible: bool) -> Result<(), InteractionError> {
        self.object_mut(object)?.visible = visible;
        Ok(())
    }

    fn position(&self, object: ObjectId) -> Option<Point<Real>> {
        self.get(object).map(|o| o.position)
    }

    fn set_position(
        &mut self,
        object: ObjectId,
        position: Point<Real>,
    ) -> Result<(), InteractionError> {
        self.object_mut(object)?.position = position;
        Ok(())
    }

    fn name(&self, object: ObjectId) -> Option<String> {
        self.get(object).map(|o| o.name.clone())
    }

    fn handles(&self) -> Vec<ObjectId> {
        self.objects.keys().copied().collect()
    }
}

impl MaterialBackend for MemoryScene {
    fn color(&self, object: ObjectId) -> Result<Rgba, InteractionError> {
        Ok(self.material(object)?.color)
    }

    fn set_color(&mut self, object: ObjectId, color: Rgba) -> Result<(), InteractionError> {
        self.material_mut(object)?.color = color;
        Ok(())
    }

    fn blend_mode(&self, object: ObjectId) -> Result<BlendMode, InteractionError> {
        Ok(self.material(object)?.blend)
    }

    fn set_blend_mode(
        &mut self,
        object: ObjectId,
        mode: BlendMode,
    ) -> Result<(), InteractionError> {
        self.material_mut(object)?.blend = mode;
        Ok(())
    }
}

impl SceneQuery for MemoryScene {
    fn cast_ray(
        &self,
        ray: &Ray,
        max_toi: Real,
        predicate: &dyn Fn(ObjectId) -> bool,
    ) -> Option<RayHit<ObjectId>> {
        let mut best: Option<RayHit<ObjectId>> = None;

        for (id, object) in &self.objects {
            if !predicate(*id) {
                continue;
            }

            if let Some(toi) = object.aabb().cast_local_ray(ray, max_toi, true) {
                if best.map(|b| toi < b.toi).unwrap_or(true) {
                    best = Some(RayHit { object: *id, toi });
                }
            }
        }

        best
    }
}
