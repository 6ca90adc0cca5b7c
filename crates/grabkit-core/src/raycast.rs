use crate::camera::CameraView;
use crate::parry::query::Ray;
use crate::rapier::math::{Point, Real};
use crate::scene::SceneObjects;
use na::Point2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit<H> {
    pub object: H,
    pub toi: Real,
}

/// Ray-cast service of the host scene.
pub trait SceneQuery: SceneObjects {
    /// The hit with the smallest time of impact among the objects accepted by `predicate`.
    fn cast_ray(
        &self,
        ray: &Ray,
        max_toi: Real,
        predicate: &dyn Fn(Self::Handle) -> bool,
    ) -> Option<RayHit<Self::Handle>>;
}

/// An interactive object found under the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerHit<H> {
    pub object: H,
    pub point: Point<Real>,
    pub toi: Real,
}

#[derive(Copy, Clone, Debug)]
pub struct PointerRaycaster {
    pub max_toi: Real,
}

impl Default for PointerRaycaster {
    fn default() -> Self {
        Self { max_toi: f32::MAX }
    }
}

impl PointerRaycaster {
    /// Casts the camera ray through `pointer` and returns the frontmost interactive object.
    pub fn resolve_hit<S: SceneQuery>(
        &self,
        pointer: &Point2<Real>,
        camera: &CameraView,
        scene: &S,
    ) -> Option<PointerHit<S::Handle>> {
        let ray = camera.ray_through(pointer)?;
        self.resolve_ray(&ray, scene)
    }

    pub fn resolve_ray<S: SceneQuery>(
        &self,
        ray: &Ray,
        scene: &S,
    ) -> Option<PointerHit<S::Handle>> {
        let hit = scene.cast_ray(ray, self.max_toi, &|object| scene.is_interactive(object))?;
        Some(PointerHit {
            object: hit.object,
            point: ray.point_at(hit.toi),
            toi: hit.toi,
        })
    }
}
