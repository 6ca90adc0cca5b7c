use bevy::prelude::*;
use bevy::render::camera::Projection;
use grabkit_core::camera::{self, CameraView, Viewport};
use grabkit_core::rapier::math::{Isometry, Real, Rotation, Translation};
use na::Quaternion;

pub fn isometry_from_transform(transform: &Transform) -> Isometry<Real> {
    let q = transform.rotation;
    Isometry::from_parts(
        Translation::from(na::Vector3::from(transform.translation)),
        Rotation::from_quaternion(Quaternion::new(q.w, q.x, q.y, q.z)),
    )
}

/// Writes the rigid part of `pose` into `transform`, leaving its scale untouched.
pub fn write_isometry(transform: &mut Transform, pose: &Isometry<Real>) {
    let q = pose.rotation.quaternion();
    transform.translation = pose.translation.vector.into();
    transform.rotation = Quat::from_xyzw(q.i, q.j, q.k, q.w);
}

pub fn camera_view(
    camera_transform: &GlobalTransform,
    projection: &Projection,
    window: &Window,
) -> CameraView {
    let pose = isometry_from_transform(&camera_transform.compute_transform());
    let projection = match projection {
        Projection::Perspective(p) => camera::Projection::Perspective { fov_y: p.fov },
        Projection::Orthographic(o) => camera::Projection::Orthographic {
            half_height: o.area.height() / 2.0,
        },
    };

    CameraView::new(
        pose,
        projection,
        Viewport::new(window.width(), window.height()),
    )
}
