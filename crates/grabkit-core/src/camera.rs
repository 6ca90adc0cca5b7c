//! Pinhole and orthographic camera model used to move between screen and world space.
//!
//! Screen coordinates are logical pixels with their origin at the top-left corner of the
//! viewport and the y axis pointing down, as reported by the window cursor. The camera pose
//! maps the camera local frame (+X right, +Y up, looking down −Z) to world space.

use crate::parry::query::Ray;
use crate::rapier::math::{Isometry, Point, Real, Vector};
use na::{Point2, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Projection {
    /// Perspective projection with a vertical field of view, in radians.
    Perspective { fov_y: Real },
    /// Orthographic projection showing `2 * half_height` world units vertically.
    Orthographic { half_height: Real },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective {
            fov_y: std::f32::consts::FRAC_PI_4,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: Real,
    pub height: Real,
}

impl Viewport {
    pub fn new(width: Real, height: Real) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn aspect_ratio(&self) -> Real {
        self.width / self.height
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraView {
    pub pose: Isometry<Real>,
    pub projection: Projection,
    pub viewport: Viewport,
}

impl CameraView {
    pub fn new(pose: Isometry<Real>, projection: Projection, viewport: Viewport) -> Self {
        Self {
            pose,
            projection,
            viewport,
        }
    }

    /// A camera standing at `eye` and looking toward `target`.
    pub fn look_at(
        eye: Point<Real>,
        target: Point<Real>,
        up: Vector<Real>,
        projection: Projection,
        viewport: Viewport,
    ) -> Self {
        let pose = Isometry::look_at_rh(&eye, &target, &up).inverse();
        Self::new(pose, projection, viewport)
    }

    pub fn eye(&self) -> Point<Real> {
        self.pose.translation.vector.into()
    }

    pub fn forward(&self) -> Vector<Real> {
        self.pose * -Vector::z()
    }

    /// Distance of `point` from the camera, measured along the view direction.
    pub fn depth_of(&self, point: &Point<Real>) -> Real {
        -self.pose.inverse_transform_point(point).z
    }

    /// Projects a world point. The returned point is `(x, y, depth)` with `x, y` in pixels.
    pub fn world_to_screen(&self, point: &Point<Real>) -> Option<Point<Real>> {
        let local = self.pose.inverse_transform_point(point);
        let depth = -local.z;
        let half = self.half_extents_at(depth)?;
        let ndc = Vector2::new(local.x / half.x, local.y / half.y);
        let screen = self.ndc_to_screen(ndc);
        Some(Point::new(screen.x, screen.y, depth))
    }

    /// The world point seen at `screen` lying at `depth` along the view direction.
    pub fn screen_to_world(&self, screen: &Point2<Real>, depth: Real) -> Option<Point<Real>> {
        let ndc = self.screen_to_ndc(screen)?;
        let half = self.half_extents_at(depth)?;
        let local = Point::new(ndc.x * half.x, ndc.y * half.y, -depth);
        Some(self.pose * local)
    }

    /// The world-space ray starting at the camera and passing through `screen`.
    pub fn ray_through(&self, screen: &Point2<Real>) -> Option<Ray> {
        match self.projection {
            Projection::Perspective { .. } => {
                let eye = self.eye();
                let through = self.screen_to_world(screen, 1.0)?;
                Some(Ray::new(eye, (through - eye).normalize()))
            }
            Projection::Orthographic { .. } => {
                let origin = self.screen_to_world(screen, 0.0)?;
                Some(Ray::new(origin, self.forward()))
            }
        }
    }

    fn half_extents_at(&self, depth: Real) -> Option<Vector2<Real>> {
        if self.viewport.is_empty() {
            return None;
        }

        let half_height = match self.projection {
            Projection::Perspective { fov_y } => {
                if depth <= 0.0 {
                    return None;
                }
                (fov_y / 2.0).tan() * depth
            }
            Projection::Orthographic { half_height } => half_height,
        };

        Some(Vector2::new(
            half_height * self.viewport.aspect_ratio(),
            half_height,
        ))
    }

    fn screen_to_ndc(&self, screen: &Point2<Real>) -> Option<Vector2<Real>> {
        if self.viewport.is_empty() {
            return None;
        }

        Some(Vector2::new(
            screen.x / self.viewport.width * 2.0 - 1.0,
            1.0 - screen.y / self.viewport.height * 2.0,
        ))
    }

    fn ndc_to_screen(&self, ndc: Vector2<Real>) -> Point2<Real> {
        Point2::new(
            (ndc.x + 1.0) / 2.0 * self.viewport.width,
            (1.0 - ndc.y) / 2.0 * self.viewport.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perspective_camera() -> CameraView {
        CameraView::look_at(
            Point::origin(),
            Point::new(0.0, 0.0, 1.0),
            Vector::y(),
            Projection::default(),
            Viewport::new(800.0, 600.0),
        )
    }

    #[test]
    fn viewport_center_looks_down_the_forward_axis() {
        let camera = perspective_camera();
        let center = camera
            .screen_to_world(&Point2::new(400.0, 300.0), 5.0)
            .unwrap();
        assert!((center - Point::new(0.0, 0.0, 5.0)).norm() < 1.0e-5);
        assert!((camera.forward() - Vector::z()).norm() < 1.0e-6);
    }

    #[test]
    fn projection_round_trips_through_screen_space() {
        let camera = perspective_camera();
        let point = Point::new(2.0, 3.0, 5.0);
        let screen = camera.world_to_screen(&point).unwrap();
        assert!((screen.z - 5.0).abs() < 1.0e-5);

        let back = camera
            .screen_to_world(&Point2::new(screen.x, screen.y), screen.z)
            .unwrap();
        assert!((back - point).norm() < 1.0e-4);
    }

    #[test]
    fn screen_y_grows_downward() {
        let camera = perspective_camera();
        let above = camera.world_to_screen(&Point::new(0.0, 1.0, 5.0)).unwrap();
        let below = camera.world_to_screen(&Point::new(0.0, -1.0, 5.0)).unwrap();
        assert!(above.y < below.y);
    }

    #[test]
    fn points_behind_a_perspective_camera_are_not_projected() {
        let camera = perspective_camera();
        assert_eq!(camera.world_to_screen(&Point::new(0.0, 0.0, -1.0)), None);
        assert_eq!(camera.screen_to_world(&Point2::new(10.0, 10.0), 0.0), None);
    }

    #[test]
    fn empty_viewport_cannot_project() {
        let mut camera = perspective_camera();
        camera.viewport = Viewport::new(0.0, 600.0);
        assert!(camera.ray_through(&Point2::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn orthographic_rays_are_parallel() {
        let camera = CameraView::look_at(
            Point::new(0.0, 10.0, 0.0),
            Point::origin(),
            -Vector::z(),
            Projection::Orthographic { half_height: 5.0 },
            Viewport::new(200.0, 100.0),
        );
        let a = camera.ray_through(&Point2::new(10.0, 10.0)).unwrap();
        let b = camera.ray_through(&Point2::new(150.0, 80.0)).unwrap();
        assert!((a.dir - b.dir).norm() < 1.0e-6);
        assert!((a.dir + Vector::y()).norm() < 1.0e-6);

        let point = Point::new(1.5, 0.0, -2.0);
        let screen = camera.world_to_screen(&point).unwrap();
        let back = camera
            .screen_to_world(&Point2::new(screen.x, screen.y), screen.z)
            .unwrap();
        assert!((back - point).norm() < 1.0e-4);
    }
}
