//! Pointer-driven dragging on the plane holding the object's original depth.

use crate::camera::CameraView;
use crate::rapier::math::{Point, Real, Vector};
use na::Point2;

/// State of an ongoing drag, alive from pointer-down to pointer-up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    pub grab_offset: Vector<Real>,
    pub original_z: Real,
}

/// Per-object drag state machine: idle until a pointer-down, dragging until the pointer-up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Starts dragging an object located at `position` that was grabbed at `pointer`.
    ///
    /// The caller is responsible for checking the object is draggable and under the pointer.
    /// Returns `false` if the object cannot be projected by the camera.
    pub fn on_pointer_down(
        &mut self,
        position: Point<Real>,
        pointer: &Point2<Real>,
        camera: &CameraView,
    ) -> bool {
        let depth = camera.depth_of(&position);
        let Some(grabbed) = camera.screen_to_world(pointer, depth) else {
            return false;
        };

        self.session = Some(DragSession {
            grab_offset: position - grabbed,
            original_z: position.z,
        });
        true
    }

    /// The position the dragged object must be moved to, or `None` when idle.
    pub fn on_pointer_move(
        &self,
        position: Point<Real>,
        pointer: &Point2<Real>,
        camera: &CameraView,
    ) -> Option<Point<Real>> {
        let session = self.session?;
        let depth = camera.depth_of(&position);
        let target = camera.screen_to_world(pointer, depth)? + session.grab_offset;
        Some(Point::new(target.x, target.y, session.original_z))
    }

    pub fn on_pointer_up(&mut self) {
        self.session = None;
    }
}
