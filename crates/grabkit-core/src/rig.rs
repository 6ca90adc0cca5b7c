//! Free-fly camera: rotate with one button held, pan with another, zoom with the wheel and
//! move with the keyboard axes.

use crate::rapier::math::{Isometry, Real, Rotation, Vector};
use bitflags::bitflags;
use na::Vector2;

/// Pointer axis units per pixel of pointer motion.
pub const POINTER_AXIS_SCALE: Real = 0.1;

bitflags! {
    #[derive(Default)]
    pub struct RigButtons: u8 {
        const ROTATE = 1 << 0;
        const PAN = 1 << 1;
    }
}

/// Inputs sampled during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RigInput {
    /// Pointer motion in axis units, x to the right and y upward.
    pub pointer_axes: Vector2<Real>,
    pub scroll: Real,
    /// Horizontal (strafe) and vertical (forward) movement axes in `[-1, 1]`.
    pub move_axes: Vector2<Real>,
    pub buttons: RigButtons,
}

impl RigInput {
    pub fn from_pixels(pointer_delta: Vector2<Real>) -> Self {
        Self {
            pointer_axes: pointer_delta * POINTER_AXIS_SCALE,
            ..Default::default()
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraRig {
    /// Degrees of rotation per axis unit per second.
    pub mouse_sensitivity: Real,
    pub move_speed: Real,
    pub scroll_speed: Real,
    /// Degrees around the world up axis.
    yaw: Real,
    /// Degrees around the camera right axis, in `[-90, 90]`.
    pitch: Real,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1000.0,
            move_speed: 10.0,
            scroll_speed: 5.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl CameraRig {
    /// A rig whose angles match the orientation of `pose` (roll is dropped).
    pub fn from_pose(pose: &Isometry<Real>) -> Self {
        let mut rig = Self::default();
        rig.reset_angles(pose);
        rig
    }

    pub fn reset_angles(&mut self, pose: &Isometry<Real>) {
        let forward = pose.rotation * -Vector::z();
        self.pitch = forward.y.clamp(-1.0, 1.0).asin().to_degrees();
        self.yaw = (-forward.x).atan2(-forward.z).to_degrees();
    }

    pub fn yaw(&self) -> Real {
        self.yaw
    }

    pub fn pitch(&self) -> Real {
        self.pitch
    }

    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::from_axis_angle(&Vector::y_axis(), self.yaw.to_radians())
            * Rotation::from_axis_angle(&Vector::x_axis(), self.pitch.to_radians())
    }

    pub fn tick(&mut self, pose: &mut Isometry<Real>, input: &RigInput, dt: Real) {
        if input.scroll != 0.0 {
            let forward = pose.rotation * -Vector::z();
            pose.translation.vector += forward * input.scroll * self.scroll_speed;
        }

        if input.buttons.contains(RigButtons::ROTATE) {
            let delta = input.pointer_axes * self.mouse_sensitivity * dt;
            self.pitch = (self.pitch + delta.y).clamp(-90.0, 90.0);
            self.yaw -= delta.x;
            pose.rotation = self.rotation();
        }

        let right = pose.rotation * Vector::x();
        let up = pose.rotation * Vector::y();
        let forward = pose.rotation * -Vector::z();

        if input.buttons.contains(RigButtons::PAN) {
            let delta = input.pointer_axes * self.move_speed * dt;
            pose.translation.vector += right * delta.x + up * delta.y;
        }

        let step = self.move_speed * dt;
        pose.translation.vector +=
            (right * input.move_axes.x + forward * input.move_axes.y) * step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rapier::math::Point;

    fn pose_looking_down_z() -> Isometry<Real> {
        Isometry::look_at_rh(&Point::origin(), &Point::new(0.0, 0.0, -1.0), &Vector::y()).inverse()
    }

    #[test]
    fn scrolling_moves_along_the_view_direction() {
        let mut pose = pose_looking_down_z();
        let mut rig = CameraRig::from_pose(&pose);
        let input = RigInput {
            scroll: 2.0,
            ..Default::default()
        };
        rig.tick(&mut pose, &input, 0.016);
        assert!(
            (pose.translation.vector - Vector::new(0.0, 0.0, -10.0)).norm() < 1.0e-5
        );
    }

    #[test]
    fn pitch_is_clamped_to_straight_up() {
        let mut pose = pose_looking_down_z();
        let mut rig = CameraRig::from_pose(&pose);
        let input = RigInput {
            pointer_axes: Vector2::new(0.0, 50.0),
            buttons: RigButtons::ROTATE,
            ..Default::default()
        };
        for _ in 0..10 {
            rig.tick(&mut pose, &input, 0.1);
        }
        assert_eq!(rig.pitch(), 90.0);
        let forward = pose.rotation * -Vector::z();
        assert!((forward - Vector::y()).norm() < 1.0e-4);
    }

    #[test]
    fn pointer_to_the_right_turns_right() {
        let mut pose = pose_looking_down_z();
        let mut rig = CameraRig::from_pose(&pose);
        let input = RigInput {
            pointer_axes: Vector2::new(0.09, 0.0),
            buttons: RigButtons::ROTATE,
            ..Default::default()
        };
        // 0.09 * 1000 * 1.0 = 90 degrees.
        rig.tick(&mut pose, &input, 1.0);
        let forward = pose.rotation * -Vector::z();
        assert!((forward - Vector::x()).norm() < 1.0e-4);
    }

    #[test]
    fn panning_and_axes_translate_without_rotating() {
        let mut pose = pose_looking_down_z();
        let rotation = pose.rotation;
        let mut rig = CameraRig::from_pose(&pose);
        let input = RigInput {
            pointer_axes: Vector2::new(1.0, 0.5),
            move_axes: Vector2::new(0.0, 1.0),
            buttons: RigButtons::PAN,
            ..Default::default()
        };
        rig.tick(&mut pose, &input, 0.5);
        assert!(
            (pose.translation.vector - Vector::new(5.0, 2.5, -5.0)).norm() < 1.0e-5
        );
        assert_eq!(pose.rotation, rotation);
    }

    #[test]
    fn angles_are_recovered_from_a_pose() {
        let pose = Isometry::look_at_rh(
            &Point::new(0.0, 5.0, 5.0),
            &Point::origin(),
            &Vector::y(),
        )
        .inverse();
        let rig = CameraRig::from_pose(&pose);
        assert!((rig.pitch() + 45.0).abs() < 1.0e-3);
        assert!(rig.yaw().abs() < 1.0e-3);

        let forward = rig.rotation() * -Vector::z();
        assert!((forward - pose.rotation * -Vector::z()).norm() < 1.0e-4);
    }

    #[test]
    fn pixel_deltas_are_scaled_to_axis_units() {
        let input = RigInput::from_pixels(Vector2::new(10.0, -20.0));
        assert!(
            (input.pointer_axes - Vector2::new(1.0, -2.0)).norm() < 1.0e-6
        );
    }
}
