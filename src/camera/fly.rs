use crate::selection::UiFocus;
use crate::utils;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use grabkit_core::rig::{CameraRig, RigButtons, RigInput, POINTER_AXIS_SCALE};
use na::Vector2;

/// Pixel-precise wheels report about this many pixels per notch.
const PIXELS_PER_LINE: f32 = 100.0;

#[derive(Copy, Clone, Debug, Default, Component, Deref, DerefMut)]
pub struct FlyCamera(pub CameraRig);

pub struct FlyCameraPlugin;

impl Plugin for FlyCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, fly_camera);
    }
}

fn read_axis(keys: &ButtonInput<KeyCode>, negative: [KeyCode; 2], positive: [KeyCode; 2]) -> f32 {
    let mut axis = 0.0;
    if keys.any_pressed(positive) {
        axis += 1.0;
    }
    if keys.any_pressed(negative) {
        axis -= 1.0;
    }
    axis
}

pub fn fly_camera(
    time: Res<Time>,
    ui_focus: Res<UiFocus>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut cameras: Query<(&mut Transform, &mut FlyCamera)>,
) {
    let pixels: Vec2 = motion.read().map(|event| event.delta).sum();
    let lines: f32 = wheel
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_LINE,
        })
        .sum();

    // Window y points down, the rig expects it up.
    let mut input = RigInput::from_pixels(Vector2::new(pixels.x, -pixels.y));
    input.move_axes = Vector2::new(
        read_axis(
            &keys,
            [KeyCode::KeyA, KeyCode::ArrowLeft],
            [KeyCode::KeyD, KeyCode::ArrowRight],
        ),
        read_axis(
            &keys,
            [KeyCode::KeyS, KeyCode::ArrowDown],
            [KeyCode::KeyW, KeyCode::ArrowUp],
        ),
    );

    if !ui_focus.pointer_over_ui {
        input.scroll = lines * POINTER_AXIS_SCALE;
        input.buttons.set(RigButtons::ROTATE, mouse.pressed(MouseButton::Right));
        input.buttons.set(RigButtons::PAN, mouse.pressed(MouseButton::Middle));
    }

    if input == RigInput::default() {
        return;
    }

    let dt = time.delta_seconds();
    for (mut transform, mut camera) in cameras.iter_mut() {
        let mut pose = utils::isometry_from_transform(&transform);
        camera.tick(&mut pose, &input, dt);
        utils::write_isometry(&mut transform, &pose);
    }
}
