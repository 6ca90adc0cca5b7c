use crate::selection::SceneMouse;
use crate::utils;
use crate::MainCamera;
use bevy::prelude::*;
use bevy::render::camera::Projection;
use bevy::window::PrimaryWindow;
use na::Point2;

pub fn track_mouse_state(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut scene_mouse: ResMut<SceneMouse>,
    camera: Query<(&GlobalTransform, &Projection), With<MainCamera>>,
) {
    scene_mouse.cursor = None;
    scene_mouse.camera = None;

    if let Ok(window) = windows.get_single() {
        if let Ok((camera_transform, projection)) = camera.get_single() {
            scene_mouse.camera = Some(utils::camera_view(camera_transform, projection, window));
            scene_mouse.cursor = window
                .cursor_position()
                .map(|cursor| Point2::new(cursor.x, cursor.y));
        }
    }
}
