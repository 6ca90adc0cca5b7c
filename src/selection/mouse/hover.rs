use crate::scene::SceneAccess;
use crate::selection::{SceneMouse, UiFocus};
use bevy::prelude::*;
use grabkit_core::raycast::PointerRaycaster;

pub fn update_hovered_entity(
    mut scene_mouse: ResMut<SceneMouse>,
    ui_focus: Res<UiFocus>,
    scene: SceneAccess,
) {
    scene_mouse.hovered = None;

    // The UI is drawn on top of the scene.
    if ui_focus.pointer_over_ui {
        return;
    }

    if let Some((cursor, camera)) = scene_mouse.pointer() {
        scene_mouse.hovered = PointerRaycaster::default().resolve_hit(&cursor, &camera, &scene);
    }
}
