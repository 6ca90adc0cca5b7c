use crate::drag::Draggable;
use crate::scene::SceneAccess;
use crate::selection::{SceneMouse, UiFocus};
use bevy::prelude::*;
use grabkit_core::scene::SceneObjects;

pub fn handle_drag_click(
    scene_mouse: Res<SceneMouse>,
    ui_focus: Res<UiFocus>,
    mouse: Res<ButtonInput<MouseButton>>,
    scene: SceneAccess,
    mut draggables: Query<&mut Draggable>,
) {
    if mouse.just_released(MouseButton::Left) {
        for mut draggable in draggables.iter_mut() {
            if draggable.is_dragging() {
                draggable.on_pointer_up();
            }
        }
    }

    if !mouse.just_pressed(MouseButton::Left) || ui_focus.pointer_over_ui {
        return;
    }

    let (Some((cursor, camera)), Some(hovered)) = (scene_mouse.pointer(), scene_mouse.hovered)
    else {
        return;
    };

    if let Ok(mut draggable) = draggables.get_mut(hovered.object) {
        let Some(position) = scene.position(hovered.object) else {
            return;
        };

        if draggable.on_pointer_down(position, &cursor, &camera) {
            log::debug!("Started dragging {:?}", hovered.object);
        }
    }
}
