use crate::drag::Draggable;
use crate::scene::SceneAccess;
use crate::selection::SceneMouse;
use bevy::prelude::*;
use grabkit_core::scene::SceneObjects;

pub fn handle_drag_motion(
    scene_mouse: Res<SceneMouse>,
    mut scene: SceneAccess,
    draggables: Query<(Entity, &Draggable)>,
) {
    // Objects stay put while the cursor is outside of the window.
    let Some((cursor, camera)) = scene_mouse.pointer() else {
        return;
    };

    for (entity, draggable) in draggables.iter() {
        let Some(position) = scene.position(entity) else {
            continue;
        };

        if let Some(target) = draggable.on_pointer_move(position, &cursor, &camera) {
            if let Err(err) = scene.set_position(entity, target) {
                log::error!("Failed to move {:?}: {}", entity, err);
            }
        }
    }
}
