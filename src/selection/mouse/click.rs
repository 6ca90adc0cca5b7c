use crate::scene::SceneAccess;
use crate::selection::{InteractionMenu, SceneMouse, UiFocus};
use bevy::prelude::*;

pub fn handle_menu_click(
    mut menu: ResMut<InteractionMenu>,
    scene_mouse: Res<SceneMouse>,
    ui_focus: Res<UiFocus>,
    mouse: Res<ButtonInput<MouseButton>>,
    scene: SceneAccess,
) {
    if mouse.just_pressed(MouseButton::Right) && !ui_focus.pointer_over_ui {
        if let Some((cursor, camera)) = scene_mouse.pointer() {
            menu.on_secondary_click(&cursor, &camera, &scene);
        }
    }

    if mouse.just_pressed(MouseButton::Left) {
        menu.on_primary_click(ui_focus.pointer_over_ui);
    }
}

pub fn tick_menu(mut menu: ResMut<InteractionMenu>, scene: SceneAccess) {
    menu.tick(&scene);
}
