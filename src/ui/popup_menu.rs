use crate::scene::SceneAccess;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use grabkit_core::menu::{ContextAction, ContextActionMenu};
use grabkit_core::palette::ColorGenerator;
use grabkit_core::scene::SceneObjects;
use strum::IntoEnumIterator;

pub(super) fn ui(
    ui_context: &mut EguiContexts,
    menu: &mut ContextActionMenu<Entity>,
    scene: &mut SceneAccess,
    colors: &mut ColorGenerator,
) {
    let Some(anchor) = menu.anchor() else {
        return;
    };

    let title = menu
        .selection()
        .current(&*scene)
        .and_then(|object| scene.name(object));
    let mut clicked = None;

    egui::Window::new("context menu")
        .resizable(false)
        .title_bar(false)
        .fixed_pos([anchor.x, anchor.y])
        .show(ui_context.ctx_mut(), |ui| {
            if let Some(title) = title {
                ui.label(egui::RichText::new(title).strong());
                ui.separator();
            }

            for action in ContextAction::iter() {
                if ui.button(action.label()).clicked() {
                    clicked = Some(action);
                }
            }
        });

    if let Some(action) = clicked {
        if let Err(err) = menu.apply(action, scene, colors) {
            log::error!("{}: {}", action.label(), err);
        }
    }
}
