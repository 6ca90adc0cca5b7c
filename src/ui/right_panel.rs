use crate::scene::SceneAccess;
use crate::selection::InteractionMenu;
use bevy_egui::{egui, EguiContexts};
use grabkit_core::scene::SceneObjects;

use super::UiState;

pub(super) fn ui(
    ui_context: &mut EguiContexts,
    ui_state: &mut UiState,
    menu: &InteractionMenu,
    scene: &mut SceneAccess,
) {
    if !ui_state.object_list_open {
        return;
    }

    ui_state.object_list.retain_existing(&*scene);
    let mut toggled = None;

    egui::SidePanel::right("side_panel")
        .default_width(220.0)
        .resizable(false)
        .show(ui_context.ctx_mut(), |ui| {
            ui.heading("Objects");

            egui::ScrollArea::vertical().show(ui, |ui| {
                for entry in ui_state.object_list.entries() {
                    let is_visible = scene.is_visible(entry.object);
                    let is_selected = menu.selection().is_selected(entry.object);

                    ui.horizontal(|ui| {
                        let visibility_icon = if is_visible { "🌑" } else { "🌕" };
                        if ui.button(visibility_icon).clicked() {
                            toggled = Some(entry.object);
                        }

                        let name = egui::RichText::new(&entry.name);
                        ui.label(if is_selected { name.strong() } else { name });
                    });
                }
            });
        });

    if let Some(object) = toggled {
        match ui_state.object_list.toggle_visibility(object, scene) {
            Ok(visible) => log::debug!("{:?} is now visible: {}", object, visible),
            Err(err) => log::error!("Failed to toggle the visibility of {:?}: {}", object, err),
        }
    }
}
