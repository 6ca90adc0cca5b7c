use crate::styling::Theme;
use crate::ui::UiState;
use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub(super) fn ui(
    ui_context: &mut EguiContexts,
    theme: &mut ResMut<Theme>,
    ui_state: &mut UiState,
    mut exit: EventWriter<AppExit>,
) {
    let mut dark_mode = theme.dark_mode;

    egui::Window::new("main menu")
        .resizable(false)
        .title_bar(false)
        .fixed_pos([5.0, 5.0])
        .show(ui_context.ctx_mut(), |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    ui.checkbox(&mut ui_state.object_list_open, "Object list");
                    ui.checkbox(&mut dark_mode, "Dark mode");
                    ui.separator();
                    if ui.button("🚪 Exit").clicked() {
                        exit.send(AppExit::Success);
                    }
                });
            })
        });

    // Only touch the theme when it changes, its change detection drives the visuals.
    if dark_mode != theme.dark_mode {
        theme.dark_mode = dark_mode;
    }
}
