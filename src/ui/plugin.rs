use super::UiState;
use crate::InteractionSet;
use bevy::prelude::*;
use bevy_egui::EguiSet;

/// Plugin drawing the context menu, the object list and the main menu.
pub struct InteractionUiPlugin;

impl Plugin for InteractionUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(bevy_egui::EguiPlugin)
            .insert_resource(UiState::default())
            .add_systems(PostStartup, super::collect_object_list)
            .add_systems(PreUpdate, super::focus_ui.after(EguiSet::BeginFrame))
            .add_systems(Update, super::update_ui.in_set(InteractionSet::Ui));
    }
}
