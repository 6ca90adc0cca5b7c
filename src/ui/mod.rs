use crate::scene::SceneAccess;
use crate::selection::InteractionMenu;
use crate::styling::{SceneColors, Theme};
use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use grabkit_core::object_list::ObjectList;

pub use self::plugin::InteractionUiPlugin;
pub(self) use input_blocking::focus_ui;
pub use ui_state::UiState;

mod input_blocking;
mod main_menu;
mod plugin;
mod popup_menu;
mod right_panel;
mod ui_state;

/// Fills the object list once the scene has been spawned.
pub fn collect_object_list(mut ui_state: ResMut<UiState>, scene: SceneAccess) {
    ui_state.object_list = ObjectList::collect(&scene);
    log::info!("{} draggable objects listed", ui_state.object_list.len());
}

pub fn update_ui(
    mut ui_context: EguiContexts,
    mut theme: ResMut<Theme>,
    mut ui_state: ResMut<UiState>,
    mut menu: ResMut<InteractionMenu>,
    mut colors: ResMut<SceneColors>,
    mut scene: SceneAccess,
    exit: EventWriter<AppExit>,
) {
    main_menu::ui(&mut ui_context, &mut theme, &mut ui_state, exit);
    right_panel::ui(&mut ui_context, &mut ui_state, &menu, &mut scene);
    popup_menu::ui(&mut ui_context, &mut menu.0, &mut scene, &mut colors.0);
}
