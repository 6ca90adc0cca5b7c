use crate::InteractionSet;
use bevy::prelude::*;

mod click;
mod hover;
mod track;

pub struct SelectionMousePlugin;

impl Plugin for SelectionMousePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, track::track_mouse_state)
            .add_systems(
                Update,
                hover::update_hovered_entity.in_set(InteractionSet::Hover),
            )
            .add_systems(
                Update,
                (click::handle_menu_click, click::tick_menu)
                    .chain()
                    .in_set(InteractionSet::Input),
            );
    }
}
