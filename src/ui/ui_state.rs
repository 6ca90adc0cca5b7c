use bevy::prelude::*;
use grabkit_core::object_list::ObjectList;

#[derive(Resource)]
pub struct UiState {
    pub object_list: ObjectList<Entity>,
    pub object_list_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            object_list: ObjectList::default(),
            object_list_open: true,
        }
    }
}
