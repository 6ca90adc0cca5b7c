use crate::scene::DraggableTag;
use crate::InteractionSet;
use bevy::prelude::*;
use grabkit_core::drag::DragController;

mod mouse;

/// Drag state of one draggable object.
#[derive(Copy, Clone, Debug, Default, Component, Deref, DerefMut)]
pub struct Draggable(pub DragController);

pub struct DragPlugin;

impl Plugin for DragPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, add_missing_drag_components)
            .add_systems(
                Update,
                (mouse::handle_drag_click, mouse::handle_drag_motion)
                    .chain()
                    .in_set(InteractionSet::Input),
            );
    }
}

fn add_missing_drag_components(
    mut commands: Commands,
    missing: Query<Entity, (With<DraggableTag>, Without<Draggable>)>,
) {
    for entity in missing.iter() {
        commands.entity(entity).insert(Draggable::default());
    }
}
