//! The Bevy scene seen through the host traits of the interaction core.

pub use self::access::{SceneAccess, SceneObjectData};
pub use self::plugin::{ScenePlugin, SceneSeed};

mod access;
mod plugin;

use bevy::prelude::*;

/// Marks the entities the interaction core can see.
#[derive(Copy, Clone, Debug, Default, Component)]
pub struct SceneObject;

/// Marks the scene objects that can be dragged and edited through the context menu.
#[derive(Copy, Clone, Debug, Default, Component)]
pub struct DraggableTag;
