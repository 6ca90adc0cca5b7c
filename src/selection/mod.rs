use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;
use grabkit_core::camera::CameraView;
use grabkit_core::menu::ContextActionMenu;
use grabkit_core::rapier::math::Real;
use grabkit_core::raycast::PointerHit;
use na::{Point2, Vector2};

use crate::cli::CliArgs;

pub mod mouse;

/// Pointer state of the current frame, in the conventions of the interaction core.
#[derive(Default, Copy, Clone, Debug, Resource)]
pub struct SceneMouse {
    /// Cursor position in logical pixels, from the top-left corner of the window.
    pub cursor: Option<Point2<Real>>,
    pub camera: Option<CameraView>,
    pub hovered: Option<PointerHit<Entity>>,
}

impl SceneMouse {
    /// Cursor and camera, when both are available this frame.
    pub fn pointer(&self) -> Option<(Point2<Real>, CameraView)> {
        Some((self.cursor?, self.camera?))
    }
}

/// Whether the pointer is currently captured by an egui area.
#[derive(Default, Copy, Clone, Debug, Resource)]
pub struct UiFocus {
    pub pointer_over_ui: bool,
}

/// The context menu and the selection it acts upon.
#[derive(Clone, Debug, Default, Resource, Deref, DerefMut)]
pub struct InteractionMenu(pub ContextActionMenu<Entity>);

struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        let menu = match app.world().get_resource::<CliArgs>() {
            Some(cli) => InteractionMenu(ContextActionMenu::new(Vector2::new(
                cli.menu_offset_x,
                cli.menu_offset_y,
            ))),
            None => InteractionMenu::default(),
        };

        app.insert_resource(menu)
            .insert_resource(SceneMouse::default())
            .insert_resource(UiFocus::default());
    }
}

pub struct SelectionPlugins;

impl PluginGroup for SelectionPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(SelectionPlugin)
            .add(mouse::SelectionMousePlugin)
    }
}
