use bevy::prelude::*;
use bevy_infinite_grid::*;

pub struct FloorPlugin;

impl Plugin for FloorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InfiniteGridPlugin)
            .add_systems(Startup, setup_floor);
    }
}

fn setup_floor(mut commands: Commands) {
    commands.spawn(InfiniteGridBundle::default());
}
