extern crate bevy_rapier3d as bevy_rapier;
extern crate nalgebra as na;

use crate::camera::{FlyCamera, FlyCameraPlugin};
use crate::cli::CliArgs;
use crate::scene::SceneSeed;
use bevy::prelude::*;
use bevy::render::camera::Projection;
use bevy_rapier::prelude::*;
use clap::Parser;
use grabkit_core::rig::CameraRig;

mod camera;
mod cli;
mod drag;
mod floor;
mod scene;
mod selection;
mod styling;
mod ui;
mod utils;

#[derive(Component)]
pub struct MainCamera;

/// Order of the interaction systems within a frame.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum InteractionSet {
    Hover,
    Input,
    Ui,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let scene = args.scene_description()?;

    let mut app = App::new();
    app.insert_resource(args)
        .insert_resource(SceneSeed(scene))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "grabkit".to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .configure_sets(
            Update,
            (
                InteractionSet::Hover,
                InteractionSet::Input,
                InteractionSet::Ui,
            )
                .chain(),
        )
        .add_plugins(styling::StylingPlugin)
        .add_plugins(floor::FloorPlugin)
        .add_plugins(scene::ScenePlugin)
        .add_plugins(selection::SelectionPlugins)
        .add_plugins(drag::DragPlugin)
        .add_plugins(FlyCameraPlugin)
        .add_plugins(ui::InteractionUiPlugin)
        .add_systems(Startup, setup_graphics)
        .add_systems(PostStartup, check_main_camera);

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("exited with error code {}", code),
    }
}

fn setup_graphics(mut commands: Commands, cli: Res<CliArgs>) {
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: false,
            ..Default::default()
        },
        transform: Transform {
            translation: Vec3::new(10.0, 2.0, 10.0),
            rotation: Quat::from_rotation_x(-std::f32::consts::FRAC_PI_4),
            ..Default::default()
        },
        ..Default::default()
    });

    let transform = Transform::from_xyz(0.0, 4.0, 9.0).looking_at(Vec3::ZERO, Vec3::Y);
    let mut rig = CameraRig::from_pose(&utils::isometry_from_transform(&transform));
    rig.mouse_sensitivity = cli.mouse_sensitivity;
    rig.move_speed = cli.move_speed;
    rig.scroll_speed = cli.scroll_speed;

    commands
        .spawn(Camera3dBundle {
            transform,
            projection: Projection::Perspective(PerspectiveProjection {
                far: 10_000.0,
                ..PerspectiveProjection::default()
            }),
            ..Default::default()
        })
        .insert(FlyCamera(rig))
        .insert(MainCamera);
}

/// Pointer interactions need a camera: running without one is a configuration error.
fn check_main_camera(cameras: Query<(), With<MainCamera>>, mut exit: EventWriter<AppExit>) {
    match cameras.iter().count() {
        1 => {}
        0 => {
            log::error!("No main camera found, pointer interactions cannot work.");
            exit.send(AppExit::error());
        }
        n => {
            log::error!("{} main cameras found, expected exactly one.", n);
            exit.send(AppExit::error());
        }
    }
}
