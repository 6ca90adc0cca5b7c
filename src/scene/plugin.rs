use super::{DraggableTag, SceneObject};
use crate::styling::rgba_to_color;
use bevy::prelude::*;
use bevy_rapier::geometry::Collider;
use grabkit_core::description::SceneDescription;

/// The objects spawned at startup.
#[derive(Clone, Debug, Default, Resource, Deref)]
pub struct SceneSeed(pub SceneDescription);

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSeed>()
            .add_systems(Startup, spawn_scene_objects);
    }
}

fn spawn_scene_objects(
    mut commands: Commands,
    seed: Res<SceneSeed>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for object in &seed.objects {
        let half_extents = object.half_extents();
        let color = object.color();
        let mesh = meshes.add(Cuboid::new(
            half_extents.x * 2.0,
            half_extents.y * 2.0,
            half_extents.z * 2.0,
        ));
        // One material per object: the context menu edits them independently.
        let material = materials.add(StandardMaterial {
            base_color: rgba_to_color(color),
            alpha_mode: if color.is_opaque() {
                AlphaMode::Opaque
            } else {
                AlphaMode::Blend
            },
            ..default()
        });

        let mut entity = commands.spawn((
            PbrBundle {
                mesh,
                material,
                transform: Transform::from_translation(object.position().coords.into()),
                ..default()
            },
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
            SceneObject,
            Name::new(object.name.clone()),
        ));

        if object.draggable {
            entity.insert(DraggableTag);
        }
    }

    log::info!("Spawned {} scene objects", seed.objects.len());
}
