// Scene setup - board tiles, lights, camera, placement cursor, HUD
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use std::f32::consts::PI;

use crate::constants::*;
use crate::placement::PlacementCursor;
use crate::procedural_meshes::create_hex_tile_mesh;
use crate::types::RtsCamera;
use crate::ui::spawn_placement_ui;
use crate::world::WorldMap;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    world_map: Res<WorldMap>,
) {
    // Board tiles in two alternating shades
    let tile_mesh = meshes.add(create_hex_tile_mesh(HEX_SIZE - TILE_GAP));
    let light_tile = materials.add(StandardMaterial {
        base_color: Color::srgb(0.42, 0.4, 0.36),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..default()
    });
    let dark_tile = materials.add(StandardMaterial {
        base_color: Color::srgb(0.32, 0.31, 0.28),
        perceptual_roughness: 0.9,
        metallic: 0.0,
        ..default()
    });

    for tile in world_map.tiles() {
        let material = if (tile.q + tile.r).rem_euclid(2) == 0 {
            light_tile.clone()
        } else {
            dark_tile.clone()
        };
        commands.spawn((
            Mesh3d(tile_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(tile.to_world(HEX_SIZE)),
        ));
    }

    // Directional light (sun)
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform {
            translation: Vec3::new(0.0, 50.0, 0.0),
            rotation: Quat::from_rotation_x(-PI / 4.0),
            ..default()
        },
    ));
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.5, 0.5, 0.6),
        brightness: 300.0,
        ..default()
    });

    // RTS camera looking at the board center
    let focus_point = Vec3::ZERO;
    let distance = 35.0;
    let yaw = 0.0;
    let pitch = -0.9;
    let rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(focus_point + rotation * Vec3::new(0.0, 0.0, distance))
            .with_rotation(rotation),
        RtsCamera {
            focus_point,
            yaw,
            pitch,
            distance,
        },
    ));

    // Placement cursor marker on the center tile
    let cursor_mesh = meshes.add(create_hex_tile_mesh(HEX_SIZE * CURSOR_MARKER_SCALE));
    let cursor_material = materials.add(StandardMaterial {
        base_color: PLAYER_COLOR.with_alpha(CURSOR_ALPHA),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        ..default()
    });
    commands.spawn((
        Mesh3d(cursor_mesh),
        MeshMaterial3d(cursor_material),
        Transform::from_xyz(0.0, MARKER_LIFT, 0.0),
        PlacementCursor,
        NotShadowCaster,
        NotShadowReceiver,
    ));

    spawn_placement_ui(&mut commands);
}
