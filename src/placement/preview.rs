// Preview visuals - cursor transform, unit ghost, fading path markers
use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;

use crate::constants::*;
use crate::procedural_meshes::{create_hex_tile_mesh, create_unit_mesh};
use crate::units::Loadout;
use crate::world::WorldMap;

use super::state::{PathMarker, PlacementCursor, Placer, UnitGhost};

/// System: keep the cursor entity's transform in step with the placer.
/// The mirror flag shows as a horizontal flip of the cursor and its ghost.
pub fn sync_cursor_system(
    placer: Res<Placer>,
    mut cursor_query: Query<&mut Transform, With<PlacementCursor>>,
) {
    if !placer.is_changed() {
        return;
    }
    let Ok(mut transform) = cursor_query.single_mut() else {
        return;
    };
    let mut position = placer.tile.to_world(HEX_SIZE);
    position.y = MARKER_LIFT;
    transform.translation = position;
    transform.rotation = placer.facing.bearing();
    transform.scale = Vec3::new(if placer.mirrored { -1.0 } else { 1.0 }, 1.0, 1.0);
}

/// System: keep exactly one ghost for the selected slot, none otherwise.
/// The ghost is replaced whole when the selection changes, never edited.
pub fn ghost_system(
    mut commands: Commands,
    placer: Res<Placer>,
    loadout: Res<Loadout>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cursor_query: Query<Entity, With<PlacementCursor>>,
    ghost_query: Query<(Entity, &UnitGhost)>,
) {
    let current = ghost_query.single().ok();
    if current.map(|(_, ghost)| ghost.slot) == placer.selected_slot {
        return;
    }

    if let Some((entity, _)) = current {
        commands.entity(entity).despawn();
    }

    let Some(slot) = placer.selected_slot else {
        return;
    };
    let Some(kind) = loadout.get(slot) else {
        return;
    };
    let Ok(cursor) = cursor_query.single() else {
        return;
    };

    let ghost_material = materials.add(StandardMaterial {
        base_color: kind.accent().with_alpha(GHOST_ALPHA),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        ..default()
    });
    let ghost = commands
        .spawn((
            Mesh3d(create_unit_mesh(&mut meshes)),
            MeshMaterial3d(ghost_material),
            Transform::from_xyz(0.0, UNIT_LIFT, 0.0).with_scale(Vec3::splat(UNIT_SCALE)),
            UnitGhost { slot },
            NotShadowCaster,
            NotShadowReceiver,
        ))
        .id();
    commands.entity(cursor).add_children(&[ghost]);
}

/// System: rebuild the path-step markers after any placer change.
/// All old markers are despawned first; with a selection, one marker is
/// spawned per AI plan step, fading with 1 / (2 + 2 * index).
pub fn path_preview_system(
    mut commands: Commands,
    placer: Res<Placer>,
    loadout: Res<Loadout>,
    world_map: Res<WorldMap>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    marker_query: Query<Entity, With<PathMarker>>,
) {
    if !placer.is_changed() {
        return;
    }

    for entity in marker_query.iter() {
        commands.entity(entity).despawn();
    }

    let Some(kind) = placer.selected_kind(&loadout) else {
        return;
    };

    let marker_mesh = meshes.add(create_hex_tile_mesh(HEX_SIZE * PATH_MARKER_SCALE));
    for step in kind.plan_path(placer.tile, placer.facing, placer.mirrored, &world_map) {
        let alpha = 1.0 / (2.0 + 2.0 * step.index as f32);
        let material = materials.add(StandardMaterial {
            base_color: PLAYER_COLOR.with_alpha(alpha),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            ..default()
        });

        let mut position = step.tile.to_world(HEX_SIZE);
        position.y = MARKER_LIFT;
        commands.spawn((
            Mesh3d(marker_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            PathMarker { index: step.index },
            NotShadowCaster,
            NotShadowReceiver,
        ));
    }
}
