// Placement keyboard input - one system handling all cursor operations
use bevy::prelude::*;

use crate::hex::RelativeDirection;
use crate::types::Team;
use crate::units::{spawn_unit_at, Loadout};
use crate::world::WorldMap;

use super::keys::PlacerKeys;
use super::state::Placer;

/// System: translate key-press edges into placement operations.
/// Runs before the preview systems so every change is visualized this frame.
pub fn placement_input_system(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    keys: Res<PlacerKeys>,
    loadout: Res<Loadout>,
    mut placer: ResMut<Placer>,
    mut world_map: ResMut<WorldMap>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Cursor movement
    for (key, direction) in keys.moves() {
        if keyboard.just_pressed(key) {
            placer.step(direction);
        }
    }

    // Rotation
    if keyboard.just_pressed(keys.rotate_anticlockwise) {
        placer.rotate(RelativeDirection::ForwardLeft);
    }
    if keyboard.just_pressed(keys.rotate_clockwise) {
        placer.rotate(RelativeDirection::ForwardRight);
    }

    // Mirror toggle
    if keyboard.just_pressed(keys.mirror_toggle) {
        placer.toggle_mirror(&loadout);
    }

    // Selection and placement; first matching key wins this tick
    for (slot, &key) in keys.select.iter().enumerate() {
        if !keyboard.just_pressed(key) {
            continue;
        }
        if placer.selected_slot == Some(slot) {
            // Double tap commits the selected unit at the cursor pose
            commit_selected(
                &mut commands,
                &mut placer,
                &mut world_map,
                &mut meshes,
                &mut materials,
                &loadout,
            );
        } else if loadout.get(slot).is_some() {
            placer.select(slot, &loadout);
            info!("Selected slot {}: {}", slot + 1, loadout.slots[slot].label());
        }
        break;
    }
}

/// Ask the placement authority to commit the cursor pose. Rejection leaves
/// all state untouched; success spawns the unit and clears the selection.
fn commit_selected(
    commands: &mut Commands,
    placer: &mut Placer,
    world_map: &mut WorldMap,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    loadout: &Loadout,
) {
    let Some(kind) = placer.selected_kind(loadout) else {
        return;
    };

    // Capture the plan the preview showed, then commit
    let steps: Vec<_> = kind
        .plan_path(placer.tile, placer.facing, placer.mirrored, world_map)
        .map(|step| step.tile)
        .collect();

    if !world_map.try_place(kind, Team::A, placer.tile, placer.facing, placer.mirrored) {
        return;
    }

    spawn_unit_at(
        commands,
        meshes,
        materials,
        kind,
        Team::A,
        placer.tile,
        placer.facing,
        placer.mirrored,
        steps,
    );
    info!(
        "Placed {} at {:?} facing {}{}",
        kind.label(),
        placer.tile,
        placer.facing.label(),
        if placer.mirrored { " (mirrored)" } else { "" }
    );
    placer.deselect(loadout);
}
