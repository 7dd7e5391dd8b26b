// Headless placement controller tests - a minimal App drives the systems
// with manually fed key edges, one update per tap.
use bevy::asset::{AssetApp, AssetPlugin};
use bevy::prelude::*;

use crate::hex::{CardinalDirection, TileVector};
use crate::types::{PlacedUnit, Team};
use crate::units::{Loadout, UnitKind};
use crate::world::WorldMap;

use super::input::placement_input_system;
use super::keys::PlacerKeys;
use super::preview::{ghost_system, path_preview_system, sync_cursor_system};
use super::state::{PathMarker, PlacementCursor, Placer, UnitGhost};

fn test_app(board_radius: i32) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.init_asset::<Mesh>();
    app.init_asset::<Image>();
    app.init_asset::<StandardMaterial>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(WorldMap::new(board_radius));
    app.init_resource::<Loadout>();
    app.init_resource::<PlacerKeys>();
    app.init_resource::<Placer>();
    app.add_systems(
        Update,
        (
            placement_input_system,
            sync_cursor_system,
            ghost_system,
            path_preview_system,
        )
            .chain(),
    );
    app.world_mut().spawn((Transform::default(), PlacementCursor));
    // Settle the initial placer change
    app.update();
    app
}

/// Press and release a key across one frame, like a real key tap.
fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    input.release(key);
    input.clear();
}

/// Press several keys in the same frame.
fn tap_together(app: &mut App, keys: &[KeyCode]) {
    for &key in keys {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }
    app.update();
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    for &key in keys {
        input.release(key);
    }
    input.clear();
}

fn marker_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, With<PathMarker>>();
    query.iter(app.world()).count()
}

fn ghost_slot(app: &mut App) -> Option<usize> {
    let mut query = app.world_mut().query::<&UnitGhost>();
    query.iter(app.world()).next().map(|ghost| ghost.slot)
}

fn placed_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&PlacedUnit>();
    query.iter(app.world()).count()
}

fn placer(app: &App) -> &Placer {
    app.world().resource::<Placer>()
}

#[test]
fn double_tap_commits_and_returns_selection_to_none() {
    let mut app = test_app(10);

    tap(&mut app, KeyCode::Digit1);
    assert_eq!(placer(&app).selected_slot, Some(0));
    assert_eq!(ghost_slot(&mut app), Some(0));

    tap(&mut app, KeyCode::Digit1);
    assert_eq!(placer(&app).selected_slot, None);
    assert_eq!(placed_count(&mut app), 1);
    assert!(app
        .world()
        .resource::<WorldMap>()
        .is_claimed(TileVector::ORIGIN));

    let mut query = app.world_mut().query::<&PlacedUnit>();
    let unit = query.iter(app.world()).next().expect("unit was placed");
    assert_eq!(unit.kind, UnitKind::Legionnaire);
    assert_eq!(unit.team, Team::A);
    assert_eq!(unit.tile, TileVector::ORIGIN);
    assert_eq!(unit.facing, CardinalDirection::North);
    assert!(!unit.mirrored);
}

#[test]
fn move_regenerates_markers_to_the_current_plan_length() {
    let mut app = test_app(4);

    tap(&mut app, KeyCode::Digit1);
    let expected = |app: &mut App| {
        let world = app.world().resource::<WorldMap>();
        let state = app.world().resource::<Placer>();
        UnitKind::Legionnaire
            .plan_path(state.tile, state.facing, state.mirrored, world)
            .count()
    };
    assert_eq!(marker_count(&mut app), expected(&mut app));
    assert_eq!(marker_count(&mut app), 4);

    // Each move shortens the run toward the north edge by one step
    tap(&mut app, KeyCode::KeyW);
    assert_eq!(placer(&app).tile, TileVector::new(0, -1));
    assert_eq!(marker_count(&mut app), expected(&mut app));
    assert_eq!(marker_count(&mut app), 3);

    tap(&mut app, KeyCode::KeyW);
    assert_eq!(marker_count(&mut app), 2);

    // Moving away from the edge grows the plan again
    tap(&mut app, KeyCode::KeyS);
    assert_eq!(marker_count(&mut app), 3);
}

#[test]
fn rotation_regenerates_markers_along_the_new_facing() {
    let mut app = test_app(10);

    tap(&mut app, KeyCode::Digit1);
    tap(&mut app, KeyCode::KeyX);
    assert_eq!(placer(&app).facing, CardinalDirection::Northeast);

    let mut query = app.world_mut().query::<(&PathMarker, &Transform)>();
    let first = query
        .iter(app.world())
        .find(|(marker, _)| marker.index == 0)
        .map(|(_, transform)| transform.translation)
        .expect("preview should have a first step");
    let step = (TileVector::ORIGIN + CardinalDirection::Northeast).to_world(crate::constants::HEX_SIZE);
    assert!((first.x - step.x).abs() < 1e-4);
    assert!((first.z - step.z).abs() < 1e-4);
}

#[test]
fn mirror_flips_exactly_once_per_toggle() {
    let mut app = test_app(10);

    // Without a selection
    tap(&mut app, KeyCode::KeyC);
    assert!(placer(&app).mirrored);
    tap(&mut app, KeyCode::KeyC);
    assert!(!placer(&app).mirrored);

    // With a selection; the hint rotation must not affect the flag
    tap(&mut app, KeyCode::Digit2);
    tap(&mut app, KeyCode::KeyC);
    assert!(placer(&app).mirrored);
}

#[test]
fn commit_destroys_every_path_marker_and_the_ghost() {
    let mut app = test_app(10);

    tap(&mut app, KeyCode::Digit1);
    tap(&mut app, KeyCode::KeyW);
    assert!(marker_count(&mut app) > 0);

    tap(&mut app, KeyCode::Digit1);
    assert_eq!(marker_count(&mut app), 0);
    assert_eq!(ghost_slot(&mut app), None);
}

#[test]
fn without_a_selection_no_preview_is_ever_built() {
    let mut app = test_app(10);

    tap(&mut app, KeyCode::KeyW);
    tap(&mut app, KeyCode::KeyZ);
    tap(&mut app, KeyCode::KeyC);
    tap(&mut app, KeyCode::KeyE);

    assert_eq!(marker_count(&mut app), 0);
    assert_eq!(ghost_slot(&mut app), None);
    assert_eq!(placer(&app).tile, TileVector::new(1, -2));
}

#[test]
fn marker_alpha_fades_with_the_step_index() {
    let mut app = test_app(10);

    tap(&mut app, KeyCode::Digit1);

    let mut query = app
        .world_mut()
        .query::<(&PathMarker, &MeshMaterial3d<StandardMaterial>)>();
    let handles: Vec<(usize, Handle<StandardMaterial>)> = query
        .iter(app.world())
        .map(|(marker, material)| (marker.index, material.0.clone()))
        .collect();
    assert!(!handles.is_empty());

    let materials = app.world().resource::<Assets<StandardMaterial>>();
    for (index, handle) in handles {
        let material = materials.get(&handle).expect("marker material exists");
        let expected = 1.0 / (2.0 + 2.0 * index as f32);
        assert!((material.base_color.alpha() - expected).abs() < 1e-5);
    }
}

#[test]
fn rejected_commit_changes_nothing() {
    let mut app = test_app(10);

    // Claim the origin tile
    tap(&mut app, KeyCode::Digit1);
    tap(&mut app, KeyCode::Digit1);
    assert_eq!(placed_count(&mut app), 1);

    // Select again and double tap on the now occupied tile
    tap(&mut app, KeyCode::Digit1);
    let facing_before = placer(&app).facing;
    tap(&mut app, KeyCode::Digit1);

    assert_eq!(placer(&app).selected_slot, Some(0));
    assert_eq!(placer(&app).facing, facing_before);
    assert_eq!(placed_count(&mut app), 1);
}

#[test]
fn switching_selection_applies_and_undoes_direction_hints() {
    let mut app = test_app(10);

    // Outrider's hint turns the cursor right once
    tap(&mut app, KeyCode::Digit2);
    assert_eq!(placer(&app).facing, CardinalDirection::Northeast);
    assert_eq!(ghost_slot(&mut app), Some(1));

    // Switching to the Legionnaire undoes it (its own hint is neutral)
    tap(&mut app, KeyCode::Digit1);
    assert_eq!(placer(&app).facing, CardinalDirection::North);
    assert_eq!(ghost_slot(&mut app), Some(0));
}

#[test]
fn first_matching_selection_key_wins_the_tick() {
    let mut app = test_app(10);

    tap_together(&mut app, &[KeyCode::Digit1, KeyCode::Digit2]);
    assert_eq!(placer(&app).selected_slot, Some(0));

    // Same pair again: the first key double-taps and commits; the second
    // key is ignored for this tick
    tap_together(&mut app, &[KeyCode::Digit1, KeyCode::Digit2]);
    assert_eq!(placer(&app).selected_slot, None);
    assert_eq!(placed_count(&mut app), 1);
}
