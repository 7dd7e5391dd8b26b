use bevy::prelude::*;

mod ai;
mod camera;
mod constants;
mod hex;
mod movement;
mod placement;
mod procedural_meshes;
mod setup;
mod types;
mod ui;
mod units;
mod world;

use camera::rts_camera_system;
use movement::march_system;
use placement::{
    ghost_system, path_preview_system, placement_input_system, sync_cursor_system,
    validate_placer_keys, Placer, PlacerKeys,
};
use setup::setup_scene;
use ui::update_placement_ui;
use units::Loadout;
use world::WorldMap;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .init_resource::<WorldMap>()
        .init_resource::<Loadout>()
        .init_resource::<PlacerKeys>()
        .init_resource::<Placer>()
        .add_systems(Startup, (setup_scene, validate_placer_keys))
        .add_systems(
            Update,
            (
                (
                    placement_input_system,
                    sync_cursor_system,
                    ghost_system,
                    path_preview_system,
                )
                    .chain(),
                rts_camera_system,
                march_system,
                update_placement_ui,
            ),
        )
        .run();
}
