use bevy::prelude::*;

use crate::hex::{CardinalDirection, TileVector};
use crate::units::UnitKind;

#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Team {
    A,
    B,
}

/// A unit committed to the board through the placement authority.
#[derive(Component)]
pub struct PlacedUnit {
    pub kind: UnitKind,
    pub team: Team,
    pub tile: TileVector,
    pub facing: CardinalDirection,
    pub mirrored: bool,
}

/// The path a placed unit marches along, captured from its AI plan at
/// placement time. `next` indexes the step currently being walked toward.
#[derive(Component)]
pub struct PlannedPath {
    pub steps: Vec<TileVector>,
    pub next: usize,
    pub march_offset: f32, // Per-unit phase for the bob animation
}

impl PlannedPath {
    pub fn finished(&self) -> bool {
        self.next >= self.steps.len()
    }
}

#[derive(Component)]
pub struct RtsCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}
