// Placement cursor state and preview marker components
use bevy::prelude::*;

use crate::constants::MIRROR_DEFAULT;
use crate::hex::{CardinalDirection, RelativeDirection, TileVector};
use crate::units::{Loadout, UnitKind};

/// Placement cursor resource: where the next unit would stand, which way it
/// would face, whether it is mirrored, and which loadout slot is selected.
/// Mutated only through the methods below, all driven by keyboard edges.
#[derive(Resource)]
pub struct Placer {
    pub selected_slot: Option<usize>,
    pub tile: TileVector,
    pub facing: CardinalDirection,
    pub mirrored: bool,
}

impl Default for Placer {
    fn default() -> Self {
        Self {
            selected_slot: None,
            tile: TileVector::ORIGIN,
            facing: CardinalDirection::North,
            mirrored: MIRROR_DEFAULT,
        }
    }
}

impl Placer {
    pub fn selected_kind(&self, loadout: &Loadout) -> Option<UnitKind> {
        self.selected_slot.and_then(|slot| loadout.get(slot))
    }

    /// Move the cursor one tile. Bounds are not checked here; the world map
    /// rejects out-of-board tiles at commit time.
    pub fn step(&mut self, direction: CardinalDirection) {
        self.tile = self.tile + direction;
    }

    pub fn rotate(&mut self, relative: RelativeDirection) {
        self.facing = self.facing.turn(relative);
    }

    /// Apply an AI hint rotation, mirrored when the cursor is mirrored.
    fn apply_hint(&mut self, hint: RelativeDirection) {
        let hint = if self.mirrored { hint.mirror() } else { hint };
        self.rotate(hint);
    }

    /// Flip the mirror flag. While a unit is selected its mirror hint is
    /// applied first so the previewed plan stays aimed the same way.
    pub fn toggle_mirror(&mut self, loadout: &Loadout) {
        if let Some(kind) = self.selected_kind(loadout) {
            self.apply_hint(kind.mirror_hint());
        }
        self.mirrored = !self.mirrored;
    }

    /// Switch the selection to `slot`: undo the outgoing archetype's
    /// direction hint, then apply the incoming one.
    pub fn select(&mut self, slot: usize, loadout: &Loadout) {
        self.unapply_selection_hint(loadout);
        self.selected_slot = Some(slot);
        if let Some(kind) = self.selected_kind(loadout) {
            self.apply_hint(kind.direction_hint());
        }
    }

    /// Clear the selection, undoing the selected archetype's direction hint.
    pub fn deselect(&mut self, loadout: &Loadout) {
        self.unapply_selection_hint(loadout);
        self.selected_slot = None;
    }

    fn unapply_selection_hint(&mut self, loadout: &Loadout) {
        if let Some(kind) = self.selected_kind(loadout) {
            // A mirrored relative turn is its inverse rotation
            self.apply_hint(kind.direction_hint().mirror());
        }
    }
}

/// Marker for the cursor tile entity. The unit ghost hangs off it as a child.
#[derive(Component)]
pub struct PlacementCursor;

/// Translucent stand-in for the selected archetype, parented to the cursor.
#[derive(Component)]
pub struct UnitGhost {
    pub slot: usize,
}

/// One fading path-step marker. Rebuilt wholesale on every placer change.
#[derive(Component)]
pub struct PathMarker {
    pub index: usize,
}
