// Board state and placement authority
use bevy::prelude::*;
use std::collections::HashMap;

use crate::constants::BOARD_RADIUS;
use crate::hex::{CardinalDirection, TileVector};
use crate::types::Team;
use crate::units::UnitKind;

/// Hexagonal board occupancy map. The single authority for whether a
/// placement commits: a tile must be inside the board and unclaimed.
#[derive(Resource)]
pub struct WorldMap {
    radius: i32,
    claims: HashMap<TileVector, Claim>,
}

/// A committed placement as recorded by the authority.
#[derive(Clone, Copy, Debug)]
pub struct Claim {
    pub kind: UnitKind,
    pub team: Team,
    pub facing: CardinalDirection,
    pub mirrored: bool,
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::new(BOARD_RADIUS)
    }
}

impl WorldMap {
    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            claims: HashMap::new(),
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn in_bounds(&self, tile: TileVector) -> bool {
        tile.radius() <= self.radius
    }

    pub fn is_claimed(&self, tile: TileVector) -> bool {
        self.claims.contains_key(&tile)
    }

    pub fn claim_at(&self, tile: TileVector) -> Option<&Claim> {
        self.claims.get(&tile)
    }

    /// True if a preview path may pass through this tile.
    pub fn is_open(&self, tile: TileVector) -> bool {
        self.in_bounds(tile) && !self.is_claimed(tile)
    }

    /// Validate and commit a placement. Returns false (and changes nothing)
    /// when the tile is outside the board or already claimed.
    pub fn try_place(
        &mut self,
        kind: UnitKind,
        team: Team,
        tile: TileVector,
        facing: CardinalDirection,
        mirrored: bool,
    ) -> bool {
        if !self.is_open(tile) {
            return false;
        }
        self.claims.insert(
            tile,
            Claim {
                kind,
                team,
                facing,
                mirrored,
            },
        );
        true
    }

    /// All tiles of the board, center outward row order not guaranteed.
    pub fn tiles(&self) -> impl Iterator<Item = TileVector> + '_ {
        let radius = self.radius;
        (-radius..=radius).flat_map(move |q| {
            (-radius..=radius).filter_map(move |r| {
                let tile = TileVector::new(q, r);
                (tile.radius() <= radius).then_some(tile)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(world: &mut WorldMap, tile: TileVector) -> bool {
        world.try_place(
            UnitKind::Legionnaire,
            Team::A,
            tile,
            CardinalDirection::North,
            false,
        )
    }

    #[test]
    fn center_tile_is_in_bounds_and_open() {
        let world = WorldMap::new(3);
        assert!(world.in_bounds(TileVector::ORIGIN));
        assert!(world.is_open(TileVector::ORIGIN));
    }

    #[test]
    fn tiles_beyond_radius_are_out_of_bounds() {
        let world = WorldMap::new(2);
        assert!(world.in_bounds(TileVector::new(2, 0)));
        assert!(!world.in_bounds(TileVector::new(3, 0)));
        assert!(!world.in_bounds(TileVector::new(2, 1)));
    }

    #[test]
    fn placement_claims_the_tile() {
        let mut world = WorldMap::new(3);
        assert!(place(&mut world, TileVector::ORIGIN));
        assert!(world.is_claimed(TileVector::ORIGIN));
        assert!(!world.is_open(TileVector::ORIGIN));
    }

    #[test]
    fn claim_records_the_committed_pose() {
        let mut world = WorldMap::new(3);
        let tile = TileVector::new(1, -1);
        assert!(world.try_place(
            UnitKind::Outrider,
            Team::A,
            tile,
            CardinalDirection::Southeast,
            true,
        ));
        let claim = world.claim_at(tile).expect("tile should be claimed");
        assert_eq!(claim.kind, UnitKind::Outrider);
        assert_eq!(claim.team, Team::A);
        assert_eq!(claim.facing, CardinalDirection::Southeast);
        assert!(claim.mirrored);
    }

    #[test]
    fn double_placement_on_same_tile_is_rejected() {
        let mut world = WorldMap::new(3);
        assert!(place(&mut world, TileVector::ORIGIN));
        assert!(!place(&mut world, TileVector::ORIGIN));
    }

    #[test]
    fn placement_outside_board_is_rejected() {
        let mut world = WorldMap::new(2);
        assert!(!place(&mut world, TileVector::new(5, 0)));
        assert!(!world.is_claimed(TileVector::new(5, 0)));
    }

    #[test]
    fn tile_iterator_covers_the_full_board() {
        let world = WorldMap::new(2);
        // 1 + 6 + 12 tiles for radius 2
        assert_eq!(world.tiles().count(), 19);
        assert!(world.tiles().all(|tile| world.in_bounds(tile)));
    }
}
