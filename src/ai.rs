// Unit AI - orientation hints and preview path plans per archetype
//
// Plans are not pathfinding: each archetype walks a fixed turn pattern from
// its start pose and stops early at the board edge or a claimed tile. The
// placement controller previews the same plan a placed unit later marches.
use crate::constants::PREVIEW_MAX_STEPS;
use crate::hex::{CardinalDirection, RelativeDirection, TileVector};
use crate::units::UnitKind;
use crate::world::WorldMap;

/// One step of a planned path, in walk order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PathStep {
    pub tile: TileVector,
    pub index: usize,
}

impl UnitKind {
    /// Rotation suggested when this archetype becomes selected, so the
    /// previewed plan points somewhere useful without manual turning.
    pub fn direction_hint(self) -> RelativeDirection {
        match self {
            UnitKind::Legionnaire => RelativeDirection::Forward,
            UnitKind::Outrider => RelativeDirection::ForwardRight,
            UnitKind::Skirmisher => RelativeDirection::ForwardRight,
            UnitKind::Warden => RelativeDirection::Forward,
        }
    }

    /// Rotation suggested when the mirror flag flips while this archetype is
    /// selected, keeping the previewed sweep aimed at the same board area.
    pub fn mirror_hint(self) -> RelativeDirection {
        match self {
            UnitKind::Legionnaire => RelativeDirection::Forward,
            UnitKind::Outrider => RelativeDirection::ForwardRight,
            UnitKind::Skirmisher => RelativeDirection::ForwardRight,
            UnitKind::Warden => RelativeDirection::Forward,
        }
    }

    /// Turn taken before step `step` of the walk pattern. Mirroring the unit
    /// mirrors every turn, flipping the pattern left-right.
    fn turn_at(self, step: usize) -> RelativeDirection {
        match self {
            UnitKind::Legionnaire => RelativeDirection::Forward,
            // Sweeping curve: turns right every third step
            UnitKind::Outrider => {
                if step % 3 == 2 {
                    RelativeDirection::ForwardRight
                } else {
                    RelativeDirection::Forward
                }
            }
            // Zigzag: alternates right and left, drifting forward
            UnitKind::Skirmisher => {
                if step % 2 == 0 {
                    RelativeDirection::ForwardRight
                } else {
                    RelativeDirection::ForwardLeft
                }
            }
            UnitKind::Warden => RelativeDirection::Forward,
        }
    }

    fn plan_length(self) -> usize {
        match self {
            UnitKind::Legionnaire => PREVIEW_MAX_STEPS,
            UnitKind::Outrider => PREVIEW_MAX_STEPS,
            UnitKind::Skirmisher => 6,
            UnitKind::Warden => 2,
        }
    }

    /// Lazily walk the preview plan from a start pose. Finite: ends at the
    /// archetype's plan length, the board edge, or the first claimed tile.
    pub fn plan_path<'a>(
        self,
        tile: TileVector,
        facing: CardinalDirection,
        mirrored: bool,
        world: &'a WorldMap,
    ) -> PathPlan<'a> {
        PathPlan {
            world,
            kind: self,
            tile,
            facing,
            mirrored,
            step: 0,
        }
    }
}

/// Iterator over a unit's planned steps. Recomputed from scratch on every
/// preview rebuild; never cached across state changes.
pub struct PathPlan<'a> {
    world: &'a WorldMap,
    kind: UnitKind,
    tile: TileVector,
    facing: CardinalDirection,
    mirrored: bool,
    step: usize,
}

impl Iterator for PathPlan<'_> {
    type Item = PathStep;

    fn next(&mut self) -> Option<PathStep> {
        if self.step >= self.kind.plan_length() {
            return None;
        }
        let mut turn = self.kind.turn_at(self.step);
        if self.mirrored {
            turn = turn.mirror();
        }
        let facing = self.facing.turn(turn);
        let tile = self.tile + facing;
        if !self.world.is_open(tile) {
            return None;
        }
        self.tile = tile;
        self.facing = facing;
        let index = self.step;
        self.step += 1;
        Some(PathStep { tile, index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Team;

    fn open_world() -> WorldMap {
        WorldMap::new(20)
    }

    #[test]
    fn legionnaire_marches_a_straight_line() {
        let world = open_world();
        let steps: Vec<PathStep> = UnitKind::Legionnaire
            .plan_path(TileVector::ORIGIN, CardinalDirection::North, false, &world)
            .collect();
        assert_eq!(steps.len(), PREVIEW_MAX_STEPS);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.index, i);
            assert_eq!(step.tile, TileVector::new(0, -(i as i32 + 1)));
        }
    }

    #[test]
    fn plans_are_finite_and_in_bounds() {
        let world = WorldMap::new(3);
        for kind in UnitKind::ALL {
            let steps: Vec<PathStep> = kind
                .plan_path(TileVector::ORIGIN, CardinalDirection::North, false, &world)
                .collect();
            assert!(steps.len() <= PREVIEW_MAX_STEPS);
            assert!(steps.iter().all(|step| world.in_bounds(step.tile)));
        }
    }

    #[test]
    fn plan_stops_before_a_claimed_tile() {
        let mut world = open_world();
        let block = TileVector::new(0, -3);
        assert!(world.try_place(
            UnitKind::Warden,
            Team::B,
            block,
            CardinalDirection::South,
            false,
        ));
        let steps: Vec<PathStep> = UnitKind::Legionnaire
            .plan_path(TileVector::ORIGIN, CardinalDirection::North, false, &world)
            .collect();
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|step| step.tile != block));
    }

    #[test]
    fn mirrored_plan_is_the_reflection_of_the_unmirrored_plan() {
        let world = open_world();
        for kind in UnitKind::ALL {
            let plain: Vec<TileVector> = kind
                .plan_path(TileVector::ORIGIN, CardinalDirection::North, false, &world)
                .map(|step| step.tile)
                .collect();
            let mirrored: Vec<TileVector> = kind
                .plan_path(TileVector::ORIGIN, CardinalDirection::North, true, &world)
                .map(|step| step.tile)
                .collect();
            let reflected: Vec<TileVector> = plain.iter().map(|tile| tile.mirror()).collect();
            assert_eq!(mirrored, reflected);
        }
    }

    #[test]
    fn warden_holds_close_to_its_tile() {
        let world = open_world();
        let steps: Vec<PathStep> = UnitKind::Warden
            .plan_path(TileVector::ORIGIN, CardinalDirection::Southeast, false, &world)
            .collect();
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn plan_is_restartable() {
        let world = open_world();
        let first: Vec<PathStep> = UnitKind::Outrider
            .plan_path(TileVector::ORIGIN, CardinalDirection::North, false, &world)
            .collect();
        let second: Vec<PathStep> = UnitKind::Outrider
            .plan_path(TileVector::ORIGIN, CardinalDirection::North, false, &world)
            .collect();
        assert_eq!(first, second);
    }
}
