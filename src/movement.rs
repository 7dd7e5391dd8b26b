// March systems - placed units walk their captured AI plan
use bevy::prelude::*;

use crate::constants::*;
use crate::types::{PlacedUnit, PlannedPath};

/// System: advance each placed unit along its planned path, one tile target
/// at a time, with the usual march bob and sway.
pub fn march_system(
    time: Res<Time>,
    mut query: Query<(&PlacedUnit, &mut PlannedPath, &mut Transform)>,
) {
    let elapsed = time.elapsed_secs();
    let delta = time.delta_secs();

    for (unit, mut path, mut transform) in query.iter_mut() {
        let Some(&target_tile) = path.steps.get(path.next) else {
            // Path walked out; settle at rest height
            transform.translation.y = UNIT_LIFT;
            continue;
        };

        let target = target_tile.to_world(HEX_SIZE);
        let to_target = Vec3::new(
            target.x - transform.translation.x,
            0.0,
            target.z - transform.translation.z,
        );
        let distance = to_target.length();

        if distance <= STEP_ARRIVAL_RADIUS {
            path.next += 1;
            continue;
        }

        let direction = to_target / distance;
        let pace = unit.kind.pace();
        let travel = (MARCH_SPEED * pace * delta).min(distance);
        transform.translation.x += direction.x * travel;
        transform.translation.z += direction.z * travel;

        // March bob
        let cycle = (elapsed * pace * 4.0 + path.march_offset).sin();
        transform.translation.y = UNIT_LIFT + cycle * 0.1;

        // Face the walk direction, with a slight sway
        let sway = (elapsed * pace * 2.0 + path.march_offset).sin() * 0.01;
        let heading = Quat::from_rotation_y((-direction.x).atan2(-direction.z));
        transform.rotation = heading * Quat::from_rotation_y(sway);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::TileVector;

    #[test]
    fn path_finishes_after_its_last_step() {
        let mut path = PlannedPath {
            steps: vec![TileVector::new(0, -1), TileVector::new(0, -2)],
            next: 0,
            march_offset: 0.0,
        };
        assert!(!path.finished());
        path.next = 2;
        assert!(path.finished());
    }

    #[test]
    fn empty_path_is_finished_immediately() {
        let path = PlannedPath {
            steps: Vec::new(),
            next: 0,
            march_offset: 0.0,
        };
        assert!(path.finished());
    }
}
