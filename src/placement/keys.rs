// Placement key bindings resource and startup validation
use bevy::prelude::*;

use crate::hex::CardinalDirection;
use crate::units::Loadout;

/// Keyboard bindings for the placement controller. Defaults put the six move
/// keys on the W/E/D/S/A/Q ring so each key sits roughly in its hex direction.
#[derive(Resource, Clone)]
pub struct PlacerKeys {
    pub move_north: KeyCode,
    pub move_northeast: KeyCode,
    pub move_southeast: KeyCode,
    pub move_south: KeyCode,
    pub move_southwest: KeyCode,
    pub move_northwest: KeyCode,
    pub rotate_anticlockwise: KeyCode,
    pub rotate_clockwise: KeyCode,
    pub mirror_toggle: KeyCode,
    /// Selection keys by loadout slot; slot i is selected with select[i].
    pub select: Vec<KeyCode>,
}

impl Default for PlacerKeys {
    fn default() -> Self {
        Self {
            move_north: KeyCode::KeyW,
            move_northeast: KeyCode::KeyE,
            move_southeast: KeyCode::KeyD,
            move_south: KeyCode::KeyS,
            move_southwest: KeyCode::KeyA,
            move_northwest: KeyCode::KeyQ,
            rotate_anticlockwise: KeyCode::KeyZ,
            rotate_clockwise: KeyCode::KeyX,
            mirror_toggle: KeyCode::KeyC,
            select: vec![
                KeyCode::Digit1,
                KeyCode::Digit2,
                KeyCode::Digit3,
                KeyCode::Digit4,
            ],
        }
    }
}

impl PlacerKeys {
    /// Move bindings paired with their board directions, in scan order.
    pub fn moves(&self) -> [(KeyCode, CardinalDirection); 6] {
        [
            (self.move_north, CardinalDirection::North),
            (self.move_northeast, CardinalDirection::Northeast),
            (self.move_southeast, CardinalDirection::Southeast),
            (self.move_south, CardinalDirection::South),
            (self.move_southwest, CardinalDirection::Southwest),
            (self.move_northwest, CardinalDirection::Northwest),
        ]
    }

    /// Number of loadout slots no selection key is bound for, if any.
    pub fn binding_shortfall(&self, slots: usize) -> Option<usize> {
        (self.select.len() < slots).then(|| slots - self.select.len())
    }
}

/// Startup check: a loadout slot without a selection key can never be picked.
/// Non-fatal; placement keeps working for the bound slots.
pub fn validate_placer_keys(keys: Res<PlacerKeys>, loadout: Res<Loadout>) {
    if let Some(missing) = keys.binding_shortfall(loadout.len()) {
        warn!(
            "{} loadout slots but only {} selection keys bound; the last {} slots cannot be selected",
            loadout.len(),
            keys.select.len(),
            missing
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_the_default_loadout() {
        let keys = PlacerKeys::default();
        let loadout = Loadout::default();
        assert_eq!(keys.binding_shortfall(loadout.len()), None);
    }

    #[test]
    fn shortfall_counts_unbound_slots() {
        let mut keys = PlacerKeys::default();
        keys.select.truncate(2);
        assert_eq!(keys.binding_shortfall(4), Some(2));
        assert_eq!(keys.binding_shortfall(2), None);
        assert_eq!(keys.binding_shortfall(0), None);
    }
}
