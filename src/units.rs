// Unit catalog - loadout slots, archetype stats, spawn helpers
use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::*;
use crate::hex::{CardinalDirection, TileVector};
use crate::procedural_meshes::create_unit_mesh;
use crate::types::{PlacedUnit, PlannedPath, Team};

/// The unit archetypes a player can field. Each has its own AI plan shape
/// and orientation hints (see ai.rs).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnitKind {
    Legionnaire,
    Outrider,
    Skirmisher,
    Warden,
}

impl UnitKind {
    pub const ALL: [UnitKind; 4] = [
        UnitKind::Legionnaire,
        UnitKind::Outrider,
        UnitKind::Skirmisher,
        UnitKind::Warden,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UnitKind::Legionnaire => "Legionnaire",
            UnitKind::Outrider => "Outrider",
            UnitKind::Skirmisher => "Skirmisher",
            UnitKind::Warden => "Warden",
        }
    }

    /// Accent color blended over the team color on the unit body.
    pub fn accent(self) -> Color {
        match self {
            UnitKind::Legionnaire => Color::srgb(0.75, 0.75, 0.8),
            UnitKind::Outrider => Color::srgb(0.85, 0.65, 0.3),
            UnitKind::Skirmisher => Color::srgb(0.5, 0.85, 0.5),
            UnitKind::Warden => Color::srgb(0.6, 0.55, 0.9),
        }
    }

    /// March speed multiplier relative to MARCH_SPEED.
    pub fn pace(self) -> f32 {
        match self {
            UnitKind::Legionnaire => 1.0,
            UnitKind::Outrider => 1.4,
            UnitKind::Skirmisher => 1.2,
            UnitKind::Warden => 0.8,
        }
    }
}

/// The player's configured unit slots, selected by index from the keyboard.
#[derive(Resource)]
pub struct Loadout {
    pub slots: Vec<UnitKind>,
}

impl Default for Loadout {
    fn default() -> Self {
        Self {
            slots: UnitKind::ALL.to_vec(),
        }
    }
}

impl Loadout {
    pub fn get(&self, slot: usize) -> Option<UnitKind> {
        self.slots.get(slot).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Spawn a placed unit entity at a board tile with its captured march path.
pub fn spawn_unit_at(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    kind: UnitKind,
    team: Team,
    tile: TileVector,
    facing: CardinalDirection,
    mirrored: bool,
    steps: Vec<TileVector>,
) -> Entity {
    let body_mesh = create_unit_mesh(meshes);

    let body_material = materials.add(StandardMaterial {
        base_color: PLAYER_COLOR.mix(&kind.accent(), 0.5),
        metallic: 0.3,
        perceptual_roughness: 0.5,
        ..default()
    });
    let head_material = materials.add(StandardMaterial {
        base_color: kind.accent(),
        metallic: 0.2,
        perceptual_roughness: 0.6,
        ..default()
    });

    let mut position = tile.to_world(HEX_SIZE);
    position.y = UNIT_LIFT;

    let mut scale = Vec3::splat(UNIT_SCALE);
    if mirrored {
        scale.x = -scale.x;
    }

    let mut rng = rand::thread_rng();

    let unit_entity = commands
        .spawn((
            Mesh3d(body_mesh.clone()),
            MeshMaterial3d(body_material),
            Transform::from_translation(position)
                .with_rotation(facing.bearing())
                .with_scale(scale),
            PlacedUnit {
                kind,
                team,
                tile,
                facing,
                mirrored,
            },
            PlannedPath {
                steps,
                next: 0,
                march_offset: rng.gen_range(0.0..TAU),
            },
        ))
        .id();

    // Head as a child entity, reusing the body mesh at a smaller scale
    let head_entity = commands
        .spawn((
            Mesh3d(body_mesh),
            MeshMaterial3d(head_material),
            Transform::from_xyz(0.0, 1.2, 0.0).with_scale(Vec3::splat(0.3)),
        ))
        .id();
    commands.entity(unit_entity).add_children(&[head_entity]);

    unit_entity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_loadout_fills_four_slots() {
        let loadout = Loadout::default();
        assert_eq!(loadout.len(), 4);
        assert_eq!(loadout.get(0), Some(UnitKind::Legionnaire));
        assert_eq!(loadout.get(4), None);
    }
}
