// Hex board math - axial tile coordinates, six-way directions, bearings
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_3;
use std::ops::Add;

/// World-space width factor between column centers (flat-top layout)
const COLUMN_SPACING: f32 = 1.5;
/// sqrt(3), row spacing factor for flat-top hexes
const SQRT_3: f32 = 1.732_050_8;

/// One of the six board directions a tile cursor or unit can face.
/// Indexed 0..6 clockwise starting at North.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CardinalDirection {
    North,
    Northeast,
    Southeast,
    South,
    Southwest,
    Northwest,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 6] = [
        CardinalDirection::North,
        CardinalDirection::Northeast,
        CardinalDirection::Southeast,
        CardinalDirection::South,
        CardinalDirection::Southwest,
        CardinalDirection::Northwest,
    ];

    fn index(self) -> u8 {
        match self {
            CardinalDirection::North => 0,
            CardinalDirection::Northeast => 1,
            CardinalDirection::Southeast => 2,
            CardinalDirection::South => 3,
            CardinalDirection::Southwest => 4,
            CardinalDirection::Northwest => 5,
        }
    }

    fn from_index(index: u8) -> Self {
        Self::ALL[(index % 6) as usize]
    }

    /// Axial (q, r) offset of the neighboring tile in this direction.
    pub fn axial_offset(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (0, -1),
            CardinalDirection::Northeast => (1, -1),
            CardinalDirection::Southeast => (1, 0),
            CardinalDirection::South => (0, 1),
            CardinalDirection::Southwest => (-1, 1),
            CardinalDirection::Northwest => (-1, 0),
        }
    }

    /// Turn one facing into another by a relative step (left/right/etc).
    pub fn turn(self, relative: RelativeDirection) -> Self {
        Self::from_index(self.index() + relative.offset())
    }

    /// Reflect across the North-South axis (NE <-> NW, SE <-> SW).
    pub fn mirror(self) -> Self {
        Self::from_index((6 - self.index()) % 6)
    }

    /// World-space rotation for a transform facing this direction.
    /// North faces -Z; each step clockwise is 60 degrees.
    pub fn bearing(self) -> Quat {
        Quat::from_rotation_y(-(self.index() as f32) * FRAC_PI_3)
    }

    pub fn label(self) -> &'static str {
        match self {
            CardinalDirection::North => "N",
            CardinalDirection::Northeast => "NE",
            CardinalDirection::Southeast => "SE",
            CardinalDirection::South => "S",
            CardinalDirection::Southwest => "SW",
            CardinalDirection::Northwest => "NW",
        }
    }
}

/// A turn step relative to the current facing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RelativeDirection {
    Forward,
    ForwardRight,
    BackwardRight,
    Backward,
    BackwardLeft,
    ForwardLeft,
}

impl RelativeDirection {
    fn offset(self) -> u8 {
        match self {
            RelativeDirection::Forward => 0,
            RelativeDirection::ForwardRight => 1,
            RelativeDirection::BackwardRight => 2,
            RelativeDirection::Backward => 3,
            RelativeDirection::BackwardLeft => 4,
            RelativeDirection::ForwardLeft => 5,
        }
    }

    fn from_offset(offset: u8) -> Self {
        match offset % 6 {
            0 => RelativeDirection::Forward,
            1 => RelativeDirection::ForwardRight,
            2 => RelativeDirection::BackwardRight,
            3 => RelativeDirection::Backward,
            4 => RelativeDirection::BackwardLeft,
            _ => RelativeDirection::ForwardLeft,
        }
    }

    /// Swap left and right turns. Forward and Backward are fixed points.
    pub fn mirror(self) -> Self {
        Self::from_offset((6 - self.offset()) % 6)
    }
}

/// Axial coordinate of a board tile (flat-top hex layout).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct TileVector {
    pub q: i32,
    pub r: i32,
}

impl TileVector {
    pub const ORIGIN: TileVector = TileVector { q: 0, r: 0 };

    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Hex distance from the board origin (cube-coordinate max norm).
    pub fn radius(self) -> i32 {
        self.q.abs().max(self.r.abs()).max((self.q + self.r).abs())
    }

    /// World-space center of this tile. `size` is the hex circumradius.
    pub fn to_world(self, size: f32) -> Vec3 {
        let x = size * COLUMN_SPACING * self.q as f32;
        let z = size * SQRT_3 * (self.r as f32 + self.q as f32 / 2.0);
        Vec3::new(x, 0.0, z)
    }

    /// Reflect across the North-South axis through the origin.
    pub fn mirror(self) -> Self {
        Self::new(-self.q, self.q + self.r)
    }
}

impl Add<CardinalDirection> for TileVector {
    type Output = TileVector;

    fn add(self, direction: CardinalDirection) -> TileVector {
        let (dq, dr) = direction.axial_offset();
        TileVector::new(self.q + dq, self.r + dr)
    }
}
