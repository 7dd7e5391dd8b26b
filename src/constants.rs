use bevy::prelude::Color;

// Board settings
pub const BOARD_RADIUS: i32 = 5; // Hex rings around the center tile
pub const HEX_SIZE: f32 = 2.0; // Tile circumradius in world units
pub const TILE_GAP: f32 = 0.06; // Visual gap between neighboring tiles

// Player settings
pub const PLAYER_COLOR: Color = Color::srgb(0.25, 0.55, 1.0); // Blue team tint
pub const MIRROR_DEFAULT: bool = false; // Initial mirror state of the cursor

// Placement cursor and preview settings
pub const CURSOR_ALPHA: f32 = 0.7; // Cursor tile marker opacity
pub const CURSOR_MARKER_SCALE: f32 = 0.92; // Cursor marker size relative to a tile
pub const PATH_MARKER_SCALE: f32 = 0.55; // Path step marker size relative to a tile
pub const GHOST_ALPHA: f32 = 0.45; // Candidate unit ghost opacity
pub const MARKER_LIFT: f32 = 0.02; // Markers sit slightly above tiles to avoid z-fighting

// Unit settings
pub const UNIT_SCALE: f32 = 0.8;
pub const UNIT_LIFT: f32 = 1.28; // Mesh feet sit at -1.6, scaled by UNIT_SCALE
pub const MARCH_SPEED: f32 = 3.0; // World units per second along the planned path
pub const STEP_ARRIVAL_RADIUS: f32 = 0.15; // Distance at which a path step counts as reached

// AI preview settings
pub const PREVIEW_MAX_STEPS: usize = 8; // Longest path any archetype plans ahead

// RTS camera settings
pub const CAMERA_SPEED: f32 = 25.0;
pub const CAMERA_ZOOM_SPEED: f32 = 5.0;
pub const CAMERA_MIN_HEIGHT: f32 = 8.0;
pub const CAMERA_MAX_HEIGHT: f32 = 80.0;
pub const CAMERA_ROTATION_SPEED: f32 = 0.005;
