// Placement module - keyboard-driven unit placement over the hex board
//
// Submodules:
// - state: Placer resource and preview marker components
// - keys: PlacerKeys bindings resource and startup validation
// - input: Keyboard edge handling (move, rotate, mirror, select, commit)
// - preview: Cursor transform sync, unit ghost, path-step markers

mod input;
mod keys;
mod preview;
mod state;

#[cfg(test)]
mod tests;

// Re-export main types for external use
pub use state::{PathMarker, PlacementCursor, Placer, UnitGhost};

pub use keys::{validate_placer_keys, PlacerKeys};

// Re-export systems for main.rs
pub use input::placement_input_system;
pub use preview::{ghost_system, path_preview_system, sync_cursor_system};
