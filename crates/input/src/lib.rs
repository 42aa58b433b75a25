//! Keyboard handling for terminal play.
//!
//! Maps `crossterm` key events into move directions and session commands,
//! and provides the move gate that spaces accepted moves one merge-animation
//! window apart (terminals deliver no key-release events, so pacing has to
//! be time-based).

pub mod gate;
pub mod map;

pub use tui_2048_types as types;

pub use gate::MoveGate;
pub use map::{direction_for_key, is_new_game, should_quit};
