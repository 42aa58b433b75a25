//! Terminal presentation layer.
//!
//! A small rendering stack for terminal play, with no widget or layout
//! framework in between: the view paints game state into a character-cell
//! framebuffer, and a crossterm backend flushes finished frames to the
//! screen. The split keeps the view pure (state in, framebuffer out, no
//! I/O) while giving exact control over tile geometry, since each board
//! cell is a small character rectangle.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
