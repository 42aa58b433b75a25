//! Core game logic module - the whole rule set of the sliding-tile merge game
//!
//! Nothing in here touches UI, timing, or I/O:
//!
//! - **Deterministic**: Same seed and same actions produce identical games
//! - **Testable**: Every rule is exercised through plain value transitions
//! - **Portable**: Runs the same under a terminal, a GUI, or headless tests
//! - **Fast**: Fixed-size board storage, no allocation in the move scan
//!
//! # Modules
//!
//! - [`board`]: 4x4 grid of optional tile ids with occupancy queries
//! - [`game_state`]: The tile registry, score, and the move/merge reducer
//! - [`tile`]: Tile values with stable identity across moves
//! - [`rng`]: Seeded spawner proposing random tiles on empty cells
//!
//! # Game Rules
//!
//! - A move slides every tile as far as it goes toward one edge
//! - Two tiles of equal value merge on contact into one of double value;
//!   the doubled value is added to the score
//! - A tile merges at most once per move; merged pairs never chain
//! - After each effective move the caller runs a clean-up step and spawns
//!   one new tile (2 at 90%, 4 at 10%) on a random empty cell
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Coord, Direction};
//!
//! // Two equal tiles in one column
//! let state = GameState::new()
//!     .create_tile(Coord::new(0, 1), 2)
//!     .unwrap()
//!     .create_tile(Coord::new(0, 3), 2)
//!     .unwrap();
//!
//! // Slide up: they merge into a 4 on the top edge
//! let moved = state.shift(Direction::Up);
//! assert_eq!(moved.tile_at(Coord::new(0, 0)).unwrap().value, 4);
//! assert_eq!(moved.score(), 4);
//! assert!(moved.changed());
//!
//! // Clean-up purges the consumed tile's registry entry
//! let cleaned = moved.clean_up();
//! assert_eq!(cleaned.tile_count(), 1);
//! ```
//!
//! # State discipline
//!
//! Transitions never mutate their input: `apply` and friends borrow `&self`
//! and return a fresh `GameState`, so the previous value stays usable (for
//! instance to diff against the new one). The registry may briefly hold tiles
//! that are no longer on the grid; that window closes at the next
//! [`GameState::clean_up`].

pub mod board;
pub mod game_state;
pub mod rng;
pub mod tile;

pub use tui_2048_types as types;

pub use board::{Board, Cell, CELL_COUNT};
pub use game_state::{GameError, GameState};
pub use rng::{SimpleRng, TileSpawner};
pub use tile::{Tile, TileId};
