//! Shared types module - data structures and constants for the 2048 board
//!
//! Everything here is plain data with no dependencies, so the core engine,
//! input mapping, and rendering all speak the same vocabulary without pulling
//! each other in.
//!
//! # Board geometry
//!
//! The board is a `BOARD_SIZE` x `BOARD_SIZE` square:
//!
//! - 4 columns by 4 rows, indexed 0-3 on both axes
//! - `Coord { x, y }` addresses a cell, `x` the column and `y` the row
//! - a new game seeds two tiles of value 2, at (0, 1) and (0, 2)
//!
//! # Timing
//!
//! Both constants are in milliseconds:
//!
//! | Constant | Value | Meaning |
//! |----------|-------|---------|
//! | `TICK_MS` | 16 | Fixed timestep, roughly 60 frames per second |
//! | `MERGE_ANIMATION_MS` | 100 | Window between an accepted move and its clean-up |
//!
//! A move is accepted at most once per `MERGE_ANIMATION_MS` window; when the
//! window expires the shell runs the clean-up step and spawns the next tile.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Action, Coord, Direction, BOARD_SIZE};
//!
//! // Parse a direction from string (case-insensitive)
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.as_str(), "up");
//!
//! // Build an action for the engine
//! let action = Action::CreateTile { position: Coord::new(0, 0), value: 2 };
//! assert_ne!(action, Action::Move(Direction::Left));
//!
//! // Coordinates know the board bounds
//! assert!(Coord::new(3, 3).in_bounds());
//! assert!(!Coord::new(BOARD_SIZE, 0).in_bounds());
//! ```

/// Board size in cells per axis (4 columns, 4 rows)
pub const BOARD_SIZE: u8 = 4;

/// Fixed timestep in milliseconds, roughly 60 frames per second.
pub const TICK_MS: u32 = 16;

/// Merge animation window in milliseconds.
///
/// One move is accepted per window; clean-up and the next spawn run when it
/// expires.
pub const MERGE_ANIMATION_MS: u32 = 100;

/// Seed tiles placed by a new game: (position, value) pairs.
pub const START_TILES: [(Coord, u32); 2] = [
    (Coord::new(0, 1), 2),
    (Coord::new(0, 2), 2),
];

/// A cell coordinate on the board
///
/// `x` is the column (horizontal axis), `y` is the row (vertical axis).
/// Row 0 is the top of the board, column 0 its left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Create a coordinate from column and row
    pub const fn new(x: u8, y: u8) -> Self {
        Coord { x, y }
    }

    /// Whether the coordinate lies on the board
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Coord;
    ///
    /// assert!(Coord::new(0, 0).in_bounds());
    /// assert!(Coord::new(3, 3).in_bounds());
    /// assert!(!Coord::new(4, 0).in_bounds());
    /// assert!(!Coord::new(0, 4).in_bounds());
    /// ```
    pub const fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }
}

/// The four move directions
///
/// Up and down slide tiles along columns, left and right along rows. Tiles
/// compact toward the named edge and equal neighbors merge on contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Lowercase name, the inverse of [`Direction::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Whether the direction slides tiles along columns
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether tiles compact toward the high-index edge (row/col `BOARD_SIZE - 1`)
    pub fn toward_far_edge(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

/// Input actions accepted by the game state engine
///
/// Each action maps to one pure transition on the game state. The engine
/// validates `CreateTile` targets; moves and clean-up always succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a new tile on an empty cell
    CreateTile { position: Coord, value: u32 },
    /// Slide all tiles in a direction, merging equal neighbors
    Move(Direction),
    /// Purge merged-away tiles and clear the change flag
    CleanUp,
}
