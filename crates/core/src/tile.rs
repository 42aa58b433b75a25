//! Tile module - numbered pieces with stable identity
//!
//! A tile keeps its id across moves; the grid references tiles by id so the
//! same tile can be tracked while it slides. Ids are minted by the game state
//! from a monotonic counter and are never reused within one game.

use tui_2048_types::Coord;

/// Stable identifier for a tile
///
/// Wraps the monotonic counter value assigned at creation. Ordering follows
/// creation order, which is what the registry uses for deterministic
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub(crate) u32);

impl TileId {
    /// Raw counter value behind the id
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// A numbered tile on the board
///
/// `value` is always a power of two ≥ 2. After a merge consumes a tile, its
/// registry entry keeps the position of the cell it merged into until the
/// next clean-up purges it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub position: Coord,
    pub value: u32,
}

impl Tile {
    pub fn new(id: TileId, position: Coord, value: u32) -> Self {
        Self {
            id,
            position,
            value,
        }
    }
}
