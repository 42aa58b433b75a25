//! Board module - manages the 4x4 tile grid
//!
//! Each cell holds an optional tile id; tile data itself lives in the game
//! state's registry, so the grid is a pure occupancy index. Uses a flat array
//! for cache locality and zero-allocation queries.
//! Coordinates: `Coord { x, y }` where x ranges 0..3 (left to right) and
//! y ranges 0..3 (top to bottom).

use arrayvec::ArrayVec;

use crate::tile::TileId;
use tui_2048_types::{Coord, BOARD_SIZE};

/// Cell count for the whole grid, 16 for the 4x4 board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// One grid cell: `None` when empty, `Some(id)` when a tile occupies it.
pub type Cell = Option<TileId>;

/// The tile grid - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    /// Flat array of cells, row-major order (y * BOARD_SIZE + x)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// An empty grid.
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(position: Coord) -> Option<usize> {
        if !position.in_bounds() {
            return None;
        }
        Some((position.y as usize) * (BOARD_SIZE as usize) + (position.x as usize))
    }

    /// Cell at a position, or `None` when the position is out of bounds.
    pub fn get(&self, position: Coord) -> Option<Cell> {
        Self::index(position).map(|idx| self.cells[idx])
    }

    /// Overwrite the cell at a position; `false` when out of bounds.
    pub fn set(&mut self, position: Coord, cell: Cell) -> bool {
        match Self::index(position) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a position is within bounds and empty
    pub fn is_empty(&self, position: Coord) -> bool {
        matches!(self.get(position), Some(None))
    }

    /// Check if a position is within bounds and occupied
    pub fn is_occupied(&self, position: Coord) -> bool {
        matches!(self.get(position), Some(Some(_)))
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// All empty cell coordinates, column by column (x outer, y inner)
    ///
    /// The order is fixed so that spawn selection is deterministic for a
    /// given RNG state.
    pub fn empty_cells(&self) -> ArrayVec<Coord, CELL_COUNT> {
        let mut cells = ArrayVec::new();
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let position = Coord::new(x, y);
                if self.is_empty(position) {
                    cells.push(position);
                }
            }
        }
        cells
    }

    /// Ids of all tiles currently on the grid
    pub fn tile_ids(&self) -> ArrayVec<TileId, CELL_COUNT> {
        self.cells.iter().filter_map(|cell| *cell).collect()
    }
}
