//! Game state module - the board, the tile registry, and the move reducer
//!
//! Every operation is a pure transition: it borrows the current state and
//! returns a new one, leaving the input untouched. The grid stores tile ids;
//! tile data lives in the registry, keyed by id, with a separate
//! creation-order list for deterministic rendering.

use std::collections::HashMap;
use std::fmt;

use arrayvec::ArrayVec;

use crate::board::{Board, CELL_COUNT};
use crate::tile::{Tile, TileId};
use tui_2048_types::{Action, Coord, Direction, BOARD_SIZE, START_TILES};

/// Rejected engine input
///
/// Every variant leaves the state unchanged. Moves and clean-up cannot fail;
/// only tile creation validates its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The target position lies outside the board
    OutOfBounds(Coord),
    /// The target cell already holds a tile
    CellOccupied(Coord),
    /// The tile value is not a power of two of at least 2
    InvalidValue(u32),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds(position) => write!(
                f,
                "position ({}, {}) is outside the {}x{} board",
                position.x, position.y, BOARD_SIZE, BOARD_SIZE
            ),
            GameError::CellOccupied(position) => {
                write!(f, "cell ({}, {}) is already occupied", position.x, position.y)
            }
            GameError::InvalidValue(value) => {
                write!(f, "invalid tile value {} (expected a power of two >= 2)", value)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// The full game position: grid, tile registry, score, and move outcome.
///
/// Cheap to clone (16 cells plus at most 16 registry entries), compared with
/// `==` in tests, and never mutated through the public API.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    /// Registry of every known tile, including merged-away ones awaiting
    /// clean-up.
    tiles: HashMap<TileId, Tile>,
    /// Tile ids in creation order, for stable iteration.
    ordered_ids: Vec<TileId>,
    /// Did the last move relocate or merge any tile.
    changed: bool,
    score: u32,
    /// Monotonic id source; incremented on every successful creation.
    next_id: u32,
}

impl GameState {
    /// Create an empty state: no tiles, zero score
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            tiles: HashMap::new(),
            ordered_ids: Vec::new(),
            changed: false,
            score: 0,
            next_id: 0,
        }
    }

    /// State at the start of a new game: the two seed tiles, zero score
    pub fn new_game() -> Self {
        let mut state = Self::new();
        for &(position, value) in START_TILES.iter() {
            state.insert_tile(position, value);
        }
        state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the last move relocated or merged any tile
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of registry entries, merged-away tiles included
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Look up a tile by id
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// The tile occupying a cell, if any
    pub fn tile_at(&self, position: Coord) -> Option<&Tile> {
        match self.board.get(position) {
            Some(Some(id)) => self.tiles.get(&id),
            _ => None,
        }
    }

    /// All registry tiles in creation order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.ordered_ids.iter().filter_map(|id| self.tiles.get(id))
    }

    /// Tile ids in creation order
    pub fn ordered_ids(&self) -> &[TileId] {
        &self.ordered_ids
    }

    /// All empty cell coordinates, in the board's fixed scan order
    pub fn empty_cells(&self) -> ArrayVec<Coord, CELL_COUNT> {
        self.board.empty_cells()
    }

    /// Apply one action, producing the next state
    pub fn apply(&self, action: Action) -> Result<GameState, GameError> {
        match action {
            Action::CreateTile { position, value } => self.create_tile(position, value),
            Action::Move(direction) => Ok(self.shift(direction)),
            Action::CleanUp => Ok(self.clean_up()),
        }
    }

    /// Place a new tile on an empty cell.
    ///
    /// Mints a fresh id, writes it to the grid, and records the tile in the
    /// registry and the creation-order list. Score and the `changed` flag are
    /// untouched. Rejects out-of-range positions, occupied cells, and values
    /// that are not powers of two of at least 2; on error the state is
    /// unchanged.
    pub fn create_tile(&self, position: Coord, value: u32) -> Result<GameState, GameError> {
        if !position.in_bounds() {
            return Err(GameError::OutOfBounds(position));
        }
        if self.board.is_occupied(position) {
            return Err(GameError::CellOccupied(position));
        }
        if value < 2 || !value.is_power_of_two() {
            return Err(GameError::InvalidValue(value));
        }

        let mut next = self.clone();
        next.insert_tile(position, value);
        debug_assert!(next.registry_covers_board());
        Ok(next)
    }

    /// Slide every tile toward `direction`, merging equal neighbors on contact.
    ///
    /// One scan per lane, from the near edge outward. Each lane keeps a write
    /// cursor and the last tile it placed: a tile equal to the last-placed one
    /// merges into it, doubling it and adding the doubled value to the score.
    /// The merge clears the last-placed slot, so a third equal tile starts a
    /// new pair instead of chaining. A consumed tile leaves the grid
    /// immediately but stays in the registry, parked on the cell it merged
    /// into, until [`clean_up`](Self::clean_up) purges it.
    ///
    /// `changed` on the result reports whether this move relocated or merged
    /// anything; an ineffective move yields an otherwise identical state with
    /// `changed` false.
    pub fn shift(&self, direction: Direction) -> GameState {
        let mut board = Board::new();
        let mut tiles = self.tiles.clone();
        let mut changed = false;
        let mut score = self.score;

        for lane in 0..BOARD_SIZE {
            // Next free slot in this lane, counted from the near edge.
            let mut write: u8 = 0;
            let mut last_placed: Option<(TileId, u32)> = None;

            for offset in 0..BOARD_SIZE {
                let scan = lane_coord(direction, lane, offset);
                let id = match self.board.get(scan) {
                    Some(Some(id)) => id,
                    _ => continue,
                };
                let tile = match self.tiles.get(&id) {
                    Some(tile) => *tile,
                    None => {
                        debug_assert!(false, "tile {:?} on the grid but not in the registry", id);
                        continue;
                    }
                };

                if let Some((last_id, last_value)) = last_placed {
                    if last_value == tile.value {
                        let merged = last_value * 2;
                        score += merged;
                        if let Some(settled) = tiles.get_mut(&last_id) {
                            settled.value = merged;
                        }
                        // Park the consumed tile on the cell it merged into;
                        // it stays off the grid and is purged at clean-up.
                        if let Some(consumed) = tiles.get_mut(&id) {
                            consumed.position = lane_coord(direction, lane, write - 1);
                        }
                        last_placed = None;
                        changed = true;
                        continue;
                    }
                }

                let destination = lane_coord(direction, lane, write);
                board.set(destination, Some(id));
                if let Some(placed) = tiles.get_mut(&id) {
                    placed.position = destination;
                }
                if destination != tile.position {
                    changed = true;
                }
                last_placed = Some((id, tile.value));
                write += 1;
            }
        }

        let next = GameState {
            board,
            tiles,
            ordered_ids: self.ordered_ids.clone(),
            changed,
            score,
            next_id: self.next_id,
        };
        debug_assert!(next.registry_covers_board());
        next
    }

    /// Purge registry entries for tiles no longer on the grid and clear
    /// `changed`.
    ///
    /// Score and surviving tiles are untouched. Idempotent.
    pub fn clean_up(&self) -> GameState {
        let live = self.board.tile_ids();
        let mut tiles = HashMap::with_capacity(live.len());
        for id in &live {
            if let Some(tile) = self.tiles.get(id) {
                tiles.insert(*id, *tile);
            }
        }
        let ordered_ids = self
            .ordered_ids
            .iter()
            .copied()
            .filter(|id| tiles.contains_key(id))
            .collect();

        let next = GameState {
            board: self.board.clone(),
            tiles,
            ordered_ids,
            changed: false,
            score: self.score,
            next_id: self.next_id,
        };
        debug_assert!(next.registry_covers_board());
        debug_assert_eq!(next.tiles.len(), next.board.tile_count());
        next
    }

    /// Write a fresh tile into the grid, registry, and creation-order list.
    /// Callers have already validated the target.
    fn insert_tile(&mut self, position: Coord, value: u32) {
        let id = TileId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.board.set(position, Some(id));
        self.tiles.insert(id, Tile::new(id, position, value));
        self.ordered_ids.push(id);
    }

    /// Every id on the grid has a registry entry
    fn registry_covers_board(&self) -> bool {
        self.board
            .tile_ids()
            .iter()
            .all(|id| self.tiles.contains_key(id))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a lane and an offset from the near edge to a board coordinate.
///
/// The near edge is the one tiles compact toward: row 0 for up, row 3 for
/// down, column 0 for left, column 3 for right. Offset 0 is the near edge
/// itself. Lanes are columns for vertical moves and rows for horizontal ones.
fn lane_coord(direction: Direction, lane: u8, offset: u8) -> Coord {
    let slot = if direction.toward_far_edge() {
        BOARD_SIZE - 1 - offset
    } else {
        offset
    };
    if direction.is_vertical() {
        Coord::new(lane, slot)
    } else {
        Coord::new(slot, lane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(tiles: &[(Coord, u32)]) -> GameState {
        let mut state = GameState::new();
        for &(position, value) in tiles {
            state = state.create_tile(position, value).unwrap();
        }
        state
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = GameState::new();
        assert_eq!(state.tile_count(), 0);
        assert_eq!(state.score(), 0);
        assert!(!state.changed());
        assert_eq!(state.empty_cells().len(), CELL_COUNT);
    }

    #[test]
    fn test_new_game_seeds_start_tiles() {
        let state = GameState::new_game();
        assert_eq!(state.tile_count(), 2);
        assert_eq!(state.score(), 0);
        for &(position, value) in START_TILES.iter() {
            let tile = state.tile_at(position).unwrap();
            assert_eq!(tile.value, value);
        }
    }

    #[test]
    fn test_create_tile_places_and_registers() {
        let state = GameState::new();
        let next = state.create_tile(Coord::new(0, 0), 2).unwrap();

        assert!(next.board().is_occupied(Coord::new(0, 0)));
        assert_eq!(next.tile_count(), 1);
        assert_eq!(next.ordered_ids().len(), 1);
        assert_eq!(next.tile_at(Coord::new(0, 0)).unwrap().value, 2);
        // Score and the change flag are untouched by creation.
        assert_eq!(next.score(), 0);
        assert!(!next.changed());
        // The input state is a value; it did not move.
        assert_eq!(state.tile_count(), 0);
    }

    #[test]
    fn test_create_tile_rejects_out_of_bounds() {
        let state = GameState::new();
        assert_eq!(
            state.create_tile(Coord::new(BOARD_SIZE, 0), 2),
            Err(GameError::OutOfBounds(Coord::new(BOARD_SIZE, 0)))
        );
        assert_eq!(
            state.create_tile(Coord::new(0, BOARD_SIZE), 2),
            Err(GameError::OutOfBounds(Coord::new(0, BOARD_SIZE)))
        );
    }

    #[test]
    fn test_create_tile_rejects_occupied_cell() {
        let state = state_with(&[(Coord::new(1, 1), 2)]);
        let err = state.create_tile(Coord::new(1, 1), 4);
        assert_eq!(err, Err(GameError::CellOccupied(Coord::new(1, 1))));
        // Failed creation leaves the state as it was.
        assert_eq!(state.tile_count(), 1);
        assert_eq!(state.tile_at(Coord::new(1, 1)).unwrap().value, 2);
    }

    #[test]
    fn test_create_tile_rejects_bad_values() {
        let state = GameState::new();
        for value in [0, 1, 3, 6, 100] {
            assert_eq!(
                state.create_tile(Coord::new(0, 0), value),
                Err(GameError::InvalidValue(value))
            );
        }
        assert!(state.create_tile(Coord::new(0, 0), 2048).is_ok());
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let state = state_with(&[
            (Coord::new(0, 0), 2),
            (Coord::new(1, 0), 4),
            (Coord::new(2, 0), 8),
        ]);
        let ids = state.ordered_ids();
        assert_eq!(ids.len(), 3);
        assert!(ids[0] < ids[1] && ids[1] < ids[2]);
    }

    #[test]
    fn test_lane_coord_geometry() {
        // Vertical moves: lane is the column, offset walks rows.
        assert_eq!(lane_coord(Direction::Up, 2, 0), Coord::new(2, 0));
        assert_eq!(lane_coord(Direction::Up, 2, 3), Coord::new(2, 3));
        assert_eq!(lane_coord(Direction::Down, 2, 0), Coord::new(2, 3));
        assert_eq!(lane_coord(Direction::Down, 2, 3), Coord::new(2, 0));
        // Horizontal moves: lane is the row, offset walks columns.
        assert_eq!(lane_coord(Direction::Left, 1, 0), Coord::new(0, 1));
        assert_eq!(lane_coord(Direction::Left, 1, 3), Coord::new(3, 1));
        assert_eq!(lane_coord(Direction::Right, 1, 0), Coord::new(3, 1));
        assert_eq!(lane_coord(Direction::Right, 1, 3), Coord::new(0, 1));
    }

    #[test]
    fn test_shift_left_compacts_row() {
        let state = state_with(&[(Coord::new(1, 2), 2), (Coord::new(3, 2), 4)]);
        let next = state.shift(Direction::Left);

        assert_eq!(next.tile_at(Coord::new(0, 2)).unwrap().value, 2);
        assert_eq!(next.tile_at(Coord::new(1, 2)).unwrap().value, 4);
        assert!(next.board().is_empty(Coord::new(3, 2)));
        assert!(next.changed());
        assert_eq!(next.score(), 0);
    }

    #[test]
    fn test_shift_merge_parks_consumed_tile_on_destination() {
        let state = state_with(&[(Coord::new(0, 1), 2), (Coord::new(0, 3), 2)]);
        let survivor = state.ordered_ids()[0];
        let consumed = state.ordered_ids()[1];

        let next = state.shift(Direction::Up);

        // The first tile in scan order survives, doubled, at the near edge.
        let merged = next.tile(survivor).unwrap();
        assert_eq!(merged.position, Coord::new(0, 0));
        assert_eq!(merged.value, 4);
        // The consumed tile is off the grid but parked on the same cell.
        let parked = next.tile(consumed).unwrap();
        assert_eq!(parked.position, Coord::new(0, 0));
        assert_eq!(parked.value, 2);
        assert_eq!(next.board().tile_count(), 1);
        assert_eq!(next.tile_count(), 2);
        assert_eq!(next.score(), 4);
    }

    #[test]
    fn test_shift_resets_changed_each_move() {
        let state = state_with(&[(Coord::new(0, 0), 2)]);
        let moved = state.shift(Direction::Down);
        assert!(moved.changed());

        // The tile is already settled on the bottom edge; pushing down again
        // does nothing, and the flag reports that even without a clean-up in
        // between.
        let unmoved = moved.shift(Direction::Down);
        assert!(!unmoved.changed());
        assert_eq!(
            unmoved.tile_at(Coord::new(0, 3)).unwrap().value,
            moved.tile_at(Coord::new(0, 3)).unwrap().value
        );
    }

    #[test]
    fn test_shift_scores_accumulate_across_moves() {
        let state = state_with(&[
            (Coord::new(0, 0), 2),
            (Coord::new(0, 1), 2),
            (Coord::new(1, 0), 4),
            (Coord::new(1, 1), 4),
        ]);
        let first = state.shift(Direction::Up).clean_up();
        assert_eq!(first.score(), 4 + 8);

        // Row 0 now holds a 4 and an 8; nothing merges, score holds.
        let second = first.shift(Direction::Left).clean_up();
        assert_eq!(second.score(), 12);
    }

    #[test]
    fn test_clean_up_purges_and_clears_changed() {
        let state = state_with(&[(Coord::new(0, 1), 2), (Coord::new(0, 3), 2)]);
        let moved = state.shift(Direction::Up);
        assert!(moved.changed());
        assert_eq!(moved.tile_count(), 2);

        let cleaned = moved.clean_up();
        assert!(!cleaned.changed());
        assert_eq!(cleaned.tile_count(), 1);
        assert_eq!(cleaned.ordered_ids().len(), 1);
        assert_eq!(cleaned.score(), moved.score());
        // Surviving tile is untouched.
        assert_eq!(cleaned.tile_at(Coord::new(0, 0)).unwrap().value, 4);
    }

    #[test]
    fn test_clean_up_is_idempotent() {
        let state = state_with(&[(Coord::new(0, 1), 2), (Coord::new(0, 3), 2)]);
        let moved = state.shift(Direction::Up);

        let once = moved.clean_up();
        let twice = once.clean_up();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_dispatches_all_actions() {
        let state = GameState::new();
        let created = state
            .apply(Action::CreateTile {
                position: Coord::new(2, 0),
                value: 2,
            })
            .unwrap();
        assert_eq!(created.tile_count(), 1);

        let moved = created.apply(Action::Move(Direction::Down)).unwrap();
        assert!(moved.board().is_occupied(Coord::new(2, 3)));

        let cleaned = moved.apply(Action::CleanUp).unwrap();
        assert!(!cleaned.changed());

        let err = cleaned.apply(Action::CreateTile {
            position: Coord::new(2, 3),
            value: 2,
        });
        assert_eq!(err, Err(GameError::CellOccupied(Coord::new(2, 3))));
    }

    #[test]
    fn test_error_messages_name_the_target() {
        let oob = GameError::OutOfBounds(Coord::new(4, 0)).to_string();
        assert!(oob.contains("(4, 0)"));
        let occupied = GameError::CellOccupied(Coord::new(1, 2)).to_string();
        assert!(occupied.contains("(1, 2)"));
        let value = GameError::InvalidValue(3).to_string();
        assert!(value.contains('3'));
    }
}
