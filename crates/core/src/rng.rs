//! RNG module - deterministic tile spawning
//!
//! The spawner picks a uniformly random empty cell and proposes a value of 2
//! nine times out of ten, otherwise 4. It never writes state itself: the
//! caller feeds the proposal to `GameState::create_tile`, so replaying the
//! same seed against the same state sequence reproduces a game exactly.
//!
//! Randomness comes from a simple LCG so the core stays dependency-free and
//! seeds are portable.

use crate::game_state::GameState;
use tui_2048_types::Coord;

/// Linear congruential generator with the Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator. Seed 0 is treated as 1.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Advance one step and return the full 32-bit state.
    pub fn next_u32(&mut self) -> u32 {
        // state' = state * 1664525 + 1013904223 (mod 2^32)
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform draw in [0, max).
    ///
    /// Takes the high half of the word; the low bits of an LCG cycle with
    /// short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Random tile proposal generator
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
}

impl TileSpawner {
    /// Create a new spawner with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Propose the next tile: a uniformly chosen empty cell and a value.
    ///
    /// Returns `None` when the board is full. Advances the RNG only when a
    /// proposal is produced.
    pub fn next_tile(&mut self, state: &GameState) -> Option<(Coord, u32)> {
        let empty = state.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let position = empty[self.rng.next_range(empty.len() as u32) as usize];
        // 90% chance of a 2, 10% chance of a 4
        let value = if self.rng.next_range(10) < 9 { 2 } else { 4 };
        Some((position, value))
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}
