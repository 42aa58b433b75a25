//! Integration tests for the move, clean-up, spawn cycle

use tui_2048::core::{GameState, TileSpawner};
use tui_2048::input::MoveGate;
use tui_2048::types::{Coord, Direction, MERGE_ANIMATION_MS, START_TILES, TICK_MS};

#[test]
fn test_new_game_seeds_the_opening_position() {
    let state = GameState::new_game();
    assert_eq!(state.tile_count(), 2);
    assert_eq!(state.score(), 0);
    assert!(!state.changed());
    for &(position, value) in START_TILES.iter() {
        assert_eq!(state.tile_at(position).unwrap().value, value);
    }
}

#[test]
fn test_move_clean_up_spawn_cycle_keeps_registry_in_step() {
    let mut spawner = TileSpawner::new(42);
    let mut state = GameState::new_game();

    let directions = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
        Direction::Left,
    ];
    for direction in directions {
        let next = state.shift(direction);
        if !next.changed() {
            state = next;
            continue;
        }
        state = next.clean_up();
        if let Some((position, value)) = spawner.next_tile(&state) {
            state = state.create_tile(position, value).unwrap();
        }
        // The registry never falls out of step with the grid between turns.
        assert_eq!(state.tile_count(), state.board().tile_count());
    }
    assert!(state.tile_count() >= 2);
}

#[test]
fn test_spawner_is_deterministic_per_seed() {
    let state = GameState::new_game();
    let a = TileSpawner::new(7).next_tile(&state);
    let b = TileSpawner::new(7).next_tile(&state);
    assert_eq!(a, b);

    let (position, value) = a.unwrap();
    assert!(state.board().is_empty(position));
    assert!(value == 2 || value == 4);
}

#[test]
fn test_spawner_skips_a_full_board() {
    let mut state = GameState::new();
    for y in 0..4u8 {
        for x in 0..4u8 {
            // Alternate values so the fixture cannot merge by accident.
            let value = if (x + y) % 2 == 0 { 2 } else { 4 };
            state = state.create_tile(Coord::new(x, y), value).unwrap();
        }
    }

    let mut spawner = TileSpawner::new(9);
    assert_eq!(spawner.next_tile(&state), None);
}

#[test]
fn test_gate_paces_moves_across_ticks() {
    let mut gate = MoveGate::new();
    assert!(gate.is_open());

    gate.close();
    assert!(!gate.is_open());

    let mut fired = 0;
    let mut elapsed = 0;
    while elapsed < MERGE_ANIMATION_MS + TICK_MS * 2 {
        if gate.update(TICK_MS) {
            fired += 1;
        }
        elapsed += TICK_MS;
    }
    assert_eq!(fired, 1);
    assert!(gate.is_open());
}

#[test]
fn test_gate_expiry_drives_clean_up_and_spawn() {
    let mut spawner = TileSpawner::new(3);
    let mut gate = MoveGate::new();

    // The opening tiles share column 0; moving up merges them.
    let state = GameState::new_game();
    let mut state = state.shift(Direction::Up);
    assert!(state.changed());
    assert_eq!(state.tile_count(), 2);
    gate.close();

    // Tick until the merge window lapses, then settle and deal.
    let mut ticks = 0;
    while !gate.update(TICK_MS) {
        ticks += 1;
        assert!(ticks < 100, "gate never fired");
    }
    state = state.clean_up();
    assert_eq!(state.tile_count(), 1);
    assert_eq!(state.score(), 4);

    let (position, value) = spawner.next_tile(&state).unwrap();
    state = state.create_tile(position, value).unwrap();
    assert_eq!(state.tile_count(), 2);
    assert_eq!(state.board().tile_count(), 2);
}
