//! Terminal 2048 runner (default binary).
//!
//! Wires the pure game core to crossterm: keys come in through the input
//! crate, frames go out through the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameState, TileSpawner};
use tui_2048::input::{direction_for_key, is_new_game, should_quit, MoveGate};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Leave the terminal usable no matter how the loop ended.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut spawner = TileSpawner::new(wall_clock_seed());
    let mut state = GameState::new_game();

    let view = GameView::default();
    let mut gate = MoveGate::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state, Viewport::from(size));
        term.draw(&fb)?;

        // Block on input for whatever remains of the current tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat and release events are ignored; the
                // merge gate already paces repeated moves.
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if is_new_game(key) {
                        state = GameState::new_game();
                        gate = MoveGate::new();
                    } else if let Some(direction) = direction_for_key(key) {
                        if gate.is_open() {
                            let next = state.shift(direction);
                            if next.changed() {
                                gate.close();
                            }
                            state = next;
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if gate.update(TICK_MS) {
                // Merge animation window elapsed: purge consumed tiles,
                // then drop the next tile onto the settled board.
                state = state.clean_up();
                if let Some((position, value)) = spawner.next_tile(&state) {
                    state = state.create_tile(position, value)?;
                }
            }
        }
    }
}

/// Seed the spawner from the wall clock so no two sessions deal the same
/// tiles.
fn wall_clock_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ elapsed.as_secs() as u32,
        Err(_) => 1,
    }
}
