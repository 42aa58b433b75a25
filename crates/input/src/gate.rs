//! Move gating - one accepted move per merge-animation window.
//!
//! The engine expects a clean-up between moves; the gate enforces that from
//! the shell side. An accepted move closes the gate for the animation window,
//! and when the window runs out `update` reports it exactly once so the shell
//! can run clean-up and spawn the next tile. The gate is driven purely by
//! elapsed milliseconds from the shell's tick loop, so it reads no clock and
//! behaves identically in tests and in the terminal.

use crate::types::MERGE_ANIMATION_MS;

/// Rate gate for move intents
#[derive(Debug, Clone)]
pub struct MoveGate {
    window_ms: u32,
    /// Milliseconds left in the active window, if one is running
    remaining_ms: Option<u32>,
}

impl MoveGate {
    /// Gate with the standard merge-animation window
    pub fn new() -> Self {
        Self::with_window(MERGE_ANIMATION_MS)
    }

    /// Gate with a custom window length
    pub fn with_window(window_ms: u32) -> Self {
        Self {
            window_ms,
            remaining_ms: None,
        }
    }

    /// Whether a new move may be accepted
    pub fn is_open(&self) -> bool {
        self.remaining_ms.is_none()
    }

    /// Close the gate after an accepted move
    pub fn close(&mut self) {
        self.remaining_ms = Some(self.window_ms);
    }

    /// Advance the window by `elapsed_ms`.
    ///
    /// Returns true exactly once per closed window, at the tick on which it
    /// expires; that is the cue to run clean-up and spawn the next tile. The
    /// gate is open again from that point on.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        match self.remaining_ms {
            Some(left) => {
                let left = left.saturating_sub(elapsed_ms);
                if left == 0 {
                    self.remaining_ms = None;
                    true
                } else {
                    self.remaining_ms = Some(left);
                    false
                }
            }
            None => false,
        }
    }
}

impl Default for MoveGate {
    fn default() -> Self {
        Self::new()
    }
}
