//! Flushes finished frames to the terminal through crossterm.
//!
//! Every draw re-encodes the whole frame. A 4x4 board fits comfortably in one
//! write syscall, and frames are only produced when the game state or the
//! viewport changed, so there is no diffing layer.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, terminal, QueueableCommand};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to the alternate screen in raw mode, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything `enter` did and hand the screen back to the caller.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Encode and flush one frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_full_into(fb, &mut self.buf)?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode one whole frame as crossterm commands, without touching stdout.
///
/// Escape sequences dominate the payload, so the encoder tracks what the
/// terminal already has active and emits only the style parts that change
/// from one cell to the next.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut tracker = StyleTracker::default();
    for y in 0..fb.height() {
        if y > 0 {
            out.queue(Print("\r\n"))?;
        }
        for cell in fb.row(y) {
            tracker.switch_to(out, cell.style)?;
            out.queue(Print(cell.glyph))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    Ok(())
}

/// Last style handed to the terminal, diffed field by field.
#[derive(Default)]
struct StyleTracker {
    active: Option<CellStyle>,
}

impl StyleTracker {
    fn switch_to(&mut self, out: &mut Vec<u8>, next: CellStyle) -> Result<()> {
        if self.active == Some(next) {
            return Ok(());
        }
        if self.active.map(|a| a.fg) != Some(next.fg) {
            out.queue(SetForegroundColor(color(next.fg)))?;
        }
        if self.active.map(|a| a.bg) != Some(next.bg) {
            out.queue(SetBackgroundColor(color(next.bg)))?;
        }
        if self.active.map(|a| a.bold) != Some(next.bold) {
            // NormalIntensity drops bold without clearing the colors.
            let attr = if next.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(attr))?;
        }
        self.active = Some(next);
        Ok(())
    }
}

fn color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}
