//! GameView: paints a `core::GameState` into a framebuffer.
//!
//! Pure code, no I/O anywhere, so every pixel of a frame can be asserted on
//! in unit tests.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, BOARD_SIZE};

/// Width and height of the drawable terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Accepts the `(columns, rows)` pair that `crossterm::terminal::size`
/// reports.
impl From<(u16, u16)> for Viewport {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

/// Draws the board, its tiles, and the score panel.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
    /// Terminal rows per board cell.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 keeps tiles roughly square in typical terminal glyphs and
        // leaves room for values up to six digits.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Draw one frame into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport and cleared first, so a
    /// caller can hold one buffer for the whole session.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_px_w = (BOARD_SIZE as u16) * self.cell_w;
        let board_px_h = (BOARD_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let position = Coord::new(x, y);
                match state.tile_at(position) {
                    Some(tile) => self.draw_tile(fb, start_x, start_y, position, tile.value),
                    None => self.draw_empty_cell(fb, start_x, start_y, position),
                }
            }
        }

        self.draw_side_panel(fb, state, viewport, start_x.saturating_add(frame_w), start_y);
    }

    /// Like [`GameView::render_into`], but into a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;

        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
        for (cx, cy, corner) in [
            (x, y, '┌'),
            (right, y, '┐'),
            (x, bottom, '└'),
            (right, bottom, '┘'),
        ] {
            fb.put_char(cx, cy, corner, style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, position: Coord) {
        let style = CellStyle {
            fg: Rgb::new(90, 85, 80),
            bg: Rgb::new(45, 42, 38),
            bold: false,
        };
        let (px, py) = self.cell_origin(start_x, start_y, position);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        position: Coord,
        value: u32,
    ) {
        let style = tile_style(value);
        let (px, py) = self.cell_origin(start_x, start_y, position);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let text_x = px + self.cell_w.saturating_sub(digit_count(value)) / 2;
        let text_y = py + self.cell_h / 2;
        fb.put_u32(text_x, text_y, value, style);
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, position: Coord) -> (u16, u16) {
        let px = start_x + 1 + (position.x as u16) * self.cell_w;
        let py = start_y + 1 + (position.y as u16) * self.cell_h;
        (px, py)
    }

    /// Score and key help to the right of the board. Skipped entirely when
    /// fewer than 12 columns remain there.
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        board_right: u16,
        top: u16,
    ) {
        let panel_x = board_right.saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(238, 228, 218),
            bg: Rgb::default(),
            bold: true,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::default(),
            bold: false,
        };

        let mut y = top;
        fb.put_str(panel_x, y, "2048", label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, state.score(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "arrows move", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "n new game", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "q quit", value);
    }
}

/// Style for a tile value, following the classic 2048 palette.
///
/// 2 and 4 are dark text on pale tiles; everything above switches to light
/// text. Values past 2048 share one dark "super tile" color.
fn tile_style(value: u32) -> CellStyle {
    let dark_text = Rgb::new(119, 110, 101);
    let light_text = Rgb::new(249, 246, 242);
    let (fg, bg) = match value {
        2 => (dark_text, Rgb::new(238, 228, 218)),
        4 => (dark_text, Rgb::new(237, 224, 200)),
        8 => (light_text, Rgb::new(242, 177, 121)),
        16 => (light_text, Rgb::new(245, 149, 99)),
        32 => (light_text, Rgb::new(246, 124, 95)),
        64 => (light_text, Rgb::new(246, 94, 59)),
        128 => (light_text, Rgb::new(237, 207, 114)),
        256 => (light_text, Rgb::new(237, 204, 97)),
        512 => (light_text, Rgb::new(237, 200, 80)),
        1024 => (light_text, Rgb::new(237, 197, 63)),
        2048 => (light_text, Rgb::new(237, 194, 46)),
        _ => (light_text, Rgb::new(60, 58, 50)),
    };
    CellStyle {
        fg,
        bg,
        bold: true,
    }
}

fn digit_count(value: u32) -> u16 {
    let mut n = value;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
