//! Character-cell framebuffer shared by the view and the terminal backend.
//!
//! The view paints a frame with small put/fill primitives; the renderer then
//! turns the finished grid into escape sequences in a single pass. All writes
//! clip against the grid bounds, so draw code never range-checks before
//! painting near an edge.

/// True-color RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors and weight applied to one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(205, 193, 180),
            bg: Rgb::default(),
            bold: false,
        }
    }
}

/// One styled character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Row-major grid of styled characters sized to the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change dimensions in place, reusing the allocation when it is big
    /// enough. Cell contents are unspecified afterwards; callers clear before
    /// drawing the next frame.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.cells
                .resize(width as usize * height as usize, Cell::default());
        }
    }

    #[inline(always)]
    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        let at = self.offset(x, y)?;
        self.cells.get(at).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(at) = self.offset(x, y) {
            self.cells[at] = cell;
        }
    }

    /// Borrow one row of cells; rows past the bottom are empty.
    pub fn row(&self, y: u16) -> &[Cell] {
        match self.offset(0, y) {
            Some(start) => &self.cells[start..start + self.width as usize],
            None => &[],
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, glyph: char, style: CellStyle) {
        self.set(x, y, Cell { glyph, style });
    }

    /// Write a string left to right; anything past the right edge is dropped.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let room = self.width.saturating_sub(x) as usize;
        for (i, glyph) in s.chars().take(room).enumerate() {
            self.put_char(x + i as u16, y, glyph, style);
        }
    }

    /// Write a decimal number left-aligned at (x, y) without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        // u32::MAX needs 10 digits.
        let mut buf = [b'0'; 10];
        let mut at = buf.len();
        let mut rest = value;
        loop {
            at -= 1;
            buf[at] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        for (i, &digit) in buf[at..].iter().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, digit as char, style);
        }
    }

    /// Fill a rectangle, clipped to the grid.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: char, style: CellStyle) {
        let cell = Cell { glyph, style };
        let x0 = x.min(self.width) as usize;
        let x1 = x.saturating_add(w).min(self.width) as usize;
        let y1 = y.saturating_add(h).min(self.height);
        for cy in y.min(self.height)..y1 {
            let start = cy as usize * self.width as usize;
            self.cells[start + x0..start + x1].fill(cell);
        }
    }
}
