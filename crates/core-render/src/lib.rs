//! Rendering: frame assembly and terminal emission.
//!
//! A frame is a logical grid of `Cell`s (one character plus its `Paint`)
//! built from editor state without touching the terminal. The `writer`
//! module translates a finished frame into crossterm commands, so every
//! layout rule can be asserted on a plain `Frame` in tests.
//!
//! Exposed components:
//! - `Cell` / `Frame`: the logical grid.
//! - `render_engine`: editor screen (gutter, highlighted text, status row,
//!   cursor) with the viewport and span cache it owns.
//! - `options_screen`: the settings screen.
//! - `status`: status row text.
//! - `style`: paint classes and the color palette.
//! - `viewport`: vertical scrolling.
//! - `writer`: command batching and flush.

pub mod options_screen;
pub mod render_engine;
pub mod status;
pub mod style;
pub mod viewport;
pub mod writer;

pub use render_engine::RenderEngine;
pub use style::{ColorSupport, Paint, Palette};
pub use viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub paint: Paint,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            paint: Paint::Text,
        }
    }
}

/// Display character for a document byte. The model is one byte per cell,
/// so anything outside printable ASCII is shown as `?` to keep columns aligned.
pub fn display_char(byte: u8) -> char {
    if (0x20..=0x7e).contains(&byte) {
        byte as char
    } else {
        '?'
    }
}

#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Cell>,
    /// Where the hardware cursor should rest after the frame is drawn.
    pub cursor: Option<(u16, u16)>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
            cursor: None,
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set one cell; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, ch: char, paint: Paint) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell { ch, paint };
        }
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Write `text` starting at (x,y), clipped at the right edge. Returns the
    /// column after the last character written.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, paint: Paint) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            self.set(col, y, ch, paint);
            col += 1;
        }
        col
    }

    /// Byte-per-cell variant of `put_str` for document text.
    pub fn put_bytes(&mut self, x: u16, y: u16, bytes: &[u8], paint: Paint) -> u16 {
        let mut col = x;
        for b in bytes {
            if col >= self.width {
                break;
            }
            self.set(col, y, display_char(*b), paint);
            col += 1;
        }
        col
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Row text with trailing blanks removed (tests / diagnostics).
    pub fn row_text(&self, y: u16) -> String {
        let s: String = self.row(y).iter().map(|c| c.ch).collect();
        s.trim_end().to_string()
    }

    /// Paint of every character in `needle` if it occurs on row `y`.
    pub fn paint_of(&self, y: u16, needle: &str) -> Option<Vec<Paint>> {
        let text: String = self.row(y).iter().map(|c| c.ch).collect();
        let start = text.find(needle)?;
        Some(
            self.row(y)[start..start + needle.len()]
                .iter()
                .map(|c| c.paint)
                .collect(),
        )
    }
}
