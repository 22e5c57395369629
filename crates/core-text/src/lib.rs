//! Line-oriented document buffer.
//!
//! The document is an ordered list of lines, each a plain byte sequence with
//! one byte per screen cell. There is no Unicode awareness at this layer:
//! columns are byte offsets, and every edit keeps them that way.
//!
//! Invariants (must hold after every public call):
//! * `line_count() >= 1`. An empty file still has one empty line.
//! * Lines never contain `\n`; line breaks are the boundaries between entries.
//! * Edit helpers take the cursor as `&mut Position` and leave it inside
//!   `0 <= col <= line_len(line)` on a valid line.

pub mod io;
pub mod motion;

pub use io::{DocumentError, load, save};

/// A position inside a document expressed as (line index, column).
/// Columns count bytes; `col == line_len` is the slot one past the last byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
    pub fn origin() -> Self {
        Self { line: 0, col: 0 }
    }
}

/// The in-memory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Vec<u8>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document holding a single empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Build a document from raw file content split on `\n`.
    ///
    /// A trailing `\n` terminates the last line rather than opening a new
    /// empty one, so `"a\nb\n"` and `"a\nb"` both yield two lines.
    pub fn from_bytes(content: &[u8]) -> Self {
        let mut lines: Vec<Vec<u8>> = content.split(|b| *b == b'\n').map(<[u8]>::to_vec).collect();
        if content.ends_with(b"\n") {
            lines.pop();
        }
        if lines.is_empty() {
            lines.push(Vec::new());
        }
        Self { lines }
    }

    /// Convenience constructor used heavily by tests.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut lines: Vec<Vec<u8>> = lines.into_iter().map(|l| l.as_ref().to_vec()).collect();
        if lines.is_empty() {
            lines.push(Vec::new());
        }
        Self { lines }
    }

    /// Total number of lines (always >= 1).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Option<&[u8]> {
        self.lines.get(idx).map(Vec::as_slice)
    }

    /// Length of a line in columns; 0 for out-of-range indices.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, Vec::len)
    }

    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// Serialize for saving: every line, including the last, followed by `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for line in &self.lines {
            out.extend_from_slice(line);
            out.push(b'\n');
        }
        out
    }

    /// Clamp a position onto the document (valid line, column within the line).
    pub fn clamp(&self, pos: &mut Position) {
        if pos.line >= self.lines.len() {
            pos.line = self.lines.len() - 1;
        }
        let max = self.line_len(pos.line);
        if pos.col > max {
            pos.col = max;
        }
    }

    /// Insert a single byte at the position; advances the column by one.
    pub fn insert_char(&mut self, pos: &mut Position, ch: u8) {
        self.clamp(pos);
        self.lines[pos.line].insert(pos.col, ch);
        pos.col += 1;
    }

    /// Insert `tab_width` spaces at the position and advance past them.
    pub fn insert_tab(&mut self, pos: &mut Position, tab_width: usize) {
        self.clamp(pos);
        let line = &mut self.lines[pos.line];
        line.splice(pos.col..pos.col, std::iter::repeat_n(b' ', tab_width));
        pos.col += tab_width;
    }

    /// Split the line at the position. The tail moves to a new line below and
    /// the cursor lands at its start.
    pub fn split_line(&mut self, pos: &mut Position) {
        self.clamp(pos);
        let tail = self.lines[pos.line].split_off(pos.col);
        self.lines.insert(pos.line + 1, tail);
        pos.line += 1;
        pos.col = 0;
    }

    /// Backspace.
    ///
    /// * Preceded by a space: remove spaces one at a time, at most `tab_width`
    ///   of them, stopping at the first non-space byte.
    /// * Preceded by anything else: remove exactly one byte.
    /// * Column 0 on a later line: append this line to the previous one and
    ///   land at the join point.
    /// * (0,0): no-op.
    pub fn delete_char_before(&mut self, pos: &mut Position, tab_width: usize) {
        self.clamp(pos);
        if pos.col == 0 {
            if pos.line == 0 {
                return;
            }
            let current = self.lines.remove(pos.line);
            pos.line -= 1;
            let prev = &mut self.lines[pos.line];
            pos.col = prev.len();
            prev.extend_from_slice(&current);
            return;
        }
        let line = &mut self.lines[pos.line];
        if line[pos.col - 1] == b' ' {
            let mut removed = 0;
            while removed < tab_width && pos.col > 0 && line[pos.col - 1] == b' ' {
                line.remove(pos.col - 1);
                pos.col -= 1;
                removed += 1;
            }
        } else {
            line.remove(pos.col - 1);
            pos.col -= 1;
        }
    }

    /// Prepend bytes to the start of a line. Out-of-range lines are ignored.
    pub fn prepend(&mut self, line: usize, text: &[u8]) {
        if let Some(l) = self.lines.get_mut(line) {
            l.splice(0..0, text.iter().copied());
        }
    }

    /// Insert a run of text at the position. `\n` bytes split lines; `\r` is
    /// dropped. The cursor ends after the inserted text.
    pub fn insert_str(&mut self, pos: &mut Position, text: &[u8]) {
        for &b in text {
            match b {
                b'\n' => self.split_line(pos),
                b'\r' => {}
                _ => self.insert_char(pos, b),
            }
        }
    }
}
