//! Cursor motion helpers.
//!
//! These operate purely on a `Document` + `Position` pair and are free of
//! editor state. Every helper is a bounds-checked no-op at the document edges
//! and leaves the position inside the document.

use crate::{Document, Position};

/// Move left one column, wrapping to the end of the previous line at column 0.
pub fn left(doc: &Document, pos: &mut Position) {
    if pos.col > 0 {
        pos.col -= 1;
    } else if pos.line > 0 {
        pos.line -= 1;
        pos.col = doc.line_len(pos.line);
    }
}

/// Move right one column, wrapping to column 0 of the next line at end of line.
pub fn right(doc: &Document, pos: &mut Position) {
    if pos.col < doc.line_len(pos.line) {
        pos.col += 1;
    } else if pos.line + 1 < doc.line_count() {
        pos.line += 1;
        pos.col = 0;
    }
}

/// Move up one line, clamping the column to the new line's length.
pub fn up(doc: &Document, pos: &mut Position) {
    if pos.line > 0 {
        pos.line -= 1;
    }
    pos.col = pos.col.min(doc.line_len(pos.line));
}

/// Move down one line, clamping the column to the new line's length.
pub fn down(doc: &Document, pos: &mut Position) {
    if pos.line + 1 < doc.line_count() {
        pos.line += 1;
    }
    pos.col = pos.col.min(doc.line_len(pos.line));
}
