//! Logical editor commands produced by the input decoder and consumed by the
//! dispatcher.
//!
//! One decoded key press maps to at most one `Action`. Byte-level details
//! (escape sequences, control codes) stay inside `core-input`; everything
//! downstream only sees these variants.

/// Raw byte constants shared by the decoder and the options screen.
pub mod keys {
    pub const ESC: u8 = 0x1b;
    pub const DEL: u8 = 0x7f;
    pub const BS: u8 = 0x08;
    pub const TAB: u8 = b'\t';
    pub const LF: u8 = b'\n';
    pub const CR: u8 = b'\r';
    /// What terminals send for Ctrl+`/` (same code as Ctrl+`_`).
    pub const CTRL_SLASH: u8 = 0x1f;

    /// Control code for a letter key, e.g. `ctrl(b's') == 0x13`.
    pub const fn ctrl(c: u8) -> u8 {
        c & 0x1f
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Printable byte (0x20..=0x7E).
    InsertChar(u8),
    Backspace,
    /// Insert `tab_width` spaces.
    Tab,
    /// Split the line at the cursor.
    Split,
    /// Prepend `" //"` to the current line; cursor column unchanged.
    CommentLine,
    /// Insert clipboard contents at the cursor.
    Paste,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Edit(EditKind),
    Save,
    /// Open the options screen.
    Options,
    /// Copy the current line to the clipboard.
    CopyLine,
    /// `ESC [ 1 ; 5 A`. Recognized so it never reaches the text stream; no
    /// behavior is attached yet.
    CtrlUp,
    Quit,
}
