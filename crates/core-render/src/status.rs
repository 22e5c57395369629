//! Status row composition.
//!
//! Either the one-shot message posted by the last action (`Saved to '...'`
//! or `Save failed: ...`) or the help line with the cursor as `(y,x)`.

use crate::style::Paint;
use core_state::{EphemeralMessage, MessageKind};
use core_text::Position;

pub const HELP: &str = "Ctrl+S = Save | Esc * 2 = Quit | Ctrl+O = Options";

pub fn help_line(cursor: Position) -> String {
    format!("{HELP} | ({},{})", cursor.line, cursor.col)
}

pub fn compose_status(ephemeral: Option<&EphemeralMessage>, cursor: Position) -> (String, Paint) {
    match ephemeral {
        Some(msg) => {
            let paint = match msg.kind {
                MessageKind::Saved => Paint::Saved,
                MessageKind::Error => Paint::Error,
            };
            (msg.text.clone(), paint)
        }
        None => (help_line(cursor), Paint::Text),
    }
}
