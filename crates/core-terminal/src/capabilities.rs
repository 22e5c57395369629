//! Terminal capability probing.
//!
//! Runs once at startup. Only the color count matters to the editor: it
//! selects the comment color and the note on the options screen.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TerminalCapabilities {
    pub color_count: u16,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        let color_count = crossterm::style::available_color_count();
        tracing::debug!(target: "terminal", color_count, "capabilities_detected");
        Self { color_count }
    }
}
