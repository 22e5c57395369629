//! Editor state: the document, the cursor, the unsaved-changes flag, and the
//! one-shot status message.
//!
//! Dirty tracking: `dirty` is false for a freshly loaded document, set by any
//! mutating edit and cleared by a successful save. `is_saved()` is its
//! negation ("in sync with disk") and is what the exit prompt consults.
//!
//! Cursor invariant: `cursor.line < document.line_count()` and
//! `cursor.col <= document.line_len(cursor.line)` after every public call.
//! Mutators in `core-actions` go through `core_text` helpers that uphold it.

use core_text::{Document, Position};
use std::path::{Path, PathBuf};

/// Status message shown for exactly one frame, then replaced by the help line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemeralMessage {
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Saved,
    Error,
}

/// Top-level editor state container (one document per session).
#[derive(Debug)]
pub struct EditorState {
    pub document: Document,
    pub cursor: Position,
    pub file_name: PathBuf,
    pub dirty: bool,
    ephemeral_status: Option<EphemeralMessage>,
}

impl EditorState {
    /// Create a state for `document`, associated with `file_name` for saving.
    pub fn new(document: Document, file_name: impl Into<PathBuf>) -> Self {
        Self {
            document,
            cursor: Position::origin(),
            file_name: file_name.into(),
            dirty: false,
            ephemeral_status: None,
        }
    }

    /// Load `path` (or an empty document when unreadable) and associate it.
    pub fn open(path: &Path) -> Self {
        let document = core_text::load(path);
        tracing::info!(target: "state", file=%path.display(), line_count=document.line_count(), "document_opened");
        Self::new(document, path)
    }

    /// True when the document matches what was last loaded or saved.
    pub fn is_saved(&self) -> bool {
        !self.dirty
    }

    pub fn mark_dirty(&mut self) {
        if !self.dirty {
            tracing::trace!(target: "state", "became_dirty");
            self.dirty = true;
        }
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn set_ephemeral(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.ephemeral_status = Some(EphemeralMessage {
            text: text.into(),
            kind,
        });
    }

    pub fn ephemeral(&self) -> Option<&EphemeralMessage> {
        self.ephemeral_status.as_ref()
    }

    /// Consume the pending message; the renderer calls this once per frame.
    pub fn take_ephemeral(&mut self) -> Option<EphemeralMessage> {
        self.ephemeral_status.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_saved_at_origin() {
        let state = EditorState::new(Document::from_lines(["a"]), "a.txt");
        assert!(state.is_saved());
        assert!(!state.dirty);
        assert_eq!(state.cursor, Position::origin());
    }

    #[test]
    fn dirty_round_trip() {
        let mut state = EditorState::new(Document::new(), "x");
        state.mark_dirty();
        assert!(!state.is_saved());
        state.mark_saved();
        assert!(state.is_saved());
    }

    #[test]
    fn ephemeral_is_one_shot() {
        let mut state = EditorState::new(Document::new(), "x");
        state.set_ephemeral("Saved to 'x'", MessageKind::Saved);
        assert_eq!(state.ephemeral().unwrap().kind, MessageKind::Saved);
        assert!(state.take_ephemeral().is_some());
        assert!(state.take_ephemeral().is_none());
    }


    #[test]
    fn open_missing_file_gives_empty_document() {
        let state = EditorState::open(Path::new("__quill_missing_file__.txt"));
        assert_eq!(state.document.line_count(), 1);
        assert!(state.is_saved());
        assert_eq!(state.file_name, PathBuf::from("__quill_missing_file__.txt"));
    }
}
