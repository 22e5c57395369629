//! File IO glue between the dispatcher and `core_text::save`.
//!
//! Synchronous and minimal: serialization lives in `core_text`, this layer
//! owns the state side effects (dirty flag, status message, logging).

use core_state::{EditorState, MessageKind};
use core_text::DocumentError;

/// Result of a write attempt.
#[derive(Debug)]
pub enum WriteFileResult {
    Success,
    Error(DocumentError),
}

impl WriteFileResult {
    pub fn is_success(&self) -> bool {
        matches!(self, WriteFileResult::Success)
    }
}

/// Write the document to the state's file, clear the dirty flag and post
/// the one-frame status message. On failure the flag is left untouched and
/// the status line carries the reason.
pub fn write_file(state: &mut EditorState) -> WriteFileResult {
    match core_text::save(&state.file_name, &state.document) {
        Ok(()) => {
            state.mark_saved();
            let text = format!("Saved to '{}'", state.file_name.display());
            state.set_ephemeral(text, MessageKind::Saved);
            tracing::info!(target: "io", file=%state.file_name.display(), lines=state.document.line_count(), "file_saved");
            WriteFileResult::Success
        }
        Err(e) => {
            tracing::error!(target: "io", error=%e, "file_write_error");
            state.set_ephemeral(format!("Save failed: {e}"), MessageKind::Error);
            WriteFileResult::Error(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Document;

    #[test]
    fn write_file_clears_dirty_and_posts_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut state = EditorState::new(Document::from_lines(["a", "b"]), &path);
        state.mark_dirty();
        let res = write_file(&mut state);
        assert!(res.is_success());
        assert!(state.is_saved());
        assert_eq!(std::fs::read(&path).unwrap(), b"a\nb\n");
        assert!(state.ephemeral().unwrap().text.starts_with("Saved to '"));
    }

    #[test]
    fn repeated_saves_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("same.txt");
        let mut state = EditorState::new(Document::from_lines(["x", "", "y"]), &path);
        write_file(&mut state);
        let first = std::fs::read(&path).unwrap();
        write_file(&mut state);
        assert_eq!(std::fs::read(&path).unwrap(), first);
    }

    #[test]
    fn write_error_leaves_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = EditorState::new(Document::new(), dir.path());
        state.mark_dirty();
        let res = write_file(&mut state);
        assert!(matches!(res, WriteFileResult::Error(_)));
        assert!(!state.is_saved(), "dirty unchanged when the write fails");
        assert_eq!(state.ephemeral().unwrap().kind, MessageKind::Error);
    }
}
