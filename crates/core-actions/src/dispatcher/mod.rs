//! Dispatcher applying `Action` to mutable editor state.
//!
//! Sub-modules:
//! * `motion` - cursor movement semantics
//! * `edit`   - text mutation (insert/backspace/tab/split/comment/paste)
//!
//! Save, copy and the screen-level requests (options, quit) are small enough
//! to live here.

use crate::clipboard::Clipboard;
use crate::io_ops::write_file;
use core_config::EditorSettings;
use core_events::Action;
use core_state::EditorState;

mod edit;
mod motion;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Something visible changed; redraw before the next read.
    pub dirty: bool,
    pub quit: bool,
    /// The loop should switch to the options screen.
    pub options: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
            options: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
            options: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
            options: false,
        }
    }
    pub fn options() -> Self {
        Self {
            dirty: true,
            quit: false,
            options: true,
        }
    }
}

/// Apply an action to editor state. Returns `DispatchResult` describing whether
/// a render is needed (`dirty`), the editor should exit (`quit`) or the options
/// screen should open (`options`).
pub fn dispatch(
    action: Action,
    state: &mut EditorState,
    settings: &EditorSettings,
    clipboard: &dyn Clipboard,
) -> DispatchResult {
    let result = match action {
        Action::Motion(kind) => motion::handle_motion(kind, state),
        Action::Edit(kind) => edit::handle_edit(kind, state, settings, clipboard),
        Action::Save => {
            // A save always leaves something new in the status line.
            let saved = write_file(state).is_success();
            tracing::trace!(target: "actions.dispatch", saved, "save_dispatched");
            DispatchResult::dirty()
        }
        Action::CopyLine => {
            copy_line(state, clipboard);
            DispatchResult::clean()
        }
        Action::Options => DispatchResult::options(),
        Action::CtrlUp => {
            tracing::debug!(target: "actions.dispatch", line=state.cursor.line, "ctrl_up_ignored");
            DispatchResult::clean()
        }
        Action::Quit => DispatchResult::quit(),
    };
    debug_assert!(state.cursor.line < state.document.line_count());
    debug_assert!(state.cursor.col <= state.document.line_len(state.cursor.line));
    result
}

fn copy_line(state: &EditorState, clipboard: &dyn Clipboard) {
    let line = state.document.line(state.cursor.line).unwrap_or_default();
    match clipboard.set_contents(line) {
        Ok(()) => {
            tracing::trace!(target: "actions.dispatch", op="copy_line", line=state.cursor.line, bytes=line.len(), "clipboard");
        }
        Err(e) => {
            tracing::debug!(target: "actions.dispatch", provider=clipboard.name(), error=%e, "clipboard_copy_failed");
        }
    }
}
