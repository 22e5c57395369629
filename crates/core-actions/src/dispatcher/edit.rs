//! Text edit action handling.
//!
//! Every arm routes through a `core_text::Document` helper taking
//! `&mut Position`, so the cursor invariant is upheld by the buffer itself.
//! Any edit that changes the document marks the state dirty.

use super::DispatchResult;
use crate::clipboard::Clipboard;
use core_config::EditorSettings;
use core_events::EditKind;
use core_state::EditorState;

const COMMENT_PREFIX: &[u8] = b" //";

pub(crate) fn handle_edit(
    kind: EditKind,
    state: &mut EditorState,
    settings: &EditorSettings,
    clipboard: &dyn Clipboard,
) -> DispatchResult {
    let before = state.cursor;
    let mut pos = state.cursor;
    let op = match kind {
        EditKind::InsertChar(ch) => {
            state.document.insert_char(&mut pos, ch);
            "insert_char"
        }
        EditKind::Backspace => {
            state
                .document
                .delete_char_before(&mut pos, settings.tab_width());
            "backspace"
        }
        EditKind::Tab => {
            state.document.insert_tab(&mut pos, settings.tab_width());
            "tab"
        }
        EditKind::Split => {
            state.document.split_line(&mut pos);
            "split_line"
        }
        EditKind::CommentLine => {
            state.document.prepend(pos.line, COMMENT_PREFIX);
            "comment_line"
        }
        EditKind::Paste => match clipboard.get_contents() {
            Ok(text) if !text.is_empty() => {
                state.document.insert_str(&mut pos, &text);
                "paste"
            }
            Ok(_) => return DispatchResult::clean(),
            Err(e) => {
                tracing::debug!(target: "actions.dispatch", provider=clipboard.name(), error=%e, "clipboard_paste_failed");
                return DispatchResult::clean();
            }
        },
    };
    state.cursor = pos;
    tracing::trace!(target: "actions.dispatch", op, line=before.line, col=before.col, to_line=pos.line, to_col=pos.col, "edit");
    state.mark_dirty();
    DispatchResult::dirty()
}
