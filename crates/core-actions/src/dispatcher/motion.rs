//! Motion sub-dispatch (cursor movement).
//!
//! Delegates to `core_text::motion`, which owns the wrap and clamp rules.
//! Motions never touch the dirty flag.

use super::DispatchResult;
use core_events::MotionKind;
use core_state::EditorState;
use core_text::{Document, Position, motion};

pub(crate) fn handle_motion(kind: MotionKind, state: &mut EditorState) -> DispatchResult {
    let before = state.cursor;
    let step: fn(&Document, &mut Position) = match kind {
        MotionKind::Up => motion::up,
        MotionKind::Down => motion::down,
        MotionKind::Left => motion::left,
        MotionKind::Right => motion::right,
    };
    step(&state.document, &mut state.cursor);
    if before == state.cursor {
        return DispatchResult::clean();
    }
    tracing::trace!(target: "actions.dispatch", ?kind, line=before.line, col=before.col, to_line=state.cursor.line, to_col=state.cursor.col, "motion");
    DispatchResult::dirty()
}
