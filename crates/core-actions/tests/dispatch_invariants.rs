use core_actions::{Action, EditKind, MotionKind, NoClipboard, dispatch};
use core_config::{ColorMode, EditorSettings};
use core_state::EditorState;
use core_text::{Document, Position};
use proptest::prelude::*;

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Motion(MotionKind::Up)),
        Just(Action::Motion(MotionKind::Down)),
        Just(Action::Motion(MotionKind::Left)),
        Just(Action::Motion(MotionKind::Right)),
        (0x20u8..=0x7e).prop_map(|b| Action::Edit(EditKind::InsertChar(b))),
        Just(Action::Edit(EditKind::Backspace)),
        Just(Action::Edit(EditKind::Tab)),
        Just(Action::Edit(EditKind::Split)),
        Just(Action::Edit(EditKind::CommentLine)),
        Just(Action::Edit(EditKind::Paste)),
        Just(Action::CtrlUp),
    ]
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ a-z/\"(){}0-9]{0,12}", 1..6)
}

proptest! {
    #[test]
    fn cursor_and_line_count_invariants_hold(
        lines in lines_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..80),
        tab_width in 0usize..6,
    ) {
        let settings = EditorSettings::new(tab_width, 5, ColorMode::CppLike);
        let mut state = EditorState::new(Document::from_lines(lines.iter().map(String::as_str)), "unused");
        for action in actions {
            dispatch(action, &mut state, &settings, &NoClipboard);
            prop_assert!(state.document.line_count() >= 1);
            prop_assert!(state.cursor.line < state.document.line_count());
            prop_assert!(state.cursor.col <= state.document.line_len(state.cursor.line));
        }
    }

    #[test]
    fn motions_alone_never_dirty(
        lines in lines_strategy(),
        moves in prop::collection::vec(0u8..4, 0..40),
    ) {
        let settings = EditorSettings::default();
        let mut state = EditorState::new(Document::from_lines(lines.iter().map(String::as_str)), "unused");
        let before = state.document.to_bytes();
        for m in moves {
            let kind = match m {
                0 => MotionKind::Up,
                1 => MotionKind::Down,
                2 => MotionKind::Left,
                _ => MotionKind::Right,
            };
            dispatch(Action::Motion(kind), &mut state, &settings, &NoClipboard);
        }
        prop_assert!(state.is_saved());
        prop_assert_eq!(state.document.to_bytes(), before);
    }

    #[test]
    fn split_then_backspace_is_identity(
        line in "[ a-z;]{0,16}",
        split_at in 0usize..17,
        tab_width in 0usize..6,
    ) {
        let settings = EditorSettings::new(tab_width, 5, ColorMode::Plain);
        let mut state = EditorState::new(Document::from_lines([line.as_str()]), "unused");
        state.cursor = Position::new(0, split_at.min(line.len()));
        let start = state.cursor;
        dispatch(Action::Edit(EditKind::Split), &mut state, &settings, &NoClipboard);
        dispatch(Action::Edit(EditKind::Backspace), &mut state, &settings, &NoClipboard);
        prop_assert_eq!(state.document.line(0).unwrap(), line.as_bytes());
        prop_assert_eq!(state.document.line_count(), 1);
        prop_assert_eq!(state.cursor, start);
    }
}
