use core_config::{ColorMode, EditorSettings};
use core_syntax::{SpanCache, Style, tokenize};
use proptest::prelude::*;

fn any_mode() -> impl Strategy<Value = ColorMode> {
    prop_oneof![
        Just(ColorMode::Plain),
        Just(ColorMode::CppLike),
        Just(ColorMode::GenericProgramming),
    ]
}

proptest! {
    #[test]
    fn spans_tile_the_line(line in "[a-z0-9_ ;=/\"(){}\\[\\]+*-]{0,80}", mode in any_mode()) {
        let settings = EditorSettings::new(4, 5, mode);
        let spans = tokenize(line.as_bytes(), &settings);
        let mut next = 0;
        for span in &spans {
            prop_assert_eq!(span.range.start, next);
            prop_assert!(!span.is_empty());
            next = span.range.end;
        }
        prop_assert_eq!(next, line.len());
    }

    #[test]
    fn at_most_one_comment_span_and_it_is_last(line in "[a-z /\"]{0,60}") {
        let settings = EditorSettings::default();
        let spans = tokenize(line.as_bytes(), &settings);
        let comments: Vec<_> = spans.iter().enumerate().filter(|(_, s)| s.style == Style::Comment).collect();
        prop_assert!(comments.len() <= 1);
        if let Some((idx, span)) = comments.first() {
            prop_assert_eq!(*idx, spans.len() - 1);
            prop_assert_eq!(span.range.end, line.len());
            prop_assert!(line.as_bytes()[span.range.start..].starts_with(b"//"));
        }
    }

    #[test]
    fn cache_matches_pure_function(lines in proptest::collection::vec("[a-z0-9 /\"(]{0,20}", 1..20), mode in any_mode()) {
        let settings = EditorSettings::new(4, 5, mode);
        let mut cache = SpanCache::with_capacity(8);
        for line in lines.iter().chain(lines.iter()) {
            let cached = cache.spans(line.as_bytes(), &settings).to_vec();
            prop_assert_eq!(cached, tokenize(line.as_bytes(), &settings));
        }
    }
}
