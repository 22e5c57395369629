//! Vertical viewport over the document.
//!
//! `first_line` is the topmost document line on screen and `height` the
//! number of text rows (terminal rows minus the status row, at least 1).
//! After `follow(cursor_line)` the cursor row is visible and `first_line`
//! has moved by the smallest amount that achieves it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub first_line: usize,
    pub height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl Viewport {
    pub fn new(first_line: usize, height: usize) -> Self {
        Self {
            first_line,
            height: height.max(1),
        }
    }

    /// Text height for a terminal with `rows` rows.
    pub fn text_rows(rows: u16) -> usize {
        (rows as usize).saturating_sub(1).max(1)
    }

    pub fn resize(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// Scroll just enough to keep `cursor_line` on screen.
    pub fn follow(&mut self, cursor_line: usize) {
        if cursor_line < self.first_line {
            self.first_line = cursor_line;
        } else if cursor_line >= self.first_line + self.height {
            self.first_line = cursor_line + 1 - self.height;
        }
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.first_line && line < self.first_line + self.height
    }

    /// Document lines to draw for a document of `line_count` lines.
    pub fn visible(&self, line_count: usize) -> std::ops::Range<usize> {
        let end = (self.first_line + self.height).min(line_count);
        self.first_line.min(end)..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scrolls_down_minimally() {
        let mut vp = Viewport::new(0, 10);
        vp.follow(10);
        assert_eq!(vp.first_line, 1);
        vp.follow(25);
        assert_eq!(vp.first_line, 16);
    }

    #[test]
    fn scrolls_up_to_cursor() {
        let mut vp = Viewport::new(20, 5);
        vp.follow(7);
        assert_eq!(vp.first_line, 7);
    }

    #[test]
    fn inside_view_is_untouched() {
        let mut vp = Viewport::new(5, 5);
        vp.follow(9);
        assert_eq!(vp.first_line, 5);
    }

    #[test]
    fn text_rows_reserve_status_and_floor_at_one() {
        assert_eq!(Viewport::text_rows(24), 23);
        assert_eq!(Viewport::text_rows(1), 1);
        assert_eq!(Viewport::text_rows(0), 1);
    }

    #[test]
    fn visible_range_stops_at_document_end() {
        let vp = Viewport::new(3, 10);
        assert_eq!(vp.visible(5), 3..5);
        assert_eq!(vp.visible(2), 2..2);
    }

    proptest! {
        #[test]
        fn cursor_always_visible_after_follow(
            start in 0usize..200,
            height in 1usize..60,
            cursor in 0usize..400,
        ) {
            let mut vp = Viewport::new(start, height);
            let before = vp.first_line;
            vp.follow(cursor);
            prop_assert!(vp.contains(cursor));
            if cursor >= before && cursor < before + height {
                prop_assert_eq!(vp.first_line, before);
            }
        }
    }
}
