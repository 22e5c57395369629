//! Editor screen rendering.
//!
//! Every frame is a full repaint: the viewport follows the cursor, visible
//! lines are drawn as a right-aligned 4-column line number followed by the
//! highlighted text at column `gutter_width`, and the last terminal row
//! carries the status line. Spans come from a `SpanCache`, which returns
//! exactly what `core_syntax::tokenize` would.

use crate::status::compose_status;
use crate::style::{Paint, Palette};
use crate::viewport::Viewport;
use crate::writer::Writer;
use crate::{Frame, options_screen};
use anyhow::Result;
use core_config::EditorSettings;
use core_state::EditorState;
use core_syntax::{SpanCache, SpanCacheStats};
use std::io::Write;

#[derive(Debug)]
pub struct RenderEngine {
    viewport: Viewport,
    spans: SpanCache,
    palette: Palette,
}

fn to_col(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl RenderEngine {
    pub fn new(palette: Palette) -> Self {
        Self {
            viewport: Viewport::default(),
            spans: SpanCache::new(),
            palette,
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn span_stats(&self) -> SpanCacheStats {
        self.spans.stats()
    }

    /// Build the editor frame for a `w` x `h` terminal. Consumes the pending
    /// status message, so it is shown for exactly one frame.
    pub fn build_frame(
        &mut self,
        state: &mut EditorState,
        settings: &EditorSettings,
        w: u16,
        h: u16,
    ) -> Frame {
        let mut frame = Frame::new(w, h);
        self.viewport.resize(Viewport::text_rows(h));
        self.viewport.follow(state.cursor.line);

        let text_x = to_col(settings.gutter_width());
        let visible = self.viewport.visible(state.document.line_count());
        for (row, idx) in visible.enumerate() {
            let y = to_col(row);
            let Some(line) = state.document.line(idx) else {
                break;
            };
            frame.put_str(0, y, &format!("{:>4}", idx + 1), Paint::LineNumber);
            for span in self.spans.spans(line, settings) {
                let x = text_x.saturating_add(to_col(span.range.start));
                frame.put_bytes(x, y, span.text(line), Paint::from(span.style));
            }
        }

        if h > 0 {
            let message = state.take_ephemeral();
            let (text, paint) = compose_status(message.as_ref(), state.cursor);
            frame.put_str(0, h - 1, &text, paint);
        }

        if w > 0 && h > 0 {
            let x = text_x.saturating_add(to_col(state.cursor.col)).min(w - 1);
            let y = to_col(state.cursor.line - self.viewport.first_line).min(h - 1);
            frame.cursor = Some((x, y));
        }
        tracing::trace!(target: "render", first_line=self.viewport.first_line, height=self.viewport.height, cursor_line=state.cursor.line, "frame_built");
        frame
    }

    /// Build and emit the editor frame to `out`.
    pub fn render<W: Write>(
        &mut self,
        out: &mut W,
        state: &mut EditorState,
        settings: &EditorSettings,
        w: u16,
        h: u16,
    ) -> Result<()> {
        let frame = self.build_frame(state, settings, w, h);
        Writer::from_frame(&frame, &self.palette).flush_to(out)
    }

    /// Build and emit the options screen to `out`.
    pub fn render_options<W: Write>(
        &mut self,
        out: &mut W,
        settings: &EditorSettings,
        w: u16,
        h: u16,
    ) -> Result<()> {
        let frame = options_screen::build_options_frame(settings, self.palette.support(), w, h);
        Writer::from_frame(&frame, &self.palette).flush_to(out)
    }
}
