//! The editor loop.
//!
//! Single-threaded and synchronous: draw the current screen, block for input,
//! apply it, repeat. Exactly one read is outstanding at a time and a full
//! redraw completes before the next one starts.

use anyhow::Result;
use core_actions::{Clipboard, OptionsOutcome, apply_options_key, dispatch};
use core_config::EditorSettings;
use core_events::Action;
use core_events::keys::ESC;
use core_input::{ByteSource, DecoderState, InputDecoder, Step, transition};
use core_render::{Palette, RenderEngine};
use core_state::EditorState;
use std::io::Write;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Editor,
    Options,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Quit,
    EndOfInput,
}

pub struct Session {
    pub state: EditorState,
    pub settings: EditorSettings,
    decoder: InputDecoder,
    /// Escape-sequence progress while the options screen is open.
    options_escape: DecoderState,
    engine: RenderEngine,
    clipboard: Box<dyn Clipboard>,
    screen: Screen,
}

impl Session {
    pub fn new(
        state: EditorState,
        settings: EditorSettings,
        palette: Palette,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            state,
            settings,
            decoder: InputDecoder::new(),
            options_escape: DecoderState::Idle,
            engine: RenderEngine::new(palette),
            clipboard,
            screen: Screen::Editor,
        }
    }

    /// Run until quit or end of input. `size` is asked for the terminal
    /// dimensions before every frame so resizes are picked up on the next key.
    pub fn run<S, W, F>(&mut self, source: &mut S, out: &mut W, size: F) -> Result<ExitReason>
    where
        S: ByteSource + ?Sized,
        W: Write,
        F: Fn() -> Result<(u16, u16)>,
    {
        loop {
            let (w, h) = size()?;
            match self.screen {
                Screen::Editor => {
                    self.engine
                        .render(out, &mut self.state, &self.settings, w, h)?;
                    let Some(action) = self.decoder.next_action(source)? else {
                        return Ok(ExitReason::EndOfInput);
                    };
                    let result = dispatch(
                        action,
                        &mut self.state,
                        &self.settings,
                        self.clipboard.as_ref(),
                    );
                    trace!(target: "runtime", ?action, dirty = result.dirty, "dispatched");
                    if result.quit {
                        debug!(target: "runtime", saved = self.state.is_saved(), "quit_requested");
                        return Ok(ExitReason::Quit);
                    }
                    if result.options {
                        self.options_escape = DecoderState::Idle;
                        self.screen = Screen::Options;
                    }
                }
                Screen::Options => {
                    self.engine.render_options(out, &self.settings, w, h)?;
                    let Some(byte) = source.next_byte()? else {
                        return Ok(ExitReason::EndOfInput);
                    };
                    if self.options_key(byte) == OptionsOutcome::Leave {
                        self.decoder.reset();
                        self.screen = Screen::Editor;
                    }
                }
            }
        }
    }

    /// Route one options-screen byte. Escape sequences go through the same
    /// table as the editor so `ESC [ ...` keys are swallowed whole. The screen
    /// closes on ESC ESC, or on a lone ESC followed by a byte that starts no
    /// sequence (that byte is dropped).
    fn options_key(&mut self, byte: u8) -> OptionsOutcome {
        let from = self.options_escape;
        let (next, step) = transition(from, byte);
        self.options_escape = next;
        match (from, step) {
            (DecoderState::Idle, Step::Pending) => OptionsOutcome::Stay,
            (DecoderState::Idle, _) => apply_options_key(byte, &mut self.settings),
            (DecoderState::AwaitEscapeBody, Step::Emit(Action::Quit) | Step::Discard) => {
                apply_options_key(ESC, &mut self.settings)
            }
            (_, step) => {
                trace!(target: "runtime", byte, ?step, "options_sequence_ignored");
                OptionsOutcome::Stay
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_actions::NoClipboard;
    use core_config::ColorMode;
    use core_input::SliceSource;
    use core_render::ColorSupport;
    use core_text::Document;

    fn session(lines: &[&str], path: &std::path::Path) -> Session {
        Session::new(
            EditorState::new(Document::from_lines(lines.iter().copied()), path),
            EditorSettings::default(),
            Palette::new(ColorSupport::Full256),
            Box::new(NoClipboard),
        )
    }

    fn drive(session: &mut Session, input: &[u8]) -> (ExitReason, Vec<u8>) {
        let mut src = SliceSource::new(input);
        let mut out = Vec::new();
        let reason = session.run(&mut src, &mut out, || Ok((80, 24))).unwrap();
        (reason, out)
    }

    fn text(session: &Session) -> Vec<u8> {
        session.state.document.to_bytes()
    }

    #[test]
    fn type_then_double_escape_quits_unsaved() {
        let mut s = session(&[""], std::path::Path::new("unused.txt"));
        let (reason, out) = drive(&mut s, b"hi\x1b\x1b");
        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(text(&s), b"hi\n");
        assert!(!s.state.is_saved());
        assert!(String::from_utf8_lossy(&out).contains("Ctrl+S = Save"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let mut s = session(&["abc"], std::path::Path::new("unused.txt"));
        let (reason, _) = drive(&mut s, b"\x1b[C");
        assert_eq!(reason, ExitReason::EndOfInput);
        assert_eq!(s.state.cursor.col, 1);
    }

    #[test]
    fn ctrl_s_saves_and_shows_message_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        let mut s = session(&["x"], &path);
        let (_, out) = drive(&mut s, b"y\x13\x1b\x1b");
        assert!(s.state.is_saved());
        assert_eq!(std::fs::read(&path).unwrap(), b"yx\n");
        let shown = String::from_utf8_lossy(&out);
        assert_eq!(shown.matches("Saved to '").count(), 1);
    }

    #[test]
    fn options_screen_changes_settings_then_returns() {
        let mut s = session(&[""], std::path::Path::new("unused.txt"));
        // Ctrl+O, tab+1, cycle mode twice (cpp -> programming -> plain), ESC ESC, then a tab.
        let (reason, out) = drive(&mut s, b"\x0f=cc\x1b\x1b\t\x1b\x1b");
        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(s.settings.tab_width(), 5);
        assert_eq!(s.settings.color_mode(), ColorMode::Plain);
        assert!(s.settings.keywords().is_empty());
        assert_eq!(text(&s), b"     \n");
        assert!(String::from_utf8_lossy(&out).contains("Press Esc to exit options"));
    }

    #[test]
    fn arrow_keys_on_options_screen_are_swallowed() {
        let mut s = session(&["abc"], std::path::Path::new("unused.txt"));
        let (reason, _) = drive(&mut s, b"\x0f\x1b[A\x1b\x1b\x1b\x1b");
        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(text(&s), b"abc\n");
        assert!(s.state.is_saved());
    }

    #[test]
    fn ctrl_up_on_options_screen_keeps_it_open() {
        let mut s = session(&["abc"], std::path::Path::new("unused.txt"));
        // ESC [ 1 ; 5 A is consumed, then '=' still reaches the options screen.
        let (reason, _) = drive(&mut s, b"\x0f\x1b[1;5A=\x1b\x1b");
        assert_eq!(reason, ExitReason::EndOfInput);
        assert_eq!(s.settings.tab_width(), 5);
        assert_eq!(text(&s), b"abc\n");
    }

    #[test]
    fn lone_escape_leaves_options_and_drops_next_byte() {
        let mut s = session(&[""], std::path::Path::new("unused.txt"));
        drive(&mut s, b"\x0f\x1bxy");
        assert_eq!(text(&s), b"y\n");
    }
}
