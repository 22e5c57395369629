//! Terminal writer abstraction.
//!
//! Frames are translated into an ordered list of primitive commands and
//! flushed once per frame. Color changes are emitted only where the paint
//! changes along a row.
//!
//! Invariants:
//! * Commands preserve ordering; no flushing mid-frame.
//! * All positions are absolute (0,0) origin; caller ensures bounds.
//! * The writer owns no global state; it is a short-lived object per frame.

use crate::Frame;
use crate::style::{Paint, Palette};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    ClearAll,
    MoveTo(u16, u16),
    SetColor(Color),
    ResetColor,
    Print(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    /// Full repaint of `frame`, leaving the hardware cursor at its cursor slot.
    pub fn from_frame(frame: &Frame, palette: &Palette) -> Self {
        let mut w = Self::new();
        w.push(Command::HideCursor);
        w.push(Command::ClearAll);
        for y in 0..frame.height {
            w.move_to(0, y);
            let mut current: Option<Paint> = None;
            let mut run = String::new();
            for cell in frame.row(y) {
                if current != Some(cell.paint) {
                    w.print(std::mem::take(&mut run));
                    match palette.color(cell.paint) {
                        Some(color) => w.push(Command::SetColor(color)),
                        None => w.push(Command::ResetColor),
                    }
                    current = Some(cell.paint);
                }
                run.push(cell.ch);
            }
            w.print(run.trim_end().to_string());
        }
        w.push(Command::ResetColor);
        if let Some((x, y)) = frame.cursor {
            w.move_to(x, y);
        }
        w.push(Command::ShowCursor);
        w
    }

    pub fn push(&mut self, cmd: Command) {
        self.cmds.push(cmd);
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }

    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::ClearAll => queue!(out, Clear(ClearType::All))?,
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::SetColor(color) => queue!(out, SetForegroundColor(color))?,
                Command::ResetColor => queue!(out, ResetColor)?,
                Command::Print(s) => queue!(out, Print(s))?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ColorSupport;

    #[test]
    fn color_changes_only_at_paint_boundaries() {
        let mut frame = Frame::new(8, 1);
        frame.put_str(0, 0, "ab", Paint::Keyword);
        frame.put_str(2, 0, "cd", Paint::Keyword);
        frame.put_str(4, 0, "e", Paint::Text);
        let w = Writer::from_frame(&frame, &Palette::new(ColorSupport::Basic));
        let sets = w
            .commands()
            .iter()
            .filter(|c| matches!(c, Command::SetColor(_)))
            .count();
        assert_eq!(sets, 1);
        assert!(w.commands().contains(&Command::Print("abcd".into())));
    }

    #[test]
    fn cursor_is_placed_last() {
        let mut frame = Frame::new(4, 2);
        frame.cursor = Some((2, 1));
        let w = Writer::from_frame(&frame, &Palette::new(ColorSupport::Full256));
        let cmds = w.commands();
        assert_eq!(cmds[cmds.len() - 2], Command::MoveTo(2, 1));
        assert_eq!(cmds[cmds.len() - 1], Command::ShowCursor);
    }

    #[test]
    fn flush_emits_ansi_bytes() {
        let mut frame = Frame::new(3, 1);
        frame.put_str(0, 0, "hi", Paint::Text);
        let mut out = Vec::new();
        Writer::from_frame(&frame, &Palette::new(ColorSupport::Basic))
            .flush_to(&mut out)
            .unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("hi"));
        assert!(text.contains("\x1b["));
    }
}
