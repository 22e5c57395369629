//! Per-line tokenizer / highlighter.
//!
//! `tokenize` is a pure function from one line plus the active settings to an
//! ordered list of styled spans covering the line exactly once, left to right.
//! It never touches the terminal; the renderer maps `Style` to colors.
//!
//! Rules, in evaluation order per byte:
//! 1. Plain mode: every byte is its own `Normal` span.
//! 2. Inside a line comment: the byte extends the comment span.
//! 3. `[A-Za-z0-9_]` accumulate into a pending word.
//! 4. Any other byte (or end of line) flushes the pending word: leading
//!    digit => `Number`; c++-like mode keyword => `Keyword`; else `Normal`.
//! 5. `"` opens a string through the next `"` inclusive, or end of line.
//! 6. A `/` directly after a normal `/` turns both into a line comment.
//! 7. `( ) { } [ ]` => `Bracket`.
//! 8. Anything else => `Normal`.
//!
//! Span shape: words, strings and brackets are always standalone spans.
//! Consecutive normal punctuation/whitespace bytes coalesce into one span, and
//! a comment is a single span running to end of line.

use core_config::{ColorMode, EditorSettings};
use std::ops::Range;

mod cache;
pub use cache::{SpanCache, SpanCacheStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Normal,
    Keyword,
    String,
    Comment,
    Number,
    Bracket,
}

/// A styled run of bytes within one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub style: Style,
}

impl Span {
    pub fn new(range: Range<usize>, style: Style) -> Self {
        Self { range, style }
    }

    /// Slice of `line` covered by this span.
    pub fn text<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        &line[self.range.clone()]
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_bracket(b: u8) -> bool {
    matches!(b, b'(' | b')' | b'{' | b'}' | b'[' | b']')
}

/// Tokenize one line under the given settings.
pub fn tokenize(line: &[u8], settings: &EditorSettings) -> Vec<Span> {
    if settings.color_mode() == ColorMode::Plain {
        return (0..line.len())
            .map(|i| Span::new(i..i + 1, Style::Normal))
            .collect();
    }
    let mut scan = Scan::new(line, settings);
    scan.run();
    scan.spans
}

struct Scan<'a> {
    line: &'a [u8],
    settings: &'a EditorSettings,
    spans: Vec<Span>,
    word_start: Option<usize>,
    in_comment: bool,
    /// Last span is a normal punctuation run that later normal bytes may extend.
    open_normal_run: bool,
    /// Index of the previous byte if it was emitted as a normal `/`.
    normal_slash_at: Option<usize>,
}

impl<'a> Scan<'a> {
    fn new(line: &'a [u8], settings: &'a EditorSettings) -> Self {
        Self {
            line,
            settings,
            spans: Vec::new(),
            word_start: None,
            in_comment: false,
            open_normal_run: false,
            normal_slash_at: None,
        }
    }

    fn run(&mut self) {
        let mut i = 0;
        while i < self.line.len() {
            let c = self.line[i];
            if self.in_comment {
                self.extend_last(i + 1);
                i += 1;
                continue;
            }
            if is_word_byte(c) {
                self.word_start.get_or_insert(i);
                i += 1;
                continue;
            }
            self.flush_word(i);
            match c {
                b'"' => {
                    let end = self.line[i + 1..]
                        .iter()
                        .position(|b| *b == b'"')
                        .map_or(self.line.len(), |p| i + 1 + p + 1);
                    self.push_solid(i..end, Style::String);
                    i = end;
                    continue;
                }
                b'/' if self.normal_slash_at.is_some_and(|at| at + 1 == i) => {
                    self.retract_last_byte();
                    self.push_solid(i - 1..i + 1, Style::Comment);
                    self.in_comment = true;
                }
                b if is_bracket(b) => self.push_solid(i..i + 1, Style::Bracket),
                _ => self.push_normal(i),
            }
            i += 1;
        }
        self.flush_word(self.line.len());
    }

    fn flush_word(&mut self, end: usize) {
        let Some(start) = self.word_start.take() else {
            return;
        };
        let word = &self.line[start..end];
        let style = if word[0].is_ascii_digit() {
            Style::Number
        } else if self.settings.color_mode() == ColorMode::CppLike && self.settings.is_keyword(word)
        {
            Style::Keyword
        } else {
            Style::Normal
        };
        self.push_solid(start..end, style);
    }

    fn push_solid(&mut self, range: Range<usize>, style: Style) {
        self.spans.push(Span::new(range, style));
        self.open_normal_run = false;
        self.normal_slash_at = None;
    }

    fn push_normal(&mut self, i: usize) {
        match self.spans.last_mut() {
            Some(last) if self.open_normal_run && last.range.end == i => last.range.end = i + 1,
            _ => {
                self.spans.push(Span::new(i..i + 1, Style::Normal));
                self.open_normal_run = true;
            }
        }
        self.normal_slash_at = (self.line[i] == b'/').then_some(i);
    }

    fn extend_last(&mut self, end: usize) {
        if let Some(last) = self.spans.last_mut() {
            last.range.end = end;
        }
    }

    /// Give back the trailing byte of the last (normal) span; drops the span
    /// if it becomes empty.
    fn retract_last_byte(&mut self) {
        if let Some(last) = self.spans.last_mut() {
            last.range.end -= 1;
            if last.range.is_empty() {
                self.spans.pop();
            }
        }
    }
}
