//! Paint classes and the terminal palette.
//!
//! The frame stores a `Paint` per cell; colors are only resolved at emission
//! time so frames stay comparable in tests independent of the terminal.
//! `None` from `Palette::color` means the terminal's default foreground.

use core_syntax::Style;
use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    #[default]
    Text,
    LineNumber,
    Keyword,
    String,
    Comment,
    Number,
    Bracket,
    Saved,
    Error,
}

impl From<Style> for Paint {
    fn from(style: Style) -> Self {
        match style {
            Style::Normal => Paint::Text,
            Style::Keyword => Paint::Keyword,
            Style::String => Paint::String,
            Style::Comment => Paint::Comment,
            Style::Number => Paint::Number,
            Style::Bracket => Paint::Bracket,
        }
    }
}

/// Color support level of the attached terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSupport {
    None,
    Basic,
    Full256,
}

impl ColorSupport {
    pub fn from_color_count(count: u16) -> Self {
        match count {
            0..=1 => ColorSupport::None,
            2..=255 => ColorSupport::Basic,
            _ => ColorSupport::Full256,
        }
    }

    /// Note shown on the options screen; `None` when all colors are available.
    pub fn note(self) -> Option<&'static str> {
        match self {
            ColorSupport::None => Some("Your terminal does not support color"),
            ColorSupport::Basic => Some("Your terminal does not support all 256 colors"),
            ColorSupport::Full256 => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    support: ColorSupport,
}

impl Palette {
    pub fn new(support: ColorSupport) -> Self {
        Self { support }
    }

    pub fn support(&self) -> ColorSupport {
        self.support
    }

    pub fn color(&self, paint: Paint) -> Option<Color> {
        if self.support == ColorSupport::None {
            return None;
        }
        match paint {
            Paint::Text => None,
            Paint::LineNumber => Some(Color::Cyan),
            Paint::Keyword => Some(Color::Yellow),
            Paint::String => Some(Color::Green),
            Paint::Bracket => Some(Color::Magenta),
            Paint::Comment if self.support == ColorSupport::Full256 => {
                Some(Color::AnsiValue(230))
            }
            Paint::Comment => Some(Color::Cyan),
            Paint::Number | Paint::Saved => Some(Color::Blue),
            Paint::Error => Some(Color::Red),
        }
    }
}
