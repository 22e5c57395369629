//! Runtime editor settings and the options operations that mutate them.
//!
//! `EditorSettings` is owned by the main loop and handed by reference to the
//! dispatcher, tokenizer and renderer. Fields are private: the only mutators
//! are the options operations below, each of which bumps `revision` so span
//! caches can tell when highlighting inputs changed.

use serde::Deserialize;

/// Default tab width (spaces inserted per Tab).
pub const DEFAULT_TAB_WIDTH: usize = 4;
/// Smallest allowed gutter width; also the default.
pub const GUTTER_FLOOR: usize = 5;

/// Keywords highlighted in c++-like mode unless the config overrides them.
pub const CPP_KEYWORDS: &[&str] = &[
    "int", "void", "if", "else", "return", "while", "for", "class", "struct", "do", "unsigned",
    "signed", "bool", "char", "continue", "break", "true", "false", "include", "define",
    "namespace", "using",
];

/// Highlighting profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum ColorMode {
    /// No highlighting at all.
    #[serde(rename = "plain")]
    Plain,
    /// Numbers, strings, comments, brackets and keywords.
    #[default]
    #[serde(rename = "cpp")]
    CppLike,
    /// Like `CppLike` without keyword coloring.
    #[serde(rename = "programming")]
    GenericProgramming,
}

impl ColorMode {
    /// Label shown on the options screen.
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Plain => "plain text",
            ColorMode::CppLike => "c++",
            ColorMode::GenericProgramming => "programming",
        }
    }

    /// Cycle order used by the options screen: plain -> c++ -> programming -> plain.
    pub fn next(self) -> Self {
        match self {
            ColorMode::Plain => ColorMode::CppLike,
            ColorMode::CppLike => ColorMode::GenericProgramming,
            ColorMode::GenericProgramming => ColorMode::Plain,
        }
    }

    /// Per-mode default keyword table. Only c++-like mode has keywords; the
    /// other modes restore to an empty set.
    pub fn default_keywords(self) -> &'static [&'static str] {
        match self {
            ColorMode::CppLike => CPP_KEYWORDS,
            ColorMode::Plain | ColorMode::GenericProgramming => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSettings {
    tab_width: usize,
    gutter_width: usize,
    color_mode: ColorMode,
    keywords: Vec<String>,
    /// Keyword table restored when leaving options in c++-like mode.
    cpp_keywords: Vec<String>,
    revision: u64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_WIDTH, GUTTER_FLOOR, ColorMode::default())
    }
}

impl EditorSettings {
    /// Build settings; `gutter_width` is raised to the floor if needed and the
    /// active keyword set starts as the mode's default table.
    pub fn new(tab_width: usize, gutter_width: usize, color_mode: ColorMode) -> Self {
        let cpp_keywords: Vec<String> = CPP_KEYWORDS.iter().map(|k| k.to_string()).collect();
        let mut settings = Self {
            tab_width,
            gutter_width: gutter_width.max(GUTTER_FLOOR),
            color_mode,
            keywords: Vec::new(),
            cpp_keywords,
            revision: 0,
        };
        settings.reset_keywords_for_mode();
        settings.revision = 0;
        settings
    }

    /// Replace the c++-like keyword table (config override) and re-apply it
    /// if c++-like mode is active.
    pub fn with_cpp_keywords(mut self, keywords: Vec<String>) -> Self {
        self.cpp_keywords = keywords;
        self.reset_keywords_for_mode();
        self
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }
    pub fn gutter_width(&self) -> usize {
        self.gutter_width
    }
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
    /// Monotonic counter bumped by every options operation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_keyword(&self, word: &[u8]) -> bool {
        self.keywords.iter().any(|k| k.as_bytes() == word)
    }

    // ---- options operations -------------------------------------------------

    pub fn increase_tab_width(&mut self) {
        self.tab_width += 1;
        self.touch("tab_width");
    }

    /// Decrease tab width; stays at 0 once there.
    pub fn decrease_tab_width(&mut self) {
        if self.tab_width > 0 {
            self.tab_width -= 1;
            self.touch("tab_width");
        }
    }

    pub fn increase_gutter(&mut self) {
        self.gutter_width += 1;
        self.touch("gutter_width");
    }

    /// Decrease gutter width; never below `GUTTER_FLOOR`.
    pub fn decrease_gutter(&mut self) {
        if self.gutter_width > GUTTER_FLOOR {
            self.gutter_width -= 1;
            self.touch("gutter_width");
        }
    }

    pub fn cycle_color_mode(&mut self) {
        self.color_mode = self.color_mode.next();
        self.touch("color_mode");
    }

    /// Restore the keyword set for the current mode (applied when the options
    /// screen closes).
    pub fn reset_keywords_for_mode(&mut self) {
        self.keywords = match self.color_mode {
            ColorMode::CppLike => self.cpp_keywords.clone(),
            mode => mode.default_keywords().iter().map(|k| k.to_string()).collect(),
        };
        self.touch("keywords");
    }

    fn touch(&mut self, field: &'static str) {
        self.revision += 1;
        tracing::debug!(
            target: "config.options",
            field,
            tab_width = self.tab_width,
            gutter_width = self.gutter_width,
            color_mode = self.color_mode.label(),
            revision = self.revision,
            "settings_changed"
        );
    }
}
