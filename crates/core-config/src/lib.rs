//! Configuration loading and parsing.
//!
//! Parses `quill.toml` (or an override path provided by the binary) into the
//! startup `EditorSettings`:
//!
//! ```toml
//! [editor]
//! tab_width = 4
//! gutter_width = 5
//! color_mode = "cpp"      # "plain" | "cpp" | "programming"
//! keywords = ["int", "if"] # optional: replaces the c++-like keyword table
//! ```
//!
//! Missing files yield defaults. Parse errors also yield defaults, with a
//! warning on the `config` target. Unknown fields are ignored.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

mod settings;
pub use settings::{CPP_KEYWORDS, ColorMode, DEFAULT_TAB_WIDTH, EditorSettings, GUTTER_FLOOR};

const CONFIG_FILE_NAME: &str = "quill.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct EditorSection {
    #[serde(default = "EditorSection::default_tab_width")]
    pub tab_width: usize,
    #[serde(default = "EditorSection::default_gutter_width")]
    pub gutter_width: usize,
    #[serde(default)]
    pub color_mode: ColorMode,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl Default for EditorSection {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
            gutter_width: Self::default_gutter_width(),
            color_mode: ColorMode::default(),
            keywords: None,
        }
    }
}

impl EditorSection {
    const fn default_tab_width() -> usize {
        DEFAULT_TAB_WIDTH
    }
    const fn default_gutter_width() -> usize {
        GUTTER_FLOOR
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorSection,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Config path: `quill.toml` in the working directory, else the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("quill").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            raw: Some(content),
            file,
        }),
        Err(e) => {
            warn!(target: "config", path=%path.display(), error=%e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Build the startup settings. Gutter values below the floor are clamped.
    pub fn settings(&self) -> EditorSettings {
        let editor = &self.file.editor;
        if editor.gutter_width < GUTTER_FLOOR {
            info!(
                target: "config",
                raw = editor.gutter_width,
                clamped = GUTTER_FLOOR,
                "gutter_width_clamped"
            );
        }
        let settings =
            EditorSettings::new(editor.tab_width, editor.gutter_width, editor.color_mode);
        match &editor.keywords {
            Some(keywords) => settings.with_cpp_keywords(keywords.clone()),
            None => settings,
        }
    }
}
