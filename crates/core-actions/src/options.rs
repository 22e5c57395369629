//! Key handling for the options screen.
//!
//! | byte | effect                         |
//! |------|--------------------------------|
//! | `=`  | tab width + 1                  |
//! | `-`  | tab width - 1 (not below 0)    |
//! | `+`  | gutter + 1                     |
//! | `_`  | gutter - 1 (not below floor)   |
//! | `c`  | cycle color mode               |
//! | ESC  | leave, reset keywords for mode |
//!
//! Every other byte is ignored and the screen stays open.

use core_config::EditorSettings;
use core_events::keys::ESC;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsOutcome {
    Stay,
    Leave,
}

pub fn apply_options_key(byte: u8, settings: &mut EditorSettings) -> OptionsOutcome {
    match byte {
        b'=' => settings.increase_tab_width(),
        b'-' => settings.decrease_tab_width(),
        b'+' => settings.increase_gutter(),
        b'_' => settings.decrease_gutter(),
        b'c' => settings.cycle_color_mode(),
        ESC => {
            settings.reset_keywords_for_mode();
            tracing::debug!(target: "actions.options", mode=?settings.color_mode(), tab_width=settings.tab_width(), gutter_width=settings.gutter_width(), "options_closed");
            return OptionsOutcome::Leave;
        }
        _ => {}
    }
    OptionsOutcome::Stay
}
