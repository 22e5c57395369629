//! Options screen layout.

use crate::Frame;
use crate::style::{ColorSupport, Paint};
use core_config::EditorSettings;

/// Screen lines as (row, text). Rows left out are blank.
pub fn options_lines(settings: &EditorSettings, support: ColorSupport) -> Vec<(u16, String)> {
    let mut lines = vec![
        (0, "Press Esc to exit options".to_string()),
        (
            2,
            "Press = and - to increase and decrease the number of spaces in each tab".to_string(),
        ),
        (
            3,
            format!("Current number of spaces per tab: {}", settings.tab_width()),
        ),
        (
            5,
            "Press + and _ to increase and decrease the number of spaces after each line number"
                .to_string(),
        ),
        (
            6,
            format!(
                "Current number of spaces after line numbers: {}",
                settings.gutter_width()
            ),
        ),
        (
            8,
            format!(
                "Current color mode is \"{}\"",
                settings.color_mode().label()
            ),
        ),
        (9, "Press c to change color mode".to_string()),
    ];
    if let Some(note) = support.note() {
        lines.push((11, note.to_string()));
    }
    lines
}

pub fn build_options_frame(
    settings: &EditorSettings,
    support: ColorSupport,
    w: u16,
    h: u16,
) -> Frame {
    let mut frame = Frame::new(w, h);
    for (row, text) in options_lines(settings, support) {
        frame.put_str(0, row, &text, Paint::Text);
    }
    frame
}
