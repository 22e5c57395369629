//! System clipboard access.
//!
//! The editor shells out to `xclip` on the `clipboard` selection. Every
//! failure surfaces as a `ClipboardError`; callers in the dispatcher log and
//! drop it, so a missing `xclip` simply means paste inserts nothing and copy
//! does nothing.

use std::io::Write;
use std::process::{Command as ProcessCommand, Stdio};

pub type Result<T> = std::result::Result<T, ClipboardError>;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("clipboard provider command failed")]
    CommandFailed,
    #[error("failed to write to clipboard provider's stdin")]
    StdinWriteFailed,
    #[error("no clipboard provider available")]
    Unavailable,
}

pub trait Clipboard {
    fn name(&self) -> &str;
    fn get_contents(&self) -> Result<Vec<u8>>;
    fn set_contents(&self, contents: &[u8]) -> Result<()>;
}

/// Pick a provider for the current session: `xclip` when an X display is
/// present, otherwise the inert provider.
pub fn detect() -> Box<dyn Clipboard> {
    if std::env::var_os("DISPLAY").is_some_and(|d| !d.is_empty()) {
        Box::new(XClip::default())
    } else {
        tracing::debug!(target: "actions.clipboard", "no_display_clipboard_disabled");
        Box::new(NoClipboard)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: &'static str,
    args: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XClip {
    yank: Command,
    paste: Command,
}

impl Default for XClip {
    fn default() -> Self {
        Self {
            yank: Command {
                program: "xclip",
                args: &["-selection", "clipboard"],
            },
            paste: Command {
                program: "xclip",
                args: &["-selection", "clipboard", "-o"],
            },
        }
    }
}

impl Clipboard for XClip {
    fn name(&self) -> &str {
        "xclip"
    }

    fn get_contents(&self) -> Result<Vec<u8>> {
        execute_command(&self.paste, None, true)
    }

    fn set_contents(&self, contents: &[u8]) -> Result<()> {
        execute_command(&self.yank, Some(contents), false).map(|_| ())
    }
}

/// Provider used when no clipboard tool is reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn name(&self) -> &str {
        "none"
    }

    fn get_contents(&self) -> Result<Vec<u8>> {
        Err(ClipboardError::Unavailable)
    }

    fn set_contents(&self, _contents: &[u8]) -> Result<()> {
        Err(ClipboardError::Unavailable)
    }
}

fn execute_command(cmd: &Command, input: Option<&[u8]>, pipe_output: bool) -> Result<Vec<u8>> {
    let stdin = input.map(|_| Stdio::piped()).unwrap_or_else(Stdio::null);
    let stdout = pipe_output.then(Stdio::piped).unwrap_or_else(Stdio::null);

    let mut child = ProcessCommand::new(cmd.program)
        .args(cmd.args)
        .stdin(stdin)
        .stdout(stdout)
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(input) = input {
        let mut stdin = child.stdin.take().ok_or(ClipboardError::StdinWriteFailed)?;
        stdin
            .write_all(input)
            .map_err(|_| ClipboardError::StdinWriteFailed)?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(ClipboardError::CommandFailed);
    }
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clipboard_reports_unavailable() {
        let clip = NoClipboard;
        assert!(matches!(
            clip.get_contents(),
            Err(ClipboardError::Unavailable)
        ));
        assert!(clip.set_contents(b"x").is_err());
        assert_eq!(clip.name(), "none");
    }

    #[test]
    fn xclip_uses_clipboard_selection() {
        let clip = XClip::default();
        assert_eq!(clip.paste.args, &["-selection", "clipboard", "-o"]);
        assert_eq!(clip.yank.args, &["-selection", "clipboard"]);
    }

    #[test]
    fn missing_program_is_an_io_error() {
        let cmd = Command {
            program: "__quill_no_such_clipboard_tool__",
            args: &[],
        };
        assert!(matches!(
            execute_command(&cmd, None, true),
            Err(ClipboardError::Io(_))
        ));
    }
}
