//! Command application: the dispatcher, file IO glue, the clipboard
//! providers and the options-screen key handling.

pub mod clipboard;
pub mod dispatcher;
pub mod io_ops;
pub mod options;

pub use clipboard::{Clipboard, ClipboardError, NoClipboard, XClip};
pub use core_events::{Action, EditKind, MotionKind};
pub use dispatcher::{DispatchResult, dispatch};
pub use options::{OptionsOutcome, apply_options_key};
