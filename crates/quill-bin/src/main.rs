//! Quill entrypoint.
use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use core_actions::io_ops::{WriteFileResult, write_file};
use core_config::load_from;
use core_input::StdinSource;
use core_render::{ColorSupport, Palette};
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalCapabilities};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

mod app;
mod prompt;

use app::{ExitReason, Session};

const LOG_FILE: &str = "quill.log";
const USAGE_ERROR: &str = "There should be ONE argument (the name of the file to edit)";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Quill terminal text editor")]
struct Args {
    /// File to edit. Missing files start empty and are created on save.
    paths: Vec<PathBuf>,
    /// Optional configuration file path (overrides discovery of `quill.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
}

impl Args {
    /// The one file to edit, or `None` when the positional count is wrong.
    fn single_path(&self) -> Option<&Path> {
        match self.paths.as_slice() {
            [path] => Some(path),
            _ => None,
        }
    }
}

/// Clap errors that are not ordinary `--help` / `--version` output collapse
/// into the single usage message.
fn is_usage_error(err: &clap::Error) -> bool {
    !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; dropping the guard shuts the writer down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            core_terminal::restore();
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn run(path: &Path, config: Option<PathBuf>) -> Result<()> {
    let settings = load_from(config)?.settings();
    let state = EditorState::open(path);
    let caps = TerminalCapabilities::detect();
    let palette = Palette::new(ColorSupport::from_color_count(caps.color_count));
    let mut session = Session::new(state, settings, palette, core_actions::clipboard::detect());

    let mut backend = CrosstermBackend::new();
    let outcome = {
        let mut guard = backend.enter_guard()?;
        guard.set_title(&format!("quill - {}", path.display()))?;
        let mut out = io::stdout();
        let mut source = StdinSource::new();
        session.run(&mut source, &mut out, || guard.size())
    };
    let stdin = io::stdin();
    finish(outcome, &mut session.state, stdin.lock(), io::stdout())
}

/// Post-loop shutdown with the terminal already restored. Unsaved work is
/// offered for saving even when the loop itself failed; that failure is
/// returned afterwards.
fn finish<R: BufRead, W: Write>(
    outcome: Result<ExitReason>,
    state: &mut EditorState,
    input: R,
    output: W,
) -> Result<()> {
    match &outcome {
        Ok(reason) => info!(target: "runtime", ?reason, saved = state.is_saved(), "editor_loop_finished"),
        Err(e) => error!(target: "runtime", error = %e, saved = state.is_saved(), "editor_loop_failed"),
    }

    if !state.is_saved() {
        let yes = prompt::confirm_save(input, output)?;
        if yes && let WriteFileResult::Error(e) = write_file(state) {
            error!(target: "runtime.exit", error = %e, "exit_save_failed");
            let mut err = io::stderr();
            writeln!(err, "{e}")?;
        }
    }
    outcome.map(|_| ())
}

fn main() -> Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !is_usage_error(&e) => e.exit(),
        Err(_) => {
            println!("{USAGE_ERROR}");
            return Ok(ExitCode::from(1));
        }
    };
    let Some(path) = args.single_path() else {
        println!("{USAGE_ERROR}");
        return Ok(ExitCode::from(1));
    };
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", file = %path.display(), "startup");
    run(path, args.config.clone())?;
    info!(target: "runtime", "shutdown");
    Ok(ExitCode::SUCCESS)
}
