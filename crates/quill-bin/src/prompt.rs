//! Exit-time save confirmation, run after the terminal is restored.

use std::io::{self, BufRead, Write};

pub const SAVE_PROMPT: &str = "Do you want to save this unsaved file (Y/n)";

/// Ask until the answer is exactly `y` or `n`. End of input counts as `n`.
pub fn confirm_save<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<bool> {
    let mut answer = String::new();
    loop {
        writeln!(output, "{SAVE_PROMPT}")?;
        output.flush()?;
        answer.clear();
        if input.read_line(&mut answer)? == 0 {
            tracing::info!(target: "runtime.exit", "prompt_eof_treated_as_no");
            return Ok(false);
        }
        match answer.trim() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            other => tracing::debug!(target: "runtime.exit", answer = other, "prompt_rejected"),
        }
    }
}
