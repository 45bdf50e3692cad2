//! ui::prompts
//!
//! Line-oriented prompts.
//!
//! # Design
//!
//! Prompts read one line at a time from any `BufRead`, so the client works
//! the same against a terminal, a pipe or a script file. The prompt text is
//! only written when `show` is set; quiet sessions read silently. End of
//! input is reported as `None` rather than an error.

use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompt for a line of text.
///
/// Returns the line without its trailing newline, or `None` at end of input.
pub fn input<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
    show: bool,
) -> Result<Option<String>, PromptError> {
    if show {
        write!(writer, "{}", message)?;
        writer.flush()?;
    }

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Parse a count answer.
///
/// Surrounding whitespace is ignored. Returns `None` if the answer is not an
/// integer; sign checks are left to the operation.
pub fn parse_count(answer: &str) -> Option<i64> {
    answer.trim().parse().ok()
}
