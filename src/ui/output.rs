//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag. Session
//! output goes to a caller-supplied writer so the REPL can run against any
//! stream. Operation results are always shown; banners, menus and prompts
//! are suppressed in quiet mode.

use std::fmt::Display;
use std::io::{self, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - results only
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Whether informational output (banners, menus, prompts) is shown.
    pub fn chatty(self) -> bool {
        self != Verbosity::Quiet
    }
}

/// Print an informational line (respects quiet mode).
pub fn print(out: &mut impl Write, message: impl Display, verbosity: Verbosity) -> io::Result<()> {
    if verbosity.chatty() {
        writeln!(out, "{}", message)?;
    }
    Ok(())
}

/// Print the result of an operation (always shown).
pub fn result(out: &mut impl Write, message: impl Display) -> io::Result<()> {
    writeln!(out, "{}", message)
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn quiet_suppresses_print_not_result() {
        let mut out = Vec::new();
        print(&mut out, "menu", Verbosity::Quiet).unwrap();
        result(&mut out, "answer").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "answer\n");
    }

    #[test]
    fn format_list_prefixes_each_item() {
        assert_eq!(format_list(&["a", "b"], "\t"), "\ta\n\tb");
        assert_eq!(format_list::<&str>(&[], "\t"), "");
    }
}
