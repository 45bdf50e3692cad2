//! cli::repl
//!
//! The interactive client loop.
//!
//! Each iteration lists the repositories, reads an operation line of the
//! form `<operation> <repository>`, and hands it to
//! [`commands::dispatch`]. Unknown operations, and repository names that do
//! not exist (for anything but `create` and `quit`), are rejected and the
//! line is read again. End of input ends the session like `quit`.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context as _, Result};
use tracing::debug;

use super::commands::{self, Flow, Operation};
use crate::core::config::Config;
use crate::core::registry::Registry;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{self, PromptError};

const BANNER: &str = "Welcome to the Mini-Git client!";
const NOT_RECOGNIZED: &str = "  **ERROR**: Operation or repository not recognized.";

/// Run a session on stdin, or on `script` when given.
pub fn run(script: Option<&Path>, config: Config, verbosity: Verbosity) -> Result<()> {
    let stdout = io::stdout();
    match script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script '{}'", path.display()))?;
            Session::new(BufReader::new(file), stdout.lock(), config, verbosity).run()
        }
        None => {
            let stdin = io::stdin();
            Session::new(stdin.lock(), stdout.lock(), config, verbosity).run()
        }
    }
}

/// One client session: its input, output and repositories.
pub struct Session<R, W> {
    reader: R,
    writer: W,
    registry: Registry,
    config: Config,
    verbosity: Verbosity,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with no repositories.
    pub fn new(reader: R, writer: W, config: Config, verbosity: Verbosity) -> Self {
        Self::with_registry(reader, writer, Registry::new(), config, verbosity)
    }

    /// Create a session that continues with existing repositories.
    pub fn with_registry(
        reader: R,
        writer: W,
        registry: Registry,
        config: Config,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            reader,
            writer,
            registry,
            config,
            verbosity,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        if self.config.banner() {
            self.info(BANNER)?;
            self.info("")?;
        }

        loop {
            self.show_menu()?;

            let Some((operation, name)) = self.read_operation()? else {
                debug!("end of input");
                break;
            };

            debug!(operation = %operation, repo = %name, "dispatching");
            let flow = commands::dispatch(self, operation, &name)?;
            self.info("")?;

            if flow == Flow::Quit {
                break;
            }
        }

        self.writer.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// The session's repositories.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Consume the session, returning its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prompt for a line; `None` at end of input.
    pub(crate) fn ask(&mut self, message: &str) -> Result<Option<String>, PromptError> {
        prompts::input(
            &mut self.reader,
            &mut self.writer,
            message,
            self.verbosity.chatty(),
        )
    }

    /// Print an operation result.
    pub(crate) fn say(&mut self, message: impl Display) -> io::Result<()> {
        output::result(&mut self.writer, message)
    }

    /// Write text exactly as given.
    pub(crate) fn say_raw(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    /// Print informational text (suppressed when quiet).
    fn info(&mut self, message: impl Display) -> io::Result<()> {
        output::print(&mut self.writer, message, self.verbosity)
    }

    fn show_menu(&mut self) -> io::Result<()> {
        if self.config.list_repositories() {
            self.info("Available repositories: ")?;
            let described: Vec<_> = self.registry.iter().map(|repo| repo.describe()).collect();
            if !described.is_empty() {
                let listing = output::format_list(&described, "\t");
                self.info(listing)?;
            }
        }

        let names: Vec<_> = Operation::ALL.iter().map(|op| op.as_str()).collect();
        self.info(format!("Operations: [{}]", names.join(", ")))
    }

    /// Read operation lines until one is valid; `None` at end of input.
    fn read_operation(&mut self) -> Result<Option<(Operation, String)>> {
        let prompt = self.config.prompt().to_string();
        loop {
            let Some(line) = self.ask(&prompt)? else {
                return Ok(None);
            };

            let mut words = line.split_whitespace();
            let operation = words.next().and_then(Operation::parse);
            let name = words.next().unwrap_or_default().to_string();

            match operation {
                Some(op) if !op.needs_repository() || self.registry.contains(&name) => {
                    return Ok(Some((op, name)));
                }
                _ => self.say(NOT_RECOGNIZED)?,
            }
        }
    }
}
