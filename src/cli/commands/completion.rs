//! completion command - Generate shell completion scripts

use std::io::Write;

use crate::cli::args::{Cli, Shell};
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};

/// Generate shell completion scripts on stdout.
pub fn completion(shell: Shell) -> Result<()> {
    write_completion(shell, &mut std::io::stdout())
}

fn write_completion<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, &name, &mut *out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, &name, &mut *out),
        Shell::Fish => generate(shells::Fish, &mut cmd, &name, &mut *out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, &name, &mut *out),
    }

    out.flush()?;
    Ok(())
}
