//! Shell completion generation.

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use toksift::cli::Cli;

/// Write completions for the given shell to stdout.
pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    generate(shell, &mut command, "toksift", &mut io::stdout());
    Ok(())
}
