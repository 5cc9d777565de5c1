//! Repository task runner: distribution artifacts built from the CLI
//! definition in the main crate.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use toksift::cli::Cli as ToksiftCli;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Repository tasks for toksift")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Generate the man page
    Man {
        /// Output directory for the generated page
        #[arg(long, default_value = "target/dist")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let xtask = Xtask::parse();

    match xtask.command {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

fn generate_man(out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output dir: {}", out_dir.display()))?;

    let command = ToksiftCli::command();
    let man = clap_mangen::Man::new(command);
    let mut buffer = Vec::new();
    man.render(&mut buffer).context("Failed to render man page")?;

    let path = out_dir.join("toksift.1");
    fs::write(&path, buffer)
        .with_context(|| format!("Failed to write man page: {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
