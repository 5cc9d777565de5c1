//! Command-line interface definition.
//!
//! Lives in the library so that `xtask` can generate man pages and
//! completions from the same definition the binary parses with.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Version string: crate version plus build date, with the short git SHA
/// appended on dev builds (the `release` feature drops it).
pub fn version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let build_date = env!("TOKSIFT_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({}, {})", version, sha, build_date),
        None => format!("{} ({})", version, build_date),
    }
}

/// Classify JSON token sequences into a structured response envelope.
#[derive(Debug, Parser)]
#[command(name = "toksift", version = version(), about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a JSON request and print the response envelope
    ///
    /// The request is either `{"data": [...]}` or a bare JSON array.
    /// Bad requests still produce a well-formed envelope with
    /// `is_success: false` and an error message.
    Classify {
        /// Path to a JSON request file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Pretty-print the JSON envelope
        #[arg(long)]
        pretty: bool,
    },

    /// Manage the responder identity configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show current configuration as TOML
    Show,
    /// Open the configuration file in the default editor
    Edit,
    /// Print the configuration file path
    Path,
}
