//! toksift entry point: parse the CLI and dispatch to command handlers.

mod commands;

use clap::Parser;

use toksift::cli::{Cli, Command, ConfigAction};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Classify { file, pretty } => commands::classify::handle(file.as_deref(), pretty),
        Command::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Command::Completions { shell } => commands::completions::handle(shell),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
