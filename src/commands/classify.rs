//! Classify subcommand handler.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use toksift::{respond, Config};

/// Classify a JSON request from a file or stdin and print the envelope.
///
/// Decode and shape failures are part of the wire contract and still
/// print a well-formed `is_success: false` envelope with exit code 0;
/// only I/O-level problems (unreadable file, empty terminal) error out.
pub fn handle(file: Option<&Path>, pretty: bool) -> Result<()> {
    let identity = Config::load()?;
    let raw = read_request(file)?;
    debug!(bytes = raw.len(), "read classification request");

    let payload = respond(&identity, &raw);
    if !payload.is_success {
        debug!(
            message = payload.error_message.as_deref().unwrap_or(""),
            "request produced a failure envelope"
        );
    }

    let json = if pretty {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    println!("{}", json);
    Ok(())
}

/// Reads the raw request body from the file argument or stdin.
fn read_request(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display())),
        None => {
            if atty::is(atty::Stream::Stdin) {
                bail!("No input: pass a request file or pipe JSON to stdin");
            }
            let mut raw = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut raw)
                .context("Failed to read request from stdin")?;
            Ok(raw)
        }
    }
}
