//! CLI argument definitions and the render pipeline.
//!
//! The functional surface is a pure filter: JSON binds on stdin, an HTML
//! document on stdout. Every flag here controls stderr logging only and can
//! never alter the rendered document.

use std::io::{Read, Write};

use clap::{ArgAction, Parser, ValueEnum};

use crate::error::Result;
use crate::model::decode_binds;
use crate::observability::LogFormat;
use crate::render::render_document;

/// Render a keybinding cheatsheet from stdin as static HTML on stdout.
#[derive(Parser, Debug)]
#[command(name = "bindsheet", author, version, about)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", env = "BINDSHEET_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Runs the render pipeline: read all of stdin, decode the bind forest,
/// render the document, write it to stdout.
///
/// Output is only written once the whole forest has decoded; a failure
/// therefore never produces partial HTML.
///
/// # Errors
///
/// Returns [`crate::error::Error::Decode`] if the input does not match the
/// bind record shape, or [`crate::error::Error::Io`] if either stream fails.
pub fn run() -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    tracing::debug!(bytes = input.len(), "read input");

    let binds = decode_binds(&input)?;
    tracing::info!(root_binds = binds.len(), "decoded bind forest");

    let document = render_document(&binds);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
