//! `bindsheet` - keybinding cheatsheet renderer

use clap::Parser;

use bindsheet::cli::{self, Cli};
use bindsheet::error::ExitCode;
use bindsheet::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match cli::run() {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
