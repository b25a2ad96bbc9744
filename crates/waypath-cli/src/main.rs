//! waypath - route finding over small graphs and grids.

mod cli;
mod commands;
mod logging;
mod output;
mod prompt;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match logging::init(&cli.log_level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {e}");
            None
        }
    };

    match commands::run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
