#![forbid(unsafe_code)]

mod cli;
mod command_dump;
mod command_get;
mod command_keys;
mod command_set;
mod config;
mod error;
mod loader;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::cli::CliAppError;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            match err {
                CliAppError::Usage(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}
