//! `qngng` entry point.
//!
//! Parsing, validation and generation live in `qngng::cli` so they can be
//! tested without spawning a process; this binary only wires them to the
//! terminal.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use qngng::QngngSettings;
use qngng::cli::{Cli, RunError, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match try_main(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), RunError> {
    let settings = QngngSettings::load_ambient().map_err(RunError::Settings)?;
    let request = cli.resolve(&settings)?;
    run(&request, &mut io::stdout().lock())
}
