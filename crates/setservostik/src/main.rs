//! setservostik
//!
//! Rotates an Ultimarc ServoStik joystick to 4-way or 8-way.

use anyhow::{Context, Result};
use clap::Parser;
use common::setup_logging;
use setservostik::app::{self, Status};
use setservostik::cli::Args;
use setservostik::rotate;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Status> {
    setup_logging(&args.log_level).context("Failed to setup logging")?;

    let status = app::run(
        args.invocation(),
        &program_name(),
        rotate,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
    .context("Failed to write output")?;

    Ok(status)
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| "setservostik".to_string())
}
