//! Top-level action dispatch
//!
//! Turns an [`Invocation`] into console output and a [`Status`]. A rotation
//! that reaches the control transfer yields [`Status::Success`] whether its
//! outcome line reads SUCCESS or FAILURE; only a [`RotationError`] fails.

use crate::cli::{Invocation, banner};
use crate::error::RotationError;
use crate::usb::Outcome;
use protocol::Mode;
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

/// Process exit decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Run the requested action
///
/// `rotate` performs the hardware request. The outcome line goes to `out`
/// and fatal errors go to `err` as `ERROR: <message>`.
pub fn run<R, O, E>(
    invocation: Invocation,
    program: &str,
    rotate: R,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<Status>
where
    R: FnOnce(Mode) -> Result<Outcome, RotationError>,
    O: Write,
    E: Write,
{
    let mode = match invocation {
        Invocation::Banner => {
            write!(out, "{}", banner(program))?;
            return Ok(Status::Success);
        }
        Invocation::Rotate(mode) => mode,
    };

    info!("setservostik v{}", env!("CARGO_PKG_VERSION"));
    info!("Requested mode: {}", mode);

    match rotate(mode) {
        Ok(outcome) => {
            writeln!(out, "{}", outcome)?;
            Ok(Status::Success)
        }
        Err(error) => {
            if let Some(outcome) = error.outcome() {
                writeln!(out, "{}", outcome)?;
                out.flush()?;
            }
            writeln!(err, "ERROR: {}", error)?;
            Ok(Status::Failure)
        }
    }
}
