//! Common utilities for setservostik
//!
//! Shared error type and logging setup used by the command-line tool.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
pub use logging::setup_logging;
