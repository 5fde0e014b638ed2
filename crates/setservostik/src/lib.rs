//! setservostik
//!
//! Switches an Ultimarc ServoStik joystick between 4-way and 8-way
//! restrictor positions with a single USB control transfer.

pub mod app;
pub mod cli;
pub mod error;
pub mod usb;

pub use error::{RotationError, UsbFailure};
pub use usb::{Outcome, request_rotation, rotate};
