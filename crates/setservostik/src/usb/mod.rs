//! USB subsystem
//!
//! Locates the ServoStik on the bus and sends it the rotation command.
//!
//! Host access goes through the [`UsbHost`] and [`UsbHandle`] traits so the
//! rotation sequence can run against libusb in production and a simulated
//! host in tests. Dropping a host tears down its USB context and dropping a
//! handle closes the device, so every exit path releases what it acquired.

pub mod host;
#[cfg(test)]
pub(crate) mod mock;
pub mod rotation;

pub use host::{RusbHost, UsbHandle, UsbHost};
pub use rotation::{Outcome, request_rotation, rotate};
