//! ServoStik vendor protocol
//!
//! This crate defines the fixed contract between the host and an Ultimarc
//! ServoStik joystick: which USB device to talk to, the restrictor modes it
//! understands, and the single control request that switches between them.
//! It performs no USB I/O itself.
//!
//! # Example
//!
//! ```
//! use protocol::{CommandPayload, Mode, SERVOSTIK};
//!
//! let mode = Mode::from_way(4);
//! assert_eq!(mode, Mode::FourWay);
//!
//! let payload = CommandPayload::for_mode(mode);
//! assert_eq!(payload.as_bytes(), &[0x00, 0x00, 0x00, 0x00]);
//! assert_eq!(SERVOSTIK.identity.to_string(), "0xd209:0x1700");
//! ```

pub mod command;
pub mod types;

pub use command::{COMMAND_LENGTH, CommandPayload, ControlRequest, SERVOSTIK, ServoStik};
pub use types::{DeviceIdentity, Mode};
