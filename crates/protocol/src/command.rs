//! ServoStik control request definitions
//!
//! The joystick firmware accepts a class-specific SET_REPORT style control
//! request on interface 0 whose 4-byte body carries the mode in its last byte.

use crate::types::{DeviceIdentity, Mode};
use std::time::Duration;

/// Length of the mode command body in bytes
pub const COMMAND_LENGTH: usize = 4;

/// The 4-byte mode command sent to the joystick
///
/// All bytes are zero except the last, which is 1 for 8-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandPayload([u8; COMMAND_LENGTH]);

impl CommandPayload {
    pub fn for_mode(mode: Mode) -> Self {
        let mut bytes = [0u8; COMMAND_LENGTH];
        if mode == Mode::EightWay {
            bytes[COMMAND_LENGTH - 1] = 0x01;
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; COMMAND_LENGTH] {
        &self.0
    }
}

/// Setup fields of a host-to-device control request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRequest {
    /// bmRequestType
    pub request_type: u8,
    /// bRequest
    pub request: u8,
    /// wValue
    pub value: u16,
    /// wIndex
    pub index: u16,
    /// Transfer timeout
    pub timeout: Duration,
}

/// Fixed hardware profile of the ServoStik
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServoStik {
    pub identity: DeviceIdentity,
    /// Interface the mode request is addressed to
    pub interface: u8,
    pub request: ControlRequest,
}

pub const SERVOSTIK: ServoStik = ServoStik {
    identity: DeviceIdentity::new(0xD209, 0x1700),
    interface: 0,
    request: ControlRequest {
        // class request, interface recipient, host-to-device
        request_type: 0x21,
        request: 9,
        value: 0x0200,
        index: 0,
        timeout: Duration::from_millis(2000),
    },
};
