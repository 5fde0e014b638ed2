//! Rotation error types

use crate::usb::Outcome;
use protocol::DeviceIdentity;
use std::fmt;
use thiserror::Error;

/// Fatal conditions that abort a rotation request
///
/// A transfer that moves fewer bytes than the command, or fails at the
/// transfer layer, is not an error here: it is reported through
/// [`Outcome`].
#[derive(Debug, Error)]
pub enum RotationError {
    #[error("{}", usb(.0))]
    Init(rusb::Error),

    #[error("{}", usb(.0))]
    Enumerate(rusb::Error),

    #[error("{0} device not found")]
    NotFound(DeviceIdentity),

    #[error("{}", usb(.0))]
    Open(rusb::Error),

    #[error("{}", usb(.0))]
    Detach(rusb::Error),

    #[error("{}", usb(.0))]
    Claim(rusb::Error),

    /// Releasing the interface failed after the command was sent
    #[error("{}", usb(.error))]
    Release { outcome: Outcome, error: rusb::Error },
}

impl RotationError {
    /// Transfer outcome, if the command reached the device before failing
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            RotationError::Release { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    /// Underlying USB error, if any
    pub fn usb_error(&self) -> Option<rusb::Error> {
        match self {
            RotationError::Init(e)
            | RotationError::Enumerate(e)
            | RotationError::Open(e)
            | RotationError::Detach(e)
            | RotationError::Claim(e)
            | RotationError::Release { error: e, .. } => Some(*e),
            RotationError::NotFound(_) => None,
        }
    }
}

fn usb(error: &rusb::Error) -> UsbFailure {
    UsbFailure(*error)
}

/// Renders a USB error as `LIBUSB_ERROR_<NAME> - <description>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbFailure(pub rusb::Error);

impl fmt::Display for UsbFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", error_name(self.0), self.0)
    }
}

/// libusb symbolic name for an error
pub fn error_name(error: rusb::Error) -> &'static str {
    match error {
        rusb::Error::Io => "LIBUSB_ERROR_IO",
        rusb::Error::InvalidParam => "LIBUSB_ERROR_INVALID_PARAM",
        rusb::Error::Access => "LIBUSB_ERROR_ACCESS",
        rusb::Error::NoDevice => "LIBUSB_ERROR_NO_DEVICE",
        rusb::Error::NotFound => "LIBUSB_ERROR_NOT_FOUND",
        rusb::Error::Busy => "LIBUSB_ERROR_BUSY",
        rusb::Error::Timeout => "LIBUSB_ERROR_TIMEOUT",
        rusb::Error::Overflow => "LIBUSB_ERROR_OVERFLOW",
        rusb::Error::Pipe => "LIBUSB_ERROR_PIPE",
        rusb::Error::Interrupted => "LIBUSB_ERROR_INTERRUPTED",
        rusb::Error::NoMem => "LIBUSB_ERROR_NO_MEM",
        rusb::Error::NotSupported => "LIBUSB_ERROR_NOT_SUPPORTED",
        _ => "LIBUSB_ERROR_OTHER",
    }
}
