//! Rotation requester
//!
//! Runs the whole ServoStik switch as one linear sequence:
//! find the device, open it, detach any kernel driver, claim interface 0,
//! send the mode command, release the interface.

use crate::error::{RotationError, UsbFailure};
use crate::usb::host::{RusbHost, UsbHandle, UsbHost};
use protocol::{COMMAND_LENGTH, CommandPayload, DeviceIdentity, Mode, SERVOSTIK};
use std::fmt;
use tracing::{debug, info, warn};

/// Result of a rotation request that reached the control transfer
///
/// The command only counts as delivered when every payload byte was
/// written. A short write or a transfer-layer error is a FAILURE outcome,
/// not a [`RotationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub mode: Mode,
    /// Bytes written by the control transfer, or its error
    pub transfer: Result<usize, rusb::Error>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self.transfer, Ok(COMMAND_LENGTH))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "servostik {} -> {}",
            self.mode,
            if self.is_success() { "SUCCESS" } else { "FAILURE" }
        )
    }
}

/// Rotate the joystick using the system libusb
pub fn rotate(mode: Mode) -> Result<Outcome, RotationError> {
    request_rotation(mode, RusbHost::new)
}

/// Rotate the joystick on the host produced by `connect`
///
/// The host, and the device handle once opened, are owned by this call and
/// dropped before it returns on every path.
pub fn request_rotation<H, F>(mode: Mode, connect: F) -> Result<Outcome, RotationError>
where
    H: UsbHost,
    F: FnOnce() -> rusb::Result<H>,
{
    let profile = SERVOSTIK;
    let host = connect().map_err(RotationError::Init)?;

    let device = find_device(&host, profile.identity)?
        .ok_or(RotationError::NotFound(profile.identity))?;
    let mut handle = host.open(&device).map_err(RotationError::Open)?;

    detach_kernel_driver(&mut handle, profile.interface)?;

    let mut claimed =
        ClaimedInterface::claim(&mut handle, profile.interface).map_err(RotationError::Claim)?;

    let payload = CommandPayload::for_mode(mode);
    debug!(
        "Control transfer: request_type={:#x}, request={:#x}, value={:#x}, index={:#x}, data={:02x?}",
        profile.request.request_type,
        profile.request.request,
        profile.request.value,
        profile.request.index,
        payload.as_bytes()
    );

    let transfer = claimed
        .handle()
        .write_control(&profile.request, payload.as_bytes());
    match &transfer {
        Ok(written) if *written == COMMAND_LENGTH => {
            info!("Sent {} command ({} bytes)", mode, written)
        }
        Ok(written) => warn!(
            "Short control transfer: {} of {} bytes written",
            written, COMMAND_LENGTH
        ),
        Err(e) => warn!("Control transfer failed: {}", UsbFailure(*e)),
    }

    let outcome = Outcome { mode, transfer };

    if let Err(error) = claimed.release() {
        return Err(RotationError::Release { outcome, error });
    }

    Ok(outcome)
}

/// Scan the bus for the first device matching `identity`
///
/// A device whose descriptor cannot be read is skipped.
fn find_device<H: UsbHost>(
    host: &H,
    identity: DeviceIdentity,
) -> Result<Option<H::Device>, RotationError> {
    let devices = host.devices().map_err(RotationError::Enumerate)?;
    debug!("Scanning {} devices for {}", devices.len(), identity);

    for device in devices {
        match host.identity(&device) {
            Ok(found) if found == identity => {
                debug!("Found {}", identity);
                return Ok(Some(device));
            }
            Ok(_) => {}
            Err(e) => warn!("{} - trying to proceed...", UsbFailure(e)),
        }
    }

    Ok(None)
}

fn detach_kernel_driver<D: UsbHandle>(handle: &mut D, interface: u8) -> Result<(), RotationError> {
    match handle.kernel_driver_active(interface) {
        Ok(true) => {
            debug!("Detaching kernel driver from interface {}", interface);
            handle
                .detach_kernel_driver(interface)
                .map_err(RotationError::Detach)
        }
        Ok(false) => {
            debug!("No kernel driver active on interface {}", interface);
            Ok(())
        }
        Err(e) => {
            // Platforms without kernel driver support land here
            debug!(
                "Could not check kernel driver status for interface {}: {}",
                interface, e
            );
            Ok(())
        }
    }
}

/// A claimed interface, released on drop unless [`release`] was called
///
/// [`release`]: ClaimedInterface::release
struct ClaimedInterface<'a, D: UsbHandle> {
    handle: &'a mut D,
    interface: u8,
    released: bool,
}

impl<'a, D: UsbHandle> ClaimedInterface<'a, D> {
    fn claim(handle: &'a mut D, interface: u8) -> rusb::Result<Self> {
        handle.claim_interface(interface)?;
        debug!("Claimed interface {}", interface);

        Ok(Self {
            handle,
            interface,
            released: false,
        })
    }

    fn handle(&mut self) -> &mut D {
        &mut *self.handle
    }

    fn release(mut self) -> rusb::Result<()> {
        self.released = true;
        self.handle.release_interface(self.interface)?;
        debug!("Released interface {}", self.interface);
        Ok(())
    }
}

impl<D: UsbHandle> Drop for ClaimedInterface<'_, D> {
    fn drop(&mut self) {
        if !self.released {
            if let Err(e) = self.handle.release_interface(self.interface) {
                warn!("Failed to release interface {}: {}", self.interface, e);
            }
        }
    }
}
