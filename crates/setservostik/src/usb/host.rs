//! USB host abstraction
//!
//! Wraps the handful of rusb calls the rotation sequence needs.

use protocol::{ControlRequest, DeviceIdentity};
use rusb::{Context, Device, DeviceHandle, LogLevel, UsbContext};
use tracing::debug;

/// An initialized USB host context
pub trait UsbHost {
    type Device;
    type Handle: UsbHandle;

    /// Snapshot of the devices currently on the bus
    fn devices(&self) -> rusb::Result<Vec<Self::Device>>;

    /// Read a device's vendor/product pair from its descriptor
    fn identity(&self, device: &Self::Device) -> rusb::Result<DeviceIdentity>;

    fn open(&self, device: &Self::Device) -> rusb::Result<Self::Handle>;
}

/// An open device
pub trait UsbHandle {
    fn kernel_driver_active(&self, interface: u8) -> rusb::Result<bool>;

    fn detach_kernel_driver(&mut self, interface: u8) -> rusb::Result<()>;

    fn claim_interface(&mut self, interface: u8) -> rusb::Result<()>;

    fn release_interface(&mut self, interface: u8) -> rusb::Result<()>;

    /// Host-to-device control transfer, returning the bytes written
    fn write_control(&mut self, request: &ControlRequest, data: &[u8]) -> rusb::Result<usize>;
}

/// libusb-backed host
pub struct RusbHost {
    context: Context,
}

impl RusbHost {
    /// Initialize a libusb context with warning-level library logging
    pub fn new() -> rusb::Result<Self> {
        let mut context = Context::new()?;
        context.set_log_level(LogLevel::Warning);
        debug!("libusb context initialized");

        Ok(Self { context })
    }
}

impl UsbHost for RusbHost {
    type Device = Device<Context>;
    type Handle = DeviceHandle<Context>;

    fn devices(&self) -> rusb::Result<Vec<Self::Device>> {
        // Each Device keeps its own reference, so the list can be freed here
        Ok(self.context.devices()?.iter().collect())
    }

    fn identity(&self, device: &Self::Device) -> rusb::Result<DeviceIdentity> {
        let descriptor = device.device_descriptor()?;
        Ok(DeviceIdentity::new(
            descriptor.vendor_id(),
            descriptor.product_id(),
        ))
    }

    fn open(&self, device: &Self::Device) -> rusb::Result<Self::Handle> {
        let handle = device.open()?;
        debug!(
            "Opened device: bus={}, addr={}",
            device.bus_number(),
            device.address()
        );
        Ok(handle)
    }
}

impl UsbHandle for DeviceHandle<Context> {
    fn kernel_driver_active(&self, interface: u8) -> rusb::Result<bool> {
        DeviceHandle::kernel_driver_active(self, interface)
    }

    fn detach_kernel_driver(&mut self, interface: u8) -> rusb::Result<()> {
        DeviceHandle::detach_kernel_driver(self, interface)
    }

    fn claim_interface(&mut self, interface: u8) -> rusb::Result<()> {
        DeviceHandle::claim_interface(self, interface)
    }

    fn release_interface(&mut self, interface: u8) -> rusb::Result<()> {
        DeviceHandle::release_interface(self, interface)
    }

    fn write_control(&mut self, request: &ControlRequest, data: &[u8]) -> rusb::Result<usize> {
        DeviceHandle::write_control(
            self,
            request.request_type,
            request.request,
            request.value,
            request.index,
            data,
            request.timeout,
        )
    }
}
