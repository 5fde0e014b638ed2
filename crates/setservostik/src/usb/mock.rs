//! Simulated USB host for tests
//!
//! Every device carries the result each USB call should return. A shared
//! [`Trace`] records what the code under test did, including the order in
//! which interface, handle and context were released.

use crate::usb::host::{UsbHandle, UsbHost};
use protocol::{ControlRequest, DeviceIdentity};
use std::cell::RefCell;
use std::rc::Rc;

/// A resource release observed by the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Interface(u8),
    Handle,
    Context,
}

#[derive(Debug, Default)]
pub struct Trace {
    /// Indices of devices whose descriptor was read, in order
    pub descriptors_read: Vec<usize>,
    /// Indices of devices that were opened
    pub opened: Vec<usize>,
    pub detached: Vec<u8>,
    pub claimed: Vec<u8>,
    /// Calls to release_interface, successful or not
    pub release_attempts: usize,
    pub transfers: Vec<(ControlRequest, Vec<u8>)>,
    pub releases: Vec<Release>,
}

impl Trace {
    pub fn count(&self, release: Release) -> usize {
        self.releases.iter().filter(|r| **r == release).count()
    }
}

/// Scripted behavior of one simulated device
#[derive(Debug, Clone)]
pub struct MockDevice {
    descriptor: rusb::Result<DeviceIdentity>,
    open: rusb::Result<()>,
    kernel_driver: rusb::Result<bool>,
    detach: rusb::Result<()>,
    claim: rusb::Result<()>,
    release: rusb::Result<()>,
    transfer: Option<rusb::Result<usize>>,
}

impl MockDevice {
    /// A well-behaved device that accepts the full command
    pub fn new(identity: DeviceIdentity) -> Self {
        Self {
            descriptor: Ok(identity),
            open: Ok(()),
            kernel_driver: Ok(false),
            detach: Ok(()),
            claim: Ok(()),
            release: Ok(()),
            transfer: None,
        }
    }

    pub fn with_descriptor_error(mut self, error: rusb::Error) -> Self {
        self.descriptor = Err(error);
        self
    }

    pub fn with_open(mut self, result: rusb::Result<()>) -> Self {
        self.open = result;
        self
    }

    pub fn with_kernel_driver(mut self, result: rusb::Result<bool>) -> Self {
        self.kernel_driver = result;
        self
    }

    pub fn with_detach(mut self, result: rusb::Result<()>) -> Self {
        self.detach = result;
        self
    }

    pub fn with_claim(mut self, result: rusb::Result<()>) -> Self {
        self.claim = result;
        self
    }

    pub fn with_release(mut self, result: rusb::Result<()>) -> Self {
        self.release = result;
        self
    }

    /// Override the transfer result (default: all bytes written)
    pub fn with_transfer(mut self, result: rusb::Result<usize>) -> Self {
        self.transfer = Some(result);
        self
    }
}

pub struct MockHost {
    devices: Vec<MockDevice>,
    list_error: Option<rusb::Error>,
    trace: Rc<RefCell<Trace>>,
}

impl MockHost {
    pub fn new(devices: Vec<MockDevice>) -> (Self, Rc<RefCell<Trace>>) {
        let trace = Rc::new(RefCell::new(Trace::default()));
        let host = Self {
            devices,
            list_error: None,
            trace: Rc::clone(&trace),
        };
        (host, trace)
    }

    pub fn with_list_error(mut self, error: rusb::Error) -> Self {
        self.list_error = Some(error);
        self
    }
}

impl Drop for MockHost {
    fn drop(&mut self) {
        self.trace.borrow_mut().releases.push(Release::Context);
    }
}

impl UsbHost for MockHost {
    type Device = (usize, MockDevice);
    type Handle = MockHandle;

    fn devices(&self) -> rusb::Result<Vec<Self::Device>> {
        if let Some(error) = self.list_error {
            return Err(error);
        }
        Ok(self.devices.iter().cloned().enumerate().collect())
    }

    fn identity(&self, (index, device): &Self::Device) -> rusb::Result<DeviceIdentity> {
        self.trace.borrow_mut().descriptors_read.push(*index);
        device.descriptor
    }

    fn open(&self, (index, device): &Self::Device) -> rusb::Result<Self::Handle> {
        device.open?;
        self.trace.borrow_mut().opened.push(*index);
        Ok(MockHandle {
            device: device.clone(),
            trace: Rc::clone(&self.trace),
        })
    }
}

pub struct MockHandle {
    device: MockDevice,
    trace: Rc<RefCell<Trace>>,
}

impl Drop for MockHandle {
    fn drop(&mut self) {
        self.trace.borrow_mut().releases.push(Release::Handle);
    }
}

impl UsbHandle for MockHandle {
    fn kernel_driver_active(&self, _interface: u8) -> rusb::Result<bool> {
        self.device.kernel_driver
    }

    fn detach_kernel_driver(&mut self, interface: u8) -> rusb::Result<()> {
        self.device.detach?;
        self.trace.borrow_mut().detached.push(interface);
        Ok(())
    }

    fn claim_interface(&mut self, interface: u8) -> rusb::Result<()> {
        self.device.claim?;
        self.trace.borrow_mut().claimed.push(interface);
        Ok(())
    }

    fn release_interface(&mut self, interface: u8) -> rusb::Result<()> {
        let mut trace = self.trace.borrow_mut();
        trace.release_attempts += 1;
        self.device.release?;
        trace.releases.push(Release::Interface(interface));
        Ok(())
    }

    fn write_control(&mut self, request: &ControlRequest, data: &[u8]) -> rusb::Result<usize> {
        self.trace
            .borrow_mut()
            .transfers
            .push((*request, data.to_vec()));
        self.device.transfer.unwrap_or(Ok(data.len()))
    }
}
