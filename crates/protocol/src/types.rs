//! Device identity and restrictor mode types

use std::fmt;

/// USB vendor/product pair identifying a class of hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceIdentity {
    /// USB Vendor ID
    pub vendor_id: u16,
    /// USB Product ID
    pub product_id: u16,
}

impl DeviceIdentity {
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}:{:#x}", self.vendor_id, self.product_id)
    }
}

/// Restrictor rotation mode
///
/// The joystick gate is either rotated to the diagonal-blocking 4-way
/// position or left open for 8-way play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    FourWay,
    #[default]
    EightWay,
}

impl Mode {
    /// Collapse a requested way count into a mode
    ///
    /// Values strictly between 0 and 5 select 4-way. Everything else,
    /// including 0, negatives and 5, selects 8-way.
    pub fn from_way(way: i64) -> Self {
        if way > 0 && way < 5 {
            Mode::FourWay
        } else {
            Mode::EightWay
        }
    }

    /// Number of directions this mode allows (4 or 8)
    pub fn ways(self) -> u8 {
        match self {
            Mode::FourWay => 4,
            Mode::EightWay => 8,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-way", self.ways())
    }
}
