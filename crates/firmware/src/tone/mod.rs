//! Tone generator drivers
//!
//! - `esp32` - ESP32 SENS/RTC register driver implementing
//!   [`platform::ToneGeneratorPort`]
//! - [`RegisterFile`] - in-memory register bank for host tests (always available)
//! - `MmioRegisters` - volatile access to the real peripheral (`hardware` feature)

pub mod esp32;
mod register_file;

#[cfg(feature = "hardware")]
mod mmio;

#[cfg(feature = "hardware")]
pub use mmio::MmioRegisters;
pub use register_file::{RegisterFile, RegisterWrite};

/// 32-bit memory-mapped register access.
///
/// The driver never dereferences addresses itself; everything goes through
/// this trait so the same driver runs against [`RegisterFile`] on the host.
pub trait RegisterAccess {
    /// Read the register at `address`.
    fn read(&mut self, address: u32) -> u32;

    /// Write `value` to the register at `address`.
    fn write(&mut self, address: u32, value: u32);

    /// Read-modify-write the register at `address`.
    fn modify(&mut self, address: u32, f: impl FnOnce(u32) -> u32) {
        let value = self.read(address);
        self.write(address, f(value));
    }
}

impl<R: RegisterAccess + ?Sized> RegisterAccess for &mut R {
    fn read(&mut self, address: u32) -> u32 {
        (**self).read(address)
    }

    fn write(&mut self, address: u32, value: u32) {
        (**self).write(address, value);
    }
}
