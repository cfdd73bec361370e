//! Volatile access to the ESP32 peripheral registers.

use super::RegisterAccess;

/// Direct memory-mapped register access.
///
/// Only one instance may exist, since the driver performs unsynchronized
/// read-modify-write sequences on shared registers.
pub struct MmioRegisters {
    _private: (),
}

impl MmioRegisters {
    /// Take the register block.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that no other code (including another
    /// `MmioRegisters`, ESP-IDF DAC drivers or the ULP) writes
    /// `SENS_SAR_DAC_CTRL1/2`, `RTC_CNTL_CLK_CONF` or the DAC pad registers
    /// while this value is alive, and that the code runs on an ESP32.
    pub const unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl RegisterAccess for MmioRegisters {
    fn read(&mut self, address: u32) -> u32 {
        // SAFETY: `steal` guarantees exclusive access to the ESP32 register
        // block; addresses come from the register map and are 4-byte aligned.
        unsafe { core::ptr::read_volatile(address as usize as *const u32) }
    }

    fn write(&mut self, address: u32, value: u32) {
        // SAFETY: see `read`.
        unsafe { core::ptr::write_volatile(address as usize as *mut u32, value) }
    }
}
