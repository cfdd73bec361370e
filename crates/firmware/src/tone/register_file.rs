//! In-memory register bank for host-side testing
//!
//! Implements [`RegisterAccess`] over a small map, so register-level
//! behaviour of the drivers can be asserted without hardware.

use heapless::{LinearMap, Vec};

use super::RegisterAccess;

/// Distinct registers the bank can hold.
pub const REGISTER_CAPACITY: usize = 8;

/// Writes kept in the log; later writes still take effect.
pub const WRITE_LOG_CAPACITY: usize = 64;

/// One logged register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWrite {
    /// Register address.
    pub address: u32,
    /// Value written.
    pub value: u32,
}

/// Register bank backed by memory. Unwritten registers read as zero.
#[derive(Debug, Default)]
pub struct RegisterFile {
    registers: LinearMap<u32, u32, REGISTER_CAPACITY>,
    writes: Vec<RegisterWrite, WRITE_LOG_CAPACITY>,
}

impl RegisterFile {
    /// Empty bank (every register reads zero).
    pub fn new() -> Self {
        Self::default()
    }

    /// Bank with `address` preset to `value`, without logging a write.
    pub fn with_register(mut self, address: u32, value: u32) -> Self {
        self.registers.insert(address, value).ok();
        self
    }

    /// Current value at `address`.
    pub fn get(&self, address: u32) -> u32 {
        self.registers.get(&address).copied().unwrap_or(0)
    }

    /// Logged writes, oldest first.
    pub fn writes(&self) -> &[RegisterWrite] {
        &self.writes
    }
}

impl RegisterAccess for RegisterFile {
    fn read(&mut self, address: u32) -> u32 {
        self.get(address)
    }

    fn write(&mut self, address: u32, value: u32) {
        // A full map drops writes to new addresses; the driver uses five.
        self.registers.insert(address, value).ok();
        self.writes.push(RegisterWrite { address, value }).ok();
    }
}
