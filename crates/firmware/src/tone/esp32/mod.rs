//! ESP32 built-in DAC cosine-wave generator
//!
//! The driver is generic over [`RegisterAccess`](super::RegisterAccess) and
//! compiles on every target; only `MmioRegisters` is hardware-only.

mod driver;
pub mod registers;

pub use driver::Esp32ToneGenerator;
