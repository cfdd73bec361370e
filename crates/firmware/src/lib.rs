//! Cosine Wave Generator Firmware
//!
//! Register-level drivers for the ESP32 built-in DAC cosine-wave generator.
//!
//! # Architecture
//!
//! This crate sits at the bottom of the layered architecture:
//!
//! ```text
//! Application Layer (ui, cli)
//!         ↓
//! Synthesis model (FrequencySynthesisModel)
//!         ↓
//! Platform HAL (ToneGeneratorPort)
//!         ↓
//! Register drivers (this crate)
//! ```
//!
//! # Features
//!
//! - `hardware` - Build for the ESP32 (volatile MMIO, defmt)
//! - `std` - Enable standard library (for testing)
//!
//! # Example
//!
//! ```
//! use firmware::tone::{esp32::Esp32ToneGenerator, RegisterFile};
//! use platform::{Channel, ToneGeneratorPort};
//!
//! let mut cw = Esp32ToneGenerator::new(RegisterFile::new());
//! cw.enable_channel(Channel::Channel1);
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Upgrade relevant warns to deny; keep pedantic as warn (too noisy for firmware)
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
// unsafe fn body is not implicitly unsafe block
// Logging discipline
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
#![warn(clippy::dbg_macro)] // dbg! should not be left in committed code
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)] // common in Rust crates; not a real issue
// Pedantic lints too noisy for register code:
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

pub mod tone;

// Re-export key types
pub use tone::esp32::Esp32ToneGenerator;
#[cfg(feature = "hardware")]
pub use tone::MmioRegisters;
pub use tone::{RegisterAccess, RegisterFile};
