//! Hardware Abstraction Layer for the cosine wave generator
//!
//! This crate provides the trait-based boundary between the frequency
//! synthesis model and the SoC peripheral that produces the tone, enabling
//! development and testing without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (cli, ui)
//!         ↓
//! Synthesis model (synthesis crate)
//!         ↓
//! Platform HAL (this crate - trait + domain types)
//!         ↓
//! Register driver (firmware crate)
//! ```
//!
//! # Contents
//!
//! - [`ToneGeneratorPort`] - channel enable/scale/offset/mode and divisor/step latching
//! - [`tone_types`] - `Channel`, `WaveformMode` and range-checked register newtypes
//! - [`config`] - product constants and calibration defaults
//! - `mocks` - recording port for tests (`std` feature or `cfg(test)`)
//!
//! # Features
//!
//! - `std`: Enable standard library support and the mocks (for testing)
//! - `defmt`: Derive `defmt::Format` on all domain types
//! - `serde`: Derive `Serialize`/`Deserialize` on all domain types
//!
//! # Example
//!
//! ```
//! use platform::{Channel, ClockDivisor, FrequencyStep, ToneGeneratorPort};
//!
//! fn start<P: ToneGeneratorPort>(port: &mut P) {
//!     port.latch_divisor_and_step(ClockDivisor::new(0), FrequencyStep::new(8));
//!     port.enable_channel(Channel::Channel2);
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
// Pedantic lints suppressed for this hardware HAL crate:
#![allow(clippy::doc_markdown)] // register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors: callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod mocks;
pub mod tone;
pub mod tone_types;

// Re-export the port trait
pub use tone::ToneGeneratorPort;

// Re-export domain types
pub use tone_types::{
    Channel, ClockDivisor, DcOffset, FrequencyStep, OutOfRangeError, Scale, TolerancePermille,
    WaveformMode,
};

#[cfg(any(test, feature = "std"))]
pub use mocks::{MockToneGenerator, PortCall};
