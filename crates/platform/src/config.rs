//! Application configuration and constants
//!
//! Central configuration values used across the workspace. Tools and UI code
//! should reference these constants rather than hardcoding values.
//!
//! # Output frequency
//!
//! ```text
//! f = RTC_CLOCK / (1 + CK8M_DIV_SEL) × SW_FSTEP / 65536
//!   = f0 × step / (1 + divisor)          with f0 = RTC_CLOCK / 65536
//! ```
//!
//! The RTC 8 MHz oscillator is an RC oscillator with a wide tolerance, so f0
//! is measured on the bench (divisor = 0, step = 1) and entered by hand.

use crate::tone_types::Channel;

/// The application name
pub const APP_NAME: &str = "Cosine Wave Generator";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Full application title
pub const fn app_title() -> &'static str {
    APP_NAME
}

/// Panel subtitle: the synthesis formula shown under the title.
pub const fn formula_banner() -> &'static str {
    "f = f0 * step / (1 + divider)"
}

/// Assumed RTC_FAST clock feeding the generator (8 MHz RC oscillator).
pub const RTC_CLOCK_NOMINAL_HZ: f64 = 8_000_000.0;

/// Phase accumulator span (16-bit).
pub const PHASE_ACCUMULATOR_SPAN: f64 = 65_536.0;

/// Uncalibrated reference frequency: 8 MHz / 65536 = 122.0703125 Hz.
pub const NOMINAL_REFERENCE_HZ: f64 = RTC_CLOCK_NOMINAL_HZ / PHASE_ACCUMULATOR_SPAN;

/// Reference frequency measured on the development board.
///
/// Replace with the value measured on your own board.
pub const DEFAULT_REFERENCE_HZ: f64 = 132.5;

/// Default search tolerance in parts per thousand.
pub const DEFAULT_TOLERANCE_PERMILLE: u16 = 10;

/// Lowest target frequency accepted from the keypad.
pub const FREQUENCY_INPUT_MIN_HZ: f64 = 15.0;

/// Highest target frequency accepted from the keypad.
pub const FREQUENCY_INPUT_MAX_HZ: f64 = 8_000_000.0;

/// Lowest reference frequency accepted during calibration.
pub const REFERENCE_INPUT_MIN_HZ: f64 = 100.0;

/// Highest reference frequency accepted during calibration.
pub const REFERENCE_INPUT_MAX_HZ: f64 = 150.0;

/// Channel wired to the speaker amplifier on the reference board.
///
/// DAC channel 1 is shared with the light sensor, so the panel drives 2.
pub const SPEAKER_CHANNEL: Channel = Channel::Channel2;
