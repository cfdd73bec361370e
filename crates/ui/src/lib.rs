//! Application UI layer: control panel fields, keypad entry and their
//! binding to the synthesis model.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.
//! Rendering and touch decoding are left to the board support code, which
//! maps touches to [`Field`]s and [`keypad::Key`]s.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod editable;
pub mod field;
pub mod keypad;
pub mod panel;

pub use editable::{Editable, IntegerField, MatchLed, RealField};
pub use field::{Field, FieldRange, FieldValue};
pub use keypad::{Key, Keypad};
pub use panel::ControlPanel;
