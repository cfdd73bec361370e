//! Numeric keypad: bounded entry buffer for one panel field at a time.
//!
//! The buffer is a fixed 16-character `heapless::String`. Keys that would
//! overflow it, or a second decimal point, are silently ignored (embedded
//! bounded-buffer contract).

use heapless::String;

use crate::field::{Field, FieldRange, FieldValue};
use crate::panel::ControlPanel;

/// Capacity of the entry buffer.
pub const ENTRY_CAPACITY: usize = 16;

/// One keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Digit `0..=9`; larger values are ignored.
    Digit(u8),
    /// Decimal point.
    Point,
    /// Remove the last character.
    Backspace,
    /// Empty the buffer.
    Clear,
    /// Accept the entry.
    Ok,
    /// Close without writing.
    Cancel,
}

/// Keypad state: the target field and what has been typed so far.
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    target: Option<Field>,
    entry: String<ENTRY_CAPACITY>,
}

impl Keypad {
    /// Closed keypad with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the keypad for `field`. Returns `false` (and stays closed) for
    /// fields the keypad cannot edit.
    pub fn open(&mut self, field: Field) -> bool {
        self.entry.clear();
        if field.accepts_keypad() {
            self.target = Some(field);
            true
        } else {
            self.target = None;
            false
        }
    }

    /// Whether a field is being edited.
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Field being edited.
    pub fn target(&self) -> Option<Field> {
        self.target
    }

    /// Characters typed so far.
    pub fn entry(&self) -> &str {
        self.entry.as_str()
    }

    /// Handle `key`.
    ///
    /// On [`Key::Ok`] a valid entry is written into `panel` and the edited
    /// field is returned, ready for [`ControlPanel::commit`]. Empty or
    /// unparsable entries are discarded. The keypad closes on `Ok` and
    /// `Cancel`; keys pressed while closed are ignored.
    pub fn press(&mut self, key: Key, panel: &mut ControlPanel) -> Option<Field> {
        let field = self.target?;
        match key {
            Key::Digit(d) => {
                if let Some(c) = char::from_digit(u32::from(d), 10) {
                    self.entry.push(c).ok();
                }
            }
            Key::Point => {
                if field.accepts_decimal() && !self.entry.contains('.') {
                    self.entry.push('.').ok();
                }
            }
            Key::Backspace => {
                self.entry.pop();
            }
            Key::Clear => self.entry.clear(),
            Key::Cancel => self.close(),
            Key::Ok => {
                let value = Self::parse(field, self.entry.as_str());
                self.close();
                if let Some(value) = value {
                    panel.set(field, value);
                    return Some(field);
                }
            }
        }
        None
    }

    fn close(&mut self) {
        self.target = None;
        self.entry.clear();
    }

    fn parse(field: Field, entry: &str) -> Option<FieldValue> {
        match field.range() {
            FieldRange::Real { .. } => entry
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(FieldValue::Real),
            FieldRange::Integer { .. } => entry.parse::<i64>().ok().map(FieldValue::Integer),
            FieldRange::Toggle => None,
        }
    }
}
