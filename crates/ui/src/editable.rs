//! Editable capability: the one interface every panel control exposes.
//!
//! Controls are addressed through [`Editable`] and exchange tagged
//! [`FieldValue`]s, so the panel never needs to know a control's concrete
//! type. Values of the wrong kind are ignored; numeric values are clamped
//! into the control's range.

use synthesis::MatchPolicy;

use crate::field::{FieldRange, FieldValue};

/// Read and write a control's value.
pub trait Editable {
    /// Current value.
    fn get_value(&self) -> FieldValue;

    /// Replace the value, clamping into range.
    fn set_value(&mut self, value: FieldValue);
}

/// Real-valued control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealField {
    value: f64,
    min: f64,
    max: f64,
}

impl RealField {
    /// Control limited to `min..=max`, starting at `initial` (clamped).
    pub fn new(initial: f64, min: f64, max: f64) -> Self {
        let mut field = Self { value: min, min, max };
        field.set(initial);
        field
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store `value` clamped into range. NaN is ignored.
    pub fn set(&mut self, value: f64) {
        if !value.is_nan() {
            self.value = value.clamp(self.min, self.max);
        }
    }

    /// Store `value` without clamping.
    ///
    /// Used for read-back of the produced frequency, which can fall outside
    /// the input range (e.g. below 15 Hz at `f0 / 8`).
    pub fn show(&mut self, value: f64) {
        self.value = value;
    }
}

impl Editable for RealField {
    fn get_value(&self) -> FieldValue {
        FieldValue::Real(self.value)
    }

    fn set_value(&mut self, value: FieldValue) {
        if let Some(v) = value.as_real() {
            self.set(v);
        }
    }
}

/// Integer control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerField {
    value: i64,
    min: i64,
    max: i64,
}

impl IntegerField {
    /// Control limited to `min..=max`, starting at `initial` (clamped).
    pub fn new(initial: i64, min: i64, max: i64) -> Self {
        Self {
            value: initial.clamp(min, max),
            min,
            max,
        }
    }

    /// Control configured from a field range; `None` for non-integer ranges.
    pub fn for_range(initial: i64, range: FieldRange) -> Option<Self> {
        match range {
            FieldRange::Integer { min, max } => Some(Self::new(initial, min, max)),
            FieldRange::Real { .. } | FieldRange::Toggle => None,
        }
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Store `value` clamped into range.
    pub fn set(&mut self, value: i64) {
        self.value = value.clamp(self.min, self.max);
    }
}

impl Editable for IntegerField {
    fn get_value(&self) -> FieldValue {
        FieldValue::Integer(self.value)
    }

    fn set_value(&mut self, value: FieldValue) {
        if let Some(v) = value.as_integer() {
            self.set(v);
        }
    }
}

/// Match policy LED. On = "Optimal match" (within tolerance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLed {
    on: bool,
}

impl MatchLed {
    /// Label while the LED is on.
    pub const OPTIMAL_LABEL: &'static str = "Optimal match";
    /// Label while the LED is off.
    pub const BEST_LABEL: &'static str = "Best match";

    /// LED reflecting `policy`.
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            on: policy == MatchPolicy::WithinTolerance,
        }
    }

    /// LED state.
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flip the LED.
    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    /// Label for the current state.
    pub fn label(&self) -> &'static str {
        if self.on {
            Self::OPTIMAL_LABEL
        } else {
            Self::BEST_LABEL
        }
    }

    /// Search policy selected by the LED.
    pub fn policy(&self) -> MatchPolicy {
        if self.on {
            MatchPolicy::WithinTolerance
        } else {
            MatchPolicy::BestApproximation
        }
    }
}

impl Default for MatchLed {
    fn default() -> Self {
        Self::new(MatchPolicy::default())
    }
}

impl Editable for MatchLed {
    fn get_value(&self) -> FieldValue {
        FieldValue::Toggle(self.on)
    }

    fn set_value(&mut self, value: FieldValue) {
        if let FieldValue::Toggle(on) = value {
            self.on = on;
        }
    }
}
