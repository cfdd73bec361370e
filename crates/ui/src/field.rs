//! Control panel field identifiers and values.

use platform::config::{
    FREQUENCY_INPUT_MAX_HZ, FREQUENCY_INPUT_MIN_HZ, REFERENCE_INPUT_MAX_HZ, REFERENCE_INPUT_MIN_HZ,
};
use platform::{ClockDivisor, FrequencyStep, TolerancePermille};

/// Every control on the generator panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Requested / produced output frequency (Hz).
    Frequency,
    /// Calibrated reference frequency f0 (Hz).
    Reference,
    /// Waveform mode of the panel's output channel.
    Mode,
    /// Clock divisor.
    Divisor,
    /// Frequency step.
    Step,
    /// Search tolerance (permille).
    Tolerance,
    /// Match policy LED.
    MatchPolicy,
}

/// Value range accepted by a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRange {
    /// Real numbers in `min..=max`.
    Real {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// Integers in `min..=max`.
    Integer {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// On/off.
    Toggle,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 7] = [
        Field::Frequency,
        Field::Reference,
        Field::Mode,
        Field::Divisor,
        Field::Step,
        Field::Tolerance,
        Field::MatchPolicy,
    ];

    /// Range the field clamps entered values into.
    pub fn range(self) -> FieldRange {
        match self {
            Field::Frequency => FieldRange::Real {
                min: FREQUENCY_INPUT_MIN_HZ,
                max: FREQUENCY_INPUT_MAX_HZ,
            },
            Field::Reference => FieldRange::Real {
                min: REFERENCE_INPUT_MIN_HZ,
                max: REFERENCE_INPUT_MAX_HZ,
            },
            Field::Mode => FieldRange::Integer { min: 0, max: 3 },
            Field::Divisor => FieldRange::Integer {
                min: i64::from(ClockDivisor::MIN.get()),
                max: i64::from(ClockDivisor::MAX.get()),
            },
            Field::Step => FieldRange::Integer {
                min: i64::from(FrequencyStep::MIN.get()),
                max: i64::from(FrequencyStep::MAX.get()),
            },
            Field::Tolerance => FieldRange::Integer {
                min: i64::from(TolerancePermille::MIN.get()),
                max: i64::from(TolerancePermille::MAX.get()),
            },
            Field::MatchPolicy => FieldRange::Toggle,
        }
    }

    /// Whether the keypad can edit this field.
    pub fn accepts_keypad(self) -> bool {
        !matches!(self.range(), FieldRange::Toggle)
    }

    /// Whether the keypad accepts a decimal point for this field.
    pub fn accepts_decimal(self) -> bool {
        matches!(self.range(), FieldRange::Real { .. })
    }
}

/// Tagged value carried between fields, the keypad and the model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldValue {
    /// Real-valued field contents.
    Real(f64),
    /// Integer field contents.
    Integer(i64),
    /// LED state.
    Toggle(bool),
}

impl FieldValue {
    /// Value as a real number, if numeric.
    pub fn as_real(self) -> Option<f64> {
        match self {
            FieldValue::Real(v) => Some(v),
            #[allow(clippy::cast_precision_loss)]
            FieldValue::Integer(v) => Some(v as f64),
            FieldValue::Toggle(_) => None,
        }
    }

    /// Value as an integer (reals round to nearest), if numeric and finite.
    pub fn as_integer(self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(v),
            // f64 → i64 `as` saturates; callers clamp next.
            #[allow(clippy::cast_possible_truncation)]
            FieldValue::Real(v) if v.is_finite() => Some(libm::round(v) as i64),
            FieldValue::Real(_) | FieldValue::Toggle(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_is_the_only_toggle() {
        let toggles: Vec<Field> = Field::ALL.into_iter().filter(|f| !f.accepts_keypad()).collect();
        assert_eq!(toggles, [Field::MatchPolicy]);
    }

    #[test]
    fn test_only_frequencies_take_a_decimal_point() {
        assert!(Field::Frequency.accepts_decimal());
        assert!(Field::Reference.accepts_decimal());
        assert!(!Field::Step.accepts_decimal());
    }

    #[test]
    fn test_frequency_range_matches_panel_limits() {
        assert_eq!(
            Field::Frequency.range(),
            FieldRange::Real { min: 15.0, max: 8_000_000.0 }
        );
        assert_eq!(Field::Step.range(), FieldRange::Integer { min: 1, max: 65535 });
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(FieldValue::Real(2.6).as_integer(), Some(3));
        assert_eq!(FieldValue::Real(f64::NAN).as_integer(), None);
        assert_eq!(FieldValue::Integer(7).as_real(), Some(7.0));
        assert_eq!(FieldValue::Toggle(true).as_real(), None);
    }
}
