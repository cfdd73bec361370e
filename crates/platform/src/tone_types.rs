//! Tone generator domain types.
//!
//! Every integer field the cosine generator accepts is wrapped in a newtype
//! whose invariant is its hardware range:
//! - `ClockDivisor`: RTC 8 MHz clock pre-divider, 0–7
//! - `FrequencyStep`: phase-accumulator increment, 1–65535
//! - `Scale`: output attenuation exponent, 0–3 (Vout × 2^-scale)
//! - `DcOffset`: DC bias added to the wave, 0–255
//! - `TolerancePermille`: allowed search deviation in ‰ of the target, 1–999
//!
//! `new` clamps, `try_new` rejects. Values arriving from a keypad or the
//! command line go through `from_i64_clamped`.

use core::fmt;

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: i64,
    /// The inclusive minimum allowed value.
    pub min: i64,
    /// The inclusive maximum allowed value.
    pub max: i64,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {} outside {}..={}",
            self.value, self.min, self.max
        )
    }
}

// ── Channel ──────────────────────────────────────────────────────────────────

/// One of the two DAC outputs fed by the cosine generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Channel {
    /// DAC channel 1 (GPIO25 on ESP32).
    Channel1,
    /// DAC channel 2 (GPIO26 on ESP32).
    Channel2,
}

impl Channel {
    /// Both channels in hardware order.
    pub const ALL: [Channel; 2] = [Channel::Channel1, Channel::Channel2];

    /// Zero-based index (0 for `Channel1`, 1 for `Channel2`).
    pub fn index(self) -> usize {
        match self {
            Channel::Channel1 => 0,
            Channel::Channel2 => 1,
        }
    }

    /// Short label for logs and displays.
    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Channel1 => "CH1",
            Channel::Channel2 => "CH2",
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = OutOfRangeError;

    /// Map the datasheet numbering (1, 2) onto [`Channel`].
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Channel::Channel1),
            2 => Ok(Channel::Channel2),
            other => Err(OutOfRangeError {
                value: i64::from(other),
                min: 1,
                max: 2,
            }),
        }
    }
}

// ── WaveformMode ─────────────────────────────────────────────────────────────

/// Value of the 2-bit `DAC_INVn` field.
///
/// The electrical meaning is defined by the SoC; the model stores and forwards
/// it without interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaveformMode {
    /// `0b00`: cosine, rising half first.
    RisingCosineFirst,
    /// `0b01`: cosine, falling half first.
    FallingCosineFirst,
    /// `0b10`: sine (power-on choice of this firmware).
    #[default]
    Sine,
    /// `0b11`: inverted sine.
    InvertedSine,
}

impl WaveformMode {
    /// All modes in field-value order.
    pub const ALL: [WaveformMode; 4] = [
        WaveformMode::RisingCosineFirst,
        WaveformMode::FallingCosineFirst,
        WaveformMode::Sine,
        WaveformMode::InvertedSine,
    ];

    /// Raw 2-bit field value.
    pub fn bits(self) -> u8 {
        match self {
            WaveformMode::RisingCosineFirst => 0b00,
            WaveformMode::FallingCosineFirst => 0b01,
            WaveformMode::Sine => 0b10,
            WaveformMode::InvertedSine => 0b11,
        }
    }

    /// Decode a field value, rejecting anything above `0b11`.
    pub fn from_bits(bits: u8) -> Result<Self, OutOfRangeError> {
        match bits {
            0 => Ok(WaveformMode::RisingCosineFirst),
            1 => Ok(WaveformMode::FallingCosineFirst),
            2 => Ok(WaveformMode::Sine),
            3 => Ok(WaveformMode::InvertedSine),
            other => Err(OutOfRangeError {
                value: i64::from(other),
                min: 0,
                max: 3,
            }),
        }
    }

    /// Decode a field value, saturating anything above `0b11` to
    /// [`WaveformMode::InvertedSine`].
    pub fn from_bits_clamped(bits: u8) -> Self {
        match Self::from_bits(bits.min(3)) {
            Ok(mode) => mode,
            Err(_) => WaveformMode::InvertedSine,
        }
    }

    /// Short label for logs and displays.
    pub fn as_str(self) -> &'static str {
        match self {
            WaveformMode::RisingCosineFirst => "cosine (rising first)",
            WaveformMode::FallingCosineFirst => "cosine (falling first)",
            WaveformMode::Sine => "sine",
            WaveformMode::InvertedSine => "inverted sine",
        }
    }
}

// ── Range newtypes ───────────────────────────────────────────────────────────

/// Generates a clamped integer newtype with `new`, `try_new`,
/// `from_i64_clamped` and `get`.
macro_rules! range_newtype {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty), min = $min:expr, max = $max:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(try_from = "i64", into = "i64")
        )]
        #[repr(transparent)]
        pub struct $name($repr);

        impl $name {
            /// Smallest valid value.
            pub const MIN: Self = Self($min);
            /// Largest valid value.
            pub const MAX: Self = Self($max);

            /// Create the value, clamping into the valid range.
            #[must_use]
            pub fn new(value: $repr) -> Self {
                Self(value.clamp($min, $max))
            }

            /// Create the value, rejecting anything outside the valid range.
            ///
            /// # Errors
            ///
            /// Returns [`OutOfRangeError`] when `value` is out of range.
            pub fn try_new(value: $repr) -> Result<Self, OutOfRangeError> {
                if !($min..=$max).contains(&value) {
                    Err(OutOfRangeError {
                        value: i64::from(value),
                        min: i64::from($min),
                        max: i64::from($max),
                    })
                } else {
                    Ok(Self(value))
                }
            }

            /// Clamp a wide signed value (keypad entry, rounded float) into range.
            #[must_use]
            pub fn from_i64_clamped(value: i64) -> Self {
                let clamped = value.clamp(i64::from($min), i64::from($max));
                // In range of $repr after the clamp above.
                match <$repr>::try_from(clamped) {
                    Ok(v) => Self(v),
                    Err(_) => Self::MIN,
                }
            }

            /// Return the raw field value.
            #[must_use]
            pub fn get(self) -> $repr {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = OutOfRangeError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                let err = OutOfRangeError {
                    value,
                    min: i64::from($min),
                    max: i64::from($max),
                };
                let narrow = <$repr>::try_from(value).map_err(|_| err)?;
                Self::try_new(narrow)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> i64 {
                i64::from(value.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

range_newtype! {
    /// `RTC_CNTL_CK8M_DIV_SEL`: the 8 MHz RTC clock is divided by `1 + divisor`.
    ///
    /// Lower divisors give more phase steps per output cycle and therefore a
    /// smoother analogue waveform.
    ClockDivisor(u8), min = 0, max = 7
}

range_newtype! {
    /// `SENS_SW_FSTEP`: phase-accumulator increment per clock tick.
    ///
    /// Zero would stall the generator, so the valid range starts at 1.
    FrequencyStep(u16), min = 1, max = 65535
}

range_newtype! {
    /// `SENS_DAC_SCALEn`: output amplitude is `Vout × 2^-scale`.
    Scale(u8), min = 0, max = 3
}

range_newtype! {
    /// `SENS_DAC_DCn`: DC offset added to the generated wave.
    DcOffset(u8), min = 0, max = 255
}

range_newtype! {
    /// Allowed relative deviation for the smoothness-preferring search, in
    /// parts per thousand of the target frequency.
    TolerancePermille(u16), min = 1, max = 999
}

impl ClockDivisor {
    /// Divide factor applied to the reference clock (`1 + divisor`, 1–8).
    #[must_use]
    pub fn factor(self) -> u8 {
        self.0.saturating_add(1)
    }

    /// Iterate all divisors in ascending order.
    pub fn all() -> impl Iterator<Item = ClockDivisor> {
        (0..=7u8).map(ClockDivisor)
    }
}

impl Default for ClockDivisor {
    fn default() -> Self {
        Self::MIN
    }
}

impl Default for FrequencyStep {
    fn default() -> Self {
        Self::MIN
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::MIN
    }
}

impl Default for DcOffset {
    fn default() -> Self {
        Self::MIN
    }
}

impl Default for TolerancePermille {
    fn default() -> Self {
        Self(crate::config::DEFAULT_TOLERANCE_PERMILLE)
    }
}
