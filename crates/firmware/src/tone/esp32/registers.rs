//! ESP32 DAC cosine-wave generator register map
//!
//! Source: ESP32 Technical Reference Manual v4.x, chapter "On-Chip Sensors
//! and Analog Signal Processing" (SENS) and "Low-Power Management" (RTC_CNTL),
//! plus `soc/sens_reg.h`, `soc/rtc_cntl_reg.h` and `soc/rtc_io_reg.h` from
//! ESP-IDF.
//!
//! # Output frequency
//!
//! The generator adds `SW_FSTEP` to a 16-bit phase accumulator clocked from
//! the RTC 8 MHz oscillator divided by `CK8M_DIV_SEL + 1`:
//!
//! ```text
//! f = RTC8M / (1 + CK8M_DIV_SEL) × SW_FSTEP / 65536
//! ```
//!
//! `RTC8M` drifts between parts, which is why the model works from a
//! calibrated `f0` rather than the nominal 8 MHz.
//!
//! ## CK8M_DIV_SEL is shared
//! The divider also clocks other RTC peripherals. Changing it while the ULP
//! or touch sensor is running changes their timing too.
//!
//! ## DAC pads
//! The cosine generator only reaches GPIO25 (channel 1) and GPIO26
//! (channel 2) once the pad is routed to the RTC mux and the DAC output
//! stage is powered (`XPD_DAC` with `DAC_XPD_FORCE`).

// ---------------------------------------------------------------------------
// Register addresses
// ---------------------------------------------------------------------------

/// SAR DAC control 1: frequency step and tone enable.
pub const SENS_SAR_DAC_CTRL1_REG: u32 = 0x3FF4_8898;

/// SAR DAC control 2: per-channel offset, scale, inversion and CW routing.
pub const SENS_SAR_DAC_CTRL2_REG: u32 = 0x3FF4_889C;

/// RTC clock configuration: 8 MHz oscillator divider.
pub const RTC_CNTL_CLK_CONF_REG: u32 = 0x3FF4_8070;

/// RTC IO pad configuration for DAC1 (GPIO25).
pub const RTC_IO_PAD_DAC1_REG: u32 = 0x3FF4_8484;

/// RTC IO pad configuration for DAC2 (GPIO26).
pub const RTC_IO_PAD_DAC2_REG: u32 = 0x3FF4_8488;

// ---------------------------------------------------------------------------
// Bit fields
// ---------------------------------------------------------------------------

/// Contiguous bit field inside a 32-bit register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Position of the least significant bit.
    pub shift: u32,
    /// Unshifted mask (`2^width - 1`).
    pub mask: u32,
}

// Widths and shifts are register-map constants below 32.
#[allow(clippy::arithmetic_side_effects)]
impl Field {
    /// Field of `width` bits starting at `shift`.
    pub const fn new(shift: u32, width: u32) -> Self {
        Self {
            shift,
            mask: (1 << width) - 1,
        }
    }

    /// Single-bit field.
    pub const fn bit(shift: u32) -> Self {
        Self::new(shift, 1)
    }

    /// Mask in register position.
    pub const fn shifted_mask(self) -> u32 {
        self.mask << self.shift
    }

    /// `reg` with this field replaced by `value` (excess bits dropped).
    pub const fn insert(self, reg: u32, value: u32) -> u32 {
        (reg & !self.shifted_mask()) | ((value & self.mask) << self.shift)
    }

    /// Value of this field in `reg`.
    pub const fn extract(self, reg: u32) -> u32 {
        (reg >> self.shift) & self.mask
    }
}

/// SENS_SAR_DAC_CTRL1_REG: phase accumulator increment.
pub const SW_FSTEP: Field = Field::new(0, 16);

/// SENS_SAR_DAC_CTRL1_REG: cosine-wave generator master enable.
pub const SW_TONE_EN: Field = Field::bit(16);

/// SENS_SAR_DAC_CTRL2_REG: channel 1 DC offset.
pub const DAC_DC1: Field = Field::new(0, 8);
/// SENS_SAR_DAC_CTRL2_REG: channel 2 DC offset.
pub const DAC_DC2: Field = Field::new(8, 8);
/// SENS_SAR_DAC_CTRL2_REG: channel 1 amplitude (0 = full, 3 = 1/8).
pub const DAC_SCALE1: Field = Field::new(16, 2);
/// SENS_SAR_DAC_CTRL2_REG: channel 2 amplitude.
pub const DAC_SCALE2: Field = Field::new(18, 2);
/// SENS_SAR_DAC_CTRL2_REG: channel 1 inversion mode.
pub const DAC_INV1: Field = Field::new(20, 2);
/// SENS_SAR_DAC_CTRL2_REG: channel 2 inversion mode.
pub const DAC_INV2: Field = Field::new(22, 2);
/// SENS_SAR_DAC_CTRL2_REG: route the generator to DAC channel 1.
pub const DAC_CW_EN1: Field = Field::bit(24);
/// SENS_SAR_DAC_CTRL2_REG: route the generator to DAC channel 2.
pub const DAC_CW_EN2: Field = Field::bit(25);

/// RTC_CNTL_CLK_CONF_REG: 8 MHz oscillator divider (0 = /1 … 7 = /8).
pub const CK8M_DIV_SEL: Field = Field::new(12, 3);

/// RTC_IO_PAD_DACn_REG: force the DAC output stage on.
pub const PDAC_DAC_XPD_FORCE: Field = Field::bit(10);
/// RTC_IO_PAD_DACn_REG: route the pad to the RTC mux.
pub const PDAC_MUX_SEL: Field = Field::bit(17);
/// RTC_IO_PAD_DACn_REG: DAC output stage power.
pub const PDAC_XPD_DAC: Field = Field::bit(18);

/// Pad bits set while a DAC channel outputs the tone.
pub const PAD_OUTPUT_ON: u32 =
    PDAC_DAC_XPD_FORCE.shifted_mask() | PDAC_MUX_SEL.shifted_mask() | PDAC_XPD_DAC.shifted_mask();

/// Pad bits cleared when a DAC channel is switched off (mux stays routed).
pub const PAD_POWER: u32 = PDAC_DAC_XPD_FORCE.shifted_mask() | PDAC_XPD_DAC.shifted_mask();

// ---------------------------------------------------------------------------
// Per-channel layout
// ---------------------------------------------------------------------------

/// Register fields belonging to one DAC channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelFields {
    /// DC offset field in CTRL2.
    pub offset: Field,
    /// Scale field in CTRL2.
    pub scale: Field,
    /// Inversion field in CTRL2.
    pub invert: Field,
    /// CW routing bit in CTRL2.
    pub cw_enable: Field,
    /// RTC IO pad register.
    pub pad_register: u32,
}

/// DAC channel 1 (GPIO25).
pub const CHANNEL1_FIELDS: ChannelFields = ChannelFields {
    offset: DAC_DC1,
    scale: DAC_SCALE1,
    invert: DAC_INV1,
    cw_enable: DAC_CW_EN1,
    pad_register: RTC_IO_PAD_DAC1_REG,
};

/// DAC channel 2 (GPIO26).
pub const CHANNEL2_FIELDS: ChannelFields = ChannelFields {
    offset: DAC_DC2,
    scale: DAC_SCALE2,
    invert: DAC_INV2,
    cw_enable: DAC_CW_EN2,
    pad_register: RTC_IO_PAD_DAC2_REG,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl2_fields_do_not_overlap() {
        let fields = [
            DAC_DC1, DAC_DC2, DAC_SCALE1, DAC_SCALE2, DAC_INV1, DAC_INV2, DAC_CW_EN1, DAC_CW_EN2,
        ];
        let mut seen = 0u32;
        for field in fields {
            assert_eq!(seen & field.shifted_mask(), 0, "overlap at bit {}", field.shift);
            seen |= field.shifted_mask();
        }
        assert_eq!(seen, 0x03FF_FFFF);
    }

    #[test]
    fn test_insert_keeps_neighbouring_bits() {
        let reg = 0xFFFF_FFFF;
        let updated = CK8M_DIV_SEL.insert(reg, 0b010);
        assert_eq!(CK8M_DIV_SEL.extract(updated), 0b010);
        assert_eq!(updated | CK8M_DIV_SEL.shifted_mask(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_insert_truncates_excess_bits() {
        assert_eq!(DAC_SCALE1.insert(0, 0xFF), 0b11 << 16);
    }

    #[test]
    fn test_fstep_and_tone_enable_share_ctrl1() {
        assert_eq!(SW_FSTEP.shifted_mask(), 0x0000_FFFF);
        assert_eq!(SW_TONE_EN.shifted_mask(), 0x0001_0000);
    }
}
