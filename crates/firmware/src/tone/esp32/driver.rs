//! ESP32 cosine-wave generator driver
//!
//! Implements [`ToneGeneratorPort`] with register writes only; no ESP-IDF
//! calls. All fields are updated with read-modify-write so settings of the
//! other channel (and other users of `RTC_CNTL_CLK_CONF`) survive.
//!
//! # Enable sequence
//!
//! | Step | Register | Bits |
//! |------|----------|------|
//! | 1 | `SENS_SAR_DAC_CTRL1` | set `SW_TONE_EN` |
//! | 2 | `SENS_SAR_DAC_CTRL2` | set `DAC_CW_ENn` |
//! | 3 | `RTC_IO_PAD_DACn` | set `MUX_SEL`, `XPD_DAC`, `DAC_XPD_FORCE` |
//!
//! Disabling clears `DAC_CW_ENn` and powers the pad down. `SW_TONE_EN` stays
//! set, since the other channel may still be using the generator.

use platform::{
    Channel, ClockDivisor, DcOffset, FrequencyStep, Scale, ToneGeneratorPort, WaveformMode,
};

use super::registers::{
    ChannelFields, Field, CHANNEL1_FIELDS, CHANNEL2_FIELDS, CK8M_DIV_SEL, PAD_OUTPUT_ON, PAD_POWER,
    RTC_CNTL_CLK_CONF_REG, SENS_SAR_DAC_CTRL1_REG, SENS_SAR_DAC_CTRL2_REG, SW_FSTEP, SW_TONE_EN,
};
use crate::tone::RegisterAccess;

/// ESP32 DAC cosine-wave generator driver.
pub struct Esp32ToneGenerator<R> {
    regs: R,
}

impl<R: RegisterAccess> Esp32ToneGenerator<R> {
    /// Create a driver over `regs`. Nothing is written until the first call.
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Borrow the register backend.
    pub fn registers(&self) -> &R {
        &self.regs
    }

    fn fields(channel: Channel) -> ChannelFields {
        match channel {
            Channel::Channel1 => CHANNEL1_FIELDS,
            Channel::Channel2 => CHANNEL2_FIELDS,
        }
    }

    fn write_ctrl2(&mut self, field: Field, value: u32) {
        self.regs
            .modify(SENS_SAR_DAC_CTRL2_REG, |reg| field.insert(reg, value));
    }

    fn write_divisor(&mut self, divisor: ClockDivisor) {
        self.regs.modify(RTC_CNTL_CLK_CONF_REG, |reg| {
            CK8M_DIV_SEL.insert(reg, u32::from(divisor.get()))
        });
    }

    fn write_step(&mut self, step: FrequencyStep) {
        self.regs.modify(SENS_SAR_DAC_CTRL1_REG, |reg| {
            SW_FSTEP.insert(reg, u32::from(step.get()))
        });
    }
}

impl<R: RegisterAccess> ToneGeneratorPort for Esp32ToneGenerator<R> {
    fn enable_channel(&mut self, channel: Channel) {
        let fields = Self::fields(channel);
        self.regs
            .modify(SENS_SAR_DAC_CTRL1_REG, |reg| reg | SW_TONE_EN.shifted_mask());
        self.write_ctrl2(fields.cw_enable, 1);
        self.regs
            .modify(fields.pad_register, |reg| reg | PAD_OUTPUT_ON);

        #[cfg(feature = "defmt")]
        defmt::debug!("cw: {} enabled", channel);
    }

    fn disable_channel(&mut self, channel: Channel) {
        let fields = Self::fields(channel);
        self.write_ctrl2(fields.cw_enable, 0);
        self.regs.modify(fields.pad_register, |reg| reg & !PAD_POWER);

        #[cfg(feature = "defmt")]
        defmt::debug!("cw: {} disabled", channel);
    }

    fn set_channel_scale(&mut self, channel: Channel, scale: Scale) {
        self.write_ctrl2(Self::fields(channel).scale, u32::from(scale.get()));
    }

    fn set_channel_offset(&mut self, channel: Channel, offset: DcOffset) {
        self.write_ctrl2(Self::fields(channel).offset, u32::from(offset.get()));
    }

    fn set_channel_mode(&mut self, channel: Channel, mode: WaveformMode) {
        self.write_ctrl2(Self::fields(channel).invert, u32::from(mode.bits()));
    }

    fn latch_divisor_and_step(&mut self, divisor: ClockDivisor, step: FrequencyStep) {
        self.write_divisor(divisor);
        self.write_step(step);

        #[cfg(feature = "defmt")]
        defmt::debug!("cw: div_sel={=u8} fstep={=u16}", divisor.get(), step.get());
    }

    fn latch_clock_divisor(&mut self, divisor: ClockDivisor) {
        self.write_divisor(divisor);
    }

    fn latch_frequency_step(&mut self, step: FrequencyStep) {
        self.write_step(step);
    }
}
