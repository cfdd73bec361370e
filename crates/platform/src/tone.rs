//! Cosine tone generator abstraction

use crate::tone_types::{Channel, ClockDivisor, DcOffset, FrequencyStep, Scale, WaveformMode};

/// Hardware boundary of the two-channel cosine wave generator.
///
/// Implementations own the register encoding; callers pass already
/// range-checked field values. Every method is a non-blocking register write
/// and cannot fail.
pub trait ToneGeneratorPort {
    /// Route the generator to `channel` and power its output stage.
    fn enable_channel(&mut self, channel: Channel);

    /// Stop the generator output on `channel`.
    fn disable_channel(&mut self, channel: Channel);

    /// Write the amplitude scale exponent for `channel`.
    fn set_channel_scale(&mut self, channel: Channel, scale: Scale);

    /// Write the DC offset for `channel`.
    fn set_channel_offset(&mut self, channel: Channel, offset: DcOffset);

    /// Write the 2-bit inversion field for `channel`.
    fn set_channel_mode(&mut self, channel: Channel, mode: WaveformMode);

    /// Latch a new clock divisor and frequency step together.
    fn latch_divisor_and_step(&mut self, divisor: ClockDivisor, step: FrequencyStep);

    /// Latch a new clock divisor, leaving the step register untouched.
    fn latch_clock_divisor(&mut self, divisor: ClockDivisor);

    /// Latch a new frequency step, leaving the divisor register untouched.
    fn latch_frequency_step(&mut self, step: FrequencyStep);
}

impl<P: ToneGeneratorPort + ?Sized> ToneGeneratorPort for &mut P {
    fn enable_channel(&mut self, channel: Channel) {
        (**self).enable_channel(channel);
    }

    fn disable_channel(&mut self, channel: Channel) {
        (**self).disable_channel(channel);
    }

    fn set_channel_scale(&mut self, channel: Channel, scale: Scale) {
        (**self).set_channel_scale(channel, scale);
    }

    fn set_channel_offset(&mut self, channel: Channel, offset: DcOffset) {
        (**self).set_channel_offset(channel, offset);
    }

    fn set_channel_mode(&mut self, channel: Channel, mode: WaveformMode) {
        (**self).set_channel_mode(channel, mode);
    }

    fn latch_divisor_and_step(&mut self, divisor: ClockDivisor, step: FrequencyStep) {
        (**self).latch_divisor_and_step(divisor, step);
    }

    fn latch_clock_divisor(&mut self, divisor: ClockDivisor) {
        (**self).latch_clock_divisor(divisor);
    }

    fn latch_frequency_step(&mut self, step: FrequencyStep) {
        (**self).latch_frequency_step(step);
    }
}
