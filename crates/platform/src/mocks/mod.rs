//! Mock implementations for testing
//!
//! [`MockToneGenerator`] implements [`ToneGeneratorPort`] without any
//! hardware and records every call for assertion in tests.

#![cfg(any(test, feature = "std"))]

use crate::tone::ToneGeneratorPort;
use crate::tone_types::{Channel, ClockDivisor, DcOffset, FrequencyStep, Scale, WaveformMode};

/// Maximum number of recorded calls; further calls are applied but not logged.
pub const CALL_LOG_CAPACITY: usize = 128;

/// One recorded port call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortCall {
    /// [`ToneGeneratorPort::enable_channel`]
    Enable(Channel),
    /// [`ToneGeneratorPort::disable_channel`]
    Disable(Channel),
    /// [`ToneGeneratorPort::set_channel_scale`]
    Scale(Channel, Scale),
    /// [`ToneGeneratorPort::set_channel_offset`]
    Offset(Channel, DcOffset),
    /// [`ToneGeneratorPort::set_channel_mode`]
    Mode(Channel, WaveformMode),
    /// [`ToneGeneratorPort::latch_divisor_and_step`]
    DivisorAndStep(ClockDivisor, FrequencyStep),
    /// [`ToneGeneratorPort::latch_clock_divisor`]
    Divisor(ClockDivisor),
    /// [`ToneGeneratorPort::latch_frequency_step`]
    Step(FrequencyStep),
}

/// Last values written for one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MockChannel {
    /// Output enabled.
    pub enabled: bool,
    /// Last scale written.
    pub scale: Scale,
    /// Last offset written.
    pub offset: DcOffset,
    /// Last mode written.
    pub mode: WaveformMode,
}

/// Mock tone generator: records all calls for test assertions.
#[derive(Debug, Clone, Default)]
pub struct MockToneGenerator {
    calls: heapless::Vec<PortCall, CALL_LOG_CAPACITY>,
    channel1: MockChannel,
    channel2: MockChannel,
    /// Divisor currently latched in hardware.
    pub divisor: ClockDivisor,
    /// Step currently latched in hardware.
    pub step: FrequencyStep,
}

impl MockToneGenerator {
    /// Create a new mock with both channels disabled and registers at reset.
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, oldest first.
    pub fn calls(&self) -> &[PortCall] {
        &self.calls
    }

    /// Forget recorded calls (register state is kept).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Last values written for `channel`.
    pub fn channel(&self, channel: Channel) -> MockChannel {
        match channel {
            Channel::Channel1 => self.channel1,
            Channel::Channel2 => self.channel2,
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut MockChannel {
        match channel {
            Channel::Channel1 => &mut self.channel1,
            Channel::Channel2 => &mut self.channel2,
        }
    }

    fn record(&mut self, call: PortCall) {
        // Full log: the call still takes effect, it is only not recorded.
        self.calls.push(call).ok();
    }
}

impl ToneGeneratorPort for MockToneGenerator {
    fn enable_channel(&mut self, channel: Channel) {
        self.channel_mut(channel).enabled = true;
        self.record(PortCall::Enable(channel));
    }

    fn disable_channel(&mut self, channel: Channel) {
        self.channel_mut(channel).enabled = false;
        self.record(PortCall::Disable(channel));
    }

    fn set_channel_scale(&mut self, channel: Channel, scale: Scale) {
        self.channel_mut(channel).scale = scale;
        self.record(PortCall::Scale(channel, scale));
    }

    fn set_channel_offset(&mut self, channel: Channel, offset: DcOffset) {
        self.channel_mut(channel).offset = offset;
        self.record(PortCall::Offset(channel, offset));
    }

    fn set_channel_mode(&mut self, channel: Channel, mode: WaveformMode) {
        self.channel_mut(channel).mode = mode;
        self.record(PortCall::Mode(channel, mode));
    }

    fn latch_divisor_and_step(&mut self, divisor: ClockDivisor, step: FrequencyStep) {
        self.divisor = divisor;
        self.step = step;
        self.record(PortCall::DivisorAndStep(divisor, step));
    }

    fn latch_clock_divisor(&mut self, divisor: ClockDivisor) {
        self.divisor = divisor;
        self.record(PortCall::Divisor(divisor));
    }

    fn latch_frequency_step(&mut self, step: FrequencyStep) {
        self.step = step;
        self.record(PortCall::Step(step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_starts_disabled_at_reset_values() {
        let mock = MockToneGenerator::new();
        for ch in Channel::ALL {
            assert!(!mock.channel(ch).enabled);
            assert_eq!(mock.channel(ch).mode, WaveformMode::Sine);
        }
        assert_eq!(mock.divisor.get(), 0);
        assert_eq!(mock.step.get(), 1);
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn test_mock_records_calls_in_order() {
        let mut mock = MockToneGenerator::new();
        mock.enable_channel(Channel::Channel2);
        mock.set_channel_offset(Channel::Channel2, DcOffset::new(12));
        mock.latch_divisor_and_step(ClockDivisor::new(3), FrequencyStep::new(30));

        assert_eq!(
            mock.calls(),
            &[
                PortCall::Enable(Channel::Channel2),
                PortCall::Offset(Channel::Channel2, DcOffset::new(12)),
                PortCall::DivisorAndStep(ClockDivisor::new(3), FrequencyStep::new(30)),
            ]
        );
        assert!(mock.channel(Channel::Channel2).enabled);
        assert!(!mock.channel(Channel::Channel1).enabled);
        assert_eq!(mock.step.get(), 30);
    }

    #[test]
    fn test_mock_single_field_latches_keep_the_other_field() {
        let mut mock = MockToneGenerator::new();
        mock.latch_divisor_and_step(ClockDivisor::new(2), FrequencyStep::new(500));
        mock.latch_clock_divisor(ClockDivisor::new(5));
        assert_eq!(mock.step.get(), 500);
        mock.latch_frequency_step(FrequencyStep::new(7));
        assert_eq!(mock.divisor.get(), 5);
    }

    #[test]
    fn test_mock_log_overflow_still_applies_state() {
        let mut mock = MockToneGenerator::new();
        for _ in 0..CALL_LOG_CAPACITY {
            mock.disable_channel(Channel::Channel1);
        }
        mock.enable_channel(Channel::Channel1);
        assert_eq!(mock.calls().len(), CALL_LOG_CAPACITY);
        assert!(mock.channel(Channel::Channel1).enabled);
    }
}
