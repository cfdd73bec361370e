//! Console port: a [`ToneGeneratorPort`] that logs instead of touching hardware.

use platform::{
    Channel, ClockDivisor, DcOffset, FrequencyStep, Scale, ToneGeneratorPort, WaveformMode,
};

/// Logs every port call at `debug` (`RUST_LOG=debug` to see them) and counts
/// register latches.
#[derive(Debug, Default)]
pub struct ConsolePort {
    latches: usize,
}

impl ConsolePort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of divisor/step latches performed so far.
    pub fn latches(&self) -> usize {
        self.latches
    }

    fn latched(&mut self) {
        self.latches = self.latches.saturating_add(1);
    }
}

impl ToneGeneratorPort for ConsolePort {
    fn enable_channel(&mut self, channel: Channel) {
        tracing::debug!(channel = channel.as_str(), "enable");
    }

    fn disable_channel(&mut self, channel: Channel) {
        tracing::debug!(channel = channel.as_str(), "disable");
    }

    fn set_channel_scale(&mut self, channel: Channel, scale: Scale) {
        tracing::debug!(channel = channel.as_str(), scale = scale.get(), "scale");
    }

    fn set_channel_offset(&mut self, channel: Channel, offset: DcOffset) {
        tracing::debug!(channel = channel.as_str(), offset = offset.get(), "offset");
    }

    fn set_channel_mode(&mut self, channel: Channel, mode: WaveformMode) {
        tracing::debug!(channel = channel.as_str(), mode = mode.as_str(), "mode");
    }

    fn latch_divisor_and_step(&mut self, divisor: ClockDivisor, step: FrequencyStep) {
        self.latched();
        tracing::debug!(divisor = divisor.get(), step = step.get(), "latch divisor+step");
    }

    fn latch_clock_divisor(&mut self, divisor: ClockDivisor) {
        self.latched();
        tracing::debug!(divisor = divisor.get(), "latch divisor");
    }

    fn latch_frequency_step(&mut self, step: FrequencyStep) {
        self.latched();
        tracing::debug!(step = step.get(), "latch step");
    }
}
