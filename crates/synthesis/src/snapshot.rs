//! Diagnostic dump of the model state.

use core::fmt;

use platform::{Channel, ClockDivisor, FrequencyStep, TolerancePermille};

use crate::model::ChannelState;

/// Copy of every model field at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    /// Reference frequency `f0` in Hz.
    pub reference_hz: f64,
    /// Frequency step.
    pub step: FrequencyStep,
    /// Clock divisor.
    pub divisor: ClockDivisor,
    /// Requested frequency in Hz.
    pub target_hz: f64,
    /// Produced frequency in Hz.
    pub actual_hz: f64,
    /// `actual - target` in Hz.
    pub deviation_hz: f64,
    /// Search tolerance.
    pub tolerance: TolerancePermille,
    /// Channel 1 configuration.
    pub channel1: ChannelState,
    /// Channel 2 configuration.
    pub channel2: ChannelState,
}

impl Snapshot {
    /// Configuration of `channel` at snapshot time.
    pub fn channel(&self, channel: Channel) -> ChannelState {
        match channel {
            Channel::Channel1 => self.channel1,
            Channel::Channel2 => self.channel2,
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "f0          = {:>12.4} Hz", self.reference_hz)?;
        writeln!(f, "step        = {:>12}", self.step)?;
        writeln!(f, "divisor     = {:>12}", self.divisor)?;
        writeln!(f, "tolerance   = {:>12} permille", self.tolerance)?;
        writeln!(f, "target      = {:>12.4} Hz", self.target_hz)?;
        writeln!(f, "actual      = {:>12.4} Hz", self.actual_hz)?;
        write!(f, "deviation   = {:>12.4} Hz", self.deviation_hz)?;
        for channel in Channel::ALL {
            let state = self.channel(channel);
            write!(
                f,
                "\n{}         = {} scale={} offset={} mode={}",
                channel.as_str(),
                if state.enabled { "on " } else { "off" },
                state.scale,
                state.offset,
                state.mode.as_str(),
            )?;
        }
        Ok(())
    }
}
