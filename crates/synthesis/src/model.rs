//! Frequency synthesis model.
//!
//! [`FrequencySynthesisModel`] owns the generator parameters, keeps the
//! derived output frequency in sync with them and pushes every change to a
//! [`ToneGeneratorPort`]. It never touches registers itself.
//!
//! Invariants kept by every operation:
//!
//! - `divisor ∈ 0..=7` and `step ∈ 1..=65535` (enforced by the newtypes)
//! - after [`apply_divisor_and_step`](FrequencySynthesisModel::apply_divisor_and_step),
//!   the setters that go through it, and the searches:
//!   `actual = f0 × step / (1 + divisor)` and `deviation = actual - target`
//!
//! [`set_clock_divisor`](FrequencySynthesisModel::set_clock_divisor) and
//! [`set_frequency_step`](FrequencySynthesisModel::set_frequency_step) are the
//! low-level escape hatches: they refresh `actual` but leave `deviation`
//! untouched, and latch only their own register field.

use platform::{
    Channel, ClockDivisor, DcOffset, FrequencyStep, Scale, TolerancePermille, ToneGeneratorPort,
    WaveformMode,
};

use crate::snapshot::Snapshot;
use crate::solver::{self, MatchPolicy, SearchOutcome};

/// Per-channel output configuration as last requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelState {
    /// Amplitude attenuation.
    pub scale: Scale,
    /// DC offset.
    pub offset: DcOffset,
    /// Waveform inversion mode.
    pub mode: WaveformMode,
    /// Output enabled.
    pub enabled: bool,
}

/// Divisor/step model of the DAC cosine-wave generator.
///
/// # Example
///
/// ```
/// use platform::MockToneGenerator;
/// use synthesis::FrequencySynthesisModel;
///
/// let mut model = FrequencySynthesisModel::new(132.5, MockToneGenerator::new());
/// let outcome = model.search_best_frequency(1000.0);
/// assert!(outcome.tolerance_met);
/// assert_eq!(model.clock_divisor().get(), 1);
/// assert_eq!(model.frequency_step().get(), 15);
/// ```
#[derive(Debug)]
pub struct FrequencySynthesisModel<P> {
    port: P,
    reference_hz: f64,
    divisor: ClockDivisor,
    step: FrequencyStep,
    target_hz: f64,
    actual_hz: f64,
    deviation_hz: f64,
    tolerance: TolerancePermille,
    channel1: ChannelState,
    channel2: ChannelState,
}

impl<P: ToneGeneratorPort> FrequencySynthesisModel<P> {
    /// Create a model for reference frequency `reference_hz` and push the
    /// initial configuration to `port`.
    ///
    /// Both channels start disabled with scale 0, offset 0 and mode
    /// [`WaveformMode::Sine`]; divisor 0, step 1, tolerance 10 ‰ and
    /// `target = actual = f0`. The port sees the scale and offset of both
    /// channels followed by one combined divisor/step latch.
    pub fn new(reference_hz: f64, port: P) -> Self {
        let divisor = ClockDivisor::default();
        let step = FrequencyStep::default();
        let actual_hz = solver::realized_frequency(reference_hz, divisor, step);
        let mut model = Self {
            port,
            reference_hz,
            divisor,
            step,
            target_hz: actual_hz,
            actual_hz,
            deviation_hz: 0.0,
            tolerance: TolerancePermille::default(),
            channel1: ChannelState::default(),
            channel2: ChannelState::default(),
        };
        for channel in Channel::ALL {
            model.port.set_channel_scale(channel, Scale::default());
        }
        for channel in Channel::ALL {
            model.port.set_channel_offset(channel, DcOffset::default());
        }
        model.apply_divisor_and_step(divisor, step);
        model
    }

    // ── Frequency ────────────────────────────────────────────────────────────

    /// Store `divisor` and `step`, recompute `actual` and `deviation`, and
    /// latch both fields in one port call.
    pub fn apply_divisor_and_step(&mut self, divisor: ClockDivisor, step: FrequencyStep) {
        self.divisor = divisor;
        self.step = step;
        self.refresh_actual();
        self.deviation_hz = self.actual_hz - self.target_hz;
        self.port.latch_divisor_and_step(divisor, step);
    }

    /// Replace the calibrated reference frequency `f0`.
    ///
    /// The latched divisor and step are kept, so the output frequency moves.
    /// Nothing is written to the port.
    pub fn set_reference_frequency(&mut self, reference_hz: f64) {
        self.reference_hz = reference_hz;
        self.refresh_actual();
        self.deviation_hz = self.actual_hz - self.target_hz;
    }

    /// Change only the clock divisor. `deviation` is not recomputed.
    pub fn set_clock_divisor(&mut self, divisor: ClockDivisor) {
        self.divisor = divisor;
        self.refresh_actual();
        self.port.latch_clock_divisor(divisor);
    }

    /// Change only the frequency step. `deviation` is not recomputed.
    pub fn set_frequency_step(&mut self, step: FrequencyStep) {
        self.step = step;
        self.refresh_actual();
        self.port.latch_frequency_step(step);
    }

    /// Request `target_hz` with a caller-chosen divisor; the step is rounded
    /// to the nearest representable value.
    pub fn set_frequency_with_divisor(&mut self, target_hz: f64, divisor: ClockDivisor) {
        self.target_hz = target_hz;
        let raw = solver::round_to_i64(target_hz * f64::from(divisor.factor()) / self.reference_hz);
        self.apply_divisor_and_step(divisor, FrequencyStep::from_i64_clamped(raw));
    }

    /// Request `target_hz` with a caller-chosen step; the divisor is derived
    /// from it.
    ///
    /// The derived divisor is never below 1, even where 0 would be closer.
    pub fn set_frequency_with_step(&mut self, target_hz: f64, step: FrequencyStep) {
        self.target_hz = target_hz;
        let raw = solver::round_to_i64(self.reference_hz * f64::from(step.get()) / target_hz);
        let divisor = ClockDivisor::from_i64_clamped(raw.saturating_sub(1).max(1));
        self.apply_divisor_and_step(divisor, step);
    }

    /// Search the divisor/step pair for `target_hz` under the default policy
    /// and apply it.
    pub fn search_best_frequency(&mut self, target_hz: f64) -> SearchOutcome {
        self.search_with_policy(target_hz, MatchPolicy::WithinTolerance)
    }

    /// Search the divisor/step pair for `target_hz` under `policy` and apply it.
    ///
    /// The target is stored first, so `deviation` afterwards is relative to
    /// the new request.
    pub fn search_with_policy(&mut self, target_hz: f64, policy: MatchPolicy) -> SearchOutcome {
        self.target_hz = target_hz;
        let outcome = solver::solve(self.reference_hz, target_hz, self.tolerance, policy);
        self.apply_divisor_and_step(outcome.divisor, outcome.step);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "tone: target={} Hz -> divisor={=u8} step={=u16} f={} Hz",
            target_hz,
            outcome.divisor.get(),
            outcome.step.get(),
            outcome.frequency
        );
        #[cfg(feature = "tracing")]
        tracing::info!(
            target_hz,
            divisor = outcome.divisor.get(),
            step = outcome.step.get(),
            frequency_hz = outcome.frequency,
            policy = outcome.policy.as_str(),
            "frequency applied"
        );

        if policy == MatchPolicy::WithinTolerance && !outcome.tolerance_met {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "tone: {=u16} permille tolerance not met, best approximation applied",
                self.tolerance.get()
            );
            #[cfg(feature = "tracing")]
            tracing::warn!(
                tolerance_permille = self.tolerance.get(),
                error_hz = outcome.error,
                "tolerance not met, best approximation applied"
            );
        }

        outcome
    }

    /// Set the search tolerance. Affects later searches only.
    pub fn set_tolerance(&mut self, tolerance: TolerancePermille) {
        self.tolerance = tolerance;
    }

    fn refresh_actual(&mut self) {
        self.actual_hz = solver::realized_frequency(self.reference_hz, self.divisor, self.step);
    }

    // ── Channels ─────────────────────────────────────────────────────────────

    /// Set the amplitude attenuation of `channel`.
    pub fn set_scale(&mut self, channel: Channel, scale: Scale) {
        self.channel_mut(channel).scale = scale;
        self.port.set_channel_scale(channel, scale);
    }

    /// Set the DC offset of `channel`.
    pub fn set_offset(&mut self, channel: Channel, offset: DcOffset) {
        self.channel_mut(channel).offset = offset;
        self.port.set_channel_offset(channel, offset);
    }

    /// Set the waveform mode of `channel`.
    pub fn set_mode(&mut self, channel: Channel, mode: WaveformMode) {
        self.channel_mut(channel).mode = mode;
        self.port.set_channel_mode(channel, mode);
    }

    /// Enable `channel`.
    ///
    /// Always forwarded to the port, even when already enabled.
    pub fn enable(&mut self, channel: Channel) {
        self.channel_mut(channel).enabled = true;
        self.port.enable_channel(channel);
    }

    /// Disable `channel`.
    ///
    /// Always forwarded to the port, even when already disabled.
    pub fn disable(&mut self, channel: Channel) {
        self.channel_mut(channel).enabled = false;
        self.port.disable_channel(channel);
    }

    /// Flip `channel` between enabled and disabled.
    pub fn toggle(&mut self, channel: Channel) {
        if self.is_enabled(channel) {
            self.disable(channel);
        } else {
            self.enable(channel);
        }
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut ChannelState {
        match channel {
            Channel::Channel1 => &mut self.channel1,
            Channel::Channel2 => &mut self.channel2,
        }
    }
}

impl<P> FrequencySynthesisModel<P> {
    /// Whether `channel` is enabled.
    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.channel(channel).enabled
    }

    /// Last requested configuration of `channel`.
    pub fn channel(&self, channel: Channel) -> ChannelState {
        match channel {
            Channel::Channel1 => self.channel1,
            Channel::Channel2 => self.channel2,
        }
    }

    /// Calibrated reference frequency `f0` in Hz.
    pub fn reference_frequency(&self) -> f64 {
        self.reference_hz
    }

    /// Current clock divisor.
    pub fn clock_divisor(&self) -> ClockDivisor {
        self.divisor
    }

    /// Current frequency step.
    pub fn frequency_step(&self) -> FrequencyStep {
        self.step
    }

    /// Last requested frequency in Hz.
    pub fn target_frequency(&self) -> f64 {
        self.target_hz
    }

    /// Frequency produced by the current divisor and step, in Hz.
    pub fn actual_frequency(&self) -> f64 {
        self.actual_hz
    }

    /// `actual - target` as of the last operation that recomputed it.
    pub fn deviation(&self) -> f64 {
        self.deviation_hz
    }

    /// Search tolerance.
    pub fn tolerance(&self) -> TolerancePermille {
        self.tolerance
    }

    /// Lowest and highest frequency reachable with the current `f0`:
    /// `(f0 / 8, f0 × 65535)`.
    pub fn frequency_range(&self) -> (f64, f64) {
        (
            solver::realized_frequency(self.reference_hz, ClockDivisor::MAX, FrequencyStep::MIN),
            solver::realized_frequency(self.reference_hz, ClockDivisor::MIN, FrequencyStep::MAX),
        )
    }

    /// Copy of all model fields for display or serialization.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            reference_hz: self.reference_hz,
            step: self.step,
            divisor: self.divisor,
            target_hz: self.target_hz,
            actual_hz: self.actual_hz,
            deviation_hz: self.deviation_hz,
            tolerance: self.tolerance,
            channel1: self.channel1,
            channel2: self.channel2,
        }
    }

    /// Borrow the port.
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Mutably borrow the port, bypassing the model.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Consume the model and return the port.
    pub fn into_port(self) -> P {
        self.port
    }
}
