//! Generator control panel: seven controls bound to the synthesis model.
//!
//! The panel holds what the operator sees. [`ControlPanel::commit`] pushes
//! one edited field into the model and refreshes the fields the model
//! derives from it (divisor, step and produced frequency).
//!
//! ```text
//! Keypad ──OK──▶ ControlPanel::set ──commit──▶ FrequencySynthesisModel ──▶ port
//!                      ▲                               │
//!                      └──────── refresh ◀─────────────┘
//! ```

use platform::config::{NOMINAL_REFERENCE_HZ, SPEAKER_CHANNEL};
use platform::{
    Channel, ClockDivisor, FrequencyStep, TolerancePermille, ToneGeneratorPort, WaveformMode,
};
use synthesis::{FrequencySynthesisModel, MatchPolicy, SearchOutcome};

use crate::editable::{Editable, IntegerField, MatchLed, RealField};
use crate::field::{Field, FieldRange, FieldValue};

/// Control panel state.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    frequency: RealField,
    reference: RealField,
    mode: IntegerField,
    divisor: IntegerField,
    step: IntegerField,
    tolerance: IntegerField,
    match_led: MatchLed,
    channel: Channel,
}

fn real_field(field: Field, initial: f64) -> RealField {
    match field.range() {
        FieldRange::Real { min, max } => RealField::new(initial, min, max),
        FieldRange::Integer { .. } | FieldRange::Toggle => RealField::new(initial, initial, initial),
    }
}

fn integer_field(field: Field, initial: i64) -> IntegerField {
    IntegerField::for_range(initial, field.range())
        .unwrap_or_else(|| IntegerField::new(initial, initial, initial))
}

impl ControlPanel {
    /// Power-on panel: f and f0 show the nominal 122.0703125 Hz, mode 2
    /// (sine), divisor 0, step 1, tolerance 10 ‰, LED on. Drives the
    /// speaker channel.
    pub fn new() -> Self {
        Self {
            frequency: real_field(Field::Frequency, NOMINAL_REFERENCE_HZ),
            reference: real_field(Field::Reference, NOMINAL_REFERENCE_HZ),
            mode: integer_field(Field::Mode, i64::from(WaveformMode::default().bits())),
            divisor: integer_field(Field::Divisor, i64::from(ClockDivisor::default().get())),
            step: integer_field(Field::Step, i64::from(FrequencyStep::default().get())),
            tolerance: integer_field(Field::Tolerance, i64::from(TolerancePermille::default().get())),
            match_led: MatchLed::default(),
            channel: SPEAKER_CHANNEL,
        }
    }

    /// Panel mirroring the current state of `model`.
    pub fn from_model<P>(model: &FrequencySynthesisModel<P>) -> Self {
        let mut panel = Self::new();
        panel.reference.set(model.reference_frequency());
        panel.frequency.show(model.actual_frequency());
        panel
            .mode
            .set(i64::from(model.channel(panel.channel).mode.bits()));
        panel.divisor.set(i64::from(model.clock_divisor().get()));
        panel.step.set(i64::from(model.frequency_step().get()));
        panel.tolerance.set(i64::from(model.tolerance().get()));
        panel
    }

    /// Drive `channel` instead of the speaker channel.
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    /// Channel the mode field and [`start`](Self::start) act on.
    pub fn output_channel(&self) -> Channel {
        self.channel
    }

    /// Control behind `field`.
    pub fn editable(&self, field: Field) -> &dyn Editable {
        match field {
            Field::Frequency => &self.frequency,
            Field::Reference => &self.reference,
            Field::Mode => &self.mode,
            Field::Divisor => &self.divisor,
            Field::Step => &self.step,
            Field::Tolerance => &self.tolerance,
            Field::MatchPolicy => &self.match_led,
        }
    }

    /// Mutable control behind `field`.
    pub fn editable_mut(&mut self, field: Field) -> &mut dyn Editable {
        match field {
            Field::Frequency => &mut self.frequency,
            Field::Reference => &mut self.reference,
            Field::Mode => &mut self.mode,
            Field::Divisor => &mut self.divisor,
            Field::Step => &mut self.step,
            Field::Tolerance => &mut self.tolerance,
            Field::MatchPolicy => &mut self.match_led,
        }
    }

    /// Current value of `field`.
    pub fn get(&self, field: Field) -> FieldValue {
        self.editable(field).get_value()
    }

    /// Write `value` into `field` (clamped) without touching the model.
    pub fn set(&mut self, field: Field, value: FieldValue) {
        self.editable_mut(field).set_value(value);
    }

    /// The match policy LED.
    pub fn match_led(&self) -> &MatchLed {
        &self.match_led
    }

    /// Search policy currently selected.
    pub fn match_policy(&self) -> MatchPolicy {
        self.match_led.policy()
    }

    /// Bring the generator up with the panel's settings: enable the output
    /// channel, then apply f0, divisor and step.
    pub fn start<P: ToneGeneratorPort>(&mut self, model: &mut FrequencySynthesisModel<P>) {
        model.enable(self.channel);
        for field in [Field::Reference, Field::Divisor, Field::Step] {
            self.commit(field, model);
        }
    }

    /// Push `field` into `model` and refresh the derived fields.
    ///
    /// Returns the search outcome when `field` is [`Field::Frequency`].
    pub fn commit<P: ToneGeneratorPort>(
        &mut self,
        field: Field,
        model: &mut FrequencySynthesisModel<P>,
    ) -> Option<SearchOutcome> {
        match field {
            Field::Frequency => {
                let outcome = model.search_with_policy(self.frequency.value(), self.match_policy());
                self.divisor.set(i64::from(outcome.divisor.get()));
                self.step.set(i64::from(outcome.step.get()));
                self.frequency.show(model.actual_frequency());

                #[cfg(feature = "defmt")]
                defmt::info!(
                    "panel: divider={=u8} step={=u16}",
                    outcome.divisor.get(),
                    outcome.step.get()
                );
                return Some(outcome);
            }
            Field::Reference => {
                model.set_reference_frequency(self.reference.value());
                self.frequency.show(model.actual_frequency());
            }
            Field::Mode => {
                let bits = u8::try_from(self.mode.value()).unwrap_or(u8::MAX);
                model.set_mode(self.channel, WaveformMode::from_bits_clamped(bits));
            }
            Field::Divisor => {
                model.set_clock_divisor(ClockDivisor::from_i64_clamped(self.divisor.value()));
                self.frequency.show(model.actual_frequency());
            }
            Field::Step => {
                model.set_frequency_step(FrequencyStep::from_i64_clamped(self.step.value()));
                self.frequency.show(model.actual_frequency());
            }
            Field::Tolerance => {
                model.set_tolerance(TolerancePermille::from_i64_clamped(self.tolerance.value()));
            }
            Field::MatchPolicy => self.match_led.toggle(),
        }
        None
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
