//! Divisor/step quantization solver.
//!
//! The generator can only produce frequencies on the lattice
//!
//! ```text
//! f = f0 × S / (1 + D),   S ∈ 1..=65535,  D ∈ 0..=7
//! ```
//!
//! For a requested frequency the solver builds one candidate per divisor
//! (`S(D) = round(q × (D + 1))` with `q = target / f0`) and then picks one
//! of them under a [`MatchPolicy`]:
//!
//! - **Best approximation**: the candidate with the smallest absolute error.
//!   The scan is ascending with strict `<`, so ties go to the lower divisor.
//! - **Within tolerance**: the *smallest* divisor whose error is below
//!   `target × tolerance / 1000`. A lower divisor means more phase steps per
//!   output cycle and a smoother analogue waveform, so it is preferred over a
//!   more accurate higher divisor. Falls back to the best approximation and
//!   reports `tolerance_met = false` when no divisor qualifies.
//!
//! Everything here is pure; [`crate::model`] applies the result.

use platform::{ClockDivisor, FrequencyStep, TolerancePermille};

/// Number of selectable clock divisors (0..=7).
pub const DIVISOR_COUNT: usize = 8;

/// Frequency produced by a divisor/step pair: `f0 × step / (1 + divisor)`.
pub fn realized_frequency(reference_hz: f64, divisor: ClockDivisor, step: FrequencyStep) -> f64 {
    reference_hz * f64::from(step.get()) / f64::from(divisor.factor())
}

/// Round to the nearest integer value as `i64`, saturating at the `i64`
/// limits (NaN maps to 0).
pub(crate) fn round_to_i64(value: f64) -> i64 {
    // `as` from f64 saturates; the callers clamp into register range next.
    #[allow(clippy::cast_possible_truncation)]
    let rounded = libm::round(value) as i64;
    rounded
}

/// Realizable frequency for one clock divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Candidate {
    /// Clock divisor of this candidate.
    pub divisor: ClockDivisor,
    /// Step nearest to the target for this divisor.
    pub step: FrequencyStep,
    /// Frequency actually produced by `(divisor, step)`.
    pub frequency: f64,
    /// Absolute distance to the requested frequency.
    pub error: f64,
}

impl Candidate {
    const UNSET: Candidate = Candidate {
        divisor: ClockDivisor::MIN,
        step: FrequencyStep::MIN,
        frequency: 0.0,
        error: f64::INFINITY,
    };

    /// Error relative to `target` (0.01 = 1 %).
    pub fn relative_error(&self, target: f64) -> f64 {
        self.error / libm::fabs(target)
    }
}

/// Build the per-divisor candidate table for `target`, ascending by divisor.
///
/// Steps are clamped into `1..=65535` before the candidate frequency is
/// computed, so every entry is a pair the hardware can latch.
pub fn candidates(reference_hz: f64, target: f64) -> [Candidate; DIVISOR_COUNT] {
    let q = target / reference_hz;
    let mut table = [Candidate::UNSET; DIVISOR_COUNT];
    for (slot, divisor) in table.iter_mut().zip(ClockDivisor::all()) {
        let step =
            FrequencyStep::from_i64_clamped(round_to_i64(q * f64::from(divisor.factor())));
        let frequency = realized_frequency(reference_hz, divisor, step);
        *slot = Candidate {
            divisor,
            step,
            frequency,
            error: libm::fabs(target - frequency),
        };
    }
    table
}

/// How the search turns the candidate table into a single choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPolicy {
    /// Smallest divisor within tolerance, falling back to the best approximation.
    #[default]
    WithinTolerance,
    /// Smallest absolute error regardless of waveform smoothness.
    BestApproximation,
}

impl MatchPolicy {
    /// Short label for logs and displays.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchPolicy::WithinTolerance => "within tolerance",
            MatchPolicy::BestApproximation => "best approximation",
        }
    }
}

/// Both policy winners for one candidate table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Candidate with the smallest error (first one on ties).
    pub best: Candidate,
    /// Lowest-divisor candidate within tolerance, if any.
    pub tolerant: Option<Candidate>,
}

impl Selection {
    /// Resolve the selection under `policy`.
    pub fn resolve(&self, policy: MatchPolicy) -> SearchOutcome {
        let tolerance_met = self.tolerant.is_some();
        let chosen = match policy {
            MatchPolicy::WithinTolerance => self.tolerant.unwrap_or(self.best),
            MatchPolicy::BestApproximation => self.best,
        };
        SearchOutcome {
            policy,
            divisor: chosen.divisor,
            step: chosen.step,
            frequency: chosen.frequency,
            error: chosen.error,
            tolerance_met,
        }
    }
}

/// Pick the best and the tolerance-preferred candidates.
pub fn select(
    table: &[Candidate; DIVISOR_COUNT],
    target: f64,
    tolerance: TolerancePermille,
) -> Selection {
    let bound = target * f64::from(tolerance.get()) / 1000.0;
    let [first, rest @ ..] = *table;
    let mut best = first;
    for candidate in rest {
        if candidate.error < best.error {
            best = candidate;
        }
    }
    let tolerant = table.iter().find(|c| c.error < bound).copied();
    Selection { best, tolerant }
}

/// Result of a frequency search, as applied to the hardware.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchOutcome {
    /// Policy the choice was made under.
    pub policy: MatchPolicy,
    /// Chosen clock divisor.
    pub divisor: ClockDivisor,
    /// Chosen frequency step.
    pub step: FrequencyStep,
    /// Frequency produced by the chosen pair.
    pub frequency: f64,
    /// Absolute distance to the requested frequency.
    pub error: f64,
    /// `false` when no divisor came within the configured tolerance.
    pub tolerance_met: bool,
}

/// Candidate table, selection and resolution in one call.
pub fn solve(
    reference_hz: f64,
    target: f64,
    tolerance: TolerancePermille,
    policy: MatchPolicy,
) -> SearchOutcome {
    select(&candidates(reference_hz, target), target, tolerance).resolve(policy)
}
