//! Property-based tests for the frequency search and model invariants.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use platform::{Channel, ClockDivisor, FrequencyStep, MockToneGenerator, TolerancePermille};
use proptest::prelude::*;
use synthesis::solver::candidates;
use synthesis::{FrequencySynthesisModel, MatchPolicy};

const F0: f64 = 132.5;

fn model() -> FrequencySynthesisModel<MockToneGenerator> {
    FrequencySynthesisModel::new(F0, MockToneGenerator::new())
}

#[test]
fn tolerance_impossible_above_the_lattice_falls_back_to_best() {
    let mut m = model();
    m.set_tolerance(TolerancePermille::new(1));
    let outcome = m.search_best_frequency(1.0e10);
    assert!(!outcome.tolerance_met);
    // Every divisor saturates at step 65535; D=0 gets closest.
    assert_eq!(m.clock_divisor().get(), 0);
    assert_eq!(m.frequency_step().get(), 65535);
}

#[test]
fn one_khz_picks_smallest_divisor_within_one_percent() {
    let mut m = model();
    let outcome = m.search_best_frequency(1000.0);
    let table = candidates(F0, 1000.0);
    let smallest = table.iter().find(|c| c.error / 1000.0 < 0.01).unwrap();
    assert_eq!(outcome.divisor, smallest.divisor);
    assert_eq!(outcome.step, smallest.step);
    assert_eq!(m.actual_frequency(), smallest.frequency);
}

proptest! {
    /// actual = f0 × step / (1 + divisor) for every latchable pair.
    #[test]
    fn apply_keeps_actual_consistent(div in 0u8..=7, step in 1u16..=u16::MAX, f0 in 100.0f64..150.0) {
        let mut m = FrequencySynthesisModel::new(f0, MockToneGenerator::new());
        m.apply_divisor_and_step(ClockDivisor::new(div), FrequencyStep::new(step));
        let expected = f0 * f64::from(step) / (1.0 + f64::from(div));
        prop_assert!(((m.actual_frequency() - expected) / expected).abs() < 1e-9);
        prop_assert!((m.deviation() - (m.actual_frequency() - m.target_frequency())).abs() < 1e-6);
    }

    /// Identical inputs give identical choices.
    #[test]
    fn search_is_deterministic(target in 15.0f64..8.0e6, tol in 1u16..=999) {
        let mut a = model();
        let mut b = model();
        a.set_tolerance(TolerancePermille::new(tol));
        b.set_tolerance(TolerancePermille::new(tol));
        prop_assert_eq!(a.search_best_frequency(target), b.search_best_frequency(target));
    }

    /// The applied divisor is the smallest within tolerance, else the global best.
    #[test]
    fn search_obeys_policy(target in 15.0f64..8.0e6, tol in 1u16..=999) {
        let mut m = model();
        m.set_tolerance(TolerancePermille::new(tol));
        let outcome = m.search_best_frequency(target);
        let table = candidates(F0, target);
        let bound = target * f64::from(tol) / 1000.0;

        match table.iter().find(|c| c.error < bound) {
            Some(first) => {
                prop_assert!(outcome.tolerance_met);
                prop_assert_eq!(outcome.divisor, first.divisor);
            }
            None => {
                prop_assert!(!outcome.tolerance_met);
                let min = table.iter().map(|c| c.error).fold(f64::INFINITY, f64::min);
                prop_assert_eq!(outcome.error, min);
            }
        }
        prop_assert_eq!(m.clock_divisor(), outcome.divisor);
        prop_assert_eq!(m.frequency_step(), outcome.step);
        prop_assert_eq!(m.target_frequency(), target);
    }

    /// Best approximation is never worse than the tolerance policy.
    #[test]
    fn best_approximation_is_at_least_as_accurate(target in 15.0f64..8.0e6, tol in 1u16..=999) {
        let mut m = model();
        m.set_tolerance(TolerancePermille::new(tol));
        let tolerant = m.search_with_policy(target, MatchPolicy::WithinTolerance);
        let best = m.search_with_policy(target, MatchPolicy::BestApproximation);
        prop_assert!(best.error <= tolerant.error);
    }

    /// With tolerance 999 ‰ any target from 100 Hz up is met at divisor 0.
    #[test]
    fn loose_tolerance_always_picks_divisor_zero(target in 100.0f64..8.0e6) {
        let mut m = model();
        m.set_tolerance(TolerancePermille::new(999));
        let outcome = m.search_best_frequency(target);
        prop_assert!(outcome.tolerance_met);
        prop_assert_eq!(outcome.divisor.get(), 0);
    }

    /// Changing f0 moves actual and deviation, never the request or registers.
    #[test]
    fn reference_change_keeps_target_and_registers(target in 15.0f64..1.0e6, f0 in 100.0f64..150.0) {
        let mut m = model();
        m.search_best_frequency(target);
        let (div, step) = (m.clock_divisor(), m.frequency_step());
        m.set_reference_frequency(f0);
        prop_assert_eq!(m.target_frequency(), target);
        prop_assert_eq!(m.clock_divisor(), div);
        prop_assert_eq!(m.frequency_step(), step);
        let expected = f0 * f64::from(step.get()) / f64::from(div.factor());
        prop_assert!((m.actual_frequency() - expected).abs() <= expected * 1e-12);
    }

    /// enable → enabled, disable → disabled, toggle twice → unchanged.
    #[test]
    fn channel_enable_laws(ops in proptest::collection::vec(0u8..3, 0..20), pick in 1u8..=2) {
        let ch = Channel::try_from(pick).unwrap();
        let mut m = model();
        for op in ops {
            match op {
                0 => { m.enable(ch); prop_assert!(m.is_enabled(ch)); }
                1 => { m.disable(ch); prop_assert!(!m.is_enabled(ch)); }
                _ => {
                    let before = m.is_enabled(ch);
                    m.toggle(ch);
                    m.toggle(ch);
                    prop_assert_eq!(m.is_enabled(ch), before);
                }
            }
        }
    }
}
