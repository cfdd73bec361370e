//! Mutex-guarded model for sharing between tasks or interrupt handlers.
//!
//! The model itself is an owned value with no interior mutability. When more
//! than one execution context needs it (for example a UI task and a serial
//! console task), wrap it in a [`SharedModel`] and choose the raw mutex that
//! fits the contexts involved:
//!
//! - `CriticalSectionRawMutex` for sharing with interrupts or across threads
//! - `NoopRawMutex` for tasks on a single executor

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::model::FrequencySynthesisModel;
use crate::snapshot::Snapshot;

/// [`FrequencySynthesisModel`] behind an `embassy_sync` blocking mutex.
pub struct SharedModel<M: RawMutex, P> {
    inner: Mutex<M, RefCell<FrequencySynthesisModel<P>>>,
}

impl<M: RawMutex, P> SharedModel<M, P> {
    /// Wrap `model`.
    pub const fn new(model: FrequencySynthesisModel<P>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(model)),
        }
    }

    /// Run `f` with exclusive access to the model.
    ///
    /// # Panics
    ///
    /// Panics if called again from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut FrequencySynthesisModel<P>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Copy of the current model state.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.lock(|cell| cell.borrow().snapshot())
    }
}

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use platform::{Channel, MockToneGenerator};

    use super::*;

    #[test]
    fn test_lock_mutates_the_wrapped_model() {
        let shared: SharedModel<NoopRawMutex, _> =
            SharedModel::new(FrequencySynthesisModel::new(132.5, MockToneGenerator::new()));
        shared.lock(|m| m.search_best_frequency(1000.0));
        assert_eq!(shared.snapshot().divisor.get(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        let shared: SharedModel<CriticalSectionRawMutex, _> =
            SharedModel::new(FrequencySynthesisModel::new(132.5, MockToneGenerator::new()));

        std::thread::scope(|s| {
            s.spawn(|| shared.lock(|m| m.enable(Channel::Channel2)));
            s.spawn(|| shared.lock(|m| m.search_best_frequency(440.0)));
        });

        let snap = shared.snapshot();
        assert!(snap.channel2.enabled);
        assert_eq!(snap.target_hz, 440.0);
    }
}
