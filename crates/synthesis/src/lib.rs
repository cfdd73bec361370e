//! Frequency synthesis model for the DAC cosine-wave generator
//!
//! Maps a requested output frequency onto the generator's
//! `f = f0 × step / (1 + divisor)` lattice and keeps the parameters the
//! hardware is running with in one owned value. All register traffic goes
//! through a [`platform::ToneGeneratorPort`].
//!
//! # Contents
//!
//! - [`FrequencySynthesisModel`] - parameters, setters and the search
//! - [`solver`] - pure candidate table and policy selection
//! - [`Snapshot`] - diagnostic dump (`Display`)
//! - [`SharedModel`] - model behind an `embassy_sync` blocking mutex
//!
//! # Features
//!
//! - `std`: enable the platform mocks
//! - `defmt`: `defmt::Format` derives and search logging on target
//! - `tracing`: search logging through `tracing` on the host
//! - `serde`: `Serialize` on outcomes and snapshots

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod model;
pub mod shared;
pub mod snapshot;
pub mod solver;

pub use model::{ChannelState, FrequencySynthesisModel};
pub use shared::SharedModel;
pub use snapshot::Snapshot;
pub use solver::{Candidate, MatchPolicy, SearchOutcome};
