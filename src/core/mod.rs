//! Core engine types: players, RNG, round state, outcomes.
//!
//! This module contains the building blocks shared by both game variants.
//! Variant rules live in `crate::rules`; orchestration in `crate::engine`.

pub mod outcome;
pub mod player;
pub mod rng;
pub mod state;

pub use outcome::{GameResult, Outcome, Verdict};
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
pub use state::RoundState;
