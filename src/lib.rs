//! # word-duel
//!
//! A two-player, turn-based word game engine with a shared zero-sum
//! try-limit policy, covering two variants:
//!
//! - **Spelling duel**: words from a fixed allowed-letter set, never shorter
//!   than the previous word.
//! - **Word chain**: each word exactly one letter longer than the last and
//!   starting with its final letter.
//!
//! ## Design Principles
//!
//! 1. **One owner for state**: `RoundState` is mutated only by the `Game`
//!    state machine; validators and prompt collaborators see `&RoundState`.
//!
//! 2. **Shared policy, swapped checks**: both variants run the same ordered
//!    validation pipeline and the same try-limit adjudication; only the
//!    length/position and letter/character checks differ.
//!
//! 3. **Every rejection is recoverable**: after construction there is no
//!    runtime error path - malformed and rule-violating input alike are
//!    absorbed by the try-limit policy and reported with the detail a
//!    player needs to self-correct.
//!
//! 4. **Deterministic games**: construction and reset are seeded; the same
//!    vocabulary and seed replay the same letters, seed word, and outcomes.
//!
//! ## Modules
//!
//! - `core`: players, RNG, round state, outcomes
//! - `words`: the vocabulary oracle seam and the move parser
//! - `rules`: the shared validation pipeline and per-variant rules
//! - `engine`: the per-turn state machine and prompt rendering
//! - `error`: configuration errors and the move-rejection taxonomy

pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod words;

// Re-export commonly used types
pub use crate::core::{GameResult, GameRng, Outcome, PlayerId, PlayerPair, RoundState, Verdict};

pub use crate::engine::{ChainConfig, Game, SpellingConfig};

pub use crate::error::{ConfigError, MoveError};

pub use crate::rules::{ChainRules, LetterRules, RuleSet};

pub use crate::words::{Vocabulary, WordOracle};
