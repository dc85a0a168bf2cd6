//! Error taxonomy: fatal configuration errors and recoverable move rejections.
//!
//! `ConfigError` is raised once, at game construction or reset, and is never
//! recovered. `MoveError` is produced on every rejected move and is always
//! absorbed into an [`Outcome::InvalidMove`](crate::Outcome::InvalidMove) by
//! the try-limit policy - it never surfaces as a program fault.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while configuring a game.
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ConfigError {
    #[error("letter count {0} exceeds the 26-letter alphabet")]
    TooManyLetters(usize),
    #[error("need at least one allowed letter")]
    NoLetters,
    #[error("vocabulary has no seed word of length <= {max_len}")]
    NoSeedWord { max_len: usize },
    #[error("max_tries must be at least 1")]
    ZeroTries,
}

/// Reasons a submitted move can be rejected.
///
/// Each variant carries the detail needed for a human-readable message; the
/// `#[error]` text is what players see alongside their remaining-try count.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum MoveError {
    #[error("no word provided in the valid format [word]")]
    BadFormat,
    #[error("the word must be at least {required} letters long; '{word}' has {actual}")]
    TooShort {
        word: String,
        required: usize,
        actual: usize,
    },
    #[error("the word must be exactly {required} letters long; '{word}' has {actual}")]
    WrongLength {
        word: String,
        required: usize,
        actual: usize,
    },
    #[error("the word '{word}' has already been used")]
    AlreadyUsed { word: String },
    #[error("'{word}' is not a recognized word")]
    NotAWord { word: String },
    #[error("the word '{word}' contains illegal characters: {illegal}")]
    ForbiddenLetters { word: String, illegal: String },
    #[error("the word '{word}' must start with '{required}'")]
    WrongStartLetter { word: String, required: char },
}
