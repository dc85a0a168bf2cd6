//! Letter-constrained variant: fixed allowed-letter set, non-decreasing length.
//!
//! The allowed set is sampled once at reset, weighted by how common each
//! letter is in English, so most games get a playable alphabet. Every
//! accepted word must then draw only on that set and be at least as long as
//! the word before it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::rng::GameRng;
use crate::error::{ConfigError, MoveError};

/// Relative frequency of each letter in English text (rough estimates).
///
/// Weights are relative; they do not sum to 1.
pub const LETTER_WEIGHTS: [(char, f32); 26] = [
    ('a', 8.17),
    ('b', 1.49),
    ('c', 2.78),
    ('d', 4.25),
    ('e', 12.70),
    ('f', 2.23),
    ('g', 2.02),
    ('h', 6.09),
    ('i', 7.00),
    ('j', 0.15),
    ('k', 0.77),
    ('l', 4.03),
    ('m', 2.41),
    ('n', 6.75),
    ('o', 7.51),
    ('p', 1.93),
    ('q', 0.10),
    ('r', 5.99),
    ('s', 6.33),
    ('t', 9.06),
    ('u', 2.76),
    ('v', 0.98),
    ('w', 2.36),
    ('x', 0.15),
    ('y', 1.97),
    ('z', 0.07),
];

/// Sample `count` distinct letters from a weighted frequency table,
/// without replacement.
///
/// Each draw picks a letter with probability proportional to its remaining
/// weight, then removes it from the pool. Stops early if the pool runs out
/// of positive weights.
#[must_use]
pub fn sample_letters(
    table: &[(char, f32)],
    count: usize,
    rng: &mut GameRng,
) -> BTreeSet<char> {
    let mut weights: Vec<f32> = table.iter().map(|&(_, w)| w).collect();
    let mut chosen = BTreeSet::new();

    while chosen.len() < count {
        match rng.choose_weighted(&weights) {
            Some(idx) => {
                chosen.insert(table[idx].0);
                weights[idx] = 0.0;
            }
            None => break,
        }
    }

    chosen
}

/// Constraint fields for the letter-constrained variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterRules {
    allowed: BTreeSet<char>,
}

impl LetterRules {
    /// Sample an allowed-letter set of exactly `num_letters` distinct letters.
    ///
    /// `num_letters` must be between 1 and 26; anything else is a
    /// configuration error, never a per-turn rejection.
    pub fn new(num_letters: usize, rng: &mut GameRng) -> Result<Self, ConfigError> {
        if num_letters == 0 {
            return Err(ConfigError::NoLetters);
        }
        if num_letters > 26 {
            return Err(ConfigError::TooManyLetters(num_letters));
        }

        Ok(Self {
            allowed: sample_letters(&LETTER_WEIGHTS, num_letters, rng),
        })
    }

    /// Build from an explicit letter set (tests, custom alphabets).
    pub fn from_letters(letters: impl IntoIterator<Item = char>) -> Result<Self, ConfigError> {
        let allowed: BTreeSet<char> = letters.into_iter().collect();
        if allowed.is_empty() {
            return Err(ConfigError::NoLetters);
        }
        if allowed.len() > 26 {
            return Err(ConfigError::TooManyLetters(allowed.len()));
        }
        Ok(Self { allowed })
    }

    /// The fixed allowed-letter set.
    #[must_use]
    pub fn allowed(&self) -> &BTreeSet<char> {
        &self.allowed
    }

    /// Words may never shrink: each must be at least as long as the last
    /// accepted word. The very first move is unconstrained.
    pub(crate) fn check_min_length(
        &self,
        last_word: Option<&str>,
        word: &str,
    ) -> Result<(), MoveError> {
        if let Some(prev) = last_word {
            if word.len() < prev.len() {
                return Err(MoveError::TooShort {
                    word: word.to_string(),
                    required: prev.len(),
                    actual: word.len(),
                });
            }
        }
        Ok(())
    }

    /// The word's character set (duplicates collapsed) must be a subset of
    /// the allowed set.
    pub(crate) fn check_allowed_letters(&self, word: &str) -> Result<(), MoveError> {
        let illegal: BTreeSet<char> = word
            .chars()
            .filter(|c| !self.allowed.contains(c))
            .collect();

        if illegal.is_empty() {
            Ok(())
        } else {
            Err(MoveError::ForbiddenLetters {
                word: word.to_string(),
                illegal: illegal.into_iter().collect(),
            })
        }
    }
}
