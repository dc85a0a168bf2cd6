//! Rule validation: the shared ordered pipeline plus per-variant checks.
//!
//! Both variants validate a move the same way; only the length/position
//! check and the letter/character check differ. The pipeline runs in a
//! fixed priority order so rejection messages are deterministic:
//!
//! 1. Parse failure (`BadFormat`)
//! 2. Variant length/position check (`TooShort` / `WrongLength`)
//! 3. Repetition (`AlreadyUsed`)
//! 4. Vocabulary membership (`NotAWord`)
//! 5. Variant letter/character check (`ForbiddenLetters` / `WrongStartLetter`)
//!
//! Cheap structural checks run before the vocabulary lookup, and alphabet
//! checks only run once structural shape is confirmed.

pub mod chain;
pub mod letters;

pub use chain::ChainRules;
pub use letters::{sample_letters, LetterRules, LETTER_WEIGHTS};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::outcome::Verdict;
use crate::core::state::RoundState;
use crate::error::MoveError;
use crate::words::{extract_word, WordOracle};

/// The variant-specific constraint fields and checks for one game.
///
/// Stored inside [`RoundState`] so the constraints advance with the round;
/// only the game state machine mutates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSet {
    /// Fixed allowed-letter set; words never shrink.
    LetterConstrained(LetterRules),
    /// Exact length increment; first letter chained to the previous last.
    ChainConstrained(ChainRules),
}

impl RuleSet {
    /// Run the full validation pipeline over one raw action.
    ///
    /// Pure with respect to the round state; the caller applies the verdict.
    pub fn validate(&self, state: &RoundState, oracle: &dyn WordOracle, raw: &str) -> Verdict {
        let Some(word) = extract_word(raw) else {
            return Verdict::Rejected(MoveError::BadFormat);
        };

        if let Err(reason) = self.check_shape(state, &word) {
            return Verdict::Rejected(reason);
        }

        if state.is_used(&word) {
            return Verdict::Rejected(MoveError::AlreadyUsed { word });
        }

        if !oracle.is_word(&word) {
            return Verdict::Rejected(MoveError::NotAWord { word });
        }

        if let Err(reason) = self.check_alphabet(&word) {
            return Verdict::Rejected(reason);
        }

        Verdict::Accepted(word)
    }

    fn check_shape(&self, state: &RoundState, word: &str) -> Result<(), MoveError> {
        match self {
            RuleSet::LetterConstrained(rules) => rules.check_min_length(state.last_word(), word),
            RuleSet::ChainConstrained(rules) => rules.check_exact_length(word),
        }
    }

    fn check_alphabet(&self, word: &str) -> Result<(), MoveError> {
        match self {
            RuleSet::LetterConstrained(rules) => rules.check_allowed_letters(word),
            RuleSet::ChainConstrained(rules) => rules.check_start_letter(word),
        }
    }

    /// Advance the constraint fields after an accepted word.
    pub(crate) fn advance(&mut self, word: &str) {
        match self {
            // The minimum length is derived from the history; nothing stored moves.
            RuleSet::LetterConstrained(_) => {}
            RuleSet::ChainConstrained(rules) => rules.advance(word),
        }
    }

    /// The allowed-letter set, if this is the letter-constrained variant.
    #[must_use]
    pub fn allowed_letters(&self) -> Option<&BTreeSet<char>> {
        match self {
            RuleSet::LetterConstrained(rules) => Some(rules.allowed()),
            RuleSet::ChainConstrained(_) => None,
        }
    }

    /// The required next start letter, if this is the chain variant.
    #[must_use]
    pub fn required_start(&self) -> Option<char> {
        match self {
            RuleSet::LetterConstrained(_) => None,
            RuleSet::ChainConstrained(rules) => Some(rules.required_start()),
        }
    }

    /// The required next length, if this is the chain variant.
    #[must_use]
    pub fn required_length(&self) -> Option<usize> {
        match self {
            RuleSet::LetterConstrained(_) => None,
            RuleSet::ChainConstrained(rules) => Some(rules.required_length()),
        }
    }
}
