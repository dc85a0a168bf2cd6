//! Chain variant: exact length increment, first letter chained to last.
//!
//! Every word must be exactly one letter longer than the previous word and
//! start with its last letter. The opening word is a short seed drawn from
//! the vocabulary; capping its length keeps the minimum chain length low,
//! so games stay finite against a finite vocabulary even though word length
//! only ever grows.

use serde::{Deserialize, Serialize};

use crate::error::MoveError;

/// Constraint fields for the chain variant: what the next word must look like.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainRules {
    required_start: char,
    required_length: usize,
}

impl ChainRules {
    /// Derive the opening constraints from the seed word.
    pub(crate) fn new(seed_word: &str) -> Self {
        let required_start = seed_word
            .chars()
            .next_back()
            .expect("seed word must be non-empty");

        Self {
            required_start,
            required_length: seed_word.len() + 1,
        }
    }

    /// The letter the next word must start with.
    #[must_use]
    pub fn required_start(&self) -> char {
        self.required_start
    }

    /// The exact length the next word must have.
    #[must_use]
    pub fn required_length(&self) -> usize {
        self.required_length
    }

    /// Exactly one letter longer than the previous word - not same, not more.
    pub(crate) fn check_exact_length(&self, word: &str) -> Result<(), MoveError> {
        if word.len() != self.required_length {
            return Err(MoveError::WrongLength {
                word: word.to_string(),
                required: self.required_length,
                actual: word.len(),
            });
        }
        Ok(())
    }

    /// The word must start with the previous word's last letter.
    pub(crate) fn check_start_letter(&self, word: &str) -> Result<(), MoveError> {
        if !word.starts_with(self.required_start) {
            return Err(MoveError::WrongStartLetter {
                word: word.to_string(),
                required: self.required_start,
            });
        }
        Ok(())
    }

    /// Advance the chain constraints after an accepted word.
    pub(crate) fn advance(&mut self, word: &str) {
        if let Some(last) = word.chars().next_back() {
            self.required_start = last;
        }
        self.required_length = word.len() + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_seed() {
        let rules = ChainRules::new("cat");
        assert_eq!(rules.required_start(), 't');
        assert_eq!(rules.required_length(), 4);
    }

    #[test]
    fn test_check_exact_length() {
        let rules = ChainRules::new("cat");

        assert!(rules.check_exact_length("turn").is_ok());

        // Same length as the seed is wrong; so is skipping ahead
        let err = rules.check_exact_length("tan").unwrap_err();
        assert_eq!(
            err,
            MoveError::WrongLength {
                word: "tan".to_string(),
                required: 4,
                actual: 3,
            }
        );
        assert!(rules.check_exact_length("toast").is_err());
    }

    #[test]
    fn test_check_start_letter() {
        let rules = ChainRules::new("cat");

        assert!(rules.check_start_letter("turn").is_ok());

        let err = rules.check_start_letter("apple").unwrap_err();
        assert_eq!(
            err,
            MoveError::WrongStartLetter {
                word: "apple".to_string(),
                required: 't',
            }
        );
    }

    #[test]
    fn test_advance() {
        let mut rules = ChainRules::new("cat");

        rules.advance("turn");
        assert_eq!(rules.required_start(), 'n');
        assert_eq!(rules.required_length(), 5);

        rules.advance("nurse");
        assert_eq!(rules.required_start(), 'e');
        assert_eq!(rules.required_length(), 6);
    }
}
