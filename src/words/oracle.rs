//! Vocabulary membership: the word oracle seam and a snapshot implementation.
//!
//! ## WordOracle
//!
//! The engine's only view of the dictionary: a membership test plus a
//! seed-word source for chain openings. Implementations must be cheap to
//! query and safe to share across concurrent game instances.
//!
//! ## Vocabulary
//!
//! A fixed snapshot of accepted words backed by an `FxHashSet` for O(1)
//! lookups. Built once, never mutated; share it via `Arc`.

use rustc_hash::FxHashSet;

use crate::core::rng::GameRng;

/// Oracle answering "is this word in the accepted vocabulary?".
///
/// Implementations are not required to normalize case; the engine lowercases
/// every candidate before asking.
pub trait WordOracle: Send + Sync {
    /// Membership test for a fixed vocabulary snapshot.
    fn is_word(&self, word: &str) -> bool;

    /// Candidate seed words no longer than `max_len`, for chain openings.
    ///
    /// The default implementation yields nothing, which is fine for oracles
    /// used only with the letter-constrained variant.
    fn seed_candidates(&self, max_len: usize) -> Vec<String> {
        let _ = max_len;
        Vec::new()
    }
}

/// A fixed vocabulary snapshot.
///
/// Words are lowercased at construction; empty strings are discarded.
///
/// ## Example
///
/// ```
/// use word_duel::words::{Vocabulary, WordOracle};
///
/// let vocab: Vocabulary = ["Apple", "cat", "turn"].into_iter().collect();
/// assert!(vocab.is_word("apple"));
/// assert!(!vocab.is_word("zebra"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    words: FxHashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from any word source.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a random seed word of at most `max_len` characters.
    ///
    /// Candidates are sorted before choosing so the pick depends only on the
    /// vocabulary contents and the RNG seed.
    #[must_use]
    pub fn seed_word(&self, max_len: usize, rng: &mut GameRng) -> Option<String> {
        let candidates = self.seed_candidates(max_len);
        rng.choose(&candidates).cloned()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl WordOracle for Vocabulary {
    fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn seed_candidates(&self, max_len: usize) -> Vec<String> {
        let mut candidates: Vec<String> = self
            .words
            .iter()
            .filter(|w| w.len() <= max_len)
            .cloned()
            .collect();
        candidates.sort();
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::new(["apple", "cat", "turn", "nurse", "Earthy"])
    }

    #[test]
    fn test_membership() {
        let v = vocab();
        assert!(v.is_word("apple"));
        assert!(v.is_word("cat"));
        assert!(!v.is_word("zebra"));
    }

    #[test]
    fn test_lowercased_at_construction() {
        let v = vocab();
        assert!(v.is_word("earthy"));
        assert!(!v.is_word("Earthy"));
    }

    #[test]
    fn test_empty_words_discarded() {
        let v = Vocabulary::new(["", "cat"]);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_seed_candidates_filtered_and_sorted() {
        let v = vocab();
        assert_eq!(v.seed_candidates(4), vec!["cat".to_string(), "turn".to_string()]);
        assert_eq!(v.seed_candidates(2), Vec::<String>::new());
    }

    #[test]
    fn test_seed_word_deterministic() {
        let v = vocab();
        let w1 = v.seed_word(5, &mut GameRng::new(42));
        let w2 = v.seed_word(5, &mut GameRng::new(42));
        assert_eq!(w1, w2);
        assert!(w1.is_some());
        assert!(w1.unwrap().len() <= 5);
    }

    #[test]
    fn test_seed_word_none_when_no_candidates() {
        let v = Vocabulary::new(["elephant"]);
        assert_eq!(v.seed_word(5, &mut GameRng::new(42)), None);
    }
}
