//! Round state: the single mutable record of one game.
//!
//! ## RoundState
//!
//! Everything one game accumulates:
//! - Turn counter and current player
//! - Accepted word history (ordered) plus its set form for O(1) repetition checks
//! - Cumulative per-player try counters
//! - Which players have made at least one valid move
//! - The variant constraint fields ([`RuleSet`])
//!
//! Created at reset, mutated exactly once per turn by the game state machine,
//! and discarded on a terminal outcome or the next reset. Collaborators
//! (validators, prompt rendering) only ever see `&RoundState`; the mutators
//! are crate-private.
//!
//! Uses `im` persistent data structures so a snapshot is a cheap structural
//! clone.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::player::{PlayerId, PlayerPair};
use crate::rules::RuleSet;

/// Mutable per-game record. See the module docs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState {
    /// Turns processed so far (accepted or rejected). Starts at 0.
    turn_index: u32,

    /// Whose move it is. Alternates on accepted moves only.
    current_player: PlayerId,

    /// Accepted words in play order. For the chain variant, entry 0 is the seed.
    word_history: Vector<String>,

    /// Set form of `word_history`.
    used_words: ImHashSet<String>,

    /// Cumulative invalid-attempt counters. Never reset by an accepted move.
    try_counts: PlayerPair<u32>,

    /// Players who have had at least one accepted move. Grows monotonically.
    valid_movers: PlayerPair<bool>,

    /// Variant constraint fields, advanced on every accepted move.
    rules: RuleSet,
}

impl RoundState {
    /// Create a fresh round. Player 0 moves first.
    pub(crate) fn new(rules: RuleSet) -> Self {
        Self {
            turn_index: 0,
            current_player: PlayerId::new(0),
            word_history: Vector::new(),
            used_words: ImHashSet::new(),
            try_counts: PlayerPair::with_value(0),
            valid_movers: PlayerPair::with_value(false),
            rules,
        }
    }

    /// Record the chain variant's seed word.
    ///
    /// The seed occupies history slot 0 and counts as used, but credits
    /// neither player with a valid move.
    pub(crate) fn record_seed(&mut self, word: String) {
        debug_assert!(self.word_history.is_empty());
        self.used_words.insert(word.clone());
        self.word_history.push_back(word);
    }

    /// Apply an accepted move: credit the player, grow the history, advance
    /// the constraints, and pass the turn to the opponent.
    pub(crate) fn record_accept(&mut self, word: String) {
        self.valid_movers[self.current_player] = true;
        self.used_words.insert(word.clone());
        self.rules.advance(&word);
        self.word_history.push_back(word);
        self.current_player = self.current_player.opponent();
        self.turn_index += 1;

        debug_assert_eq!(self.word_history.len(), self.used_words.len());
    }

    /// Apply a rejected move: charge the current player one try.
    ///
    /// The turn does not pass; the same player retries. Returns the player's
    /// new cumulative try count.
    pub(crate) fn record_reject(&mut self) -> u32 {
        self.try_counts[self.current_player] += 1;
        self.turn_index += 1;
        self.try_counts[self.current_player]
    }

    // === Read access for collaborators ===

    /// Turns processed so far.
    #[must_use]
    pub fn turn_index(&self) -> u32 {
        self.turn_index
    }

    /// Whose move it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Accepted words in play order.
    #[must_use]
    pub fn word_history(&self) -> &Vector<String> {
        &self.word_history
    }

    /// The most recently accepted word, if any.
    #[must_use]
    pub fn last_word(&self) -> Option<&str> {
        self.word_history.back().map(String::as_str)
    }

    /// Has this word been accepted before?
    #[must_use]
    pub fn is_used(&self, word: &str) -> bool {
        self.used_words.contains(word)
    }

    /// A player's cumulative invalid-attempt count.
    #[must_use]
    pub fn tries_used(&self, player: PlayerId) -> u32 {
        self.try_counts[player]
    }

    /// Has this player made at least one valid move?
    #[must_use]
    pub fn has_valid_move(&self, player: PlayerId) -> bool {
        self.valid_movers[player]
    }

    /// How many players have made at least one valid move (0-2).
    #[must_use]
    pub fn valid_mover_count(&self) -> usize {
        PlayerId::both().filter(|&p| self.valid_movers[p]).count()
    }

    /// The variant constraint fields.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The allowed-letter set (letter-constrained variant only).
    #[must_use]
    pub fn allowed_letters(&self) -> Option<&BTreeSet<char>> {
        self.rules.allowed_letters()
    }

    /// The required next start letter (chain variant only).
    #[must_use]
    pub fn required_start(&self) -> Option<char> {
        self.rules.required_start()
    }

    /// The required next length (chain variant only).
    #[must_use]
    pub fn required_length(&self) -> Option<usize> {
        self.rules.required_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ChainRules, LetterRules};

    fn letter_state() -> RoundState {
        let rules = LetterRules::from_letters("aelpt".chars()).unwrap();
        RoundState::new(RuleSet::LetterConstrained(rules))
    }

    #[test]
    fn test_new_round() {
        let state = letter_state();

        assert_eq!(state.turn_index(), 0);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert!(state.word_history().is_empty());
        assert_eq!(state.last_word(), None);
        assert_eq!(state.tries_used(PlayerId::new(0)), 0);
        assert_eq!(state.valid_mover_count(), 0);
    }

    #[test]
    fn test_record_accept_advances_turn() {
        let mut state = letter_state();

        state.record_accept("apple".to_string());

        assert_eq!(state.turn_index(), 1);
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.last_word(), Some("apple"));
        assert!(state.is_used("apple"));
        assert!(state.has_valid_move(PlayerId::new(0)));
        assert!(!state.has_valid_move(PlayerId::new(1)));
        assert_eq!(state.valid_mover_count(), 1);
    }

    #[test]
    fn test_record_reject_keeps_turn() {
        let mut state = letter_state();

        let tries = state.record_reject();

        assert_eq!(tries, 1);
        assert_eq!(state.turn_index(), 1);
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert_eq!(state.tries_used(PlayerId::new(0)), 1);
        assert_eq!(state.tries_used(PlayerId::new(1)), 0);
    }

    #[test]
    fn test_try_counts_are_cumulative() {
        let mut state = letter_state();

        state.record_reject();
        state.record_accept("apple".to_string());

        // Accepting does not refund tries.
        assert_eq!(state.tries_used(PlayerId::new(0)), 1);
    }

    #[test]
    fn test_history_and_set_stay_in_sync() {
        let mut state = letter_state();

        state.record_accept("tea".to_string());
        state.record_accept("apple".to_string());
        state.record_accept("pallet".to_string());

        assert_eq!(state.word_history().len(), 3);
        for word in state.word_history() {
            assert!(state.is_used(word));
        }
    }

    #[test]
    fn test_seed_credits_no_player() {
        let mut state = RoundState::new(RuleSet::ChainConstrained(ChainRules::new("cat")));
        state.record_seed("cat".to_string());

        assert_eq!(state.word_history().len(), 1);
        assert!(state.is_used("cat"));
        assert_eq!(state.valid_mover_count(), 0);
        assert_eq!(state.turn_index(), 0);
        assert_eq!(state.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = letter_state();
        state.record_accept("apple".to_string());

        let snapshot = state.clone();
        state.record_accept("pallet".to_string());

        assert_eq!(snapshot.word_history().len(), 1);
        assert_eq!(state.word_history().len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = letter_state();
        state.record_accept("apple".to_string());
        state.record_reject();

        let json = serde_json::to_string(&state).unwrap();
        let restored: RoundState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.turn_index(), state.turn_index());
        assert_eq!(restored.current_player(), state.current_player());
        assert_eq!(restored.last_word(), state.last_word());
        assert_eq!(restored.tries_used(PlayerId::new(0)), 1);
    }
}
