//! Game orchestration: one state machine per game instance.
//!
//! ## Game
//!
//! Drives one turn per [`Game::submit_action`] call:
//! parse -> validate -> adjudicate -> mutate round state -> emit [`Outcome`].
//!
//! ## The zero-sum try-limit policy
//!
//! Both variants resolve verdicts identically:
//! - Accepted moves pass the turn and are never penalized.
//! - Rejected moves charge the acting player one try (cumulative across the
//!   whole game) and leave the turn with them.
//! - The first rejection past `max_tries` is terminal: a draw while either
//!   player has yet to make a valid move (early exhaustion reads as
//!   confusion, not skill), a win for the opponent once both have.
//!
//! There is no proactive "no valid moves left" detection; a stuck player
//! reaches a terminal outcome only by exhausting the try limit.

pub mod prompt;

use log::{debug, info};
use std::sync::Arc;

use crate::core::outcome::{GameResult, Outcome, Verdict};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::RoundState;
use crate::error::ConfigError;
use crate::rules::{ChainRules, LetterRules, RuleSet};
use crate::words::WordOracle;

/// Configuration for the letter-constrained (spelling duel) variant.
#[derive(Clone, Copy, Debug)]
pub struct SpellingConfig {
    /// Number of distinct allowed letters to sample.
    pub num_letters: usize,
    /// Invalid-move budget per player.
    pub max_tries: u32,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        Self {
            num_letters: 7,
            max_tries: 2,
        }
    }
}

/// Configuration for the chain variant.
#[derive(Clone, Copy, Debug)]
pub struct ChainConfig {
    /// Maximum length of the randomly chosen seed word.
    pub max_seed_len: usize,
    /// Invalid-move budget per player.
    pub max_tries: u32,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_seed_len: 5,
            max_tries: 2,
        }
    }
}

/// How to derive a fresh round at construction and reset time.
#[derive(Clone, Debug)]
enum Variant {
    SampledLetters { num_letters: usize },
    FixedLetters { letters: Vec<char> },
    Chain { max_seed_len: usize },
}

/// A single two-player word game.
///
/// Strictly sequential: the caller supplies one action per turn. The oracle
/// is shared and immutable; the round state is exclusively owned here.
#[derive(Clone)]
pub struct Game {
    oracle: Arc<dyn WordOracle>,
    variant: Variant,
    max_tries: u32,
    rng: GameRng,
    state: RoundState,
    finished: Option<Outcome>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("oracle", &"<dyn WordOracle>")
            .field("variant", &self.variant)
            .field("max_tries", &self.max_tries)
            .field("rng", &self.rng)
            .field("state", &self.state)
            .field("finished", &self.finished)
            .finish()
    }
}

impl Game {
    /// Create a letter-constrained game with a freshly sampled alphabet.
    pub fn spelling_duel(
        oracle: Arc<dyn WordOracle>,
        config: SpellingConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::build(
            oracle,
            Variant::SampledLetters {
                num_letters: config.num_letters,
            },
            config.max_tries,
            seed,
        )
    }

    /// Create a letter-constrained game with a fixed alphabet instead of a
    /// sampled one (rematches with a known set, tests).
    pub fn spelling_duel_with_letters(
        oracle: Arc<dyn WordOracle>,
        letters: impl IntoIterator<Item = char>,
        max_tries: u32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::build(
            oracle,
            Variant::FixedLetters {
                letters: letters.into_iter().collect(),
            },
            max_tries,
            seed,
        )
    }

    /// Create a chain game; the opening seed word is drawn from the oracle's
    /// candidates of at most `max_seed_len` characters.
    pub fn word_chain(
        oracle: Arc<dyn WordOracle>,
        config: ChainConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::build(
            oracle,
            Variant::Chain {
                max_seed_len: config.max_seed_len,
            },
            config.max_tries,
            seed,
        )
    }

    fn build(
        oracle: Arc<dyn WordOracle>,
        variant: Variant,
        max_tries: u32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if max_tries == 0 {
            return Err(ConfigError::ZeroTries);
        }

        let mut rng = GameRng::new(seed);
        let state = fresh_state(oracle.as_ref(), &variant, &mut rng)?;

        info!("new game (seed {seed}, max_tries {max_tries})");

        Ok(Self {
            oracle,
            variant,
            max_tries,
            rng,
            state,
            finished: None,
        })
    }

    /// Start over: a fresh round (fresh letters or seed word) from a new seed.
    ///
    /// The previous round state is discarded.
    pub fn reset(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.rng = GameRng::new(seed);
        self.state = fresh_state(self.oracle.as_ref(), &self.variant, &mut self.rng)?;
        self.finished = None;
        info!("game reset (seed {seed})");
        Ok(())
    }

    /// Process one turn.
    ///
    /// After a terminal outcome this returns that outcome unchanged and
    /// mutates nothing; call [`Game::reset`] to play again.
    pub fn submit_action(&mut self, raw: &str) -> Outcome {
        if let Some(done) = &self.finished {
            return done.clone();
        }

        let verdict = self.state.rules().validate(&self.state, self.oracle.as_ref(), raw);
        let outcome = self.resolve_verdict(verdict);

        if outcome.is_terminal() {
            self.finished = Some(outcome.clone());
        }

        outcome
    }

    /// The shared zero-sum try-limit policy.
    fn resolve_verdict(&mut self, verdict: Verdict) -> Outcome {
        let player = self.state.current_player();

        match verdict {
            Verdict::Accepted(word) => {
                debug!("{player} played [{word}]");
                self.state.record_accept(word);
                Outcome::Continue
            }
            Verdict::Rejected(reason) => {
                let tries = self.state.record_reject();
                debug!("{player} move rejected ({tries}/{}): {reason}", self.max_tries);

                if tries <= self.max_tries {
                    return Outcome::InvalidMove {
                        player,
                        reason,
                        tries_used: tries,
                        tries_remaining: self.max_tries - tries,
                    };
                }

                // Limit just exceeded: terminal either way.
                if self.state.valid_mover_count() < 2 {
                    Outcome::Draw {
                        reason: format!(
                            "{player} exceeded {} tries during the first round. Game ends in a draw.",
                            self.max_tries
                        ),
                    }
                } else {
                    let winner = player.opponent();
                    Outcome::Win {
                        winner,
                        reason: format!(
                            "{player} exceeded {} tries. {winner} wins!",
                            self.max_tries
                        ),
                    }
                }
            }
        }
    }

    /// Whose move it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// Read-only view of the round state, for prompt/rendering collaborators.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// A cheap structural clone of the round state.
    #[must_use]
    pub fn snapshot(&self) -> RoundState {
        self.state.clone()
    }

    /// The per-player invalid-move budget.
    #[must_use]
    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Has the game reached a terminal outcome?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// The condensed terminal result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.finished.as_ref().and_then(Outcome::result)
    }

    /// The canonical prompt for a player's turn.
    #[must_use]
    pub fn prompt(&self, player: PlayerId) -> String {
        prompt::turn_prompt(&self.state, player, self.max_tries)
    }
}

/// Derive a fresh round for the given variant.
fn fresh_state(
    oracle: &dyn WordOracle,
    variant: &Variant,
    rng: &mut GameRng,
) -> Result<RoundState, ConfigError> {
    match variant {
        Variant::SampledLetters { num_letters } => {
            let rules = LetterRules::new(*num_letters, rng)?;
            Ok(RoundState::new(RuleSet::LetterConstrained(rules)))
        }
        Variant::FixedLetters { letters } => {
            let rules = LetterRules::from_letters(letters.iter().copied())?;
            Ok(RoundState::new(RuleSet::LetterConstrained(rules)))
        }
        Variant::Chain { max_seed_len } => {
            let candidates = oracle.seed_candidates(*max_seed_len);
            let seed_word = rng.choose(&candidates).cloned().ok_or(ConfigError::NoSeedWord {
                max_len: *max_seed_len,
            })?;

            let mut state = RoundState::new(RuleSet::ChainConstrained(ChainRules::new(&seed_word)));
            state.record_seed(seed_word);
            Ok(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;
    use crate::words::Vocabulary;

    fn vocab() -> Arc<Vocabulary> {
        Arc::new(Vocabulary::new([
            "apple", "pleat", "pallet", "tea", "cat", "turn", "nurse",
        ]))
    }

    fn letter_game(max_tries: u32) -> Game {
        Game::spelling_duel_with_letters(vocab(), "aelpt".chars(), max_tries, 42).unwrap()
    }

    #[test]
    fn test_zero_tries_is_config_error() {
        let err = Game::spelling_duel_with_letters(vocab(), "ae".chars(), 0, 42).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTries);
    }

    #[test]
    fn test_too_many_letters_is_config_error() {
        let config = SpellingConfig {
            num_letters: 27,
            max_tries: 2,
        };
        let err = Game::spelling_duel(vocab(), config, 42).unwrap_err();
        assert_eq!(err, ConfigError::TooManyLetters(27));
    }

    #[test]
    fn test_no_seed_word_is_config_error() {
        let tiny = Arc::new(Vocabulary::new(["elephant"]));
        let config = ChainConfig::default();
        let err = Game::word_chain(tiny, config, 42).unwrap_err();
        assert_eq!(err, ConfigError::NoSeedWord { max_len: 5 });
    }

    #[test]
    fn test_sampled_letters_deterministic() {
        let config = SpellingConfig::default();
        let g1 = Game::spelling_duel(vocab(), config, 7).unwrap();
        let g2 = Game::spelling_duel(vocab(), config, 7).unwrap();

        assert_eq!(g1.state().allowed_letters(), g2.state().allowed_letters());
    }

    #[test]
    fn test_accept_passes_turn() {
        let mut game = letter_game(2);

        assert_eq!(game.current_player(), PlayerId::new(0));
        assert_eq!(game.submit_action("[apple]"), Outcome::Continue);
        assert_eq!(game.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_reject_keeps_turn_and_counts() {
        let mut game = letter_game(2);

        let outcome = game.submit_action("gibberish");
        assert_eq!(
            outcome,
            Outcome::InvalidMove {
                player: PlayerId::new(0),
                reason: MoveError::BadFormat,
                tries_used: 1,
                tries_remaining: 1,
            }
        );
        assert_eq!(game.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_first_round_exhaustion_is_draw() {
        let mut game = letter_game(2);

        game.submit_action("x");
        game.submit_action("x");
        let outcome = game.submit_action("x");

        assert!(matches!(outcome, Outcome::Draw { .. }));
        assert_eq!(game.result(), Some(GameResult::Draw));
    }

    #[test]
    fn test_post_first_round_exhaustion_is_win() {
        let mut game = letter_game(1);

        assert_eq!(game.submit_action("[tea]"), Outcome::Continue); // player 0
        assert_eq!(game.submit_action("[pleat]"), Outcome::Continue); // player 1

        // Player 0 burns through the budget.
        assert!(matches!(
            game.submit_action("x"),
            Outcome::InvalidMove { .. }
        ));
        let outcome = game.submit_action("x");

        assert_eq!(
            outcome.result(),
            Some(GameResult::Winner(PlayerId::new(1)))
        );
        assert!(game.result().unwrap().is_winner(PlayerId::new(1)));
    }

    #[test]
    fn test_terminal_is_idempotent() {
        let mut game = letter_game(1);

        game.submit_action("x");
        let terminal = game.submit_action("x");
        assert!(terminal.is_terminal());

        let snapshot = game.snapshot();
        let replay = game.submit_action("[apple]");

        assert_eq!(replay, terminal);
        assert_eq!(game.state().turn_index(), snapshot.turn_index());
        assert!(game.state().word_history().is_empty());
    }

    #[test]
    fn test_reset_clears_round() {
        let mut game = letter_game(1);
        game.submit_action("x");
        game.submit_action("x");
        assert!(game.is_finished());

        game.reset(43).unwrap();

        assert!(!game.is_finished());
        assert_eq!(game.state().turn_index(), 0);
        assert_eq!(game.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_chain_game_plays_through() {
        let vocab = Arc::new(Vocabulary::new(["cat", "turn", "nurse"]));
        let config = ChainConfig {
            max_seed_len: 3,
            max_tries: 2,
        };
        let mut game = Game::word_chain(vocab, config, 42).unwrap();

        assert_eq!(game.state().last_word(), Some("cat"));
        assert_eq!(game.state().required_start(), Some('t'));
        assert_eq!(game.state().required_length(), Some(4));

        assert_eq!(game.submit_action("[turn]"), Outcome::Continue);
        assert_eq!(game.state().required_start(), Some('n'));
        assert_eq!(game.state().required_length(), Some(5));

        assert_eq!(game.submit_action("[nurse]"), Outcome::Continue);
        assert_eq!(game.state().word_history().len(), 3);
    }
}
