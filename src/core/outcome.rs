//! Turn outcomes and terminal results.
//!
//! ## Verdict
//!
//! The result of validating one candidate move: accepted with the normalized
//! word, or rejected with a reason.
//!
//! ## Outcome
//!
//! The signal a turn produces: the game continues, an invalid move was
//! recorded against the acting player, or the game ended (draw or win).
//! `Draw` and `Win` are normal end states, not errors.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::error::MoveError;

/// Result of validating one candidate word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The move is legal; carries the normalized (lowercased) word.
    Accepted(String),
    /// The move is illegal; carries the rejection reason.
    Rejected(MoveError),
}

/// Result of processing one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The move was accepted; play passes to the other player.
    Continue,
    /// The move was rejected and recorded against the player's try budget.
    /// The same player acts again next turn.
    InvalidMove {
        player: PlayerId,
        reason: MoveError,
        tries_used: u32,
        tries_remaining: u32,
    },
    /// The game ended with no winner.
    Draw { reason: String },
    /// The game ended decisively.
    Win { winner: PlayerId, reason: String },
}

impl Outcome {
    /// Check if this outcome ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Draw { .. } | Outcome::Win { .. })
    }

    /// The condensed terminal result, if this outcome is terminal.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            Outcome::Draw { .. } => Some(GameResult::Draw),
            Outcome::Win { winner, .. } => Some(GameResult::Winner(*winner)),
            _ => None,
        }
    }
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}
