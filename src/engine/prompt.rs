//! Prompt rendering for the player whose turn it is.
//!
//! The engine never decides how text reaches a player; these helpers just
//! render the canonical facts (constraints, try budget, bracket format) so
//! embeddings do not have to reconstruct them from `RoundState`.

use crate::core::outcome::Outcome;
use crate::core::player::PlayerId;
use crate::core::state::RoundState;
use crate::rules::RuleSet;

/// Render the turn prompt for one player.
#[must_use]
pub fn turn_prompt(state: &RoundState, player: PlayerId, max_tries: u32) -> String {
    let tries_used = state.tries_used(player);
    let tries_remaining = max_tries.saturating_sub(tries_used);

    let mut prompt = format!("You are {player} in a word duel.\n");

    match state.rules() {
        RuleSet::LetterConstrained(rules) => {
            let letters: String = rules.allowed().iter().collect();
            prompt.push_str(&format!("Allowed letters: {letters}\n"));
            prompt.push_str("Your word must:\n");
            prompt.push_str("1. Use only the allowed letters\n");
            if let Some(last) = state.last_word() {
                prompt.push_str(&format!(
                    "2. Be at least {} letters long (the previous word was [{last}])\n",
                    last.len()
                ));
            } else {
                prompt.push_str("2. Be any length (no word has been played yet)\n");
            }
            prompt.push_str("3. Not repeat a word already used\n");
        }
        RuleSet::ChainConstrained(rules) => {
            if let Some(last) = state.last_word() {
                prompt.push_str(&format!("The current word is [{last}].\n"));
            }
            prompt.push_str(&format!(
                "Your word must start with '{}' and be exactly {} letters long.\n",
                rules.required_start(),
                rules.required_length()
            ));
            prompt.push_str("It cannot repeat a word already used.\n");
        }
    }

    prompt.push_str(&format!(
        "You have {tries_remaining} tries remaining (used {tries_used}/{max_tries}).\n"
    ));
    prompt.push_str("Wrap your word in square brackets, e.g. '[apple]'.\n");
    prompt
}

/// Render feedback for a turn outcome: the rejection reason with try counts,
/// or the terminal reason. Accepted moves produce no feedback line.
#[must_use]
pub fn move_feedback(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Continue => None,
        Outcome::InvalidMove {
            player,
            reason,
            tries_used,
            tries_remaining,
        } => {
            let max_tries = tries_used + tries_remaining;
            Some(format!(
                "{player}: {reason}. Try {tries_used}/{max_tries}. {tries_remaining} tries remaining."
            ))
        }
        Outcome::Draw { reason } | Outcome::Win { reason, .. } => Some(reason.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;
    use crate::rules::{ChainRules, LetterRules};

    #[test]
    fn test_letter_prompt_facts() {
        let rules = LetterRules::from_letters("aelpt".chars()).unwrap();
        let mut state = RoundState::new(RuleSet::LetterConstrained(rules));
        state.record_accept("apple".to_string());

        let prompt = turn_prompt(&state, PlayerId::new(1), 2);

        assert!(prompt.contains("Player 1"));
        assert!(prompt.contains("aelpt"));
        assert!(prompt.contains("at least 5 letters"));
        assert!(prompt.contains("used 0/2"));
    }

    #[test]
    fn test_chain_prompt_facts() {
        let mut state = RoundState::new(RuleSet::ChainConstrained(ChainRules::new("cat")));
        state.record_seed("cat".to_string());

        let prompt = turn_prompt(&state, PlayerId::new(0), 2);

        assert!(prompt.contains("[cat]"));
        assert!(prompt.contains("start with 't'"));
        assert!(prompt.contains("exactly 4 letters"));
    }

    #[test]
    fn test_move_feedback() {
        assert_eq!(move_feedback(&Outcome::Continue), None);

        let rejected = Outcome::InvalidMove {
            player: PlayerId::new(0),
            reason: MoveError::BadFormat,
            tries_used: 1,
            tries_remaining: 1,
        };
        let text = move_feedback(&rejected).unwrap();
        assert!(text.contains("Try 1/2"));
        assert!(text.contains("1 tries remaining"));

        let draw = Outcome::Draw {
            reason: "out of tries".to_string(),
        };
        assert_eq!(move_feedback(&draw), Some("out of tries".to_string()));
    }
}
