//! Events emitted by the engine as rounds progress.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Events that occur during play
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameEvent {
    /// `round` is 1-based.
    RoundStarted { round: usize, word_len: usize },
    CorrectGuess(char),
    WrongGuess { letter: char, lives_remaining: u8 },
    HintRevealed(u8),
    RoundWon { word: String, points: u32 },
    RoundLost { word: String },
    RoundAbandoned,
    CatalogExhausted { score: u32 },
    SessionReset,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::RoundStarted { round, word_len } => {
                format!("round {round} started: {word_len} letters")
            }
            Self::CorrectGuess(letter) => format!("{letter} is in the word"),
            Self::WrongGuess {
                letter,
                lives_remaining,
            } => format!("{letter} is not in the word ({lives_remaining} lives left)"),
            Self::HintRevealed(rank) => format!("hint {rank} revealed"),
            Self::RoundWon { word, points } => format!("solved {word} for {points} points"),
            Self::RoundLost { word } => format!("out of lives, the word was {word}"),
            Self::RoundAbandoned => "round abandoned".to_string(),
            Self::CatalogExhausted { score } => {
                format!("all words completed with {score} points")
            }
            Self::SessionReset => "session reset".to_string(),
        };
        write!(f, "{repr}")
    }
}
