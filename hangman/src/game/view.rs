//! Read-only snapshots handed to the presentation layer.
//!
//! A snapshot never carries a hidden letter. The full word only appears in
//! [`RoundView::answer`] once the round is over.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    round::{RoundState, RoundStatus},
    sequencing::SequencingMode,
    session::SessionState,
};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    AllWordsCompleted,
}

impl From<RoundStatus> for GameStatus {
    fn from(value: RoundStatus) -> Self {
        match value {
            RoundStatus::Playing => Self::Playing,
            RoundStatus::Won => Self::Won,
            RoundStatus::Lost => Self::Lost,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::AllWordsCompleted => "all words completed",
        };
        write!(f, "{repr}")
    }
}

/// One letter position of the active word.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Tile {
    Hidden,
    /// The letter as written in the catalog.
    Revealed(char),
}

impl Tile {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RoundView {
    pub tiles: Vec<Tile>,
    pub guessed_letters: Vec<char>,
    pub wrong_guesses: u8,
    pub lives_remaining: u8,
    pub hints_revealed: u8,
    pub hints: Vec<String>,
    pub answer: Option<String>,
}

impl From<&RoundState> for RoundView {
    fn from(round: &RoundState) -> Self {
        let tiles = round
            .entry()
            .word
            .chars()
            .enumerate()
            .map(|(idx, c)| {
                if round.is_revealed(idx) {
                    Tile::Revealed(c)
                } else {
                    Tile::Hidden
                }
            })
            .collect();

        Self {
            tiles,
            guessed_letters: round.guessed_letters().iter().copied().collect(),
            wrong_guesses: round.wrong_guesses(),
            lives_remaining: round.lives_remaining(),
            hints_revealed: round.hints_revealed(),
            hints: round
                .visible_hints()
                .into_iter()
                .map(str::to_string)
                .collect(),
            answer: round
                .status()
                .is_over()
                .then(|| round.entry().word.clone()),
        }
    }
}

/// Everything the presentation layer may show after a transition.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameView {
    pub status: GameStatus,
    /// `None` once the catalog is exhausted.
    pub round: Option<RoundView>,
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub words_completed: usize,
    pub round_index: usize,
    pub catalog_len: usize,
    pub sequencing: SequencingMode,
}

impl GameView {
    #[must_use]
    pub fn new(
        round: Option<&RoundState>,
        session: &SessionState,
        catalog_len: usize,
        sequencing: SequencingMode,
    ) -> Self {
        let status = round.map_or(GameStatus::AllWordsCompleted, |r| r.status().into());
        Self {
            status,
            round: round.map(RoundView::from),
            score: session.score,
            streak: session.streak,
            best_streak: session.best_streak,
            words_completed: session.words_completed.len(),
            round_index: session.round_index,
            catalog_len,
            sequencing,
        }
    }
}
