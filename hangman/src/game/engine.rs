//! The round engine: the controller-owned object that sequences words,
//! forwards guesses and hints to the active round, and applies their
//! results to the session.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::{
    catalog::Catalog,
    events::GameEvent,
    round::{GuessOutcome, IgnoreReason, RoundState, RoundStatus},
    sequencing::{Sequencer, WordPicker},
    session::SessionState,
    settings::GameSettings,
    view::{GameStatus, GameView},
};

/// Discrete intents forwarded by an input adapter.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum InputEvent {
    LetterPressed(char),
    HintRequested,
    NewRoundRequested,
    ResetRequested,
}

/// Session-level phase.
#[derive(Clone, Debug)]
pub enum GamePhase {
    Round(RoundState),
    /// Sequential mode ran past the last catalog entry. Only a reset
    /// leaves this phase.
    Exhausted,
}

/// Result of trying to begin a round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundStart {
    Started,
    CatalogExhausted,
}

/// A hangman game with its catalog, session, and current phase.
#[derive(Debug)]
pub struct HangmanGame {
    catalog: Catalog,
    settings: GameSettings,
    sequencer: Sequencer,
    session: SessionState,
    phase: GamePhase,
    /// Queue of events since the last drain, oldest first.
    events: VecDeque<GameEvent>,
}

impl HangmanGame {
    /// Create a session and start its first round.
    #[must_use]
    pub fn new(catalog: Catalog, settings: GameSettings) -> Self {
        let sequencer = Sequencer::new(settings.sequencing, settings.seed);
        let mut game = Self {
            catalog,
            settings,
            sequencer,
            session: SessionState::new(),
            phase: GamePhase::Exhausted,
            events: VecDeque::new(),
        };
        game.start_round();
        game
    }

    /// Pick the next word and begin a fresh round, or enter the exhausted
    /// phase if the sequencer has nothing left.
    pub fn start_round(&mut self) -> RoundStart {
        let next = self
            .sequencer
            .pick(&self.session, self.catalog.len())
            .and_then(|idx| self.catalog.get(idx));

        match next {
            Some(entry) => {
                let round = RoundState::new(entry);
                let number = self.session.round_index + 1;
                debug!("round {number} started ({} letters)", round.word_len());
                self.events.push_back(GameEvent::RoundStarted {
                    round: number,
                    word_len: round.word_len(),
                });
                self.phase = GamePhase::Round(round);
                RoundStart::Started
            }
            None => {
                if matches!(self.phase, GamePhase::Round(_)) {
                    info!(
                        "catalog exhausted after {} rounds with {} points",
                        self.session.round_index, self.session.score
                    );
                    self.events.push_back(GameEvent::CatalogExhausted {
                        score: self.session.score,
                    });
                }
                self.phase = GamePhase::Exhausted;
                RoundStart::CatalogExhausted
            }
        }
    }

    /// Guess a letter in the active round and settle the session if the
    /// guess ended it.
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        let GamePhase::Round(round) = &mut self.phase else {
            return GuessOutcome::Ignored(IgnoreReason::RoundOver);
        };

        let outcome = round.guess_letter(letter);
        match outcome {
            GuessOutcome::Ignored(reason) => {
                debug!("guess {letter:?} ignored: {reason:?}");
            }
            GuessOutcome::Correct(letter) => {
                self.events.push_back(GameEvent::CorrectGuess(letter));
            }
            GuessOutcome::Wrong(letter) => {
                self.events.push_back(GameEvent::WrongGuess {
                    letter,
                    lives_remaining: round.lives_remaining(),
                });
            }
            GuessOutcome::Won(letter) => {
                let entry = round.entry();
                let points = self.session.record_win(entry);
                info!(
                    "won {} for {points} points (score {}, streak {})",
                    entry.word, self.session.score, self.session.streak
                );
                self.events.push_back(GameEvent::CorrectGuess(letter));
                self.events.push_back(GameEvent::RoundWon {
                    word: entry.word.clone(),
                    points,
                });
            }
            GuessOutcome::Lost(letter) => {
                self.session.record_loss();
                let word = round.entry().word.clone();
                info!("lost {word} (score {})", self.session.score);
                self.events.push_back(GameEvent::WrongGuess {
                    letter,
                    lives_remaining: 0,
                });
                self.events.push_back(GameEvent::RoundLost { word });
            }
        }
        outcome
    }

    /// Reveal the next hint of the active round.
    pub fn use_hint(&mut self) -> bool {
        let GamePhase::Round(round) = &mut self.phase else {
            return false;
        };
        let revealed = round.use_hint();
        if revealed {
            debug!("hint {} revealed", round.hints_revealed());
            self.events
                .push_back(GameEvent::HintRevealed(round.hints_revealed()));
        }
        revealed
    }

    /// Discard the current round and start the next one.
    ///
    /// A round still in play is abandoned without touching the session, so
    /// sequential mode serves the same entry again.
    pub fn advance(&mut self) -> RoundStart {
        match &self.phase {
            GamePhase::Exhausted => {
                debug!("advance ignored: catalog exhausted");
                RoundStart::CatalogExhausted
            }
            GamePhase::Round(round) => {
                if round.status() == RoundStatus::Playing {
                    debug!("round {} abandoned", self.session.round_index + 1);
                    self.events.push_back(GameEvent::RoundAbandoned);
                }
                self.start_round()
            }
        }
    }

    /// Zero the session and start over from the first round.
    pub fn reset(&mut self) -> RoundStart {
        info!("session reset");
        self.session.reset();
        self.events.push_back(GameEvent::SessionReset);
        self.start_round()
    }

    /// Single entry point for input adapters.
    pub fn apply(&mut self, event: InputEvent) -> GameView {
        match event {
            InputEvent::LetterPressed(letter) => {
                self.guess_letter(letter);
            }
            InputEvent::HintRequested => {
                self.use_hint();
            }
            InputEvent::NewRoundRequested => {
                self.advance();
            }
            InputEvent::ResetRequested => {
                self.reset();
            }
        }
        self.view()
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::new(
            self.round(),
            &self.session,
            self.catalog.len(),
            self.sequencer.mode(),
        )
    }

    pub fn drain_events(&mut self) -> VecDeque<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match &self.phase {
            GamePhase::Round(round) => round.status().into(),
            GamePhase::Exhausted => GameStatus::AllWordsCompleted,
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        match &self.phase {
            GamePhase::Round(round) => Some(round),
            GamePhase::Exhausted => None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }
}
