//! # Hangman
//!
//! A single-player word-guessing engine built as a small, explicit state
//! machine. The engine owns no I/O: an input adapter feeds it discrete
//! events and a presentation layer renders the [`GameView`] snapshot it
//! returns after every transition.
//!
//! ## Architecture
//!
//! - **Round**: one attempt at one word, `Playing` until it becomes `Won`
//!   or `Lost`. Both terminal states only accept `advance`.
//! - **Session**: score, streak, and catalog progress carried across
//!   rounds until an explicit reset.
//! - **Sequencing**: either walk the catalog in order until it is
//!   exhausted, or draw uniformly at random with replacement forever.
//!
//! ## Core Modules
//!
//! - [`game`]: catalog, round, session, sequencing, engine, view, events
//!
//! ## Example
//!
//! ```
//! use hangman::{Catalog, GameSettings, GameStatus, HangmanGame, InputEvent};
//!
//! let mut game = HangmanGame::new(Catalog::tech_words(), GameSettings::default());
//! let view = game.apply(InputEvent::LetterPressed('r'));
//! assert_eq!(view.status, GameStatus::Playing);
//! ```

/// Core game logic: catalog, round and session state, and the engine.
pub mod game;
pub use game::{
    catalog::{Catalog, CatalogError, WordEntry},
    engine::{GamePhase, HangmanGame, InputEvent, RoundStart},
    events::GameEvent,
    round::{GuessOutcome, IgnoreReason, MAX_HINTS, MAX_WRONG_GUESSES, RoundState, RoundStatus},
    sequencing::{SequencingMode, Sequencer, WordPicker},
    session::SessionState,
    settings::GameSettings,
    view::{GameStatus, GameView, RoundView, Tile},
};
