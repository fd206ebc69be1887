//! Key mapping for the TUI.
//!
//! Only A-Z presses become guesses; every other key is either a control
//! intent or ignored before it reaches the engine.

use hangman::{GameStatus, InputEvent};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Play(InputEvent),
    ToggleHelp,
    Quit,
}

/// Map a key press to an action given the current game status.
#[must_use]
pub fn map_key(key: KeyEvent, status: GameStatus) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('n') => Some(Action::Play(InputEvent::NewRoundRequested)),
            KeyCode::Char('r') => Some(Action::Play(InputEvent::ResetRequested)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            Some(Action::Play(InputEvent::LetterPressed(c)))
        }
        KeyCode::Tab => Some(Action::Play(InputEvent::HintRequested)),
        // Enter accepts the result of a finished round.
        KeyCode::Enter => match status {
            GameStatus::Playing => None,
            GameStatus::Won | GameStatus::Lost | GameStatus::AllWordsCompleted => {
                Some(Action::Play(InputEvent::NewRoundRequested))
            }
        },
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
