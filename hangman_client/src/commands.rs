use hangman::InputEvent;
use std::fmt;

/// A parsed line of plain-mode input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(InputEvent),
    Help,
    Quit,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace was entered.
    Empty,
    /// A whole word was entered instead of a single letter.
    MultipleLetters(String),
    /// A single character that is not A-Z.
    NotALetter(char),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Enter a letter or a command. Type 'help' to see commands"),
            Self::MultipleLetters(word) => write!(
                f,
                "Guess one letter at a time ('{}' has {} letters)",
                word,
                word.chars().count()
            ),
            Self::NotALetter(c) => write!(f, "'{}' is not a letter A-Z", c),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Type 'help' to see available commands",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a line of input into a Command.
///
/// # Examples
///
/// ```
/// use hangman::InputEvent;
/// use hangman_client::commands::{Command, parse_command};
///
/// assert_eq!(parse_command("e"), Ok(Command::Play(InputEvent::LetterPressed('e'))));
/// assert_eq!(parse_command("hint"), Ok(Command::Play(InputEvent::HintRequested)));
/// assert_eq!(parse_command("quit"), Ok(Command::Quit));
/// ```
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return Err(ParseError::Empty),
        (Some(c), None) if c.is_ascii_alphabetic() => {
            return Ok(Command::Play(InputEvent::LetterPressed(c)));
        }
        (Some('?'), None) => return Ok(Command::Help),
        (Some(c), None) => return Err(ParseError::NotALetter(c)),
        _ => {}
    }

    match trimmed.to_lowercase().as_str() {
        "hint" => Ok(Command::Play(InputEvent::HintRequested)),
        "next" | "new" => Ok(Command::Play(InputEvent::NewRoundRequested)),
        "reset" | "again" => Ok(Command::Play(InputEvent::ResetRequested)),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        word if word.chars().all(|c| c.is_ascii_alphabetic()) => {
            Err(ParseError::MultipleLetters(trimmed.to_string()))
        }
        _ => Err(ParseError::UnrecognizedCommand(trimmed.to_string())),
    }
}
