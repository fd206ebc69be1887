//! Line-oriented front end.
//!
//! Reads one command per line and prints a snapshot after every
//! transition, either as text or as one JSON object per line.

use anyhow::{Context, Result};
use hangman::{GameEvent, GameView, HangmanGame};
use std::io::{BufRead, Write};

use crate::{
    commands::{Command, parse_command},
    render,
};

pub const HELP: &str = "\
<letter>
        Guess a single letter A-Z (case-insensitive).
hint
        Reveal the next hint (2 per word, no penalty).
next | new
        Move on to the next word. Mid-round this restarts the current word.
again | reset
        Start over with score, streak, and progress at zero.
help | ?
        Show this help.
quit | exit
        Leave the game.
";

pub struct CliApp {
    game: HangmanGame,
    json: bool,
}

impl CliApp {
    #[must_use]
    pub fn new(game: HangmanGame, json: bool) -> Self {
        Self { game, json }
    }

    #[must_use]
    pub fn game(&self) -> &HangmanGame {
        &self.game
    }

    fn write_view<W: Write>(&self, view: &GameView, output: &mut W) -> Result<()> {
        if self.json {
            let json = serde_json::to_string(view).context("Failed to serialize view")?;
            writeln!(output, "{json}")?;
        } else {
            writeln!(output, "{}", render::render_view(view))?;
        }
        Ok(())
    }

    fn write_events<W: Write>(&mut self, output: &mut W) -> Result<()> {
        for event in self.game.drain_events() {
            if self.json {
                continue;
            }
            match event {
                GameEvent::RoundStarted { .. } => writeln!(output, "\n* {event}")?,
                _ => writeln!(output, "* {event}")?,
            }
        }
        Ok(())
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(mut self, input: R, output: &mut W) -> Result<()> {
        self.write_events(output)?;
        self.write_view(&self.game.view(), output)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => write!(output, "{HELP}")?,
                Ok(Command::Play(event)) => {
                    let view = self.game.apply(event);
                    self.write_events(output)?;
                    self.write_view(&view, output)?;
                }
                Err(e) => {
                    if self.json {
                        let error = serde_json::json!({ "error": e.to_string() });
                        writeln!(output, "{error}")?;
                    } else {
                        writeln!(output, "! {e}")?;
                    }
                }
            }
            output.flush()?;
        }

        log::info!(
            "plain session ended with score {}",
            self.game.session().score
        );
        Ok(())
    }
}
