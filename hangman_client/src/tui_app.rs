//! TUI application for the hangman engine.
//!
//! This module provides a full-screen terminal UI using ratatui. Every key
//! press is mapped to an engine event on the same thread that draws, so
//! the engine never sees interleaved updates.

use anyhow::Result;
use chrono::{DateTime, Local};
use hangman::{GameEvent, GameStatus, GameView, HangmanGame, InputEvent, RoundView};
use ratatui::{
    DefaultTerminal, Frame,
    crossterm::event::{self, Event},
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::collections::VecDeque;

use crate::{
    input::{Action, map_key},
    render,
};

const HELP: &str = "\
A-Z
        Guess a letter.
Tab
        Reveal the next hint (2 per word, no penalty).
Enter
        Next word, once the current one is won or lost.
Ctrl+N
        New word now. Mid-round this restarts the current word.
Ctrl+R
        Play again from zero.
F1
        Toggle this help.
Esc | Ctrl+C
        Exit.
";
const MAX_LOG_RECORDS: usize = 256;
const KEYBOARD_COLUMNS: usize = 7;

#[derive(Clone, Copy)]
enum RecordKind {
    Alert,
    Game,
    You,
}

/// A timestamped history entry.
#[derive(Clone)]
struct Record {
    datetime: DateTime<Local>,
    kind: RecordKind,
    content: String,
}

impl Record {
    fn new(kind: RecordKind, content: String) -> Self {
        Self {
            datetime: Local::now(),
            kind,
            content,
        }
    }
}

impl From<&Record> for ListItem<'static> {
    fn from(val: &Record) -> Self {
        let repr = match val.kind {
            RecordKind::Alert => "ALERT".light_magenta(),
            RecordKind::Game => "GAME".light_yellow(),
            RecordKind::You => "YOU".light_green(),
        };

        let msg = vec![
            format!("[{} ", val.datetime.format("%H:%M:%S")).into(),
            Span::styled(format!("{:5}", repr.content), repr.style),
            format!("]: {}", val.content).into(),
        ];
        ListItem::new(Line::from(msg))
    }
}

fn describe(event: InputEvent) -> String {
    match event {
        InputEvent::LetterPressed(letter) => format!("guess {}", letter.to_ascii_uppercase()),
        InputEvent::HintRequested => "hint".to_string(),
        InputEvent::NewRoundRequested => "next word".to_string(),
        InputEvent::ResetRequested => "play again".to_string(),
    }
}

/// TUI App state
pub struct TuiApp {
    game: HangmanGame,
    /// Snapshot from the latest transition
    view: GameView,
    /// Whether to display the help menu window
    show_help_menu: bool,
    /// History of recorded messages, newest first
    log: VecDeque<Record>,
}

impl TuiApp {
    #[must_use]
    pub fn new(game: HangmanGame) -> Self {
        let view = game.view();
        let mut app = Self {
            game,
            view,
            show_help_menu: false,
            log: VecDeque::with_capacity(MAX_LOG_RECORDS),
        };
        app.record_events();
        app
    }

    #[must_use]
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Forward an intent to the engine and refresh the snapshot.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.add_log(RecordKind::You, describe(event));
        self.view = self.game.apply(event);
        self.record_events();
    }

    fn add_log(&mut self, kind: RecordKind, content: String) {
        self.log.push_front(Record::new(kind, content));
        self.log.truncate(MAX_LOG_RECORDS);
    }

    fn record_events(&mut self) {
        for event in self.game.drain_events() {
            let kind = match event {
                GameEvent::RoundWon { .. }
                | GameEvent::RoundLost { .. }
                | GameEvent::CatalogExhausted { .. } => RecordKind::Alert,
                _ => RecordKind::Game,
            };
            self.add_log(kind, event.to_string());
        }
    }

    /// Render the title and status message
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let header = Text::from(vec![
            Line::from("TECH HANGMAN".bold().white()),
            Line::from(render::headline(&self.view).light_blue()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(Paragraph::new(header).block(Block::bordered()), area);
    }

    /// Render score, streak, lives, and catalog progress
    fn draw_stats(&self, frame: &mut Frame, area: Rect) {
        let [stats_area, progress_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        let lives = self
            .view
            .round
            .as_ref()
            .map_or(hangman::MAX_WRONG_GUESSES, |round| round.lives_remaining);
        let stats = Line::from(vec![
            " Score: ".into(),
            self.view.score.to_string().bold().yellow(),
            "  Streak: ".into(),
            self.view.streak.to_string().bold().magenta(),
            "  Lives: ".into(),
            lives.to_string().bold().red(),
        ]);
        frame.render_widget(
            Paragraph::new(stats).block(Block::bordered().title(" stats ")),
            stats_area,
        );

        let ratio = if self.view.catalog_len == 0 {
            0.0
        } else {
            (self.view.words_completed as f64 / self.view.catalog_len as f64).min(1.0)
        };
        let progress = Gauge::default()
            .block(Block::bordered().title(" progress "))
            .gauge_style(Style::default().green())
            .ratio(ratio)
            .label(render::progress_line(&self.view));
        frame.render_widget(progress, progress_area);
    }

    /// Render the gallows figure
    fn draw_gallows(&self, frame: &mut Frame, area: Rect, round: &RoundView) {
        let lines: Vec<Line> = render::gallows(round.wrong_guesses)
            .into_iter()
            .map(Line::from)
            .collect();
        let gallows = Paragraph::new(lines).block(
            Block::bordered()
                .padding(Padding::uniform(1))
                .title(" gallows "),
        );
        frame.render_widget(gallows, area);
    }

    /// Render the masked word and, once the round is over, the answer
    fn draw_word(&self, frame: &mut Frame, area: Rect, round: &RoundView) {
        let word = render::word_line(round);
        let word = match self.view.status {
            GameStatus::Won => word.bold().light_green(),
            GameStatus::Lost => word.bold().light_red(),
            GameStatus::Playing | GameStatus::AllWordsCompleted => word.bold().white(),
        };
        let mut lines = vec![
            Line::from(word),
            Line::from(format!("Word length: {} letters", round.tiles.len()).dark_gray()),
        ];
        if let (GameStatus::Lost, Some(answer)) = (self.view.status, &round.answer) {
            lines.push(Line::from(format!("The word was {answer}").light_red()));
        }
        let word = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" word "));
        frame.render_widget(word, area);
    }

    /// Render revealed hints while the round is in play
    fn draw_hints(&self, frame: &mut Frame, area: Rect, round: &RoundView) {
        let lines: Vec<Line> = match self.view.status {
            GameStatus::Playing => render::hint_lines(round)
                .into_iter()
                .map(|line| Line::from(line.light_blue()))
                .collect(),
            GameStatus::Won | GameStatus::Lost | GameStatus::AllWordsCompleted => {
                vec![Line::from(vec![
                    "Press ".into(),
                    "Enter".bold().white(),
                    " for the next word".into(),
                ])]
            }
        };
        let hints = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" hints (Tab) "));
        frame.render_widget(hints, area);
    }

    /// Render the on-screen keyboard with used letters marked
    fn draw_keyboard(&self, frame: &mut Frame, area: Rect, round: &RoundView) {
        let revealed = render::revealed_letters(round);
        let playing = self.view.status == GameStatus::Playing;
        let letters: Vec<char> = ('A'..='Z').collect();
        let lines: Vec<Line> = letters
            .chunks(KEYBOARD_COLUMNS)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|letter| {
                        let repr = format!(" {letter} ");
                        if revealed.contains(letter) {
                            repr.bold().light_green()
                        } else if round.guessed_letters.contains(letter) {
                            repr.dark_gray().crossed_out()
                        } else if playing {
                            repr.bold().white()
                        } else {
                            repr.dark_gray()
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        let keyboard = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" choose a letter "));
        frame.render_widget(keyboard, area);
    }

    fn draw_round(&self, frame: &mut Frame, area: Rect, round: &RoundView) {
        let [gallows_area, play_area] =
            Layout::horizontal([Constraint::Length(21), Constraint::Min(30)]).areas(area);
        let [word_area, hints_area, keyboard_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(6),
        ])
        .areas(play_area);

        self.draw_gallows(frame, gallows_area, round);
        self.draw_word(frame, word_area, round);
        self.draw_hints(frame, hints_area, round);
        self.draw_keyboard(frame, keyboard_area, round);
    }

    /// Render the end screen once every word has been played
    fn draw_celebration(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("Congratulations! You're a Tech Genius!".bold().light_yellow()),
            Line::from(""),
            Line::from(format!(
                "You played all {} words and solved {} of them.",
                self.view.catalog_len, self.view.words_completed
            )),
            Line::from(vec![
                "Final Score: ".into(),
                self.view.score.to_string().bold().yellow(),
                "  Final Streak: ".into(),
                self.view.streak.to_string().bold().yellow(),
                "  Best Streak: ".into(),
                self.view.best_streak.to_string().bold().yellow(),
            ]),
            Line::from(""),
            Line::from(vec![
                "Press ".into(),
                "Ctrl+R".bold().white(),
                " to play again".into(),
            ]),
        ];
        let celebration = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().padding(Padding::uniform(1)));
        frame.render_widget(celebration, area);
    }

    /// Render the history window
    fn draw_log(&self, frame: &mut Frame, area: Rect) {
        let records: Vec<ListItem> = self.log.iter().map(ListItem::from).collect();
        let records = List::new(records).block(Block::bordered().title(" history "));
        frame.render_widget(records, area);
    }

    /// Render the help/status bar at the bottom
    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let help_message = vec![
            "press ".into(),
            "Tab".bold().white(),
            " for a hint, ".into(),
            "F1".bold().white(),
            " for help, or ".into(),
            "Esc".bold().white(),
            " to exit".into(),
        ];
        frame.render_widget(Paragraph::new(Line::from(help_message)), area);
    }

    /// Render the help menu overlay
    fn draw_help_menu(&self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Max(20)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Max(72)]).flex(Flex::Center);
        let [help_menu_area] = vertical.areas(frame.area());
        let [help_menu_area] = horizontal.areas(help_menu_area);
        frame.render_widget(Clear, help_menu_area);

        let help = Paragraph::new(HELP).block(Block::bordered().title(" keys "));
        frame.render_widget(help, help_menu_area);
    }

    /// Main draw function - orchestrates rendering of all UI components
    fn draw(&self, frame: &mut Frame) {
        let window = Layout::vertical([
            Constraint::Length(4),  // Title and message
            Constraint::Length(3),  // Stats and progress
            Constraint::Min(16),    // Round or end screen
            Constraint::Length(8),  // History
            Constraint::Length(1),  // Help bar
        ]);
        let [header_area, stats_area, main_area, log_area, help_area] =
            window.areas(frame.area());

        self.draw_header(frame, header_area);
        self.draw_stats(frame, stats_area);
        match &self.view.round {
            Some(round) => self.draw_round(frame, main_area, round),
            None => self.draw_celebration(frame, main_area),
        }
        self.draw_log(frame, log_area);
        self.draw_help_bar(frame, help_area);

        if self.show_help_menu {
            self.draw_help_menu(frame);
        }
    }

    /// Run the TUI application until the player exits
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            match map_key(key, self.view.status) {
                Some(Action::Play(event)) => self.handle_event(event),
                Some(Action::ToggleHelp) => self.show_help_menu = !self.show_help_menu,
                Some(Action::Quit) => {
                    log::info!("tui session ended with score {}", self.view.score);
                    return Ok(());
                }
                None => {}
            }
        }
    }
}
