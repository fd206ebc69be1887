//! Plain-text presentation shared by both front ends.

use hangman::{GameStatus, GameView, MAX_WRONG_GUESSES, RoundView, SequencingMode, Tile};
use std::collections::BTreeSet;

/// Gallows figure after `wrong_guesses` misses. Head, body, arms, then
/// legs appear in that order.
#[must_use]
pub fn gallows(wrong_guesses: u8) -> Vec<String> {
    let part = |stage: u8, repr: char| if wrong_guesses >= stage { repr } else { ' ' };
    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Revealed letters and blanks separated by spaces, e.g. `R _ A _ _`.
#[must_use]
pub fn word_line(round: &RoundView) -> String {
    round
        .tiles
        .iter()
        .map(|tile| match tile {
            Tile::Hidden => '_',
            Tile::Revealed(c) => c.to_ascii_uppercase(),
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase letters known to be in the word, derived from revealed tiles.
#[must_use]
pub fn revealed_letters(round: &RoundView) -> BTreeSet<char> {
    round
        .tiles
        .iter()
        .filter_map(|tile| match tile {
            Tile::Revealed(c) => Some(c.to_ascii_uppercase()),
            Tile::Hidden => None,
        })
        .collect()
}

/// Guessed letters that did not appear in the word.
#[must_use]
pub fn missed_letters(round: &RoundView) -> Vec<char> {
    let revealed = revealed_letters(round);
    round
        .guessed_letters
        .iter()
        .copied()
        .filter(|c| !revealed.contains(c))
        .collect()
}

#[must_use]
pub fn headline(view: &GameView) -> String {
    match view.status {
        GameStatus::Playing => match view.sequencing {
            SequencingMode::Sequential => format!(
                "Guess the tech word! ({}/{})",
                view.round_index + 1,
                view.catalog_len
            ),
            SequencingMode::Random => {
                format!("Guess the tech word! (round {})", view.round_index + 1)
            }
        },
        GameStatus::Won => "Congratulations! You saved the hangman!".to_string(),
        GameStatus::Lost => {
            let answer = view
                .round
                .as_ref()
                .and_then(|round| round.answer.as_deref())
                .unwrap_or_default();
            format!("Game Over! The word was \"{answer}\"")
        }
        GameStatus::AllWordsCompleted => {
            format!("AMAZING! You've completed all {} words!", view.catalog_len)
        }
    }
}

#[must_use]
pub fn stats_line(view: &GameView) -> String {
    let lives = view
        .round
        .as_ref()
        .map_or(MAX_WRONG_GUESSES, |round| round.lives_remaining);
    format!(
        "Score: {}  Streak: {}  Lives: {}",
        view.score, view.streak, lives
    )
}

#[must_use]
pub fn progress_line(view: &GameView) -> String {
    format!(
        "Progress: {}/{} Words Completed",
        view.words_completed, view.catalog_len
    )
}

/// Hint lines, plus a prompt for the next one while any remain.
#[must_use]
pub fn hint_lines(round: &RoundView) -> Vec<String> {
    let mut lines: Vec<String> = round
        .hints
        .iter()
        .enumerate()
        .map(|(idx, hint)| format!("Hint {}: {}", idx + 1, hint.trim()))
        .collect();
    match round.hints_revealed {
        0 | 1 => lines.push(format!(
            "Use a hint ({}/{})",
            round.hints_revealed + 1,
            hangman::MAX_HINTS
        )),
        _ => lines.push("All available hints used".to_string()),
    }
    lines
}

/// Full text snapshot for plain mode.
#[must_use]
pub fn render_view(view: &GameView) -> String {
    let mut lines = vec![headline(view), progress_line(view), stats_line(view)];

    match &view.round {
        Some(round) => {
            lines.push(String::new());
            lines.extend(gallows(round.wrong_guesses));
            lines.push(String::new());
            lines.push(format!("Word: {}", word_line(round)));
            lines.push(format!("Word length: {} letters", round.tiles.len()));
            let missed: String = missed_letters(round).into_iter().collect();
            if !missed.is_empty() {
                lines.push(format!("Misses: {missed}"));
            }
            if view.status == GameStatus::Playing {
                lines.extend(hint_lines(round));
            } else {
                lines.push("Type 'next' for the next word".to_string());
            }
        }
        None => {
            lines.push(format!(
                "Final Score: {}  Final Streak: {}  Best Streak: {}",
                view.score, view.streak, view.best_streak
            ));
            lines.push("Type 'again' to play again".to_string());
        }
    }

    lines.join("\n")
}
