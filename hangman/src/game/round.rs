//! Per-round state: one word, its guesses, its hints, and its outcome.
//!
//! A round starts `Playing` and moves to `Won` or `Lost` exactly once.
//! Nothing in here touches the session; callers apply score and streak
//! changes from the returned [`GuessOutcome`].

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, sync::Arc};

use super::catalog::WordEntry;

/// Incorrect distinct letters allowed before a round is lost.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Hints available per round.
pub const MAX_HINTS: u8 = 2;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{repr}")
    }
}

/// Why a guess left the round untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IgnoreReason {
    NotALetter,
    AlreadyGuessed,
    RoundOver,
}

/// Result of a single letter guess.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GuessOutcome {
    /// The round is unchanged.
    Ignored(IgnoreReason),
    /// The letter is in the word and letters remain hidden.
    Correct(char),
    /// The letter is not in the word and lives remain.
    Wrong(char),
    /// The letter revealed the last hidden position.
    Won(char),
    /// The letter used up the last life.
    Lost(char),
}

impl GuessOutcome {
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

/// Normalize raw input to an uppercase ASCII letter.
#[must_use]
pub fn normalize_letter(c: char) -> Option<char> {
    c.is_ascii_alphabetic().then(|| c.to_ascii_uppercase())
}

#[derive(Clone, Debug)]
pub struct RoundState {
    entry: Arc<WordEntry>,
    /// The active word uppercased once, so guesses compare cheaply.
    normalized: Vec<char>,
    guessed_letters: BTreeSet<char>,
    wrong_guesses: u8,
    hints_revealed: u8,
    status: RoundStatus,
}

impl RoundState {
    #[must_use]
    pub fn new(entry: Arc<WordEntry>) -> Self {
        let normalized = entry.normalized().chars().collect();
        Self {
            entry,
            normalized,
            guessed_letters: BTreeSet::new(),
            wrong_guesses: 0,
            hints_revealed: 0,
            status: RoundStatus::Playing,
        }
    }

    /// Guess a single letter.
    ///
    /// Non-letters, repeated letters, and guesses after the round is over
    /// are no-ops. A winning guess is reported as `Won` even if the same
    /// transition would also exhaust the wrong-guess budget.
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.status.is_over() {
            return GuessOutcome::Ignored(IgnoreReason::RoundOver);
        }
        let Some(letter) = normalize_letter(letter) else {
            return GuessOutcome::Ignored(IgnoreReason::NotALetter);
        };
        if !self.guessed_letters.insert(letter) {
            return GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed);
        }

        let hit = self.normalized.contains(&letter);
        if !hit {
            self.wrong_guesses += 1;
        }

        if self.is_solved() {
            self.status = RoundStatus::Won;
            GuessOutcome::Won(letter)
        } else if self.wrong_guesses >= MAX_WRONG_GUESSES {
            self.status = RoundStatus::Lost;
            GuessOutcome::Lost(letter)
        } else if hit {
            GuessOutcome::Correct(letter)
        } else {
            GuessOutcome::Wrong(letter)
        }
    }

    /// Reveal the next hint. Returns false when nothing changed.
    pub fn use_hint(&mut self) -> bool {
        if self.status.is_over() || self.hints_revealed >= MAX_HINTS {
            return false;
        }
        self.hints_revealed += 1;
        true
    }

    fn is_solved(&self) -> bool {
        self.normalized
            .iter()
            .all(|c| self.guessed_letters.contains(c))
    }

    #[must_use]
    pub fn entry(&self) -> &Arc<WordEntry> {
        &self.entry
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn word_len(&self) -> usize {
        self.normalized.len()
    }

    #[must_use]
    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    #[must_use]
    pub fn lives_remaining(&self) -> u8 {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong_guesses)
    }

    #[must_use]
    pub fn hints_revealed(&self) -> u8 {
        self.hints_revealed
    }

    /// Hint texts up to the number revealed so far.
    #[must_use]
    pub fn visible_hints(&self) -> Vec<&str> {
        (1..=self.hints_revealed)
            .filter_map(|rank| self.entry.hint(rank))
            .collect()
    }

    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.normalized
            .get(position)
            .is_some_and(|c| self.guessed_letters.contains(c))
    }

    /// Count of positions still hidden.
    #[must_use]
    pub fn missing_letters(&self) -> usize {
        self.normalized
            .iter()
            .filter(|c| !self.guessed_letters.contains(c))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str) -> RoundState {
        RoundState::new(Arc::new(WordEntry::new(word, "first", "second")))
    }

    #[test]
    fn test_new_round_is_fresh() {
        let round = round("React");
        assert_eq!(round.status(), RoundStatus::Playing);
        assert_eq!(round.wrong_guesses(), 0);
        assert_eq!(round.hints_revealed(), 0);
        assert!(round.guessed_letters().is_empty());
        assert_eq!(round.lives_remaining(), MAX_WRONG_GUESSES);
        assert_eq!(round.missing_letters(), 5);
    }

    #[test]
    fn test_guess_is_case_insensitive() {
        let mut round = round("React");
        assert_eq!(round.guess_letter('r'), GuessOutcome::Correct('R'));
        assert!(round.guessed_letters().contains(&'R'));
        assert!(round.is_revealed(0));
        assert!(!round.is_revealed(1));
    }

    #[test]
    fn test_repeated_letter_ignored() {
        let mut round = round("Web");
        assert_eq!(round.guess_letter('z'), GuessOutcome::Wrong('Z'));
        assert_eq!(
            round.guess_letter('Z'),
            GuessOutcome::Ignored(IgnoreReason::AlreadyGuessed)
        );
        assert_eq!(round.wrong_guesses(), 1);
        assert_eq!(round.guessed_letters().len(), 1);
    }

    #[test]
    fn test_non_letter_ignored() {
        let mut round = round("Web");
        for c in ['1', ' ', '-', 'é'] {
            assert_eq!(
                round.guess_letter(c),
                GuessOutcome::Ignored(IgnoreReason::NotALetter)
            );
        }
        assert!(round.guessed_letters().is_empty());
        assert_eq!(round.wrong_guesses(), 0);
    }

    #[test]
    fn test_repeated_letters_in_word_need_one_guess() {
        let mut round = round("JAVA");
        assert_eq!(round.guess_letter('a'), GuessOutcome::Correct('A'));
        assert_eq!(round.missing_letters(), 2);
        assert_eq!(round.guess_letter('j'), GuessOutcome::Correct('J'));
        assert_eq!(round.guess_letter('v'), GuessOutcome::Won('V'));
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_loss_after_six_wrong() {
        let mut round = round("UI");
        for c in ['Z', 'X', 'Q', 'V', 'B'] {
            assert_eq!(round.guess_letter(c), GuessOutcome::Wrong(c));
        }
        assert_eq!(round.lives_remaining(), 1);
        assert_eq!(round.guess_letter('N'), GuessOutcome::Lost('N'));
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.lives_remaining(), 0);
    }

    #[test]
    fn test_no_guesses_after_round_over() {
        let mut round = round("AI");
        round.guess_letter('A');
        round.guess_letter('I');
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(
            round.guess_letter('Z'),
            GuessOutcome::Ignored(IgnoreReason::RoundOver)
        );
        assert_eq!(round.guessed_letters().len(), 2);
        assert_eq!(round.wrong_guesses(), 0);
    }

    #[test]
    fn test_win_checked_before_loss() {
        // Five wrong guesses, then the final correct letter: won, not lost.
        let mut round = round("AI");
        round.guess_letter('A');
        for c in ['Z', 'X', 'Q', 'V', 'B'] {
            round.guess_letter(c);
        }
        assert_eq!(round.guess_letter('I'), GuessOutcome::Won('I'));
        assert_eq!(round.wrong_guesses(), 5);
    }

    #[test]
    fn test_hints_cap_at_two() {
        let mut round = round("Web");
        assert!(round.visible_hints().is_empty());
        assert!(round.use_hint());
        assert_eq!(round.visible_hints(), vec!["first"]);
        assert!(round.use_hint());
        assert_eq!(round.visible_hints(), vec!["first", "second"]);
        assert!(!round.use_hint());
        assert!(!round.use_hint());
        assert_eq!(round.hints_revealed(), MAX_HINTS);
    }

    #[test]
    fn test_hint_rejected_after_round_over() {
        let mut round = round("AI");
        round.guess_letter('A');
        round.guess_letter('I');
        assert!(!round.use_hint());
        assert_eq!(round.hints_revealed(), 0);
    }

    #[test]
    fn test_hints_do_not_cost_lives() {
        let mut round = round("Web");
        round.use_hint();
        round.use_hint();
        assert_eq!(round.wrong_guesses(), 0);
        assert_eq!(round.status(), RoundStatus::Playing);
    }

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter('q'), Some('Q'));
        assert_eq!(normalize_letter('Q'), Some('Q'));
        assert_eq!(normalize_letter('7'), None);
        assert_eq!(normalize_letter('ß'), None);
    }
}
