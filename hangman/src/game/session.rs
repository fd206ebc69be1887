//! Session bookkeeping that survives across rounds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::catalog::WordEntry;

/// Base points for any won round.
pub const WIN_BASE_POINTS: u32 = 100;

/// Extra points per letter of the won word.
pub const POINTS_PER_LETTER: u32 = 10;

/// Points awarded for winning a round on `entry`.
#[must_use]
pub fn points_for(entry: &WordEntry) -> u32 {
    let letters = u32::try_from(entry.len()).unwrap_or(u32::MAX);
    WIN_BASE_POINTS.saturating_add(letters.saturating_mul(POINTS_PER_LETTER))
}

/// Score, streak, and catalog progress.
///
/// Score never goes down; the streak is zeroed by a loss. Only
/// [`SessionState::reset`] clears everything.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionState {
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    /// Words won this session, as written in the catalog.
    pub words_completed: BTreeSet<String>,
    /// Count of finished rounds, which is the next catalog position in
    /// sequential mode.
    pub round_index: usize,
    pub rounds_won: u32,
    pub rounds_lost: u32,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a win and return the points it was worth.
    pub fn record_win(&mut self, entry: &WordEntry) -> u32 {
        let points = points_for(entry);
        self.score = self.score.saturating_add(points);
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
        self.words_completed.insert(entry.word.clone());
        self.round_index += 1;
        self.rounds_won += 1;
        points
    }

    pub fn record_loss(&mut self) {
        self.streak = 0;
        self.round_index += 1;
        self.rounds_lost += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for() {
        assert_eq!(points_for(&WordEntry::new("AI", "", "")), 120);
        assert_eq!(points_for(&WordEntry::new("JavaScript", "", "")), 200);
    }

    #[test]
    fn test_record_win() {
        let mut session = SessionState::new();
        let entry = WordEntry::new("React", "", "");
        assert_eq!(session.record_win(&entry), 150);
        assert_eq!(session.score, 150);
        assert_eq!(session.streak, 1);
        assert_eq!(session.best_streak, 1);
        assert_eq!(session.round_index, 1);
        assert!(session.words_completed.contains("React"));
    }

    #[test]
    fn test_record_loss_keeps_score() {
        let mut session = SessionState::new();
        session.record_win(&WordEntry::new("Web", "", ""));
        session.record_win(&WordEntry::new("UI", "", ""));
        let score = session.score;
        session.record_loss();
        assert_eq!(session.score, score);
        assert_eq!(session.streak, 0);
        assert_eq!(session.best_streak, 2);
        assert_eq!(session.round_index, 3);
        assert_eq!(session.words_completed.len(), 2);
        assert_eq!(session.rounds_lost, 1);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = SessionState::new();
        session.record_win(&WordEntry::new("Web", "", ""));
        session.record_loss();
        session.reset();
        assert_eq!(session, SessionState::default());
    }
}
