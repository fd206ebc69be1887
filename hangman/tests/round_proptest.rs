/// Property-based tests for round transitions using proptest
///
/// These tests check the guessing, hint, and scoring rules across
/// randomly generated words and guess orders.
use hangman::{
    Catalog, GameSettings, GameStatus, HangmanGame, MAX_HINTS, MAX_WRONG_GUESSES, RoundState,
    RoundStatus, WordEntry,
};
use proptest::prelude::*;
use std::{collections::BTreeSet, sync::Arc};

// Strategy to generate a word of 1-12 ASCII letters in mixed case
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}"
}

fn distinct_letters(word: &str) -> Vec<char> {
    word.to_ascii_uppercase()
        .chars()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn wrong_letters(word: &str) -> Vec<char> {
    let upper = word.to_ascii_uppercase();
    ('A'..='Z').filter(|c| !upper.contains(*c)).collect()
}

fn round(word: &str) -> RoundState {
    RoundState::new(Arc::new(WordEntry::new(word, "h1", "h2")))
}

proptest! {
    #[test]
    fn test_correct_letters_in_any_order_win(
        (word, order) in word_strategy().prop_flat_map(|w| {
            let letters = distinct_letters(&w);
            (Just(w), Just(letters).prop_shuffle())
        })
    ) {
        let mut round = round(&word);
        for c in order {
            round.guess_letter(c);
        }
        prop_assert_eq!(round.status(), RoundStatus::Won);
        prop_assert_eq!(round.wrong_guesses(), 0);
    }

    #[test]
    fn test_six_wrong_letters_lose(word in "[a-mA-M]{1,10}", extra in "[N-Z]") {
        let mut round = round(&word);
        let wrong = wrong_letters(&word);
        for c in wrong.iter().take(MAX_WRONG_GUESSES as usize) {
            round.guess_letter(*c);
        }
        prop_assert_eq!(round.status(), RoundStatus::Lost);

        let before = round.guessed_letters().clone();
        round.guess_letter(extra.chars().next().unwrap());
        round.guess_letter(word.chars().next().unwrap());
        prop_assert_eq!(round.guessed_letters(), &before);
    }

    #[test]
    fn test_repeated_guess_counts_once(word in word_strategy(), letter in "[a-zA-Z]") {
        let mut round = round(&word);
        let letter = letter.chars().next().unwrap();
        round.guess_letter(letter);
        let wrong = round.wrong_guesses();
        let guessed = round.guessed_letters().len();
        round.guess_letter(letter.to_ascii_lowercase());
        round.guess_letter(letter.to_ascii_uppercase());
        prop_assert_eq!(round.wrong_guesses(), wrong);
        prop_assert_eq!(round.guessed_letters().len(), guessed);
    }

    #[test]
    fn test_hints_never_exceed_cap(word in word_strategy(), calls in 0usize..10) {
        let mut round = round(&word);
        for _ in 0..calls {
            round.use_hint();
        }
        prop_assert!(round.hints_revealed() <= MAX_HINTS);
        prop_assert_eq!(round.hints_revealed() as usize, calls.min(MAX_HINTS as usize));
    }

    #[test]
    fn test_wrong_guesses_monotonic(word in word_strategy(), guesses in "[a-zA-Z0-9]{0,40}") {
        let mut round = round(&word);
        let mut last = 0;
        for c in guesses.chars() {
            let was_over = round.status() != RoundStatus::Playing;
            round.guess_letter(c);
            prop_assert!(round.wrong_guesses() >= last);
            prop_assert!(round.wrong_guesses() <= last + 1);
            prop_assert!(round.wrong_guesses() <= MAX_WRONG_GUESSES);
            if was_over {
                prop_assert_eq!(round.wrong_guesses(), last);
            }
            last = round.wrong_guesses();
        }
    }

    #[test]
    fn test_win_and_loss_scoring(words in prop::collection::btree_set("[A-Z]{1,8}", 1..6), win_mask in any::<u8>()) {
        let entries: Vec<WordEntry> = words.iter().map(|w| WordEntry::new(w, "a", "b")).collect();
        let mut game = HangmanGame::new(Catalog::new(entries).unwrap(), GameSettings::default());

        for (idx, word) in words.iter().enumerate() {
            let before = game.session().clone();
            if win_mask & (1 << idx) != 0 {
                for c in distinct_letters(word) {
                    game.guess_letter(c);
                }
                prop_assert_eq!(game.status(), GameStatus::Won);
                prop_assert_eq!(game.session().score, before.score + 100 + word.len() as u32 * 10);
                prop_assert_eq!(game.session().streak, before.streak + 1);
            } else {
                for c in wrong_letters(word).into_iter().take(6) {
                    game.guess_letter(c);
                }
                prop_assert_eq!(game.status(), GameStatus::Lost);
                prop_assert_eq!(game.session().score, before.score);
                prop_assert_eq!(game.session().streak, 0);
            }
            game.advance();
        }
        prop_assert_eq!(game.status(), GameStatus::AllWordsCompleted);
    }
}
