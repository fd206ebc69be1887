/// Integration tests for round and session flow
///
/// These tests drive the engine through its public API the way an input
/// adapter would and check the snapshots handed to presentation.

use hangman::{
    Catalog, GameEvent, GameSettings, GameStatus, GuessOutcome, HangmanGame, InputEvent,
    RoundStart, Tile, WordEntry,
};

fn game_with(words: &[&str]) -> HangmanGame {
    let entries = words
        .iter()
        .map(|w| WordEntry::new(w, &format!("{w} hint one"), &format!("{w} hint two")))
        .collect();
    HangmanGame::new(Catalog::new(entries).unwrap(), GameSettings::default())
}

#[test]
fn test_ai_scenario() {
    let mut game = game_with(&["AI"]);

    let view = game.apply(InputEvent::LetterPressed('A'));
    assert_eq!(view.status, GameStatus::Playing);
    assert_eq!(view.round.as_ref().unwrap().wrong_guesses, 0);
    assert_eq!(view.score, 0);

    let view = game.apply(InputEvent::LetterPressed('I'));
    assert_eq!(view.status, GameStatus::Won);
    assert_eq!(view.score, 120);
    assert_eq!(view.streak, 1);
    assert_eq!(view.words_completed, 1);
}

#[test]
fn test_ui_loss_scenario() {
    let mut game = game_with(&["AI", "UI"]);
    for c in ['A', 'I'] {
        game.guess_letter(c);
    }
    assert_eq!(game.session().streak, 1);
    game.advance();

    let guesses = ['Z', 'X', 'Q', 'V', 'B', 'N'];
    for (idx, c) in guesses.iter().enumerate() {
        let view = game.apply(InputEvent::LetterPressed(*c));
        if idx < 5 {
            assert_eq!(view.status, GameStatus::Playing);
        } else {
            assert_eq!(view.status, GameStatus::Lost);
        }
    }

    let view = game.view();
    assert_eq!(view.streak, 0);
    assert_eq!(view.score, 120);
    let round = view.round.unwrap();
    assert_eq!(round.answer.as_deref(), Some("UI"));
    assert_eq!(round.lives_remaining, 0);

    // No further guess changes the round.
    let before = game.round().unwrap().guessed_letters().clone();
    assert!(game.guess_letter('U').is_ignored());
    assert_eq!(game.round().unwrap().guessed_letters(), &before);
}

#[test]
fn test_hint_scenario() {
    let mut game = game_with(&["Web"]);
    assert_eq!(game.view().round.unwrap().hints_revealed, 0);

    let view = game.apply(InputEvent::HintRequested);
    let round = view.round.unwrap();
    assert_eq!(round.hints_revealed, 1);
    assert_eq!(round.hints, vec!["Web hint one".to_string()]);

    let view = game.apply(InputEvent::HintRequested);
    let round = view.round.unwrap();
    assert_eq!(round.hints_revealed, 2);
    assert_eq!(round.hints.len(), 2);

    let view = game.apply(InputEvent::HintRequested);
    assert_eq!(view.round.unwrap().hints_revealed, 2);
    assert_eq!(game.session().score, 0);
}

#[test]
fn test_sequential_catalog_exhaustion() {
    let mut game = game_with(&["AI", "UI", "Web"]);
    let mut played = Vec::new();

    loop {
        let word = game.round().unwrap().entry().word.clone();
        played.push(word.clone());
        // Win the first and third rounds, lose the second.
        if played.len() % 2 == 1 {
            for c in word.to_ascii_uppercase().chars() {
                game.guess_letter(c);
            }
        } else {
            for c in ['K', 'L', 'M', 'O', 'P', 'R'] {
                game.guess_letter(c);
            }
        }
        if game.advance() == RoundStart::CatalogExhausted {
            break;
        }
    }

    assert_eq!(played, vec!["AI", "UI", "Web"]);
    let view = game.view();
    assert_eq!(view.status, GameStatus::AllWordsCompleted);
    assert_eq!(view.words_completed, 2);
    assert_eq!(view.round_index, 3);
    assert_eq!(view.score, 120 + 130);
    assert!(view.round.is_none());

    // Advancing again stays exhausted; only a reset leaves.
    assert_eq!(game.advance(), RoundStart::CatalogExhausted);
    let view = game.apply(InputEvent::NewRoundRequested);
    assert_eq!(view.status, GameStatus::AllWordsCompleted);

    let view = game.apply(InputEvent::ResetRequested);
    assert_eq!(view.status, GameStatus::Playing);
    assert_eq!(view.score, 0);
    assert_eq!(view.streak, 0);
    assert_eq!(view.words_completed, 0);
}

#[test]
fn test_tech_words_full_run() {
    let mut game = HangmanGame::new(Catalog::tech_words(), GameSettings::default());
    let mut expected_score = 0;

    for _ in 0..10 {
        let entry = game.round().unwrap().entry().clone();
        for c in entry.normalized().chars() {
            game.guess_letter(c);
        }
        expected_score += 100 + entry.len() as u32 * 10;
        assert_eq!(game.status(), GameStatus::Won);
        game.advance();
    }

    let view = game.view();
    assert_eq!(view.status, GameStatus::AllWordsCompleted);
    assert_eq!(view.score, expected_score);
    assert_eq!(view.streak, 10);
    assert_eq!(view.best_streak, 10);
    assert_eq!(view.words_completed, 10);
}

#[test]
fn test_snapshot_never_contains_hidden_word() {
    let mut game = game_with(&["Database"]);
    game.guess_letter('a');
    let view = game.view();
    let round = view.round.as_ref().unwrap();
    assert_eq!(round.tiles[1], Tile::Revealed('a'));
    assert_eq!(round.tiles[0], Tile::Hidden);
    let json = serde_json::to_string(&view).unwrap();
    assert!(!json.to_lowercase().contains("database"));
}

#[test]
fn test_events_describe_round() {
    let mut game = game_with(&["AI"]);
    game.drain_events();
    game.guess_letter('z');
    game.use_hint();
    game.guess_letter('a');
    assert_eq!(game.guess_letter('i'), GuessOutcome::Won('I'));

    let events: Vec<GameEvent> = game.drain_events().into_iter().collect();
    assert_eq!(
        events,
        vec![
            GameEvent::WrongGuess {
                letter: 'Z',
                lives_remaining: 5
            },
            GameEvent::HintRevealed(1),
            GameEvent::CorrectGuess('A'),
            GameEvent::CorrectGuess('I'),
            GameEvent::RoundWon {
                word: "AI".to_string(),
                points: 120
            },
        ]
    );
    assert!(game.drain_events().is_empty());
}
