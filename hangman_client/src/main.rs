//! A tech-word hangman game for the terminal.
//!
//! Plain mode reads one command per line from stdin. The TUI mode takes
//! over the terminal and maps key presses directly to guesses.

use anyhow::{Context, Result};
use hangman::HangmanGame;
use pico_args::Arguments;
use std::{io, path::PathBuf};

use hangman_client::{
    cli_app::CliApp,
    config::{ClientConfig, ConfigOverrides},
    logging,
    terminal::TerminalSession,
    tui_app::TuiApp,
};

const HELP: &str = "\
Play tech-word hangman in the terminal

USAGE:
  hangman_client [OPTIONS]

OPTIONS:
  --random              Draw words at random instead of in catalog order
  --seed N              Seed for random draws (requires --random)
  --words PATH          JSON word list replacing the built-in catalog
  --log-file PATH       Append logs to PATH
  --tui                 Use TUI (Terminal UI) mode [default: false]
  --json                Print one JSON snapshot per line in plain mode

ENVIRONMENT:
  HANGMAN_SEQUENCING    sequential | random
  HANGMAN_SEED          Seed for random draws
  HANGMAN_WORDS         Same as --words
  HANGMAN_LOG_FILE      Same as --log-file
  RUST_LOG              Log filter [default: info with a log file]

FLAGS:
  -h, --help            Print help information
";

fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = ConfigOverrides {
        tui: pargs.contains("--tui"),
        json: pargs.contains("--json"),
        random: pargs.contains("--random"),
        seed: pargs
            .opt_value_from_str::<_, u64>("--seed")
            .context("--seed expects an unsigned integer")?,
        words: pargs.opt_value_from_str::<_, PathBuf>("--words")?,
        log_file: pargs.opt_value_from_str::<_, PathBuf>("--log-file")?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {remaining:?}\n\n{HELP}");
    }

    let config = ClientConfig::from_env(overrides)?;
    config.validate()?;
    run(config)
}

fn run(config: ClientConfig) -> Result<()> {
    logging::init(config.log_file.as_deref(), config.tui)?;

    let catalog = config.load_catalog().context("Failed to load word list")?;
    log::info!(
        "loaded {} words, {} sequencing",
        catalog.len(),
        config.settings.sequencing
    );
    let game = HangmanGame::new(catalog, config.settings);

    if config.tui {
        let mut terminal = TerminalSession::acquire().context("Failed to initialize terminal")?;
        TuiApp::new(game).run(&mut terminal)?;
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        CliApp::new(game, config.json).run(stdin.lock(), &mut stdout.lock())?;
    }

    Ok(())
}
