//! Input adapters and presentation layers for the hangman engine.
//!
//! This library provides command parsing, key mapping, text rendering,
//! configuration, and the two front ends used by the hangman_client
//! binary.

pub mod cli_app;
pub mod commands;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;
pub mod terminal;
pub mod tui_app;
