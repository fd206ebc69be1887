//! Hangman game engine - round FSM, session bookkeeping, and snapshots.
//!
//! This module provides:
//! - A validated, read-only word catalog
//! - Per-round state with guess and hint transitions
//! - Session score/streak/progress tracking
//! - Sequencing policies and the controller that ties them together

pub mod catalog;
pub mod engine;
pub mod events;
pub mod round;
pub mod sequencing;
pub mod session;
pub mod settings;
pub mod view;
