//! Word sequencing policies.
//!
//! Two incompatible policies exist and one is chosen up front through
//! [`SequencingMode`]: walk the catalog once in order, or draw from it
//! uniformly at random with replacement.

use enum_dispatch::enum_dispatch;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use super::session::SessionState;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SequencingMode {
    /// Each catalog entry once, in order, then the catalog is exhausted.
    #[default]
    Sequential,
    /// Uniform draws with replacement; never exhausts.
    Random,
}

impl fmt::Display for SequencingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Random => write!(f, "random"),
        }
    }
}

#[derive(Debug, Eq, Error, PartialEq)]
#[error("unknown sequencing mode {0:?} (expected \"sequential\" or \"random\")")]
pub struct ParseSequencingModeError(String);

impl FromStr for SequencingMode {
    type Err = ParseSequencingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "seq" => Ok(Self::Sequential),
            "random" | "rand" => Ok(Self::Random),
            _ => Err(ParseSequencingModeError(s.to_string())),
        }
    }
}

/// Chooses the catalog position for the next round.
#[enum_dispatch]
pub trait WordPicker {
    /// Catalog index for the next round, or `None` once the catalog is
    /// exhausted.
    fn pick(&mut self, session: &SessionState, catalog_len: usize) -> Option<usize>;

    fn mode(&self) -> SequencingMode;
}

#[derive(Debug, Default)]
pub struct Sequential;

impl WordPicker for Sequential {
    fn pick(&mut self, session: &SessionState, catalog_len: usize) -> Option<usize> {
        (session.round_index < catalog_len).then_some(session.round_index)
    }

    fn mode(&self) -> SequencingMode {
        SequencingMode::Sequential
    }
}

#[derive(Debug)]
pub struct RandomWithReplacement {
    rng: StdRng,
}

impl RandomWithReplacement {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl WordPicker for RandomWithReplacement {
    fn pick(&mut self, _session: &SessionState, catalog_len: usize) -> Option<usize> {
        (catalog_len > 0).then(|| self.rng.random_range(0..catalog_len))
    }

    fn mode(&self) -> SequencingMode {
        SequencingMode::Random
    }
}

#[enum_dispatch(WordPicker)]
#[derive(Debug)]
pub enum Sequencer {
    Sequential,
    RandomWithReplacement,
}

impl Sequencer {
    #[must_use]
    pub fn new(mode: SequencingMode, seed: Option<u64>) -> Self {
        match mode {
            SequencingMode::Sequential => Sequential.into(),
            SequencingMode::Random => RandomWithReplacement::new(seed).into(),
        }
    }
}
