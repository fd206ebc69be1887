//! Game configuration.

use serde::{Deserialize, Serialize};

use super::sequencing::SequencingMode;

/// Game configuration settings
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameSettings {
    pub sequencing: SequencingMode,
    /// Seeds the random sequencer for reproducible runs. Ignored in
    /// sequential mode.
    pub seed: Option<u64>,
}

impl GameSettings {
    #[must_use]
    pub const fn new(sequencing: SequencingMode, seed: Option<u64>) -> Self {
        Self { sequencing, seed }
    }

    #[must_use]
    pub const fn sequential() -> Self {
        Self::new(SequencingMode::Sequential, None)
    }

    #[must_use]
    pub const fn random(seed: Option<u64>) -> Self {
        Self::new(SequencingMode::Random, seed)
    }
}
