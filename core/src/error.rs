use thiserror::Error;

use crate::{state::Difficulty, types::Round};

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No scenarios configured for difficulty '{difficulty}'")]
    NoScenarios { difficulty: Difficulty },

    #[error("Argument '{id}' not found in catalog")]
    UnknownArgument { id: String },

    #[error("Game is over after round {round}")]
    GameOver { round: Round },

    #[error("Snapshot does not match session: {reason}")]
    SnapshotMismatch { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
