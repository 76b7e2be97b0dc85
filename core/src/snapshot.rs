//! Snapshot serialization: full session state to/from JSON.
//!
//! A snapshot captures everything needed to resume a session. The market
//! RNG is not serialized; it is rebuilt from the seed and fast-forwarded
//! by `rng_draws`. The seated council travels with the state.

use crate::{
    council::Council,
    error::SimResult,
    state::GameState,
    types::SessionId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub seed:       u64,
    pub rng_draws:  u64,
    pub council:    Council,
    pub state:      GameState,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
