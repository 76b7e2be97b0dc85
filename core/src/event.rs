//! Session event log.
//!
//! RULE: Every state change a session makes is recorded here, in order.
//! The log is in-memory only and lives as long as the session.

use crate::{
    config::GameEndReason,
    engine::Feedback,
    indicator::IndicatorSnapshot,
    state::Difficulty,
    types::{Round, ScenarioId, Score, SessionId},
};
use serde::{Deserialize, Serialize};

/// Every event emitted during a session.
/// Variants are appended, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    SessionStarted {
        session_id: SessionId,
        seed:       u64,
        difficulty: Difficulty,
    },
    ScenarioActivated {
        round:       Round,
        scenario_id: ScenarioId,
    },
    CouncilVoted {
        round:       Round,
        total_agree: usize,
        passed:      bool,
    },
    RoundResolved {
        round:      Round,
        feedback:   Feedback,
        score:      Score,
        indicators: IndicatorSnapshot,
    },
    GameEnded {
        round:  Round,
        score:  Score,
        reason: GameEndReason,
    },
}

impl RoundEvent {
    /// Stable name for the `event_type` column.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::SessionStarted { .. }    => "session_started",
            Self::ScenarioActivated { .. } => "scenario_activated",
            Self::CouncilVoted { .. }      => "council_voted",
            Self::RoundResolved { .. }     => "round_resolved",
            Self::GameEnded { .. }         => "game_ended",
        }
    }

    /// Round the event belongs to. Session start is round 0.
    pub fn round(&self) -> Round {
        match self {
            Self::SessionStarted { .. } => 0,
            Self::ScenarioActivated { round, .. }
            | Self::CouncilVoted { round, .. }
            | Self::RoundResolved { round, .. }
            | Self::GameEnded { round, .. } => *round,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventLogEntry {
    pub seq:        u64,
    pub session_id: SessionId,
    pub round:      Round,
    pub event_type: String,
    pub payload:    String, // JSON-serialized RoundEvent
}
