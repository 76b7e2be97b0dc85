use crate::{
    config::GameEndReason,
    council::VoteOutcome,
    engine::Feedback,
    indicator::IndicatorSnapshot,
    policy::Decision,
    scenario::Scenario,
    state::GameState,
    types::{Round, Score},
};
use serde::{Deserialize, Serialize};

/// All player-issued commands.
/// Variants added over time, never removed or reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlayerCommand {
    SubmitDecision { decision: Decision },
    NextRound,
    GetState,
}

/// Everything the presentation layer needs to show a resolved round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundReport {
    pub round:       Round,
    pub vote:        VoteOutcome,
    pub feedback:    Feedback,
    pub message:     String,
    pub score_delta: Score,
    pub score:       Score,
    pub indicators:  IndicatorSnapshot,
    pub game_over:   Option<GameEndReason>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandResponse {
    RoundResolved { report: RoundReport },
    ScenarioChanged { round: Round, scenario: Scenario },
    State { state: GameState },
}
