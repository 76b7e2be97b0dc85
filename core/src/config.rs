use crate::{
    scenario::{ArgumentCatalog, ScenarioCatalog},
    state::GameState,
    types::Score,
};
use serde::{Deserialize, Serialize};

const BUILTIN_SCENARIOS: &str = include_str!("../../data/scenarios.json");
const BUILTIN_ARGUMENTS: &str = include_str!("../../data/arguments.json");
const BUILTIN_RULES: &str = include_str!("../../data/rules.json");

/// When a session ends. Either limit may be disabled with `null`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRules {
    /// Game ends once this many rounds have resolved.
    #[serde(default)]
    pub max_rounds:  Option<u32>,
    /// Game ends once the score is at or below this value.
    #[serde(default)]
    pub score_floor: Option<Score>,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_rounds:  Some(8),
            score_floor: Some(0),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameEndReason {
    RoundLimit,
    ScoreFloor,
}

impl GameRules {
    /// Open-ended play.
    pub fn unlimited() -> Self {
        Self { max_rounds: None, score_floor: None }
    }

    /// Checked after each resolved round. The score floor takes precedence.
    pub fn end_reason(&self, state: &GameState) -> Option<GameEndReason> {
        if self.score_floor.is_some_and(|floor| state.score <= floor) {
            return Some(GameEndReason::ScoreFloor);
        }
        let resolved = state.round.saturating_sub(1);
        if self.max_rounds.is_some_and(|max| resolved >= max) {
            return Some(GameEndReason::RoundLimit);
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub rules:     GameRules,
    pub scenarios: ScenarioCatalog,
    pub arguments: ArgumentCatalog,
}

impl GameConfig {
    /// Load from a data directory containing `scenarios.json`,
    /// `arguments.json` and `rules.json`.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let scenarios_path = format!("{data_dir}/scenarios.json");
        let scenarios_content = std::fs::read_to_string(&scenarios_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {scenarios_path}: {e}"))?;

        let arguments_path = format!("{data_dir}/arguments.json");
        let arguments_content = std::fs::read_to_string(&arguments_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {arguments_path}: {e}"))?;

        let rules_path = format!("{data_dir}/rules.json");
        let rules_content = std::fs::read_to_string(&rules_path)
            .map_err(|e| anyhow::anyhow!("Cannot read {rules_path}: {e}"))?;

        Self::parse(&scenarios_content, &arguments_content, &rules_content)
    }

    /// The catalogs shipped with the crate.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::parse(BUILTIN_SCENARIOS, BUILTIN_ARGUMENTS, BUILTIN_RULES)
    }

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    fn parse(scenarios: &str, arguments: &str, rules: &str) -> anyhow::Result<Self> {
        let scenarios: ScenarioCatalog = serde_json::from_str(scenarios)
            .map_err(|e| anyhow::anyhow!("Invalid scenario catalog: {e}"))?;
        let arguments: ArgumentCatalog = serde_json::from_str(arguments)
            .map_err(|e| anyhow::anyhow!("Invalid argument catalog: {e}"))?;
        let rules: GameRules = serde_json::from_str(rules)
            .map_err(|e| anyhow::anyhow!("Invalid game rules: {e}"))?;

        log::debug!(
            "config: scenarios beginner={} advanced={} expert={} arguments={}",
            scenarios.beginner.len(),
            scenarios.advanced.len(),
            scenarios.expert.len(),
            arguments.len()
        );

        Ok(Self { rules, scenarios, arguments })
    }
}
