//! Game state: the single mutable root of a session.

use crate::{
    engine::Feedback,
    indicator::{Indicator, IndicatorKind, IndicatorSnapshot, Indicators},
    policy::Decision,
    scenario::Scenario,
    types::{Round, Score},
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STARTING_SCORE: Score = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Scales the per-round market shock.
    pub fn volatility(&self) -> f64 {
        match self {
            Self::Beginner => 0.5,
            Self::Advanced => 1.0,
            Self::Expert   => 1.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Advanced => "advanced",
            Self::Expert   => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "advanced" => Ok(Self::Advanced),
            "expert"   => Ok(Self::Expert),
            other => Err(anyhow::anyhow!("Unknown difficulty: {other}")),
        }
    }
}

/// One resolved round, as kept in the game log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRecord {
    pub round:      Round,
    pub decision:   Decision,
    pub indicators: IndicatorSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub round:        Round,
    pub difficulty:   Difficulty,
    pub score:        Score,
    pub indicators:   Indicators,
    pub scenario:     Scenario,
    pub history:      Vec<RoundRecord>,
    pub feedback:     Option<Feedback>,
    pub is_game_over: bool,
}

impl GameState {
    /// Opening position for a session. Current values lean on the opening
    /// scenario; the seed histories get more volatile with difficulty.
    pub fn new(difficulty: Difficulty, scenario: Scenario) -> Self {
        let base_inflation = 1.8 + scenario.inflation_pressure * 0.3;
        let base_growth = 1.0 + scenario.growth_momentum * 0.2;

        let (inflation_offsets, growth_offsets, unemployment_history) = match difficulty {
            Difficulty::Beginner => (
                [0.0, 0.1, 0.2, 0.3],
                [0.0, 0.1, 0.2, 0.1],
                vec![7.0, 6.9, 6.8, 6.7],
            ),
            Difficulty::Advanced => (
                [-0.2, 0.1, 0.4, 0.6],
                [-0.3, 0.1, -0.1, 0.2],
                vec![6.8, 6.9, 7.1, 6.9],
            ),
            Difficulty::Expert => (
                [-0.5, 0.2, 0.8, 1.1],
                [-0.8, -0.5, 0.1, -0.3],
                vec![6.5, 7.0, 7.3, 7.5],
            ),
        };

        let indicators = Indicators {
            inflation: Indicator::new(
                IndicatorKind::Inflation,
                2.5 + scenario.inflation_pressure,
                inflation_offsets.iter().map(|o| base_inflation + o).collect(),
            ),
            gdp_growth: Indicator::new(
                IndicatorKind::GdpGrowth,
                1.2 + scenario.growth_momentum,
                growth_offsets.iter().map(|o| base_growth + o).collect(),
            ),
            unemployment: Indicator::new(
                IndicatorKind::Unemployment,
                6.5,
                unemployment_history,
            ),
            exchange_rate: Indicator::new(
                IndicatorKind::ExchangeRate,
                1.10,
                vec![1.12, 1.11, 1.10, 1.10],
            ),
        };

        Self {
            round: 1,
            difficulty,
            score: STARTING_SCORE,
            indicators,
            scenario,
            history: Vec::new(),
            feedback: None,
            is_game_over: false,
        }
    }

    /// Rounds resolved so far.
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.history.last()
    }
}
