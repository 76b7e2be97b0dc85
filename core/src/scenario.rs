//! Scenario and argument catalogs.
//!
//! Scenarios are data. The engine only reads the two hidden modifiers;
//! everything else is narrative for the presentation layer.

use crate::{
    state::Difficulty,
    types::{ArgumentId, Round, ScenarioId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id:        String,
    pub headline:  String,
    pub source:    String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub id:                 ScenarioId,
    pub title:              String,
    #[serde(default)]
    pub news_flash:         Vec<NewsItem>,
    #[serde(default)]
    pub economic_context:   String,
    /// Hidden. Roughly in [-2, +2].
    pub inflation_pressure: f64,
    /// Hidden. Roughly in [-2, +2].
    pub growth_momentum:    f64,
}

impl Scenario {
    /// A narrative-free scenario carrying only the modifiers.
    pub fn neutral() -> Self {
        Self::with_pressure(0.0, 0.0)
    }

    pub fn with_pressure(inflation_pressure: f64, growth_momentum: f64) -> Self {
        Self {
            id: "custom".to_string(),
            title: String::new(),
            news_flash: Vec::new(),
            economic_context: String::new(),
            inflation_pressure,
            growth_momentum,
        }
    }
}

/// Ordered scenarios per difficulty tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScenarioCatalog {
    #[serde(default)]
    pub beginner: Vec<Scenario>,
    #[serde(default)]
    pub advanced: Vec<Scenario>,
    #[serde(default)]
    pub expert:   Vec<Scenario>,
}

impl ScenarioCatalog {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> &[Scenario] {
        match difficulty {
            Difficulty::Beginner => &self.beginner,
            Difficulty::Advanced => &self.advanced,
            Difficulty::Expert   => &self.expert,
        }
    }

    /// The scenario in effect for `round`. Cycles when rounds outnumber
    /// scenarios. `None` only if the tier is empty.
    pub fn for_round(&self, difficulty: Difficulty, round: Round) -> Option<&Scenario> {
        let list = self.for_difficulty(difficulty);
        if list.is_empty() {
            return None;
        }
        let index = (round.saturating_sub(1) as usize) % list.len();
        list.get(index)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Argument {
    pub id:   ArgumentId,
    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentCatalog {
    pub arguments: Vec<Argument>,
}

impl ArgumentCatalog {
    pub fn get(&self, id: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}
