//! Player decisions: the four policy levers plus a justification.
//!
//! Every lever is optional. A decision with nothing set is a valid
//! no-op policy.

use crate::types::ArgumentId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InterestRate {
    Raise,
    Hold,
    Lower,
}

/// Open market operations. `NoOp` is an explicit "do nothing" choice and
/// is distinct from leaving the lever unset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OpenMarketOp {
    Buy,
    Sell,
    #[serde(rename = "none")]
    NoOp,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StandingFacility {
    EmergencyLending,
    DepositFacility,
    Standard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MinimumReserve {
    Increase,
    Decrease,
    Hold,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decision {
    #[serde(default)]
    pub interest_rate: Option<InterestRate>,
    #[serde(default)]
    pub open_market_op: Option<OpenMarketOp>,
    #[serde(default)]
    pub standing_facility: Option<StandingFacility>,
    #[serde(default)]
    pub minimum_reserve: Option<MinimumReserve>,
    #[serde(default)]
    pub argument: Option<ArgumentId>,
}

impl Decision {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interest_rate(mut self, choice: InterestRate) -> Self {
        self.interest_rate = Some(choice);
        self
    }

    pub fn open_market_op(mut self, choice: OpenMarketOp) -> Self {
        self.open_market_op = Some(choice);
        self
    }

    pub fn standing_facility(mut self, choice: StandingFacility) -> Self {
        self.standing_facility = Some(choice);
        self
    }

    pub fn minimum_reserve(mut self, choice: MinimumReserve) -> Self {
        self.minimum_reserve = Some(choice);
        self
    }

    pub fn argument(mut self, id: impl Into<ArgumentId>) -> Self {
        self.argument = Some(id.into());
        self
    }

    /// Number of levers the player actually set (0..=4).
    pub fn levers_set(&self) -> usize {
        [
            self.interest_rate.is_some(),
            self.open_market_op.is_some(),
            self.standing_facility.is_some(),
            self.minimum_reserve.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }

    pub fn is_no_op(&self) -> bool {
        self.levers_set() == 0
    }
}
