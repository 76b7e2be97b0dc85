//! The round engine: derives the next game state from the current one.
//!
//! ORDER (fixed, never reordered):
//!   1. Rejected vote: flat uncertainty penalty, levers ignored.
//!   2. Passed vote: sum the effect of every set lever.
//!   3. Scenario pressure.
//!   4. Market shock (the only random draw, exactly one per round).
//!   5. Apply deltas, round to 2 decimals, clamp inflation and unemployment at 0.
//!   6. Append every indicator's new value to its history.
//!   7. Feedback and score, first matching rule wins.
//!   8. Append the round record.
//!   9. Increment the round counter.
//!
//! RULES:
//!   - `advance` never mutates its input and never fails.
//!   - The scenario is carried over untouched; choosing the next one is
//!     the caller's job.

use crate::{
    indicator::{IndicatorSnapshot, TARGET_INFLATION},
    policy::{Decision, InterestRate, MinimumReserve, OpenMarketOp, StandingFacility},
    rng::RandomSource,
    state::{GameState, RoundRecord},
    types::Score,
};
use serde::{Deserialize, Serialize};

pub const REJECTION_INFLATION_PENALTY: f64 = 0.3;
pub const REJECTION_GROWTH_PENALTY: f64 = -0.2;
pub const SCENARIO_WEIGHT: f64 = 0.2;
/// Half-width of the unscaled market shock.
pub const SHOCK_AMPLITUDE: f64 = 0.1;
/// Unemployment moves against the growth delta by this factor.
pub const OKUN_COEFFICIENT: f64 = -0.5;

/// Inflation and growth deltas in percentage points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub inflation: f64,
    pub growth:    f64,
}

impl Delta {
    pub const ZERO: Delta = Delta { inflation: 0.0, growth: 0.0 };

    pub fn new(inflation: f64, growth: f64) -> Self {
        Self { inflation, growth }
    }
}

impl std::ops::Add for Delta {
    type Output = Delta;

    fn add(self, rhs: Delta) -> Delta {
        Delta::new(self.inflation + rhs.inflation, self.growth + rhs.growth)
    }
}

impl std::ops::AddAssign for Delta {
    fn add_assign(&mut self, rhs: Delta) {
        *self = *self + rhs;
    }
}

impl InterestRate {
    pub fn effect(self) -> Delta {
        match self {
            Self::Raise => Delta::new(-0.5, -0.3),
            Self::Lower => Delta::new(0.4, 0.4),
            Self::Hold  => Delta::ZERO,
        }
    }
}

impl OpenMarketOp {
    pub fn effect(self) -> Delta {
        match self {
            Self::Buy  => Delta::new(0.2, 0.3),
            Self::Sell => Delta::new(-0.2, -0.2),
            Self::NoOp => Delta::ZERO,
        }
    }
}

impl StandingFacility {
    pub fn effect(self) -> Delta {
        match self {
            Self::EmergencyLending => Delta::new(0.0, 0.1),
            Self::DepositFacility  => Delta::new(-0.05, 0.0),
            Self::Standard         => Delta::ZERO,
        }
    }
}

impl MinimumReserve {
    pub fn effect(self) -> Delta {
        match self {
            Self::Decrease => Delta::new(0.0, 0.15),
            Self::Increase => Delta::new(-0.1, 0.0),
            Self::Hold     => Delta::ZERO,
        }
    }
}

/// Combined effect of every lever the player set. Unset levers add nothing.
pub fn policy_effect(decision: &Decision) -> Delta {
    let mut delta = Delta::ZERO;
    if let Some(choice) = decision.interest_rate {
        delta += choice.effect();
    }
    if let Some(choice) = decision.open_market_op {
        delta += choice.effect();
    }
    if let Some(choice) = decision.standing_facility {
        delta += choice.effect();
    }
    if let Some(choice) = decision.minimum_reserve {
        delta += choice.effect();
    }
    delta
}

/// Outcome message for a resolved round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Rejected,
    ApproachingTarget,
    OutOfControl,
    Recession,
    EffectsEmerging,
}

impl Feedback {
    /// First matching rule wins.
    pub fn classify(vote_passed: bool, inflation: f64, growth: f64) -> Self {
        if !vote_passed {
            Self::Rejected
        } else if (inflation - TARGET_INFLATION).abs() < 0.5 {
            Self::ApproachingTarget
        } else if inflation > TARGET_INFLATION + 2.0 {
            Self::OutOfControl
        } else if growth < 0.0 {
            Self::Recession
        } else {
            Self::EffectsEmerging
        }
    }

    pub fn score_delta(&self) -> Score {
        match self {
            Self::Rejected          => -15,
            Self::ApproachingTarget => 10,
            Self::OutOfControl      => -10,
            Self::Recession         => -5,
            Self::EffectsEmerging   => 0,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Rejected =>
                "The council rejected your proposal. Without consensus, economic uncertainty deepens.",
            Self::ApproachingTarget =>
                "Good call. Inflation is approaching the target.",
            Self::OutOfControl =>
                "Careful. Inflation is getting out of control.",
            Self::Recession =>
                "The economy is shrinking (recession). Stimulus may be needed.",
            Self::EffectsEmerging =>
                "The effects of your policy are emerging slowly.",
        }
    }
}

/// Market shock for one round: uniform in ±0.1, scaled by difficulty.
fn market_shock<R: RandomSource + ?Sized>(rng: &mut R, volatility: f64) -> f64 {
    (rng.next_f64() - 0.5) * 2.0 * SHOCK_AMPLITUDE * volatility
}

/// Round to 2 decimals on the exact binary value, so 6.425 (stored as
/// 6.42499...) becomes 6.42.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Advance `state` by exactly one round.
pub fn advance<R: RandomSource + ?Sized>(
    state: &GameState,
    decision: &Decision,
    vote_passed: bool,
    rng: &mut R,
) -> GameState {
    let mut next = state.clone();

    let mut delta = if vote_passed {
        policy_effect(decision)
    } else {
        Delta::new(REJECTION_INFLATION_PENALTY, REJECTION_GROWTH_PENALTY)
    };

    delta += Delta::new(
        state.scenario.inflation_pressure * SCENARIO_WEIGHT,
        state.scenario.growth_momentum * SCENARIO_WEIGHT,
    );

    let shock = market_shock(rng, state.difficulty.volatility());
    delta += Delta::new(shock, shock * 0.5);

    let indicators = &mut next.indicators;
    let inflation = round2(indicators.inflation.value + delta.inflation).max(0.0);
    let growth = round2(indicators.gdp_growth.value + delta.growth);
    let unemployment =
        round2(indicators.unemployment.value + OKUN_COEFFICIENT * delta.growth).max(0.0);
    let exchange_rate = indicators.exchange_rate.value;

    indicators.inflation.record(inflation);
    indicators.gdp_growth.record(growth);
    indicators.unemployment.record(unemployment);
    indicators.exchange_rate.record(exchange_rate);

    let feedback = Feedback::classify(vote_passed, inflation, growth);
    next.score += feedback.score_delta();
    next.feedback = Some(feedback);

    next.history.push(RoundRecord {
        round:      state.round,
        decision:   decision.clone(),
        indicators: IndicatorSnapshot { inflation, gdp_growth: growth, unemployment, exchange_rate },
    });
    next.round = state.round + 1;

    log::debug!(
        "round={} passed={vote_passed} d_infl={:.3} d_growth={:.3} shock={shock:.4} \
         infl={inflation:.2} growth={growth:.2} unemp={unemployment:.2} feedback={feedback:?}",
        state.round,
        delta.inflation,
        delta.growth,
    );

    next
}
