//! Governing council vote.
//!
//! Members differ only by disposition. Each set lever is scored per member
//! against a fixed table (100 aligned, 50 compromise, 0 opposed); the
//! member's coherence is the rounded percentage of the maximum possible.
//! A member votes yes only when coherence is strictly above 50, and the
//! proposal passes with at least 3 of 5 votes.

use crate::policy::{Decision, InterestRate, MinimumReserve, OpenMarketOp, StandingFacility};
use serde::{Deserialize, Serialize};

pub const COUNCIL_SEATS: usize = 5;
pub const VOTES_TO_PASS: usize = 3;

/// Coherence assigned to every member when no lever is set.
pub const NEUTRAL_COHERENCE: u32 = 50;

const ALIGNED: u32 = 100;
const COMPROMISE: u32 = 50;
const OPPOSED: u32 = 0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Hawk,
    Dove,
    Centrist,
}

impl Disposition {
    pub fn score_interest_rate(self, choice: InterestRate) -> u32 {
        use InterestRate::*;
        match (self, choice) {
            (Self::Hawk, Raise) | (Self::Dove, Lower) | (Self::Centrist, Hold) => ALIGNED,
            (Self::Hawk, Hold) | (Self::Dove, Hold) | (Self::Centrist, _) => COMPROMISE,
            (Self::Hawk, Lower) | (Self::Dove, Raise) => OPPOSED,
        }
    }

    pub fn score_open_market_op(self, choice: OpenMarketOp) -> u32 {
        use OpenMarketOp::*;
        match (self, choice) {
            (Self::Hawk, Sell) | (Self::Dove, Buy) | (Self::Centrist, NoOp) => ALIGNED,
            (Self::Hawk, NoOp) | (Self::Dove, NoOp) | (Self::Centrist, _) => COMPROMISE,
            (Self::Hawk, Buy) | (Self::Dove, Sell) => OPPOSED,
        }
    }

    pub fn score_standing_facility(self, choice: StandingFacility) -> u32 {
        use StandingFacility::*;
        match (self, choice) {
            (Self::Hawk, DepositFacility)
            | (Self::Dove, EmergencyLending)
            | (Self::Centrist, Standard) => ALIGNED,
            (Self::Hawk, Standard) | (Self::Dove, Standard) | (Self::Centrist, _) => COMPROMISE,
            (Self::Hawk, EmergencyLending) | (Self::Dove, DepositFacility) => OPPOSED,
        }
    }

    pub fn score_minimum_reserve(self, choice: MinimumReserve) -> u32 {
        use MinimumReserve::*;
        match (self, choice) {
            (Self::Hawk, Increase) | (Self::Dove, Decrease) | (Self::Centrist, Hold) => ALIGNED,
            (Self::Hawk, Hold) | (Self::Dove, Hold) | (Self::Centrist, _) => COMPROMISE,
            (Self::Hawk, Decrease) | (Self::Dove, Increase) => OPPOSED,
        }
    }

    /// Coherence of `decision` with this disposition, 0–100.
    pub fn coherence(self, decision: &Decision) -> u32 {
        let scores = [
            decision.interest_rate.map(|c| self.score_interest_rate(c)),
            decision.open_market_op.map(|c| self.score_open_market_op(c)),
            decision.standing_facility.map(|c| self.score_standing_facility(c)),
            decision.minimum_reserve.map(|c| self.score_minimum_reserve(c)),
        ];

        let (total, max) = scores
            .iter()
            .flatten()
            .fold((0u32, 0u32), |(total, max), s| (total + s, max + ALIGNED));

        if max == 0 {
            return NEUTRAL_COHERENCE;
        }
        // Round half up, matching the displayed percentage.
        (total * 100 + max / 2) / max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CouncilMember {
    pub name: String,
    pub country: String,
    pub disposition: Disposition,
}

impl CouncilMember {
    pub fn new(name: &str, country: &str, disposition: Disposition) -> Self {
        Self {
            name: name.to_string(),
            country: country.to_string(),
            disposition,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberVote {
    pub member: CouncilMember,
    pub coherence: u32,
    pub agrees: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteOutcome {
    pub per_member: Vec<MemberVote>,
    pub total_agree: usize,
    pub passed: bool,
}

/// A five-seat council.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Council {
    members: [CouncilMember; COUNCIL_SEATS],
}

impl Council {
    /// The standing roster: two hawks, two doves, one centrist.
    pub fn standard() -> Self {
        Self::with_members([
            CouncilMember::new("Klaas Knot", "Netherlands", Disposition::Hawk),
            CouncilMember::new("Fabio Panetta", "Italy", Disposition::Dove),
            CouncilMember::new("Christine Lagarde", "France", Disposition::Centrist),
            CouncilMember::new("Robert Holzmann", "Austria", Disposition::Hawk),
            CouncilMember::new("Olli Rehn", "Finland", Disposition::Dove),
        ])
    }

    pub fn with_members(members: [CouncilMember; COUNCIL_SEATS]) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[CouncilMember] {
        &self.members
    }

    /// Score `decision` against every seat and tally the vote.
    pub fn evaluate(&self, decision: &Decision) -> VoteOutcome {
        let per_member: Vec<MemberVote> = self
            .members
            .iter()
            .map(|member| {
                let coherence = member.disposition.coherence(decision);
                MemberVote {
                    member: member.clone(),
                    coherence,
                    agrees: coherence > NEUTRAL_COHERENCE,
                }
            })
            .collect();

        let total_agree = per_member.iter().filter(|v| v.agrees).count();
        let passed = total_agree >= VOTES_TO_PASS;

        log::debug!(
            "council vote: levers={} agree={total_agree}/{COUNCIL_SEATS} passed={passed}",
            decision.levers_set()
        );

        VoteOutcome { per_member, total_agree, passed }
    }
}

impl Default for Council {
    fn default() -> Self { Self::standard() }
}

/// Evaluate `decision` against the standard council.
pub fn evaluate(decision: &Decision) -> VoteOutcome {
    Council::standard().evaluate(decision)
}
