//! Heuristic player for headless runs.

use policy_core::{
    indicator::TARGET_INFLATION,
    policy::{Decision, InterestRate, MinimumReserve, OpenMarketOp, StandingFacility},
    rng::SessionRng,
    scenario::ArgumentCatalog,
    state::GameState,
};

/// Tighten when inflation runs hot, ease into a recession, hold otherwise.
pub fn choose(state: &GameState, arguments: &ArgumentCatalog, rng: &mut SessionRng) -> Decision {
    let inflation = state.indicators.inflation.value;
    let growth = state.indicators.gdp_growth.value;

    let mut decision = if inflation > TARGET_INFLATION + 0.5 {
        Decision::new()
            .interest_rate(InterestRate::Raise)
            .open_market_op(OpenMarketOp::Sell)
            .standing_facility(StandingFacility::Standard)
    } else if growth < 0.0 {
        Decision::new()
            .interest_rate(InterestRate::Lower)
            .open_market_op(OpenMarketOp::Buy)
            .minimum_reserve(MinimumReserve::Hold)
    } else {
        Decision::new()
            .interest_rate(InterestRate::Hold)
            .open_market_op(OpenMarketOp::NoOp)
    };

    if !arguments.is_empty() {
        let pick = rng.next_u64_below(arguments.len() as u64) as usize;
        decision.argument = arguments.arguments.get(pick).map(|a| a.id.clone());
    }
    decision
}
