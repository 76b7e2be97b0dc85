//! Opening game state per difficulty.

use policy_core::{
    indicator::IndicatorKind,
    scenario::Scenario,
    state::{Difficulty, GameState, STARTING_SCORE},
};

fn assert_series(actual: &[f64], expected: &[f64], what: &str) {
    assert_eq!(actual.len(), expected.len(), "{what} length");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{what}: expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn opening_values_follow_the_scenario() {
    let state = GameState::new(Difficulty::Beginner, Scenario::with_pressure(0.8, 0.2));

    assert_eq!(state.round, 1);
    assert_eq!(state.score, STARTING_SCORE);
    assert!(state.history.is_empty());
    assert!(state.feedback.is_none());
    assert!(!state.is_game_over);

    assert!((state.indicators.inflation.value - 3.3).abs() < 1e-9);
    assert!((state.indicators.gdp_growth.value - 1.4).abs() < 1e-9);
    assert_eq!(state.indicators.unemployment.value, 6.5);
    assert_eq!(state.indicators.exchange_rate.value, 1.10);
}

#[test]
fn beginner_history_is_a_gentle_climb() {
    let state = GameState::new(Difficulty::Beginner, Scenario::with_pressure(0.8, 0.2));

    assert_series(&state.indicators.inflation.history, &[2.04, 2.14, 2.24, 2.34], "inflation");
    assert_series(&state.indicators.gdp_growth.history, &[1.04, 1.14, 1.24, 1.14], "growth");
    assert_series(&state.indicators.unemployment.history, &[7.0, 6.9, 6.8, 6.7], "unemployment");
    assert_series(&state.indicators.exchange_rate.history, &[1.12, 1.11, 1.10, 1.10], "exchange rate");
}

#[test]
fn expert_history_is_volatile() {
    let state = GameState::new(Difficulty::Expert, Scenario::neutral());

    assert_series(&state.indicators.inflation.history, &[1.3, 2.0, 2.6, 2.9], "inflation");
    assert_series(&state.indicators.gdp_growth.history, &[0.2, 0.5, 1.1, 0.7], "growth");
    assert_series(&state.indicators.unemployment.history, &[6.5, 7.0, 7.3, 7.5], "unemployment");
}

#[test]
fn only_inflation_and_growth_have_targets() {
    let state = GameState::new(Difficulty::Advanced, Scenario::neutral());

    for indicator in state.indicators.iter() {
        let expected = match indicator.kind {
            IndicatorKind::Inflation => Some(2.0),
            IndicatorKind::GdpGrowth => Some(1.5),
            _ => None,
        };
        assert_eq!(indicator.target, expected, "{:?}", indicator.kind);
    }
    assert!((state.indicators.inflation.gap().unwrap_or_default() - 0.5).abs() < 1e-9);
}

#[test]
fn difficulty_parses_from_its_name() {
    for difficulty in [Difficulty::Beginner, Difficulty::Advanced, Difficulty::Expert] {
        let parsed: Difficulty = difficulty.name().parse().expect("parse difficulty");
        assert_eq!(parsed, difficulty);
    }
    assert!("legendary".parse::<Difficulty>().is_err());
}
