//! Session orchestration tests.

use policy_core::{
    command::{CommandResponse, PlayerCommand},
    config::{GameConfig, GameEndReason, GameRules},
    council::{Council, CouncilMember, Disposition},
    engine::Feedback,
    error::SimError,
    policy::{Decision, InterestRate, OpenMarketOp, StandingFacility},
    scenario::ScenarioCatalog,
    session::Session,
    snapshot::SessionSnapshot,
    state::Difficulty,
};

fn config() -> GameConfig {
    GameConfig::builtin().expect("builtin config")
}

fn build(session_id: &str, seed: u64, difficulty: Difficulty, config: GameConfig) -> Session {
    Session::new(session_id.to_string(), seed, difficulty, config).expect("build session")
}

/// Passes with the standard roster (hawks 67, centrist 83).
fn passing_decision() -> Decision {
    Decision::new()
        .interest_rate(InterestRate::Raise)
        .open_market_op(OpenMarketOp::NoOp)
        .standing_facility(StandingFacility::Standard)
        .argument("arg_price_stability")
}

#[test]
fn new_session_starts_on_the_first_scenario() {
    let _ = env_logger::builder().is_test(true).try_init();
    let session = build("s-new", 1, Difficulty::Beginner, config());

    assert_eq!(session.state().round, 1);
    assert_eq!(session.state().scenario.id, "beg_1");
    let types: Vec<&str> = session.events().iter().map(|e| e.event_type.as_str()).collect();
    assert_eq!(types, vec!["session_started", "scenario_activated"]);
}

#[test]
fn play_round_votes_then_resolves() {
    let mut session = build("s-play", 2, Difficulty::Beginner, config());

    let report = session.play_round(passing_decision()).expect("play round");

    assert_eq!(report.round, 1);
    assert!(report.vote.passed);
    assert_eq!(report.vote.total_agree, 3);
    assert_eq!(report.message, report.feedback.message());
    assert_eq!(report.score, 100 + report.score_delta);
    assert_eq!(report.game_over, None);
    assert_eq!(session.state().round, 2);
    assert_eq!(session.state().history.len(), 1);
    assert_eq!(report.indicators, session.state().indicators.snapshot());

    let types: Vec<&str> = session.events().iter().map(|e| e.event_type.as_str()).collect();
    assert_eq!(
        types,
        vec!["session_started", "scenario_activated", "council_voted", "round_resolved"]
    );
}

#[test]
fn empty_decision_is_rejected_by_the_council() {
    let mut session = build("s-empty", 3, Difficulty::Advanced, config());

    let report = session.play_round(Decision::new()).expect("play round");

    assert!(!report.vote.passed);
    assert_eq!(report.feedback, Feedback::Rejected);
    assert_eq!(report.score_delta, -15);
}

#[test]
fn unknown_argument_is_refused_without_side_effects() {
    let mut session = build("s-arg", 4, Difficulty::Beginner, config());
    let events_before = session.events().len();

    let err = session
        .play_round(Decision::new().interest_rate(InterestRate::Hold).argument("arg_bogus"))
        .unwrap_err();

    assert!(matches!(err, SimError::UnknownArgument { ref id } if id == "arg_bogus"));
    assert_eq!(session.state().round, 1);
    assert_eq!(session.events().len(), events_before);
}

#[test]
fn scenarios_cycle_by_round() {
    let mut session = build("s-cycle", 5, Difficulty::Beginner, config());

    session.play_round(passing_decision()).unwrap();
    assert_eq!(session.advance_scenario().unwrap().id, "beg_2");

    session.play_round(passing_decision()).unwrap();
    assert_eq!(session.advance_scenario().unwrap().id, "beg_1");
}

#[test]
fn round_limit_ends_the_game() {
    let rules = GameRules { max_rounds: Some(2), score_floor: None };
    let mut session = build("s-limit", 6, Difficulty::Beginner, config().with_rules(rules));

    let first = session.play_round(passing_decision()).unwrap();
    assert_eq!(first.game_over, None);
    session.advance_scenario().unwrap();

    let second = session.play_round(passing_decision()).unwrap();
    assert_eq!(second.game_over, Some(GameEndReason::RoundLimit));
    assert!(session.is_over());
    assert_eq!(session.events().last().map(|e| e.event_type.as_str()), Some("game_ended"));

    assert!(matches!(
        session.play_round(passing_decision()),
        Err(SimError::GameOver { round: 2 })
    ));
    assert!(matches!(session.advance_scenario(), Err(SimError::GameOver { .. })));
}

#[test]
fn score_floor_ends_the_game() {
    let rules = GameRules { max_rounds: None, score_floor: Some(90) };
    let mut session = build("s-floor", 7, Difficulty::Expert, config().with_rules(rules));

    let report = session.play_round(Decision::new()).unwrap();

    assert_eq!(report.score, 85);
    assert_eq!(report.game_over, Some(GameEndReason::ScoreFloor));
    assert!(session.state().is_game_over);
}

#[test]
fn unlimited_rules_never_end_the_game() {
    let mut session = build("s-open", 8, Difficulty::Expert, config().with_rules(GameRules::unlimited()));

    for _ in 0..20 {
        let report = session.play_round(Decision::new()).unwrap();
        assert_eq!(report.game_over, None);
        session.advance_scenario().unwrap();
    }
    assert_eq!(session.state().score, 100 - 20 * 15);
}

#[test]
fn empty_tier_cannot_start() {
    let mut config = config();
    config.scenarios = ScenarioCatalog::default();

    let result = Session::new("s-none".into(), 9, Difficulty::Advanced, config);

    assert!(matches!(
        result,
        Err(SimError::NoScenarios { difficulty: Difficulty::Advanced })
    ));
}

#[test]
fn commands_drive_the_session() {
    let mut session = build("s-cmd", 10, Difficulty::Beginner, config());

    let response = session
        .apply(PlayerCommand::SubmitDecision { decision: passing_decision() })
        .unwrap();
    assert!(matches!(response, CommandResponse::RoundResolved { ref report } if report.round == 1));

    let response = session.apply(PlayerCommand::NextRound).unwrap();
    assert!(matches!(
        response,
        CommandResponse::ScenarioChanged { round: 2, ref scenario } if scenario.id == "beg_2"
    ));

    match session.apply(PlayerCommand::GetState).unwrap() {
        CommandResponse::State { state } => assert_eq!(&state, session.state()),
        other => panic!("expected state, got {other:?}"),
    }
}

#[test]
fn commands_parse_from_json() {
    let json = r#"{"cmd":"submit_decision","decision":{"interest_rate":"raise","open_market_op":"none"}}"#;
    let command: PlayerCommand = serde_json::from_str(json).unwrap();

    match command {
        PlayerCommand::SubmitDecision { decision } => {
            assert_eq!(decision.interest_rate, Some(InterestRate::Raise));
            assert_eq!(decision.open_market_op, Some(OpenMarketOp::NoOp));
            assert_eq!(decision.standing_facility, None);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn custom_council_changes_the_outcome() {
    let hawks = Council::with_members([
        CouncilMember::new("A", "X", Disposition::Hawk),
        CouncilMember::new("B", "X", Disposition::Hawk),
        CouncilMember::new("C", "X", Disposition::Hawk),
        CouncilMember::new("D", "X", Disposition::Dove),
        CouncilMember::new("E", "X", Disposition::Dove),
    ]);
    let mut session = build("s-hawks", 11, Difficulty::Advanced, config()).with_council(hawks.clone());
    assert_eq!(session.council(), &hawks);

    let report = session
        .play_round(Decision::new().interest_rate(InterestRate::Raise))
        .unwrap();

    assert!(report.vote.passed);
}

#[test]
fn snapshot_restores_an_identical_session() {
    let mut original = build("s-snap", 12, Difficulty::Expert, config());
    for _ in 0..2 {
        original.play_round(passing_decision()).unwrap();
        original.advance_scenario().unwrap();
    }

    let json = original.snapshot().to_json().unwrap();
    let snapshot = SessionSnapshot::from_json(&json).unwrap();
    let mut restored = Session::restore(snapshot, config()).unwrap();

    assert_eq!(restored.state(), original.state());
    assert_eq!(restored.session_id, original.session_id);

    let a = original.play_round(passing_decision()).unwrap();
    let b = restored.play_round(passing_decision()).unwrap();
    assert_eq!(a, b, "restored session must continue the same market stream");
}

#[test]
fn snapshot_keeps_a_custom_council() {
    let hawks = Council::with_members([
        CouncilMember::new("A", "X", Disposition::Hawk),
        CouncilMember::new("B", "X", Disposition::Hawk),
        CouncilMember::new("C", "X", Disposition::Hawk),
        CouncilMember::new("D", "X", Disposition::Dove),
        CouncilMember::new("E", "X", Disposition::Centrist),
    ]);
    let mut original = build("s-snap-council", 14, Difficulty::Advanced, config()).with_council(hawks.clone());
    original.play_round(Decision::new().interest_rate(InterestRate::Raise)).unwrap();
    original.advance_scenario().unwrap();

    let json = original.snapshot().to_json().unwrap();
    let mut restored = Session::restore(SessionSnapshot::from_json(&json).unwrap(), config()).unwrap();

    assert_eq!(restored.council(), &hawks);
    let report = restored
        .play_round(Decision::new().interest_rate(InterestRate::Raise))
        .unwrap();
    assert!(report.vote.passed, "the three hawks must still carry a rate raise");
}

#[test]
fn tampered_snapshot_is_rejected() {
    let mut session = build("s-tamper", 13, Difficulty::Beginner, config());
    session.play_round(passing_decision()).unwrap();

    let mut snapshot = session.snapshot();
    snapshot.rng_draws += 1;

    assert!(matches!(
        Session::restore(snapshot, config()),
        Err(SimError::SnapshotMismatch { .. })
    ));
}
