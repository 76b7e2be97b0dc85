//! Session orchestration: one player, one game.
//!
//! A round runs in a fixed sequence:
//!   1. Council vote on the decision.
//!   2. Engine advance with the vote outcome.
//!   3. Game-over check against the configured rules.
//! The caller then asks for the next scenario with `advance_scenario`.
//!
//! RULES:
//!   - The session owns its GameState exclusively.
//!   - All randomness flows through the session's market stream.
//!   - Every state change is recorded in the event log.

use crate::{
    command::{CommandResponse, PlayerCommand, RoundReport},
    config::GameConfig,
    council::Council,
    engine,
    error::{SimError, SimResult},
    event::{EventLogEntry, RoundEvent},
    policy::Decision,
    rng::{RngStream, SessionRng},
    scenario::Scenario,
    snapshot::SessionSnapshot,
    state::{Difficulty, GameState},
    types::{Round, SessionId},
};

pub struct Session {
    pub session_id: SessionId,
    seed:           u64,
    state:          GameState,
    config:         GameConfig,
    council:        Council,
    rng:            SessionRng,
    events:         Vec<EventLogEntry>,
}

impl Session {
    pub fn new(
        session_id: SessionId,
        seed: u64,
        difficulty: Difficulty,
        config: GameConfig,
    ) -> SimResult<Self> {
        let scenario = config
            .scenarios
            .for_round(difficulty, 1)
            .cloned()
            .ok_or(SimError::NoScenarios { difficulty })?;

        let mut session = Self {
            state: GameState::new(difficulty, scenario),
            rng: SessionRng::new(seed, RngStream::MarketNoise),
            council: Council::standard(),
            events: Vec::new(),
            config,
            seed,
            session_id,
        };

        log::info!(
            "session {} started: difficulty={difficulty} seed={seed}",
            session.session_id
        );

        session.record(RoundEvent::SessionStarted {
            session_id: session.session_id.clone(),
            seed,
            difficulty,
        })?;
        session.record(RoundEvent::ScenarioActivated {
            round:       1,
            scenario_id: session.state.scenario.id.clone(),
        })?;
        Ok(session)
    }

    /// Replace the standing council.
    pub fn with_council(mut self, council: Council) -> Self {
        self.council = council;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn council(&self) -> &Council {
        &self.council
    }

    pub fn events(&self) -> &[EventLogEntry] {
        &self.events
    }

    pub fn is_over(&self) -> bool {
        self.state.is_game_over
    }

    /// Vote on `decision`, resolve the round and check for game over.
    pub fn play_round(&mut self, decision: Decision) -> SimResult<RoundReport> {
        self.ensure_running()?;

        if let Some(id) = &decision.argument {
            if !self.config.arguments.is_empty() && !self.config.arguments.contains(id) {
                return Err(SimError::UnknownArgument { id: id.clone() });
            }
        }

        let round = self.state.round;
        let vote = self.council.evaluate(&decision);
        self.record(RoundEvent::CouncilVoted {
            round,
            total_agree: vote.total_agree,
            passed:      vote.passed,
        })?;

        let mut next = engine::advance(&self.state, &decision, vote.passed, &mut self.rng);
        let feedback = next
            .feedback
            .ok_or_else(|| anyhow::anyhow!("round {round} resolved without feedback"))?;
        let score_delta = next.score - self.state.score;

        let game_over = self.config.rules.end_reason(&next);
        if game_over.is_some() {
            next.is_game_over = true;
        }
        self.state = next;

        let indicators = self.state.indicators.snapshot();
        self.record(RoundEvent::RoundResolved {
            round,
            feedback,
            score: self.state.score,
            indicators,
        })?;

        if let Some(reason) = game_over {
            log::info!(
                "session {} ended after round {round}: {reason:?} score={}",
                self.session_id,
                self.state.score
            );
            self.record(RoundEvent::GameEnded {
                round,
                score: self.state.score,
                reason,
            })?;
        }

        Ok(RoundReport {
            round,
            vote,
            feedback,
            message: feedback.message().to_string(),
            score_delta,
            score: self.state.score,
            indicators,
            game_over,
        })
    }

    /// Install the scenario for the current round.
    pub fn advance_scenario(&mut self) -> SimResult<&Scenario> {
        self.ensure_running()?;

        let difficulty = self.state.difficulty;
        let scenario = self
            .config
            .scenarios
            .for_round(difficulty, self.state.round)
            .cloned()
            .ok_or(SimError::NoScenarios { difficulty })?;

        self.state.scenario = scenario;
        self.record(RoundEvent::ScenarioActivated {
            round:       self.state.round,
            scenario_id: self.state.scenario.id.clone(),
        })?;
        Ok(&self.state.scenario)
    }

    pub fn apply(&mut self, command: PlayerCommand) -> SimResult<CommandResponse> {
        match command {
            PlayerCommand::SubmitDecision { decision } => {
                let report = self.play_round(decision)?;
                Ok(CommandResponse::RoundResolved { report })
            }
            PlayerCommand::NextRound => {
                let scenario = self.advance_scenario()?.clone();
                Ok(CommandResponse::ScenarioChanged { round: self.state.round, scenario })
            }
            PlayerCommand::GetState => Ok(CommandResponse::State { state: self.state.clone() }),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id.clone(),
            seed:       self.seed,
            rng_draws:  self.rng.draws(),
            council:    self.council.clone(),
            state:      self.state.clone(),
        }
    }

    /// Resume from a snapshot with the council it was taken with.
    /// The event log starts empty.
    pub fn restore(snapshot: SessionSnapshot, config: GameConfig) -> SimResult<Self> {
        // The engine draws exactly once per resolved round.
        let rounds = snapshot.state.history.len() as u64;
        if snapshot.rng_draws != rounds {
            return Err(SimError::SnapshotMismatch {
                reason: format!(
                    "{} rng draws recorded for {rounds} resolved rounds",
                    snapshot.rng_draws
                ),
            });
        }

        log::debug!(
            "session {} restored at round {}",
            snapshot.session_id,
            snapshot.state.round
        );

        Ok(Self {
            rng: SessionRng::resume(snapshot.seed, RngStream::MarketNoise, snapshot.rng_draws),
            seed: snapshot.seed,
            session_id: snapshot.session_id,
            state: snapshot.state,
            council: snapshot.council,
            events: Vec::new(),
            config,
        })
    }

    fn ensure_running(&self) -> SimResult<()> {
        if self.state.is_game_over {
            return Err(SimError::GameOver { round: self.resolved_rounds() });
        }
        Ok(())
    }

    fn resolved_rounds(&self) -> Round {
        self.state.round.saturating_sub(1)
    }

    fn record(&mut self, event: RoundEvent) -> SimResult<()> {
        let entry = EventLogEntry {
            seq:        self.events.len() as u64,
            session_id: self.session_id.clone(),
            round:      event.round(),
            event_type: event.type_name().to_string(),
            payload:    serde_json::to_string(&event)?,
        };
        self.events.push(entry);
        Ok(())
    }
}
