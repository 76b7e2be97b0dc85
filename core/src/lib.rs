//! Central-bank policy simulation core.
//!
//! Two pure operations drive a round: `council::evaluate` scores a decision
//! against the governing council, and `engine::advance` derives the next
//! game state from the vote outcome. `session::Session` wires them together
//! for callers that want orchestration, an event log and snapshots.

pub mod command;
pub mod config;
pub mod council;
pub mod engine;
pub mod error;
pub mod event;
pub mod indicator;
pub mod policy;
pub mod rng;
pub mod scenario;
pub mod session;
pub mod snapshot;
pub mod state;
pub mod types;

pub use council::{evaluate, Council, VoteOutcome};
pub use engine::{advance, Feedback};
pub use error::{SimError, SimResult};
pub use policy::Decision;
pub use state::{Difficulty, GameState};
