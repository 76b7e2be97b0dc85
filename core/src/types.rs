//! Shared primitive types used across the entire simulation.

/// A policy round. Round 1 is the first decision of a session.
pub type Round = u32;

/// Player score. Starts at 100 and is unbounded in both directions.
pub type Score = i64;

/// The canonical session identifier.
pub type SessionId = String;

/// Identifier into the argument catalog.
pub type ArgumentId = String;

/// Identifier of a scenario record.
pub type ScenarioId = String;
