//! Runtime orchestration for skirmish combat.
//!
//! This crate wires the pure rules in `skirmish-core` to a random source and
//! a notification sink, keeps the roster of combatants, and runs scripted
//! scenarios against it.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`scenario`] describes combatants and steps loadable from RON
//! - [`config`] reads runtime settings from the environment
//! - [`sink`] and [`random`] adapt `tracing` and `rand` to the core traits
pub mod config;
pub mod error;
pub mod random;
pub mod runtime;
pub mod scenario;
pub mod sink;
pub mod types;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use random::StdRandom;
pub use runtime::{Runtime, RuntimeBuilder};
pub use scenario::{Scenario, Step};
pub use sink::TracingSink;
pub use types::{CombatantId, DuelResult, StepOutcome, TurnRecord};
