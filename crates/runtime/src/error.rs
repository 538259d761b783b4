//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the core (validation, ability preconditions) and from
//! scenario loading so clients can bubble them up with consistent context.
use std::path::PathBuf;

use skirmish_core::{ActionError, InvalidArgument};
use thiserror::Error;

use crate::types::CombatantId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unknown combatant {0}")]
    UnknownCombatant(CombatantId),

    #[error("no combatant named '{0}'")]
    UnknownName(String),

    #[error("combatant name '{0}' is already taken")]
    DuplicateName(String),

    #[error("combatant {0} cannot target itself")]
    SelfTarget(CombatantId),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("failed to read scenario {path}")]
    ScenarioIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario {origin}")]
    ScenarioParse {
        origin: String,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize scenario")]
    ScenarioSerialize(#[source] ron::Error),

    #[error("invalid value '{value}' for {key}")]
    InvalidConfig { key: &'static str, value: String },
}
