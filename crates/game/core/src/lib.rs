//! Deterministic character and combat rules.
//!
//! `skirmish-core` defines role-playing entities ([`Character`] with a tagged
//! [`Class`]), their stat mutations, and the class abilities that resolve into
//! damage on a target. The core performs no I/O: randomness and notifications
//! are capabilities injected by the caller through [`CombatEnv`] and
//! [`NotificationSink`].
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use action::{AbilityKind, ActionError};
pub use combat::{ActionOutcome, DamageOutcome, HitReport};
pub use config::GameConfig;
pub use env::{
    CombatEnv, FixedRoll, NotificationSink, NullSink, PcgRng, RecordingSink, RngOracle,
    ScriptedRolls,
};
pub use error::{ErrorKind, ErrorSeverity, GameError, InvalidArgument};
pub use event::CombatEvent;
pub use state::{Character, CharacterTemplate, Class, ClassKind, ClassTemplate, LifeState};
