//! Identifiers and records produced by the orchestrator.

use std::fmt;

use serde::{Deserialize, Serialize};
use skirmish_core::ActionOutcome;

/// Position of a combatant in the runtime roster. Never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CombatantId(pub usize);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One resolved ability invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Sequence number, starting at 0.
    pub turn: u64,
    pub actor: CombatantId,
    pub target: CombatantId,
    pub outcome: ActionOutcome,
}

/// Result of [`crate::Runtime::duel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelResult {
    /// `None` when the round cap was reached with both sides alive, or when
    /// both started dead.
    pub winner: Option<CombatantId>,
    /// Rounds started. Each round is one action per living side.
    pub rounds: u32,
}

/// What a scenario step produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    Action(ActionOutcome),
    Duel(DuelResult),
    Applied,
}

#[cfg(test)]
mod tests {
    use skirmish_core::{DamageOutcome, HitReport};

    use super::*;

    #[test]
    fn step_outcomes_serialize_like_other_records() {
        let outcomes = vec![
            StepOutcome::Action(ActionOutcome::Damage(DamageOutcome {
                raw: 2,
                critical: false,
                hit: HitReport {
                    incoming: 2,
                    mitigated: 2,
                    health_after: 78,
                    fatal: false,
                },
            })),
            StepOutcome::Duel(DuelResult {
                winner: Some(CombatantId(1)),
                rounds: 5,
            }),
            StepOutcome::Applied,
        ];

        let text = ron::to_string(&outcomes).unwrap();
        let parsed: Vec<StepOutcome> = ron::from_str(&text).unwrap();

        assert_eq!(parsed, outcomes);
    }
}
