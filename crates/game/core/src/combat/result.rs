//! Combat result types.

/// What `take_damage` did to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitReport {
    /// Damage requested by the caller, before armor.
    pub incoming: i32,
    /// Damage actually subtracted from health.
    pub mitigated: i32,
    pub health_after: i32,
    /// Health is at or below zero after this hit.
    pub fatal: bool,
}

/// Result of an ability that landed on its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Raw damage produced by the ability.
    pub raw: i32,
    /// Warrior critical hit. Always false for other classes.
    pub critical: bool,
    pub hit: HitReport,
}

impl DamageOutcome {
    pub fn dealt(&self) -> i32 {
        self.hit.mitigated
    }

    pub fn target_died(&self) -> bool {
        self.hit.fatal
    }
}

/// Result of dispatching a character's signature ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    /// The ability resolved and damage was applied.
    Damage(DamageOutcome),
    /// A cast was attempted below the mana cost. Nothing changed.
    InsufficientMana { mana: i32, required: i32 },
}

impl ActionOutcome {
    pub fn damage(&self) -> Option<&DamageOutcome> {
        match self {
            Self::Damage(outcome) => Some(outcome),
            Self::InsufficientMana { .. } => None,
        }
    }
}
