//! Notifications emitted by state-changing operations.
//!
//! Every mutation on a [`crate::Character`] produces exactly one
//! [`CombatEvent`] (plus [`CombatEvent::Died`] when a hit drops health to zero
//! or below). Events are handed to a [`crate::NotificationSink`]; their
//! `Display` impl renders the human-readable line.

use core::fmt;

/// High-level occurrences produced by entity operations and abilities.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    LeveledUp {
        name: String,
        level: i32,
    },

    /// Armor-mitigated damage was subtracted from health.
    DamageTaken {
        name: String,
        amount: i32,
        health: i32,
    },

    /// Health dropped to zero or below. Advisory only: nothing is removed.
    Died {
        name: String,
    },

    Healed {
        name: String,
        amount: i32,
        health: i32,
    },

    SkillLearned {
        name: String,
        skill: String,
    },

    ItemAcquired {
        name: String,
        item: String,
    },

    /// Warrior melee strike. `damage` is the raw value before mitigation.
    WeaponStrike {
        attacker: String,
        weapon: String,
        target: String,
        damage: i32,
        critical: bool,
    },

    SpellCast {
        caster: String,
        target: String,
        damage: i32,
    },

    /// Cast attempted below the mana cost; nothing changed.
    InsufficientMana {
        caster: String,
        mana: i32,
        required: i32,
    },

    ManaRestored {
        name: String,
        amount: i32,
        mana: i32,
    },

    ArrowShot {
        archer: String,
        bow_type: String,
        target: String,
        damage: i32,
    },
}

impl CombatEvent {
    /// Name of the entity the event is about (the actor for abilities).
    pub fn subject(&self) -> &str {
        match self {
            Self::LeveledUp { name, .. }
            | Self::DamageTaken { name, .. }
            | Self::Died { name }
            | Self::Healed { name, .. }
            | Self::SkillLearned { name, .. }
            | Self::ItemAcquired { name, .. }
            | Self::ManaRestored { name, .. } => name,
            Self::WeaponStrike { attacker, .. } => attacker,
            Self::SpellCast { caster, .. } | Self::InsufficientMana { caster, .. } => caster,
            Self::ArrowShot { archer, .. } => archer,
        }
    }

    pub fn is_death(&self) -> bool {
        matches!(self, Self::Died { .. })
    }
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeveledUp { name, level } => write!(f, "{name} reached level {level}!"),
            Self::DamageTaken {
                name,
                amount,
                health,
            } => write!(f, "{name} took {amount} damage. Health: {health}"),
            Self::Died { name } => write!(f, "{name} has died!"),
            Self::Healed {
                name,
                amount,
                health,
            } => write!(f, "{name} healed for {amount}. Current health: {health}"),
            Self::SkillLearned { name, skill } => {
                write!(f, "{name} learned a new skill: {skill}")
            }
            Self::ItemAcquired { name, item } => write!(f, "{name} obtained item: {item}"),
            Self::WeaponStrike {
                attacker,
                weapon,
                target,
                damage,
                critical,
            } => {
                write!(
                    f,
                    "{attacker} attacks {target} with {weapon} and deals {damage} damage!"
                )?;
                if *critical {
                    write!(f, " Critical hit!")?;
                }
                Ok(())
            }
            Self::SpellCast {
                caster,
                target,
                damage,
            } => write!(
                f,
                "{caster} casts a spell on {target} and deals {damage} damage!"
            ),
            Self::InsufficientMana { caster, .. } => {
                write!(f, "{caster} does not have enough mana to cast a spell!")
            }
            Self::ManaRestored { name, amount, mana } => {
                write!(f, "{name} restored {amount} mana. Current mana: {mana}")
            }
            Self::ArrowShot {
                archer,
                bow_type,
                target,
                damage,
            } => write!(
                f,
                "{archer} shoots {target} with {bow_type} and deals {damage} damage!"
            ),
        }
    }
}
