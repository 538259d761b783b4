//! Variant abilities.
//!
//! Each class owns one signature ability with its own preconditions:
//!
//! - Warrior: [`Character::attack`] (one random roll, may crit)
//! - Mage: [`Character::cast_spell`] (gated on mana, deducts before applying)
//! - Archer: [`Character::shoot_arrow`] (deterministic)
//!
//! [`Character::perform_action`] is the single entry point used by
//! orchestrators; it matches on the class and reports an [`ActionOutcome`].
//! Every ability computes raw damage, announces it, and applies it through
//! the target's `take_damage`.

mod archer;
pub mod error;
mod mage;
mod warrior;

pub use error::ActionError;

use crate::combat::ActionOutcome;
use crate::env::CombatEnv;
use crate::state::{Character, ClassKind};

/// Signature abilities, one per class.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityKind {
    Attack,
    CastSpell,
    ShootArrow,
}

impl AbilityKind {
    /// Ability granted by a class, if any.
    pub const fn for_class(kind: ClassKind) -> Option<Self> {
        match kind {
            ClassKind::Commoner => None,
            ClassKind::Warrior => Some(Self::Attack),
            ClassKind::Mage => Some(Self::CastSpell),
            ClassKind::Archer => Some(Self::ShootArrow),
        }
    }
}

impl Character {
    /// Performs this character's signature ability against `target`.
    ///
    /// Dead actors are not stopped; turn rules belong to the caller.
    pub fn perform_action(
        &mut self,
        target: &mut Character,
        env: &mut CombatEnv<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        match AbilityKind::for_class(self.kind()) {
            Some(AbilityKind::Attack) => self.attack(target, env).map(ActionOutcome::Damage),
            Some(AbilityKind::CastSpell) => self.cast_spell(target, env),
            Some(AbilityKind::ShootArrow) => {
                self.shoot_arrow(target, env).map(ActionOutcome::Damage)
            }
            None => Err(ActionError::NoSignatureAbility {
                actor: self.name().to_owned(),
            }),
        }
    }

    pub(crate) fn class_mismatch(&self, expected: ClassKind) -> ActionError {
        ActionError::ClassMismatch {
            actor: self.name().to_owned(),
            expected,
            actual: self.kind(),
        }
    }
}
