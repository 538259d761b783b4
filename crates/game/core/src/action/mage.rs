//! Mage spell casting and mana restoration.

use crate::combat::{ActionOutcome, DamageOutcome, spell_damage};
use crate::env::{CombatEnv, NotificationSink};
use crate::error::InvalidArgument;
use crate::event::CombatEvent;
use crate::state::validation::require_positive;
use crate::state::{Character, Class, ClassKind};

use super::error::ActionError;

impl Character {
    /// Casts a spell on `target`.
    ///
    /// Below the mana cost the cast fizzles: one notification, no mana spent,
    /// no damage. Otherwise the cost is deducted first and the damage applied
    /// afterwards; the deduction is never rolled back.
    pub fn cast_spell(
        &mut self,
        target: &mut Character,
        env: &mut CombatEnv<'_>,
    ) -> Result<ActionOutcome, ActionError> {
        let level = self.level();
        let caster = self.name().to_owned();
        let cost = env.config().spell_mana_cost;

        let Class::Mage { magic_power, mana } = &mut self.class else {
            return Err(self.class_mismatch(ClassKind::Mage));
        };

        if *mana < cost {
            env.sink().notify(CombatEvent::InsufficientMana {
                caster,
                mana: *mana,
                required: cost,
            });
            return Ok(ActionOutcome::InsufficientMana {
                mana: *mana,
                required: cost,
            });
        }

        let raw = spell_damage(level, *magic_power, env.config());
        *mana -= cost;

        env.sink().notify(CombatEvent::SpellCast {
            caster,
            target: target.name().to_owned(),
            damage: raw,
        });
        let hit = target.take_damage(raw, env.sink())?;

        Ok(ActionOutcome::Damage(DamageOutcome {
            raw,
            critical: false,
            hit,
        }))
    }

    /// Adds mana. No cap.
    ///
    /// # Errors
    ///
    /// `ClassMismatch` for non-mages, `NonPositiveManaRestore` when
    /// `amount <= 0`.
    pub fn restore_mana(
        &mut self,
        amount: i32,
        sink: &mut (impl NotificationSink + ?Sized),
    ) -> Result<(), ActionError> {
        let name = self.name().to_owned();
        let Class::Mage { mana, .. } = &mut self.class else {
            return Err(self.class_mismatch(ClassKind::Mage));
        };
        require_positive(amount, InvalidArgument::NonPositiveManaRestore)?;

        *mana = mana.saturating_add(amount);
        sink.notify(CombatEvent::ManaRestored {
            name,
            amount,
            mana: *mana,
        });
        Ok(())
    }
}
