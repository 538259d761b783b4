//! Warrior melee strike.

use crate::combat::{DamageOutcome, weapon_damage};
use crate::env::CombatEnv;
use crate::event::CombatEvent;
use crate::state::{Character, Class, ClassKind};

use super::error::ActionError;

impl Character {
    /// Strikes `target` with the warrior's weapon.
    ///
    /// Draws one roll from the environment's random source; a roll strictly
    /// below the crit chance adds the critical bonus. The truncated total is
    /// announced, then applied through [`Character::take_damage`].
    pub fn attack(
        &self,
        target: &mut Character,
        env: &mut CombatEnv<'_>,
    ) -> Result<DamageOutcome, ActionError> {
        let Class::Warrior { weapon } = &self.class else {
            return Err(self.class_mismatch(ClassKind::Warrior));
        };

        let roll = env.roll();
        let (raw, critical) = weapon_damage(self.level(), roll, env.config());

        env.sink().notify(CombatEvent::WeaponStrike {
            attacker: self.name().to_owned(),
            weapon: weapon.clone(),
            target: target.name().to_owned(),
            damage: raw,
            critical,
        });
        let hit = target.take_damage(raw, env.sink())?;

        Ok(DamageOutcome { raw, critical, hit })
    }
}
