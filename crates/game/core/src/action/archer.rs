//! Archer ranged shot.

use crate::combat::{DamageOutcome, arrow_damage};
use crate::env::CombatEnv;
use crate::event::CombatEvent;
use crate::state::{Character, Class, ClassKind};

use super::error::ActionError;

impl Character {
    /// Shoots `target`. Damage is fixed by level; no roll, no armor piercing.
    pub fn shoot_arrow(
        &self,
        target: &mut Character,
        env: &mut CombatEnv<'_>,
    ) -> Result<DamageOutcome, ActionError> {
        let Class::Archer { bow_type } = &self.class else {
            return Err(self.class_mismatch(ClassKind::Archer));
        };

        let raw = arrow_damage(self.level(), env.config());
        env.sink().notify(CombatEvent::ArrowShot {
            archer: self.name().to_owned(),
            bow_type: bow_type.clone(),
            target: target.name().to_owned(),
            damage: raw,
        });
        let hit = target.take_damage(raw, env.sink())?;

        Ok(DamageOutcome {
            raw,
            critical: false,
            hit,
        })
    }
}
