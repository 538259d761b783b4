//! The character entity.
//!
//! A [`Character`] is constructed once with validated stats and mutated in
//! place for its whole lifetime. Health may fall to zero or below, which marks
//! the character as dead but removes nothing. Dead characters can still be
//! healed, attacked, and can still act; callers that want stricter turn rules
//! check [`Character::is_alive`] themselves.

use core::fmt;

use crate::combat::{HitReport, mitigate};
use crate::config::GameConfig;
use crate::env::NotificationSink;
use crate::error::InvalidArgument;
use crate::event::CombatEvent;

use super::class::{Class, ClassKind};
use super::validation::{require_positive, validate_base, validate_class};

/// Alive while health is above zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifeState {
    Alive,
    Dead,
}

/// Mutable combat state of one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    health: i32,
    level: i32,
    armor: i32,
    skills: Vec<String>,
    inventory: Vec<String>,
    pub(crate) class: Class,
}

impl Character {
    /// Plain character without a class.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the name is empty, `health <= 0`, `level < 1`
    /// or `armor < 0`.
    pub fn new(
        name: impl Into<String>,
        health: i32,
        level: i32,
        armor: i32,
    ) -> Result<Self, InvalidArgument> {
        Self::with_class(name, health, level, armor, Class::Commoner)
    }

    /// Warrior with the default armor of 5.
    pub fn warrior(
        name: impl Into<String>,
        health: i32,
        level: i32,
        weapon: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        Self::warrior_with_armor(name, health, level, weapon, GameConfig::DEFAULT_WARRIOR_ARMOR)
    }

    pub fn warrior_with_armor(
        name: impl Into<String>,
        health: i32,
        level: i32,
        weapon: impl Into<String>,
        armor: i32,
    ) -> Result<Self, InvalidArgument> {
        let class = Class::Warrior {
            weapon: weapon.into(),
        };
        Self::with_class(name, health, level, armor, class)
    }

    /// Mage with the default 100 mana and no armor.
    pub fn mage(
        name: impl Into<String>,
        health: i32,
        level: i32,
        magic_power: i32,
    ) -> Result<Self, InvalidArgument> {
        Self::mage_with_mana(name, health, level, magic_power, GameConfig::DEFAULT_MANA)
    }

    pub fn mage_with_mana(
        name: impl Into<String>,
        health: i32,
        level: i32,
        magic_power: i32,
        mana: i32,
    ) -> Result<Self, InvalidArgument> {
        let class = Class::Mage { magic_power, mana };
        Self::with_class(name, health, level, GameConfig::DEFAULT_ARMOR, class)
    }

    /// Archer with no armor.
    pub fn archer(
        name: impl Into<String>,
        health: i32,
        level: i32,
        bow_type: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        let class = Class::Archer {
            bow_type: bow_type.into(),
        };
        Self::with_class(name, health, level, GameConfig::DEFAULT_ARMOR, class)
    }

    /// Validates class attributes first, then the shared base stats.
    pub fn with_class(
        name: impl Into<String>,
        health: i32,
        level: i32,
        armor: i32,
        class: Class,
    ) -> Result<Self, InvalidArgument> {
        let name = name.into();
        validate_class(&class)?;
        validate_base(&name, health, level, armor)?;

        Ok(Self {
            name,
            health,
            level,
            armor,
            skills: Vec::new(),
            inventory: Vec::new(),
            class,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn armor(&self) -> i32 {
        self.armor
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn class(&self) -> &Class {
        &self.class
    }

    pub fn kind(&self) -> ClassKind {
        self.class.kind()
    }

    pub fn weapon(&self) -> Option<&str> {
        match &self.class {
            Class::Warrior { weapon } => Some(weapon),
            _ => None,
        }
    }

    pub fn magic_power(&self) -> Option<i32> {
        match self.class {
            Class::Mage { magic_power, .. } => Some(magic_power),
            _ => None,
        }
    }

    pub fn mana(&self) -> Option<i32> {
        match self.class {
            Class::Mage { mana, .. } => Some(mana),
            _ => None,
        }
    }

    pub fn bow_type(&self) -> Option<&str> {
        match &self.class {
            Class::Archer { bow_type } => Some(bow_type),
            _ => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn life_state(&self) -> LifeState {
        if self.is_alive() {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Increments the level by one. There is no upper bound.
    pub fn level_up(&mut self, sink: &mut (impl NotificationSink + ?Sized)) {
        self.level = self.level.saturating_add(1);
        sink.notify(CombatEvent::LeveledUp {
            name: self.name.clone(),
            level: self.level,
        });
    }

    /// Applies incoming damage after armor mitigation.
    ///
    /// Emits the damage line, then a death line if health ended at or below
    /// zero (even if the character was already dead).
    ///
    /// # Errors
    ///
    /// `InvalidArgument::NegativeDamage` when `damage < 0`; health is untouched.
    pub fn take_damage(
        &mut self,
        damage: i32,
        sink: &mut (impl NotificationSink + ?Sized),
    ) -> Result<HitReport, InvalidArgument> {
        if damage < 0 {
            return Err(InvalidArgument::NegativeDamage(damage));
        }

        let mitigated = mitigate(damage, self.armor);
        self.health = self.health.saturating_sub(mitigated);
        sink.notify(CombatEvent::DamageTaken {
            name: self.name.clone(),
            amount: mitigated,
            health: self.health,
        });

        let fatal = !self.is_alive();
        if fatal {
            sink.notify(CombatEvent::Died {
                name: self.name.clone(),
            });
        }

        Ok(HitReport {
            incoming: damage,
            mitigated,
            health_after: self.health,
            fatal,
        })
    }

    /// Adds health. No cap exists, and dead characters may be healed.
    ///
    /// # Errors
    ///
    /// `InvalidArgument::NonPositiveHeal` when `amount <= 0`.
    pub fn heal(
        &mut self,
        amount: i32,
        sink: &mut (impl NotificationSink + ?Sized),
    ) -> Result<(), InvalidArgument> {
        require_positive(amount, InvalidArgument::NonPositiveHeal)?;

        self.health = self.health.saturating_add(amount);
        sink.notify(CombatEvent::Healed {
            name: self.name.clone(),
            amount,
            health: self.health,
        });
        Ok(())
    }

    /// Appends a skill. Duplicates are kept.
    pub fn add_skill(
        &mut self,
        skill: impl Into<String>,
        sink: &mut (impl NotificationSink + ?Sized),
    ) -> Result<(), InvalidArgument> {
        let skill = skill.into();
        if skill.is_empty() {
            return Err(InvalidArgument::EmptySkill);
        }

        self.skills.push(skill.clone());
        sink.notify(CombatEvent::SkillLearned {
            name: self.name.clone(),
            skill,
        });
        Ok(())
    }

    /// Appends an item. Duplicates are kept.
    pub fn add_item(
        &mut self,
        item: impl Into<String>,
        sink: &mut (impl NotificationSink + ?Sized),
    ) -> Result<(), InvalidArgument> {
        let item = item.into();
        if item.is_empty() {
            return Err(InvalidArgument::EmptyItem);
        }

        self.inventory.push(item.clone());
        sink.notify(CombatEvent::ItemAcquired {
            name: self.name.clone(),
            item,
        });
        Ok(())
    }
}

/// `Name (Level 1, Health: 100, Armor: 5)` followed by class attributes.
impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (Level {}, Health: {}, Armor: {})",
            self.name, self.level, self.health, self.armor
        )?;
        match &self.class {
            Class::Commoner => Ok(()),
            Class::Warrior { weapon } => write!(f, ", Weapon: {weapon}"),
            Class::Mage { magic_power, mana } => {
                write!(f, ", Magic power: {magic_power}, Mana: {mana}")
            }
            Class::Archer { bow_type } => write!(f, ", Bow type: {bow_type}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{NullSink, RecordingSink};

    fn fighter(armor: i32) -> Character {
        Character::new("Boromir", 50, 1, armor).unwrap()
    }

    #[test]
    fn construction_rejects_invalid_stats() {
        assert_eq!(
            Character::new("a", 0, 1, 0),
            Err(InvalidArgument::NonPositiveHealth(0))
        );
        assert_eq!(
            Character::new("a", -3, 1, 0),
            Err(InvalidArgument::NonPositiveHealth(-3))
        );
        assert_eq!(
            Character::new("a", 10, 0, 0),
            Err(InvalidArgument::LevelBelowMinimum(0))
        );
        assert_eq!(
            Character::new("a", 10, 1, -1),
            Err(InvalidArgument::NegativeArmor(-1))
        );
        assert_eq!(Character::new("", 10, 1, 0), Err(InvalidArgument::EmptyName));
    }

    #[test]
    fn construction_starts_with_empty_collections() {
        let c = fighter(0);
        assert!(c.skills().is_empty());
        assert!(c.inventory().is_empty());
        assert_eq!(c.kind(), ClassKind::Commoner);
        assert_eq!(c.life_state(), LifeState::Alive);
    }

    #[test]
    fn variant_defaults() {
        let warrior = Character::warrior("Geralt", 100, 1, "Sword").unwrap();
        assert_eq!(warrior.armor(), 5);
        assert_eq!(warrior.weapon(), Some("Sword"));

        let mage = Character::mage("Merlin", 80, 1, 50).unwrap();
        assert_eq!(mage.armor(), 0);
        assert_eq!(mage.mana(), Some(100));
        assert_eq!(mage.magic_power(), Some(50));

        let archer = Character::archer("Legolas", 90, 1, "Longbow").unwrap();
        assert_eq!(archer.armor(), 0);
        assert_eq!(archer.bow_type(), Some("Longbow"));
        assert_eq!(archer.mana(), None);
    }

    #[test]
    fn variant_validation_runs_before_base_validation() {
        assert_eq!(
            Character::warrior("Geralt", 0, 1, ""),
            Err(InvalidArgument::EmptyWeapon)
        );
        assert_eq!(
            Character::mage_with_mana("Merlin", 80, 1, 10, -1),
            Err(InvalidArgument::NegativeMana(-1))
        );
        assert_eq!(
            Character::archer("Legolas", 90, 1, ""),
            Err(InvalidArgument::EmptyBowType)
        );
        assert_eq!(
            Character::warrior_with_armor("Geralt", 100, 1, "Sword", -2),
            Err(InvalidArgument::NegativeArmor(-2))
        );
    }

    #[test]
    fn take_damage_subtracts_mitigated_amount() {
        let mut c = fighter(3);
        let report = c.take_damage(10, &mut NullSink).unwrap();

        assert_eq!(report.mitigated, 7);
        assert_eq!(c.health(), 43);
        assert!(!report.fatal);
    }

    #[test]
    fn take_damage_below_armor_changes_nothing() {
        let mut c = fighter(5);
        c.take_damage(2, &mut NullSink).unwrap();
        c.take_damage(0, &mut NullSink).unwrap();
        assert_eq!(c.health(), 50);
    }

    #[test]
    fn negative_damage_is_rejected_without_side_effects() {
        let mut c = fighter(0);
        let mut sink = RecordingSink::new();

        assert_eq!(
            c.take_damage(-1, &mut sink),
            Err(InvalidArgument::NegativeDamage(-1))
        );
        assert_eq!(c.health(), 50);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn lethal_damage_emits_death_and_keeps_negative_health() {
        let mut c = fighter(0);
        let mut sink = RecordingSink::new();

        let report = c.take_damage(60, &mut sink).unwrap();

        assert!(report.fatal);
        assert_eq!(c.health(), -10);
        assert_eq!(c.life_state(), LifeState::Dead);
        assert_eq!(
            sink.lines(),
            vec!["Boromir took 60 damage. Health: -10", "Boromir has died!"]
        );
    }

    #[test]
    fn hitting_a_dead_character_reports_death_again() {
        let mut c = fighter(0);
        c.take_damage(50, &mut NullSink).unwrap();

        let mut sink = RecordingSink::new();
        c.take_damage(1, &mut sink).unwrap();
        assert!(sink.last().is_some_and(CombatEvent::is_death));
    }

    #[test]
    fn heal_has_no_cap_and_revives() {
        let mut c = fighter(0);
        c.take_damage(55, &mut NullSink).unwrap();
        assert!(!c.is_alive());

        c.heal(1_000, &mut NullSink).unwrap();
        assert_eq!(c.health(), 995);
        assert!(c.is_alive());
    }

    #[test]
    fn heal_rejects_non_positive_amounts() {
        let mut c = fighter(0);
        assert_eq!(
            c.heal(0, &mut NullSink),
            Err(InvalidArgument::NonPositiveHeal(0))
        );
        assert_eq!(
            c.heal(-4, &mut NullSink),
            Err(InvalidArgument::NonPositiveHeal(-4))
        );
        assert_eq!(c.health(), 50);
    }

    #[test]
    fn level_up_is_unbounded_and_announced() {
        let mut c = fighter(0);
        let mut sink = RecordingSink::new();
        for _ in 0..3 {
            c.level_up(&mut sink);
        }
        assert_eq!(c.level(), 4);
        assert_eq!(sink.lines().last().map(String::as_str), Some("Boromir reached level 4!"));
    }

    #[test]
    fn skills_and_items_append_with_duplicates() {
        let mut c = fighter(0);
        let mut sink = RecordingSink::new();

        c.add_skill("Parry", &mut sink).unwrap();
        c.add_skill("Parry", &mut sink).unwrap();
        c.add_item("Potion", &mut sink).unwrap();

        assert_eq!(c.skills(), ["Parry", "Parry"]);
        assert_eq!(c.inventory(), ["Potion"]);
        assert_eq!(sink.events().len(), 3);

        assert_eq!(c.add_skill("", &mut sink), Err(InvalidArgument::EmptySkill));
        assert_eq!(c.add_item("", &mut sink), Err(InvalidArgument::EmptyItem));
        assert_eq!(sink.events().len(), 3);
    }

    #[test]
    fn summary_appends_class_fields() {
        let warrior = Character::warrior("Geralt", 100, 1, "Sword").unwrap();
        assert_eq!(
            warrior.to_string(),
            "Geralt (Level 1, Health: 100, Armor: 5), Weapon: Sword"
        );

        let mage = Character::mage("Merlin", 80, 2, 50).unwrap();
        assert_eq!(
            mage.to_string(),
            "Merlin (Level 2, Health: 80, Armor: 0), Magic power: 50, Mana: 100"
        );

        assert_eq!(fighter(1).to_string(), "Boromir (Level 1, Health: 50, Armor: 1)");
    }
}
