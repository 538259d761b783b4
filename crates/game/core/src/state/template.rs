//! Declarative character descriptions.
//!
//! Templates are plain data (loadable from scenario files) and become
//! characters through the same validation as the direct constructors.

use crate::config::GameConfig;
use crate::error::InvalidArgument;

use super::character::Character;
use super::class::Class;

/// Class section of a [`CharacterTemplate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassTemplate {
    #[default]
    Commoner,
    Warrior {
        weapon: String,
    },
    Mage {
        magic_power: i32,
        /// Defaults to 100.
        #[cfg_attr(feature = "serde", serde(default))]
        mana: Option<i32>,
    },
    Archer {
        bow_type: String,
    },
}

impl ClassTemplate {
    /// Armor used when the template does not set one.
    pub const fn default_armor(&self) -> i32 {
        match self {
            Self::Warrior { .. } => GameConfig::DEFAULT_WARRIOR_ARMOR,
            _ => GameConfig::DEFAULT_ARMOR,
        }
    }

    fn to_class(&self) -> Class {
        match self {
            Self::Commoner => Class::Commoner,
            Self::Warrior { weapon } => Class::Warrior {
                weapon: weapon.clone(),
            },
            Self::Mage { magic_power, mana } => Class::Mage {
                magic_power: *magic_power,
                mana: mana.unwrap_or(GameConfig::DEFAULT_MANA),
            },
            Self::Archer { bow_type } => Class::Archer {
                bow_type: bow_type.clone(),
            },
        }
    }
}

/// Initial stats for one character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterTemplate {
    pub name: String,
    pub health: i32,
    pub level: i32,
    /// Class default when absent: 5 for warriors, 0 otherwise.
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor: Option<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub class: ClassTemplate,
}

impl CharacterTemplate {
    pub fn new(name: impl Into<String>, health: i32, level: i32, class: ClassTemplate) -> Self {
        Self {
            name: name.into(),
            health,
            level,
            armor: None,
            class,
        }
    }

    #[must_use]
    pub fn with_armor(mut self, armor: i32) -> Self {
        self.armor = Some(armor);
        self
    }

    pub fn armor_or_default(&self) -> i32 {
        self.armor.unwrap_or_else(|| self.class.default_armor())
    }

    /// Validates and builds the character.
    pub fn build(&self) -> Result<Character, InvalidArgument> {
        Character::with_class(
            self.name.clone(),
            self.health,
            self.level,
            self.armor_or_default(),
            self.class.to_class(),
        )
    }
}

impl TryFrom<&CharacterTemplate> for Character {
    type Error = InvalidArgument;

    fn try_from(template: &CharacterTemplate) -> Result<Self, Self::Error> {
        template.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ClassKind;

    #[test]
    fn templates_apply_class_defaults() {
        let warrior = CharacterTemplate::new(
            "Geralt",
            100,
            1,
            ClassTemplate::Warrior {
                weapon: "Sword".into(),
            },
        )
        .build()
        .unwrap();
        assert_eq!(warrior.armor(), 5);

        let mage = CharacterTemplate::new(
            "Merlin",
            80,
            1,
            ClassTemplate::Mage {
                magic_power: 50,
                mana: None,
            },
        )
        .build()
        .unwrap();
        assert_eq!(mage.mana(), Some(100));
        assert_eq!(mage.kind(), ClassKind::Mage);
    }

    #[test]
    fn explicit_armor_overrides_default() {
        let template = CharacterTemplate::new(
            "Geralt",
            100,
            1,
            ClassTemplate::Warrior {
                weapon: "Sword".into(),
            },
        )
        .with_armor(0);
        assert_eq!(Character::try_from(&template).unwrap().armor(), 0);
    }

    #[test]
    fn templates_go_through_validation() {
        let template = CharacterTemplate::new("Ghost", 0, 1, ClassTemplate::Commoner);
        assert_eq!(
            template.build(),
            Err(InvalidArgument::NonPositiveHealth(0))
        );
    }
}
