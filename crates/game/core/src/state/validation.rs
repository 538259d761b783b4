//! Construction-time stat checks.
//!
//! Class attributes are checked before the shared base stats, so a warrior with
//! an empty weapon reports `EmptyWeapon` even when its health is also invalid.

use crate::config::GameConfig;
use crate::error::InvalidArgument;

use super::class::Class;

/// Checks shared by every character.
pub fn validate_base(name: &str, health: i32, level: i32, armor: i32) -> Result<(), InvalidArgument> {
    if name.is_empty() {
        return Err(InvalidArgument::EmptyName);
    }
    if health <= 0 {
        return Err(InvalidArgument::NonPositiveHealth(health));
    }
    if level < GameConfig::MIN_LEVEL {
        return Err(InvalidArgument::LevelBelowMinimum(level));
    }
    if armor < 0 {
        return Err(InvalidArgument::NegativeArmor(armor));
    }
    Ok(())
}

/// Checks on class-specific attributes.
pub fn validate_class(class: &Class) -> Result<(), InvalidArgument> {
    match class {
        Class::Commoner => Ok(()),
        Class::Warrior { weapon } if weapon.is_empty() => Err(InvalidArgument::EmptyWeapon),
        Class::Warrior { .. } => Ok(()),
        Class::Mage { magic_power, .. } if *magic_power <= 0 => {
            Err(InvalidArgument::NonPositiveMagicPower(*magic_power))
        }
        Class::Mage { mana, .. } if *mana < 0 => Err(InvalidArgument::NegativeMana(*mana)),
        Class::Mage { .. } => Ok(()),
        Class::Archer { bow_type } if bow_type.is_empty() => Err(InvalidArgument::EmptyBowType),
        Class::Archer { .. } => Ok(()),
    }
}

/// Shared guard for amounts that must be strictly positive.
pub(crate) fn require_positive(
    amount: i32,
    error: fn(i32) -> InvalidArgument,
) -> Result<(), InvalidArgument> {
    if amount <= 0 { Err(error(amount)) } else { Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rejects_each_bad_stat() {
        assert_eq!(
            validate_base("", 10, 1, 0),
            Err(InvalidArgument::EmptyName)
        );
        assert_eq!(
            validate_base("a", 0, 1, 0),
            Err(InvalidArgument::NonPositiveHealth(0))
        );
        assert_eq!(
            validate_base("a", 10, 0, 0),
            Err(InvalidArgument::LevelBelowMinimum(0))
        );
        assert_eq!(
            validate_base("a", 10, 1, -1),
            Err(InvalidArgument::NegativeArmor(-1))
        );
        assert_eq!(validate_base("a", 1, 1, 0), Ok(()));
    }

    #[test]
    fn mage_checks_power_before_mana() {
        let class = Class::Mage {
            magic_power: 0,
            mana: -5,
        };
        assert_eq!(
            validate_class(&class),
            Err(InvalidArgument::NonPositiveMagicPower(0))
        );
    }

    #[test]
    fn zero_mana_is_allowed() {
        let class = Class::Mage {
            magic_power: 1,
            mana: 0,
        };
        assert_eq!(validate_class(&class), Ok(()));
    }

    #[test]
    fn positive_guard_rejects_zero() {
        assert_eq!(
            require_positive(0, InvalidArgument::NonPositiveHeal),
            Err(InvalidArgument::NonPositiveHeal(0))
        );
        assert_eq!(require_positive(1, InvalidArgument::NonPositiveHeal), Ok(()));
    }
}
