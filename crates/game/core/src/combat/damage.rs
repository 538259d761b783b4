//! Damage formulas and armor mitigation.

use crate::config::GameConfig;

/// Armor-mitigated damage, floored at zero.
///
/// ```text
/// effective = max(damage - armor, 0)
/// ```
pub fn mitigate(damage: i32, armor: i32) -> i32 {
    damage.saturating_sub(armor).max(0)
}

/// Warrior melee damage and whether the roll was a critical hit.
///
/// # Formula
///
/// ```text
/// base = level * warrior_damage_per_level
/// if roll < crit_chance:
///     total = base + base * crit_bonus_ratio
/// damage = trunc(total)
/// ```
///
/// The comparison is strict: a roll equal to `crit_chance` does not crit.
pub fn weapon_damage(level: i32, roll: f64, config: &GameConfig) -> (i32, bool) {
    let base = level.saturating_mul(config.warrior_damage_per_level);
    let critical = roll < config.crit_chance;
    if !critical {
        return (base, false);
    }

    let base = f64::from(base);
    let total = base + base * config.crit_bonus_ratio;
    // `as` saturates at the i32 bounds
    (total as i32, true)
}

/// Mage spell damage.
///
/// ```text
/// damage = level * spell_damage_per_level + magic_power / 2
/// ```
///
/// Magic power is always positive, so integer division is floor division.
pub fn spell_damage(level: i32, magic_power: i32, config: &GameConfig) -> i32 {
    level
        .saturating_mul(config.spell_damage_per_level)
        .saturating_add(magic_power.div_euclid(2))
}

/// Archer damage: `level * arrow_damage_per_level`, no randomness.
pub fn arrow_damage(level: i32, config: &GameConfig) -> i32 {
    level.saturating_mul(config.arrow_damage_per_level)
}
