/// Balance table and tunable combat parameters.
///
/// Defaults reproduce the canonical rules: warriors deal `level * 2` with a
/// 20% chance of a +50% critical bonus, mages deal `level * 3 + power / 2`
/// for 10 mana, archers deal `level * 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Probability of a warrior critical hit. A roll strictly below this crits.
    pub crit_chance: f64,
    /// Fraction of base damage added on a critical hit.
    pub crit_bonus_ratio: f64,
    pub warrior_damage_per_level: i32,
    pub spell_damage_per_level: i32,
    /// Mana deducted per successful cast; also the minimum mana needed to cast.
    pub spell_mana_cost: i32,
    pub arrow_damage_per_level: i32,
}

impl GameConfig {
    // ===== construction-time constants =====
    pub const MIN_LEVEL: i32 = 1;
    pub const DEFAULT_ARMOR: i32 = 0;
    pub const DEFAULT_WARRIOR_ARMOR: i32 = 5;
    pub const DEFAULT_MANA: i32 = 100;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CRIT_CHANCE: f64 = 0.2;
    pub const DEFAULT_CRIT_BONUS_RATIO: f64 = 0.5;
    pub const DEFAULT_WARRIOR_DAMAGE_PER_LEVEL: i32 = 2;
    pub const DEFAULT_SPELL_DAMAGE_PER_LEVEL: i32 = 3;
    pub const DEFAULT_SPELL_MANA_COST: i32 = 10;
    pub const DEFAULT_ARROW_DAMAGE_PER_LEVEL: i32 = 2;

    pub const fn new() -> Self {
        Self {
            crit_chance: Self::DEFAULT_CRIT_CHANCE,
            crit_bonus_ratio: Self::DEFAULT_CRIT_BONUS_RATIO,
            warrior_damage_per_level: Self::DEFAULT_WARRIOR_DAMAGE_PER_LEVEL,
            spell_damage_per_level: Self::DEFAULT_SPELL_DAMAGE_PER_LEVEL,
            spell_mana_cost: Self::DEFAULT_SPELL_MANA_COST,
            arrow_damage_per_level: Self::DEFAULT_ARROW_DAMAGE_PER_LEVEL,
        }
    }

    pub const fn with_crit_chance(mut self, crit_chance: f64) -> Self {
        self.crit_chance = crit_chance;
        self
    }

    pub const fn with_spell_mana_cost(mut self, cost: i32) -> Self {
        self.spell_mana_cost = cost;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
