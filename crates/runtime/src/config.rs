//! Runtime configuration structures and loaders.

use std::env;
use std::path::PathBuf;

use skirmish_core::GameConfig;

use crate::error::{Result, RuntimeError};

/// Configuration required to bootstrap a runtime.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for the deterministic PCG source. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// RON scenario to run. `None` runs the built-in demo.
    pub scenario_path: Option<PathBuf>,
    /// Discard notifications instead of logging them.
    pub quiet: bool,
    /// Round cap applied to duels that do not set their own.
    pub duel_rounds: u32,
}

impl RuntimeConfig {
    pub const DEFAULT_DUEL_ROUNDS: u32 = 50;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_SEED` - Seed for reproducible crit rolls (default: entropy)
    /// - `SKIRMISH_SCENARIO` - Path to a RON scenario (default: built-in demo)
    /// - `SKIRMISH_QUIET` - Silence combat notifications (default: false)
    /// - `SKIRMISH_DUEL_ROUNDS` - Duel round cap, at least 1 (default: 50)
    /// - `SKIRMISH_CRIT_CHANCE` - Warrior crit probability in `[0, 1]` (default: 0.2)
    ///
    /// Unparsable values are reported instead of silently ignored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        config.seed = read_var::<u64>(&lookup, "SKIRMISH_SEED")?;
        config.scenario_path = lookup("SKIRMISH_SCENARIO").map(PathBuf::from);

        if let Some(quiet) = read_var::<bool>(&lookup, "SKIRMISH_QUIET")? {
            config.quiet = quiet;
        }

        if let Some(rounds) = read_var::<u32>(&lookup, "SKIRMISH_DUEL_ROUNDS")? {
            config.duel_rounds = rounds.max(1);
        }

        if let Some(chance) = read_var::<f64>(&lookup, "SKIRMISH_CRIT_CHANCE")? {
            if !(0.0..=1.0).contains(&chance) {
                return Err(RuntimeError::InvalidConfig {
                    key: "SKIRMISH_CRIT_CHANCE",
                    value: chance.to_string(),
                });
            }
            config.game_config = config.game_config.with_crit_chance(chance);
        }

        Ok(config)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: None,
            scenario_path: None,
            quiet: false,
            duel_rounds: Self::DEFAULT_DUEL_ROUNDS,
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| RuntimeError::InvalidConfig { key, value: raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(
        vars: &'static [(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            vars.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn defaults_match_balance_table() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.game_config, GameConfig::default());
        assert_eq!(config.duel_rounds, 50);
        assert!(config.seed.is_none());
        assert!(config.scenario_path.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn reads_every_variable() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            ("SKIRMISH_SEED", " 42 "),
            ("SKIRMISH_SCENARIO", "duel.ron"),
            ("SKIRMISH_QUIET", "true"),
            ("SKIRMISH_DUEL_ROUNDS", "12"),
            ("SKIRMISH_CRIT_CHANCE", "0.35"),
        ]))
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.scenario_path, Some(PathBuf::from("duel.ron")));
        assert!(config.quiet);
        assert_eq!(config.duel_rounds, 12);
        assert_eq!(config.game_config.crit_chance, 0.35);
    }

    #[test]
    fn zero_duel_rounds_clamps_to_one() {
        let config =
            RuntimeConfig::from_lookup(lookup_from(&[("SKIRMISH_DUEL_ROUNDS", "0")])).unwrap();
        assert_eq!(config.duel_rounds, 1);
    }

    fn rejected_key(vars: &'static [(&'static str, &'static str)]) -> &'static str {
        match RuntimeConfig::from_lookup(lookup_from(vars)) {
            Err(RuntimeError::InvalidConfig { key, .. }) => key,
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn crit_chance_outside_unit_range_is_rejected() {
        assert_eq!(
            rejected_key(&[("SKIRMISH_CRIT_CHANCE", "1.5")]),
            "SKIRMISH_CRIT_CHANCE"
        );
        assert_eq!(
            rejected_key(&[("SKIRMISH_CRIT_CHANCE", "-0.1")]),
            "SKIRMISH_CRIT_CHANCE"
        );
    }

    #[test]
    fn crit_chance_bounds_are_inclusive() {
        let config =
            RuntimeConfig::from_lookup(lookup_from(&[("SKIRMISH_CRIT_CHANCE", "1")])).unwrap();
        assert_eq!(config.game_config.crit_chance, 1.0);
    }

    #[test]
    fn unparsable_values_name_their_key() {
        assert_eq!(rejected_key(&[("SKIRMISH_SEED", "seven")]), "SKIRMISH_SEED");
        assert_eq!(rejected_key(&[("SKIRMISH_QUIET", "maybe")]), "SKIRMISH_QUIET");
        assert_eq!(
            rejected_key(&[("SKIRMISH_DUEL_ROUNDS", "-3")]),
            "SKIRMISH_DUEL_ROUNDS"
        );
    }
}
