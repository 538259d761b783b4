//! Capabilities injected into the core.
//!
//! The core needs three things from its caller: a random source for critical
//! rolls, a sink for notifications, and the balance table. [`CombatEnv`]
//! bundles them so abilities take a single environment argument.
mod rng;
mod sink;

pub use rng::{FixedRoll, PcgRng, RngOracle, ScriptedRolls};
pub use sink::{NotificationSink, NullSink, RecordingSink};

use crate::config::GameConfig;

/// Aggregates the capabilities consumed by abilities.
pub struct CombatEnv<'a> {
    config: GameConfig,
    rng: &'a mut dyn RngOracle,
    sink: &'a mut dyn NotificationSink,
}

impl<'a> CombatEnv<'a> {
    /// Environment with the default balance table.
    pub fn new(rng: &'a mut dyn RngOracle, sink: &'a mut dyn NotificationSink) -> Self {
        Self {
            config: GameConfig::default(),
            rng,
            sink,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn roll(&mut self) -> f64 {
        self.rng.next_unit()
    }

    pub fn sink(&mut self) -> &mut dyn NotificationSink {
        &mut *self.sink
    }
}

impl core::fmt::Debug for CombatEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CombatEnv")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
