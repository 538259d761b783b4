//! Skirmish command-line entry point.
//!
//! Composition root: reads configuration from the environment (and `.env`),
//! installs the log subscriber, builds a [`Runtime`] and runs either the
//! scenario named by `SKIRMISH_SCENARIO` or the built-in demo.
//!
//! Combat notifications are written to stderr through `tracing`; the final
//! roster is printed to stdout.
//!
//! ```bash
//! # Built-in demo with reproducible crit rolls
//! SKIRMISH_SEED=7 cargo run -p skirmish
//!
//! # Custom scenario, debug output from the orchestrator
//! RUST_LOG=skirmish_runtime=debug SKIRMISH_SCENARIO=duel.ron cargo run -p skirmish
//! ```

use anyhow::{Context, Result};
use skirmish_core::Character;
use skirmish_runtime::{Runtime, RuntimeConfig, Scenario, StepOutcome};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env().context("invalid runtime configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let scenario = match &config.scenario_path {
        Some(path) => Scenario::load_from_file(path)
            .with_context(|| format!("cannot load scenario {}", path.display()))?,
        None => {
            tracing::info!("no scenario configured, running the demo");
            Scenario::demo()
        }
    };

    let mut runtime = Runtime::from_config(&config);
    let outcomes = runtime.run_scenario(&scenario)?;

    for outcome in &outcomes {
        if let StepOutcome::Duel(result) = outcome {
            let winner = result
                .winner
                .and_then(|id| runtime.get(id))
                .map_or("nobody", Character::name);
            println!("Duel won by {winner} after {} rounds", result.rounds);
        }
    }
    for character in runtime.roster() {
        println!("{character}");
    }

    Ok(())
}
