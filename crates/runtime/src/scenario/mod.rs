//! Scenario system for combatant setup and scripted turn sequences.
//!
//! A scenario lists the combatants to spawn and the steps to run against
//! them. Steps address combatants by name. Scenarios are stored as RON:
//!
//! ```ron
//! (
//!     combatants: [
//!         (name: "Geralt", health: 100, level: 1, class: Warrior(weapon: "Sword")),
//!         (name: "Merlin", health: 80, level: 1, class: Mage(magic_power: 50)),
//!     ],
//!     steps: [
//!         Act(actor: "Geralt", target: "Merlin"),
//!         LevelUp(who: "Geralt"),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{CharacterTemplate, ClassTemplate};

use crate::error::{Result, RuntimeError};

/// One scripted operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// `actor` performs its signature ability on `target`.
    Act { actor: String, target: String },

    /// Alternate actions until one side dies or the round cap is hit.
    Duel {
        first: String,
        second: String,
        #[serde(default)]
        max_rounds: Option<u32>,
    },

    LevelUp { who: String },
    TakeDamage { who: String, amount: i32 },
    Heal { who: String, amount: i32 },
    RestoreMana { who: String, amount: i32 },
    AddSkill { who: String, skill: String },
    AddItem { who: String, item: String },
}

impl Step {
    pub fn act(actor: impl Into<String>, target: impl Into<String>) -> Self {
        Self::Act {
            actor: actor.into(),
            target: target.into(),
        }
    }
}

/// Scenario configuration: who fights, and what happens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub combatants: Vec<CharacterTemplate>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(combatants: Vec<CharacterTemplate>, steps: Vec<Step>) -> Self {
        Self { combatants, steps }
    }

    /// Warrior, mage and archer trading one blow each, followed by some
    /// bookkeeping on the warrior and the mage.
    pub fn demo() -> Self {
        let combatants = vec![
            CharacterTemplate::new(
                "Geralt",
                100,
                1,
                ClassTemplate::Warrior {
                    weapon: "Sword".into(),
                },
            ),
            CharacterTemplate::new(
                "Merlin",
                80,
                1,
                ClassTemplate::Mage {
                    magic_power: 50,
                    mana: None,
                },
            ),
            CharacterTemplate::new(
                "Legolas",
                90,
                1,
                ClassTemplate::Archer {
                    bow_type: "Longbow".into(),
                },
            ),
        ];

        let steps = vec![
            Step::act("Geralt", "Merlin"),
            Step::act("Merlin", "Legolas"),
            Step::act("Legolas", "Geralt"),
            Step::LevelUp {
                who: "Geralt".into(),
            },
            Step::RestoreMana {
                who: "Merlin".into(),
                amount: 30,
            },
            Step::AddItem {
                who: "Geralt".into(),
                item: "Health potion".into(),
            },
            Step::Heal {
                who: "Geralt".into(),
                amount: 20,
            },
        ];

        Self::new(combatants, steps)
    }

    /// Parse a scenario from RON text. `origin` names the source in errors.
    ///
    /// Optional fields such as `armor` or `mana` may be written bare
    /// (`armor: 1`) or wrapped (`armor: Some(1)`).
    pub fn from_ron_str(content: &str, origin: &str) -> Result<Self> {
        ron_options().from_str(content).map_err(|source| RuntimeError::ScenarioParse {
            origin: origin.to_owned(),
            source,
        })
    }

    /// Load scenario from a RON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RuntimeError::ScenarioIo {
            path: path.to_path_buf(),
            source,
        })?;

        let scenario = Self::from_ron_str(&content, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            combatants = scenario.combatants.len(),
            steps = scenario.steps.len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    pub fn to_ron(&self) -> Result<String> {
        ron_options()
            .to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(RuntimeError::ScenarioSerialize)
    }
}

fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}
