//! Combat resolution system.
//!
//! Pure functions computing raw ability damage and armor mitigation, plus the
//! result types abilities report back. Randomness enters only as an explicit
//! `roll` argument.
//!
//! # Core Functions
//!
//! - `weapon_damage`: warrior base damage with critical bonus
//! - `spell_damage`: mage damage from level and magic power
//! - `arrow_damage`: archer damage from level
//! - `mitigate`: armor reduction, floored at zero

pub mod damage;
pub mod result;

pub use damage::{arrow_damage, mitigate, spell_damage, weapon_damage};
pub use result::{ActionOutcome, DamageOutcome, HitReport};
