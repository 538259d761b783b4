//! Class-specific data carried by every character.

/// Class tag without payload.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ClassKind {
    /// Plain character without a signature ability.
    #[default]
    Commoner,
    /// Melee fighter, strikes with a weapon and may crit.
    Warrior,
    /// Spellcaster, spends mana per cast.
    Mage,
    /// Ranged fighter, deterministic damage.
    Archer,
}

/// Class payload. Each variant owns exactly its own extra attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Class {
    #[default]
    Commoner,
    Warrior {
        weapon: String,
    },
    /// `mana` only decreases through a gated cast; no invariant check sits on
    /// the field itself.
    Mage {
        magic_power: i32,
        mana: i32,
    },
    Archer {
        bow_type: String,
    },
}

impl Class {
    pub fn kind(&self) -> ClassKind {
        match self {
            Self::Commoner => ClassKind::Commoner,
            Self::Warrior { .. } => ClassKind::Warrior,
            Self::Mage { .. } => ClassKind::Mage,
            Self::Archer { .. } => ClassKind::Archer,
        }
    }

    /// Whether this class has an ability usable through generic dispatch.
    pub fn has_signature_ability(&self) -> bool {
        !matches!(self, Self::Commoner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kinds_round_trip_through_strings() {
        assert_eq!(ClassKind::Mage.to_string(), "mage");
        assert_eq!(ClassKind::from_str("Warrior").ok(), Some(ClassKind::Warrior));
        assert!(ClassKind::from_str("paladin").is_err());
    }

    #[test]
    fn only_commoners_lack_an_ability() {
        assert!(!Class::Commoner.has_signature_ability());
        let archer = Class::Archer {
            bow_type: "Longbow".into(),
        };
        assert!(archer.has_signature_ability());
        assert_eq!(archer.kind(), ClassKind::Archer);
    }
}
