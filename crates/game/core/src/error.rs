//! Common error infrastructure for skirmish-core.
//!
//! Every precondition violation in the core is an [`InvalidArgument`]. Errors
//! are raised synchronously at the offending call, before any state is
//! touched, and are never retried internally. Ability-level errors live in
//! [`crate::action::ActionError`] and wrap this type.
//!
//! # Design Principles
//!
//! - **Validate first**: a failing call leaves the entity exactly as it was
//! - **One kind**: all variants report [`ErrorKind::InvalidArgument`]
//! - **Severity Classification**: errors are categorized through [`GameError`]

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may skip the action and continue the simulation
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the simulation can continue with another action.
    ///
    /// Examples: ability invoked on the wrong class
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: negative damage, empty item name
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Coarse error taxonomy exposed to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A construction or mutation precondition was violated.
    InvalidArgument,
}

/// Common trait for all skirmish-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A construction or mutation precondition was violated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidArgument {
    #[error("name must not be empty")]
    EmptyName,

    #[error("health must be positive, got {0}")]
    NonPositiveHealth(i32),

    #[error("level must be at least 1, got {0}")]
    LevelBelowMinimum(i32),

    #[error("armor must not be negative, got {0}")]
    NegativeArmor(i32),

    #[error("weapon must not be empty")]
    EmptyWeapon,

    #[error("magic power must be positive, got {0}")]
    NonPositiveMagicPower(i32),

    #[error("mana must not be negative, got {0}")]
    NegativeMana(i32),

    #[error("bow type must not be empty")]
    EmptyBowType,

    #[error("damage must not be negative, got {0}")]
    NegativeDamage(i32),

    #[error("heal amount must be positive, got {0}")]
    NonPositiveHeal(i32),

    #[error("mana restore amount must be positive, got {0}")]
    NonPositiveManaRestore(i32),

    #[error("skill name must not be empty")]
    EmptySkill,

    #[error("item name must not be empty")]
    EmptyItem,
}

impl InvalidArgument {
    /// All variants share one kind.
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

impl GameError for InvalidArgument {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use InvalidArgument::*;
        match self {
            EmptyName => "INVALID_EMPTY_NAME",
            NonPositiveHealth(_) => "INVALID_HEALTH",
            LevelBelowMinimum(_) => "INVALID_LEVEL",
            NegativeArmor(_) => "INVALID_ARMOR",
            EmptyWeapon => "INVALID_WEAPON",
            NonPositiveMagicPower(_) => "INVALID_MAGIC_POWER",
            NegativeMana(_) => "INVALID_MANA",
            EmptyBowType => "INVALID_BOW_TYPE",
            NegativeDamage(_) => "INVALID_DAMAGE",
            NonPositiveHeal(_) => "INVALID_HEAL",
            NonPositiveManaRestore(_) => "INVALID_MANA_RESTORE",
            EmptySkill => "INVALID_SKILL",
            EmptyItem => "INVALID_ITEM",
        }
    }
}
