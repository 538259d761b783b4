//! Ability execution errors.

use crate::error::{ErrorSeverity, GameError, InvalidArgument};
use crate::state::ClassKind;

/// Errors that can occur while resolving an ability.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// A precondition on the actor or target was violated.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// A class-specific ability was invoked on another class.
    #[error("{actor} is a {actual}, {expected} ability not available")]
    ClassMismatch {
        actor: String,
        expected: ClassKind,
        actual: ClassKind,
    },

    /// Generic dispatch on a character without a signature ability.
    #[error("{actor} has no signature ability")]
    NoSignatureAbility { actor: String },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument(inner) => inner.severity(),
            Self::ClassMismatch { .. } | Self::NoSignatureAbility { .. } => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(inner) => inner.error_code(),
            Self::ClassMismatch { .. } => "ACTION_CLASS_MISMATCH",
            Self::NoSignatureAbility { .. } => "ACTION_NO_SIGNATURE_ABILITY",
        }
    }
}
