//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// CardOracle is not available in the environment.
    #[error("CardOracle not available")]
    CardsNotAvailable,

    /// Character card was not found by name.
    #[error("character card '{0}' not found")]
    CharacterNotFound(String),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CardsNotAvailable => ErrorSeverity::Internal,
            Self::CharacterNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CardsNotAvailable => "ORACLE_CARDS_NOT_AVAILABLE",
            Self::CharacterNotFound(_) => "ORACLE_CHARACTER_NOT_FOUND",
        }
    }
}
