//! Unified error types surfaced by the agent API.
//!
//! Infeasible dice payments are not errors; policies fall back to cheaper
//! actions on their own. What reaches the turn loop is either missing data or
//! a policy that failed to produce anything.
use thiserror::Error;

use tcg_core::{CharPos, ErrorSeverity, GameError, GamePhase, GameStatus, OracleError};

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(
        "no action produced by handler '{handler}' (status {status}, phase {phase}); \
         every handler must yield at least one action"
    )]
    NoActionProduced {
        handler: &'static str,
        status: GameStatus,
        phase: GamePhase,
    },

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("active character slot {position} is empty")]
    MissingActiveCharacter { position: CharPos },
}

impl GameError for AgentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoActionProduced { .. } => ErrorSeverity::Internal,
            Self::Oracle(err) => err.severity(),
            Self::MissingActiveCharacter { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoActionProduced { .. } => "AGENT_NO_ACTION_PRODUCED",
            Self::Oracle(err) => err.error_code(),
            Self::MissingActiveCharacter { .. } => "AGENT_MISSING_ACTIVE_CHARACTER",
        }
    }
}
