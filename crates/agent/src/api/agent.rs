//! Synchronous abstraction the turn loop calls once per decision point.
//!
//! Both single-action and multi-action policies are driven through [`Agent`],
//! so a loop can hold `Box<dyn Agent>` for either seat.
use tcg_core::{Action, GameEnv, GameInfo, PlayerId};

use super::errors::Result;

/// Produces one action for the agent's seat at each decision point.
///
/// Implementations:
/// - [`crate::SingleAgent`] wraps a stateless [`crate::ActionPolicy`]
/// - [`crate::SequenceAgent`] drains a [`crate::SequencePolicy`] plan
/// - [`DeclareEndAgent`] always passes
pub trait Agent {
    /// Seat this agent plays for.
    fn player_id(&self) -> PlayerId;

    /// Provide the action for the current decision point.
    ///
    /// # Arguments
    /// * `info` - Read-only snapshot of the match
    /// * `env` - Card metadata access
    fn take_action(&mut self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action>;
}

/// An agent that always declares end.
/// Useful for testing or as a fallback seat.
#[derive(Debug, Clone, Copy)]
pub struct DeclareEndAgent {
    player_id: PlayerId,
}

impl DeclareEndAgent {
    pub fn new(player_id: PlayerId) -> Self {
        Self { player_id }
    }
}

impl Agent for DeclareEndAgent {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn take_action(&mut self, _info: &GameInfo, _env: GameEnv<'_>) -> Result<Action> {
        Ok(Action::DeclareEnd)
    }
}
