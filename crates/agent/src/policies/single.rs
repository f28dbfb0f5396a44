//! Single-action policies: one action per decision point, no state.

use tcg_core::{Action, GameEnv, GameInfo, GameStatus, PlayerId};

use super::defaults;
use super::dispatch::PhaseHandler;
use crate::api::{Agent, Result};

/// Seat shared by every policy capability.
pub trait Policy {
    fn player_id(&self) -> PlayerId;
}

/// Stateless policy that answers each decision point with exactly one action.
///
/// Only [`on_play_cards`](Self::on_play_cards) must be supplied; the other
/// handlers default to:
///
/// | Handler | Default |
/// |---|---|
/// | init change card | keep the whole hand |
/// | init select character | middle slot |
/// | roll dice | reroll dice that are neither omni nor the active element |
/// | round end | switch off a defeated active character, else declare end |
///
/// Unhandled (status, phase) combinations declare end.
pub trait ActionPolicy: Policy {
    fn on_init_change_card(&self, _info: &GameInfo, _env: GameEnv<'_>) -> Result<Action> {
        Ok(defaults::keep_hand())
    }

    fn on_init_select_character(&self, _info: &GameInfo, _env: GameEnv<'_>) -> Result<Action> {
        Ok(defaults::select_middle())
    }

    fn on_roll_dice(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action> {
        defaults::reroll_unaligned(self.player_id(), info, env)
    }

    fn on_play_cards(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action>;

    fn on_round_end(&self, info: &GameInfo, _env: GameEnv<'_>) -> Result<Action> {
        let view = info.player_view(self.player_id());
        Ok(defaults::replace_defeated(view).unwrap_or(Action::DeclareEnd))
    }

    /// Routes the decision point to its handler.
    fn decide(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action> {
        let Some(handler) = PhaseHandler::lookup(info.status, info.phase) else {
            if info.status != GameStatus::Terminated {
                tracing::warn!(
                    player = %self.player_id(),
                    status = %info.status,
                    phase = %info.phase,
                    "no handler for phase, declaring end"
                );
            }
            return Ok(Action::DeclareEnd);
        };

        let action = match handler {
            PhaseHandler::InitChangeCard => self.on_init_change_card(info, env),
            PhaseHandler::InitSelectCharacter => self.on_init_select_character(info, env),
            PhaseHandler::RollDice => self.on_roll_dice(info, env),
            PhaseHandler::PlayCards => self.on_play_cards(info, env),
            PhaseHandler::RoundEnd => self.on_round_end(info, env),
        }?;

        tracing::debug!(
            player = %self.player_id(),
            handler = %handler,
            action = action.kind(),
            "decided"
        );
        Ok(action)
    }
}

/// Drives an [`ActionPolicy`] through the [`Agent`] interface.
#[derive(Debug, Clone)]
pub struct SingleAgent<P> {
    policy: P,
}

impl<P: ActionPolicy> SingleAgent<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: ActionPolicy> Agent for SingleAgent<P> {
    fn player_id(&self) -> PlayerId {
        self.policy.player_id()
    }

    fn take_action(&mut self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action> {
        self.policy.decide(info, env)
    }
}
