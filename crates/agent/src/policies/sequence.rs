//! Multi-action policies: a bounded plan per decision point, drained one
//! action per call.
//!
//! A [`SequencePolicy`] plans the whole list of actions for a decision point.
//! [`SequenceAgent`] keeps that plan behind a cursor and hands out one action
//! per call. When the plan is drained, or the match has moved to another
//! decision point, the next call plans afresh from the current snapshot.

use std::collections::VecDeque;

use tcg_core::{Action, GameEnv, GameInfo, GameStatus, PlayerId};

use super::defaults;
use super::dispatch::{DecisionPoint, PhaseHandler};
use super::single::Policy;
use crate::api::{Agent, AgentError, Result};

/// Actions planned for one decision point, in emission order.
pub type ActionPlan = Vec<Action>;

/// Policy that may answer a decision point with several actions.
///
/// Defaults mirror [`crate::ActionPolicy`], each yielding a single action.
/// Every handler must yield at least one action; an empty plan is reported as
/// [`AgentError::NoActionProduced`].
pub trait SequencePolicy: Policy {
    fn yield_on_init_change_card(&self, _info: &GameInfo, _env: GameEnv<'_>) -> Result<ActionPlan> {
        Ok(vec![defaults::keep_hand()])
    }

    fn yield_on_init_select_character(
        &self,
        _info: &GameInfo,
        _env: GameEnv<'_>,
    ) -> Result<ActionPlan> {
        Ok(vec![defaults::select_middle()])
    }

    fn yield_on_roll_dice(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<ActionPlan> {
        Ok(vec![defaults::reroll_unaligned(self.player_id(), info, env)?])
    }

    fn yield_on_play_cards(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<ActionPlan>;

    fn yield_on_round_end(&self, info: &GameInfo, _env: GameEnv<'_>) -> Result<ActionPlan> {
        let view = info.player_view(self.player_id());
        match defaults::replace_defeated(view) {
            Some(switch) => Ok(vec![switch]),
            None => Ok(vec![Action::DeclareEnd]),
        }
    }

    /// Plans the decision point, reporting which handler produced the plan.
    ///
    /// Combinations without a handler plan a single declare end.
    fn plan(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<(Option<PhaseHandler>, ActionPlan)> {
        let Some(handler) = PhaseHandler::lookup(info.status, info.phase) else {
            if info.status != GameStatus::Terminated {
                tracing::warn!(
                    player = %self.player_id(),
                    status = %info.status,
                    phase = %info.phase,
                    "no handler for phase, declaring end"
                );
            }
            return Ok((None, vec![Action::DeclareEnd]));
        };

        let plan = match handler {
            PhaseHandler::InitChangeCard => self.yield_on_init_change_card(info, env),
            PhaseHandler::InitSelectCharacter => self.yield_on_init_select_character(info, env),
            PhaseHandler::RollDice => self.yield_on_roll_dice(info, env),
            PhaseHandler::PlayCards => self.yield_on_play_cards(info, env),
            PhaseHandler::RoundEnd => self.yield_on_round_end(info, env),
        }?;

        Ok((Some(handler), plan))
    }
}

/// Remaining actions of the plan for one decision point.
#[derive(Debug, Clone)]
struct ActionCursor {
    origin: DecisionPoint,
    pending: VecDeque<Action>,
}

/// Drives a [`SequencePolicy`], owning its in-flight plan.
#[derive(Debug, Clone)]
pub struct SequenceAgent<P> {
    policy: P,
    cursor: Option<ActionCursor>,
}

impl<P: SequencePolicy> SequenceAgent<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            cursor: None,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Number of planned actions not yet handed out.
    pub fn pending(&self) -> usize {
        self.cursor.as_ref().map_or(0, |cursor| cursor.pending.len())
    }

    /// Drops any in-flight plan.
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Returns the next planned action, planning afresh when the current
    /// plan is drained or belongs to another decision point.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::NoActionProduced`] when a fresh plan is empty,
    /// and propagates handler errors.
    pub fn decide_next(&mut self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action> {
        let point = DecisionPoint::of(info);

        if let Some(cursor) = self.cursor.as_mut() {
            if cursor.origin == point {
                if let Some(action) = cursor.pending.pop_front() {
                    tracing::debug!(
                        player = %self.policy.player_id(),
                        action = action.kind(),
                        remaining = cursor.pending.len(),
                        "resumed plan"
                    );
                    return Ok(action);
                }
            } else {
                tracing::debug!(
                    player = %self.policy.player_id(),
                    stale = ?cursor.origin,
                    current = ?point,
                    "discarding plan from another decision point"
                );
            }
        }
        self.cursor = None;

        let (handler, plan) = self.policy.plan(info, env)?;
        let mut pending = VecDeque::from(plan);
        let Some(first) = pending.pop_front() else {
            let handler = handler.map_or("fallback", PhaseHandler::name);
            tracing::error!(
                player = %self.policy.player_id(),
                handler,
                status = %info.status,
                phase = %info.phase,
                "policy produced no action"
            );
            return Err(AgentError::NoActionProduced {
                handler,
                status: info.status,
                phase: info.phase,
            });
        };

        tracing::debug!(
            player = %self.policy.player_id(),
            handler = handler.map_or("fallback", PhaseHandler::name),
            action = first.kind(),
            planned = pending.len() + 1,
            "started plan"
        );
        if !pending.is_empty() {
            self.cursor = Some(ActionCursor {
                origin: point,
                pending,
            });
        }
        Ok(first)
    }
}

impl<P: SequencePolicy> Agent for SequenceAgent<P> {
    fn player_id(&self) -> PlayerId {
        self.policy.player_id()
    }

    fn take_action(&mut self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action> {
        self.decide_next(info, env)
    }
}
