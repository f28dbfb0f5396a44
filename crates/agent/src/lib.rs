//! Decision core for a two-seat card game agent.
//!
//! The turn loop calls an [`Agent`] once per decision point with a read-only
//! [`GameInfo`](tcg_core::GameInfo) snapshot and a
//! [`GameEnv`](tcg_core::GameEnv) for card metadata. Agents wrap policies of
//! one of two capabilities:
//!
//! - [`ActionPolicy`]: answers every decision point with one action
//! - [`SequencePolicy`]: plans several actions, handed out one per call by
//!   [`SequenceAgent`]
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the agent trait and error type the turn loop sees
//! - [`policies`] hosts phase dispatch and the concrete policies
pub mod api;
pub mod policies;

pub use api::{Agent, AgentError, DeclareEndAgent, Result};
pub use policies::{
    ActionPlan, ActionPolicy, AttackOnlyPolicy, DecisionPoint, NoAttackPolicy, PhaseHandler,
    Policy, PolicyKind, SequenceAgent, SequencePolicy, SingleAgent, build_agent,
};
