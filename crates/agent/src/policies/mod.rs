//! Policy abstractions and the built-in policies.
//!
//! - [`single`]: one action per decision point ([`ActionPolicy`])
//! - [`sequence`]: a plan per decision point drained by [`SequenceAgent`]
//! - [`dispatch`]: the (status, phase) handler table both share
//! - [`attack`] and [`no_attack`]: concrete policies

pub mod attack;
pub mod defaults;
pub mod dispatch;
pub mod factory;
pub mod no_attack;
pub mod sequence;
pub mod single;

pub use attack::AttackOnlyPolicy;
pub use dispatch::{DecisionPoint, PhaseHandler};
pub use factory::{PolicyKind, build_agent};
pub use no_attack::NoAttackPolicy;
pub use sequence::{ActionPlan, SequenceAgent, SequencePolicy};
pub use single::{ActionPolicy, Policy, SingleAgent};
