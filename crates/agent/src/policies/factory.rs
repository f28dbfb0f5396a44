//! Ready-made agents for each seat.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tcg_agent::{PolicyKind, build_agent};
//!
//! let kind: PolicyKind = "attack_only".parse()?;
//! let mut agent = build_agent(kind, PlayerId::First, PolicyConfig::default());
//! let action = agent.take_action(&info, GameEnv::with_cards(&catalog))?;
//! ```

use tcg_core::{PlayerId, PolicyConfig};

use super::attack::AttackOnlyPolicy;
use super::no_attack::NoAttackPolicy;
use super::sequence::SequenceAgent;
use super::single::SingleAgent;
use crate::api::Agent;

/// Built-in policy selection, parsable from snake_case names.
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
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PolicyKind {
    /// [`AttackOnlyPolicy`] answering with one action per decision point.
    #[default]
    AttackOnly,
    /// [`AttackOnlyPolicy`] driven through the multi-action cursor.
    AttackSequence,
    /// [`NoAttackPolicy`]: never spends dice.
    NoAttack,
}

/// Builds an agent for `player_id` from a policy kind.
///
/// `config` only affects the attack policies.
pub fn build_agent(kind: PolicyKind, player_id: PlayerId, config: PolicyConfig) -> Box<dyn Agent> {
    tracing::debug!(player = %player_id, policy = %kind, combos = config.combos.len(), "building agent");

    match kind {
        PolicyKind::AttackOnly => Box::new(SingleAgent::new(AttackOnlyPolicy::with_config(
            player_id, config,
        ))),
        PolicyKind::AttackSequence => Box::new(SequenceAgent::new(
            AttackOnlyPolicy::with_config(player_id, config),
        )),
        PolicyKind::NoAttack => Box::new(SingleAgent::new(NoAttackPolicy::new(player_id))),
    }
}
