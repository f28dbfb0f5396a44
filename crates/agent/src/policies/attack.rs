//! Greedy attack policy.
//!
//! On play cards the active character spends dice on the first affordable
//! option, in priority order:
//!
//! 1. configured card combos whose card is in hand
//! 2. elemental burst, only with power exactly at the burst's power cost
//! 3. elemental skill
//! 4. normal attack
//!
//! Nothing affordable declares end. A defeated active character is switched
//! out first, at no dice cost.

use tcg_core::{
    Action, CardCombo, CardTarget, CharacterCard, CostSpec, DiceResolver, GameEnv, GameInfo,
    GreedyDiceResolver, PlayerId, PlayerView, PolicyConfig, SkillTarget, SkillType,
    UseCardAction, UseSkillAction,
};

use super::defaults;
use super::sequence::{ActionPlan, SequencePolicy};
use super::single::{ActionPolicy, Policy};
use crate::api::{AgentError, Result};

/// Skill candidates after card combos, highest priority first.
const SKILL_PRIORITY: [SkillType; 3] = [
    SkillType::ElementalBurst,
    SkillType::ElementalSkill,
    SkillType::NormalAttack,
];

/// Always attacks with the most expensive affordable skill.
#[derive(Clone, Debug)]
pub struct AttackOnlyPolicy<R = GreedyDiceResolver> {
    player_id: PlayerId,
    config: PolicyConfig,
    resolver: R,
}

impl AttackOnlyPolicy {
    pub fn new(player_id: PlayerId) -> Self {
        Self::with_config(player_id, PolicyConfig::default())
    }

    pub fn with_config(player_id: PlayerId, config: PolicyConfig) -> Self {
        Self::with_resolver(player_id, config, GreedyDiceResolver::new())
    }
}

impl<R: DiceResolver> AttackOnlyPolicy<R> {
    pub fn with_resolver(player_id: PlayerId, config: PolicyConfig, resolver: R) -> Self {
        Self {
            player_id,
            config,
            resolver,
        }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Chooses the play-cards action for the current snapshot.
    ///
    /// # Errors
    ///
    /// Fails when the active slot is empty or the active character's card is
    /// unknown to the oracle.
    pub fn choose_play(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action> {
        let view = info.player_view(self.player_id);
        let position = view.active_character_position;
        let active = view
            .active_character()
            .ok_or(AgentError::MissingActiveCharacter { position })?;

        if let Some(switch) = defaults::replace_defeated(view) {
            return Ok(switch);
        }

        let card = env.character_card(&active.name)?;

        for combo in &self.config.combos {
            if let Some(action) = self.try_combo(view, card, combo) {
                return Ok(action);
            }
        }

        for skill_type in SKILL_PRIORITY {
            let Some(skill) = card.skill(skill_type) else {
                tracing::warn!(
                    player = %self.player_id,
                    character = %card.name,
                    skill = %skill_type,
                    "character has no skill of this type, skipping"
                );
                continue;
            };

            if skill_type == SkillType::ElementalBurst && active.power != skill.costs.power() {
                tracing::trace!(
                    candidate = %skill.name,
                    power = active.power,
                    required = skill.costs.power(),
                    "burst not charged"
                );
                continue;
            }

            if let Some(dice_idx) = self.pay(view, card, &skill.name, &skill.costs) {
                let opponent = self.player_id.opponent();
                return Ok(Action::UseSkill(UseSkillAction {
                    user_position: position,
                    skill_name: skill.name.clone(),
                    dice_idx,
                    skill_targets: vec![SkillTarget {
                        player: opponent,
                        position: info.opponent_view(self.player_id).active_character_position,
                    }],
                }));
            }
        }

        tracing::debug!(
            player = %self.player_id,
            character = %card.name,
            dice = view.dice_zone.len(),
            "nothing affordable"
        );
        Ok(Action::DeclareEnd)
    }

    fn try_combo(
        &self,
        view: &PlayerView,
        card: &CharacterCard,
        combo: &CardCombo,
    ) -> Option<Action> {
        let card_idx = view.hand_card_index(&combo.card)?;
        let dice_idx = self.pay(view, card, &combo.card, &combo.cost)?;
        let position = view.active_character_position;

        Some(Action::UseCard(UseCardAction {
            card_idx,
            card_target: vec![CardTarget {
                player: self.player_id,
                entity: combo.target,
                position,
            }],
            dice_idx,
            card_user_pos: position,
        }))
    }

    fn pay(
        &self,
        view: &PlayerView,
        card: &CharacterCard,
        candidate: &str,
        cost: &CostSpec,
    ) -> Option<Vec<usize>> {
        let dice_idx = self.resolver.resolve(&view.dice_zone, cost, card.element);
        tracing::trace!(
            candidate,
            %cost,
            paid = dice_idx.is_some(),
            "matching dice"
        );
        dice_idx
    }
}

impl<R> Policy for AttackOnlyPolicy<R> {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }
}

impl<R: DiceResolver> ActionPolicy for AttackOnlyPolicy<R> {
    fn on_play_cards(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action> {
        self.choose_play(info, env)
    }
}

impl<R: DiceResolver> SequencePolicy for AttackOnlyPolicy<R> {
    fn yield_on_play_cards(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<ActionPlan> {
        Ok(vec![self.choose_play(info, env)?])
    }
}
