//! Passive policy: never spends dice.

use tcg_core::{Action, GameEnv, GameInfo, PlayerId};

use super::sequence::{ActionPlan, SequencePolicy};
use super::single::{ActionPolicy, Policy};
use crate::api::Result;

/// Treats play cards like round end: replace a defeated active character,
/// otherwise declare end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoAttackPolicy {
    player_id: PlayerId,
}

impl NoAttackPolicy {
    pub fn new(player_id: PlayerId) -> Self {
        Self { player_id }
    }
}

impl Policy for NoAttackPolicy {
    fn player_id(&self) -> PlayerId {
        self.player_id
    }
}

impl ActionPolicy for NoAttackPolicy {
    fn on_play_cards(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<Action> {
        self.on_round_end(info, env)
    }
}

impl SequencePolicy for NoAttackPolicy {
    fn yield_on_play_cards(&self, info: &GameInfo, env: GameEnv<'_>) -> Result<ActionPlan> {
        self.yield_on_round_end(info, env)
    }
}

#[cfg(test)]
mod tests {
    use tcg_core::{CharPos, CharacterView, Die, GamePhase, GameStatus, PlayerView};

    use super::*;
    use crate::policies::SequenceAgent;

    fn play_cards(healths: [u32; 3]) -> GameInfo {
        let mut own = PlayerView {
            active_character_position: CharPos::Left,
            dice_zone: vec![Die::Omni; 8],
            ..PlayerView::default()
        };
        for (name, hp) in ["Fischl", "Collei", "Diluc"].into_iter().zip(healths) {
            own.characters.push(CharacterView::new(name, hp, 0));
        }
        GameInfo::new(
            GameStatus::Running,
            GamePhase::PlayCards,
            [PlayerView::default(), own],
        )
    }

    #[test]
    fn declares_end_with_dice_to_spare() {
        let policy = NoAttackPolicy::new(PlayerId::Second);
        let info = play_cards([10, 10, 10]);

        assert_eq!(policy.decide(&info, GameEnv::empty()).unwrap(), Action::DeclareEnd);
    }

    #[test]
    fn replaces_defeated_active() {
        let policy = NoAttackPolicy::new(PlayerId::Second);
        let info = play_cards([0, 0, 2]);

        assert_eq!(
            policy.decide(&info, GameEnv::empty()).unwrap(),
            Action::switch_to(CharPos::Right)
        );
    }

    #[test]
    fn sequence_variant_matches_single() {
        let mut agent = SequenceAgent::new(NoAttackPolicy::new(PlayerId::Second));
        let info = play_cards([0, 5, 5]);

        assert_eq!(
            agent.decide_next(&info, GameEnv::empty()).unwrap(),
            Action::switch_to(CharPos::Middle)
        );
        assert_eq!(agent.pending(), 0);
    }
}
