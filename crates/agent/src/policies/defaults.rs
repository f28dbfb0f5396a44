//! Default phase behaviors shared by the single-action and multi-action policies.

use tcg_core::{Action, CharPos, Die, GameEnv, GameInfo, PlayerId, PlayerView};

use crate::api::{AgentError, Result};

/// Mulligan nothing.
pub fn keep_hand() -> Action {
    Action::change_cards(Vec::new())
}

/// Open with the middle slot.
pub fn select_middle() -> Action {
    Action::switch_to(CharPos::MIDDLE)
}

/// Reroll every die that is neither omni nor the active character's element.
pub fn reroll_unaligned(player: PlayerId, info: &GameInfo, env: GameEnv<'_>) -> Result<Action> {
    let view = info.player_view(player);
    let position = view.active_character_position;
    let active = view
        .active_character()
        .ok_or(AgentError::MissingActiveCharacter { position })?;
    let own: Die = env.character_card(&active.name)?.element.into();

    let reroll = view
        .dice_zone
        .iter()
        .enumerate()
        .filter(|(_, die)| !die.is_omni() && **die != own)
        .map(|(idx, _)| idx)
        .collect();

    Ok(Action::roll_dice(reroll))
}

/// Switch away from a defeated active character.
///
/// Returns `None` while the active character still stands. With nobody left
/// to switch to there is no legal switch, so the seat declares end.
pub fn replace_defeated(view: &PlayerView) -> Option<Action> {
    let active = view.active_character()?;
    if !active.is_defeated() {
        return None;
    }

    match view.first_alive_position() {
        Some(position) => Some(Action::switch_to(position)),
        None => {
            tracing::warn!(
                active = %view.active_character_position,
                "active character defeated with no alive replacement"
            );
            Some(Action::DeclareEnd)
        }
    }
}

#[cfg(test)]
mod tests {
    use tcg_content::CardCatalog;
    use tcg_core::{CharacterView, GamePhase, GameStatus};

    use super::*;

    fn view(names: &[(&str, u32)], active: CharPos, dice: Vec<Die>) -> PlayerView {
        let mut view = PlayerView {
            active_character_position: active,
            dice_zone: dice,
            ..PlayerView::default()
        };
        for (name, hp) in names {
            view.characters.push(CharacterView::new(*name, *hp, 0));
        }
        view
    }

    #[test]
    fn reroll_keeps_aligned_and_omni_dice() {
        let catalog = CardCatalog::load().unwrap();
        let own = view(
            &[("Diluc", 10), ("Xingqiu", 10), ("Fischl", 10)],
            CharPos::Middle,
            vec![Die::Pyro, Die::Omni, Die::Hydro],
        );
        let info = GameInfo::new(
            GameStatus::Running,
            GamePhase::RollDice,
            [own, PlayerView::default()],
        );

        let action = reroll_unaligned(PlayerId::First, &info, GameEnv::with_cards(&catalog));
        assert_eq!(action.unwrap(), Action::roll_dice(vec![0]));
    }

    #[test]
    fn reroll_requires_card_metadata() {
        let own = view(&[("Diluc", 10)], CharPos::Left, vec![Die::Geo]);
        let info = GameInfo::new(
            GameStatus::Running,
            GamePhase::RollDice,
            [own, PlayerView::default()],
        );

        let err = reroll_unaligned(PlayerId::First, &info, GameEnv::empty()).unwrap_err();
        assert!(matches!(err, AgentError::Oracle(_)));
    }

    #[test]
    fn defeated_active_switches_to_first_alive() {
        let side = view(&[("a", 5), ("b", 0), ("c", 3)], CharPos::Middle, vec![]);
        assert_eq!(replace_defeated(&side), Some(Action::switch_to(CharPos::Left)));
    }

    #[test]
    fn standing_active_is_not_replaced() {
        let side = view(&[("a", 5), ("b", 1), ("c", 3)], CharPos::Middle, vec![]);
        assert_eq!(replace_defeated(&side), None);
    }

    #[test]
    fn wiped_side_declares_end() {
        let side = view(&[("a", 0), ("b", 0), ("c", 0)], CharPos::Right, vec![]);
        assert_eq!(replace_defeated(&side), Some(Action::DeclareEnd));
    }
}
