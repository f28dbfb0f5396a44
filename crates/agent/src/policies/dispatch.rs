//! Phase dispatch table shared by single-action and multi-action policies.

use tcg_core::{GameInfo, GamePhase, GameStatus};

/// Policy handler responsible for a (status, phase) pair.
///
/// The engine drives every transition; this is a pure lookup.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum PhaseHandler {
    InitChangeCard,
    InitSelectCharacter,
    RollDice,
    PlayCards,
    RoundEnd,
}

impl PhaseHandler {
    /// Handler for the given combination, `None` when the combination has
    /// no handler and the caller must declare end.
    pub const fn lookup(status: GameStatus, phase: GamePhase) -> Option<Self> {
        match (status, phase) {
            (GameStatus::Initializing, GamePhase::ChangeCard) => Some(Self::InitChangeCard),
            (GameStatus::Initializing, GamePhase::SelectActiveCharacter) => {
                Some(Self::InitSelectCharacter)
            }
            (GameStatus::Running, GamePhase::RollDice) => Some(Self::RollDice),
            (GameStatus::Running, GamePhase::PlayCards) => Some(Self::PlayCards),
            (GameStatus::Running, GamePhase::RoundEnd) => Some(Self::RoundEnd),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Identity of a decision point, used to tell a resumed plan from a stale one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecisionPoint {
    pub status: GameStatus,
    pub phase: GamePhase,
    pub round: u32,
}

impl DecisionPoint {
    pub fn of(info: &GameInfo) -> Self {
        Self {
            status: info.status,
            phase: info.phase,
            round: info.round,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_defined_phase_has_a_handler() {
        let table = [
            (GamePhase::ChangeCard, PhaseHandler::InitChangeCard),
            (GamePhase::SelectActiveCharacter, PhaseHandler::InitSelectCharacter),
            (GamePhase::RollDice, PhaseHandler::RollDice),
            (GamePhase::PlayCards, PhaseHandler::PlayCards),
            (GamePhase::RoundEnd, PhaseHandler::RoundEnd),
        ];
        for (phase, handler) in table {
            assert_eq!(PhaseHandler::lookup(phase.status(), phase), Some(handler));
        }
    }

    #[test]
    fn mismatched_or_terminated_combinations_fall_through() {
        assert_eq!(
            PhaseHandler::lookup(GameStatus::Running, GamePhase::ChangeCard),
            None
        );
        assert_eq!(
            PhaseHandler::lookup(GameStatus::Initializing, GamePhase::PlayCards),
            None
        );
        assert_eq!(
            PhaseHandler::lookup(GameStatus::Terminated, GamePhase::RoundEnd),
            None
        );
    }

    #[test]
    fn handler_names_are_snake_case() {
        assert_eq!(PhaseHandler::InitSelectCharacter.name(), "init_select_character");
        assert_eq!(PhaseHandler::PlayCards.to_string(), "play_cards");
    }
}
