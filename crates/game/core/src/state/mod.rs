//! Snapshot types observed by an agent at a decision point.
//!
//! Snapshots are rebuilt by the rules engine for every decision point and are
//! never mutated by agents. Positions and indices are the only references an
//! emitted action carries back into them.
mod phase;
mod view;

pub use phase::{GamePhase, GameStatus};
pub use view::{CharPos, CharacterView, InvalidCharPos, PlayerId, PlayerView};

/// Complete read-only snapshot handed to a policy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameInfo {
    pub status: GameStatus,
    pub phase: GamePhase,
    /// Round counter maintained by the engine; distinguishes otherwise
    /// identical decision points across rounds.
    pub round: u32,
    pub players: [PlayerView; 2],
}

impl GameInfo {
    pub fn new(status: GameStatus, phase: GamePhase, players: [PlayerView; 2]) -> Self {
        Self {
            status,
            phase,
            round: 0,
            players,
        }
    }

    pub fn with_round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    /// View of the given player's side.
    pub fn player_view(&self, player: PlayerId) -> &PlayerView {
        &self.players[player.index()]
    }

    /// View of the side facing the given player.
    pub fn opponent_view(&self, player: PlayerId) -> &PlayerView {
        &self.players[player.opponent().index()]
    }
}
