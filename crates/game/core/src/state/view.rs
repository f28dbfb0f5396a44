use std::fmt;

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::dice::Die;

/// Seat identifier for one of the two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    #[default]
    First,
    Second,
}

impl PlayerId {
    /// Returns the other seat.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

impl std::ops::Not for PlayerId {
    type Output = PlayerId;

    fn not(self) -> PlayerId {
        self.opponent()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.index() + 1)
    }
}

/// Character slot position on one side of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharPos {
    Left,
    #[default]
    Middle,
    Right,
}

impl CharPos {
    pub const MIDDLE: Self = Self::Middle;

    /// All positions in slot order.
    pub const ALL: [Self; GameConfig::MAX_CHARACTERS] = [Self::Left, Self::Middle, Self::Right];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

/// Slot index outside the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("character slot {0} is out of range")]
pub struct InvalidCharPos(pub usize);

impl TryFrom<usize> for CharPos {
    type Error = InvalidCharPos;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(InvalidCharPos(index))
    }
}

impl fmt::Display for CharPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        };
        f.write_str(label)
    }
}

/// Observable state of one character slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterView {
    /// Character card name, resolvable through [`crate::CardOracle`].
    pub name: String,
    pub health_point: u32,
    /// Accumulated energy spent by elemental bursts.
    pub power: u32,
    pub alive: bool,
}

impl CharacterView {
    pub fn new(name: impl Into<String>, health_point: u32, power: u32) -> Self {
        Self {
            name: name.into(),
            health_point,
            power,
            alive: health_point > 0,
        }
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health_point == 0
    }
}

/// One player's side of the board as seen at a decision point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub characters: ArrayVec<CharacterView, { GameConfig::MAX_CHARACTERS }>,
    pub active_character_position: CharPos,
    /// Held dice in engine order. Actions refer to them by index.
    pub dice_zone: Vec<Die>,
    /// Hand card names in engine order; duplicates allowed.
    pub hand_cards: Vec<String>,
}

impl PlayerView {
    pub fn character(&self, position: CharPos) -> Option<&CharacterView> {
        self.characters.get(position.index())
    }

    pub fn active_character(&self) -> Option<&CharacterView> {
        self.character(self.active_character_position)
    }

    /// First slot, in slot order, whose character is still alive.
    pub fn first_alive_position(&self) -> Option<CharPos> {
        self.characters
            .iter()
            .zip(CharPos::ALL)
            .find(|(character, _)| character.alive)
            .map(|(_, position)| position)
    }

    /// Index of the first hand card with the given name.
    pub fn hand_card_index(&self, name: &str) -> Option<usize> {
        self.hand_cards.iter().position(|card| card == name)
    }
}
