//! Actions an agent may emit.
//!
//! Actions carry only positions and indices into the [`PlayerView`] they were
//! derived from. The rules engine validates and applies them.
//!
//! [`PlayerView`]: crate::state::PlayerView

use crate::state::{CharPos, PlayerId};

/// Own-side or opposing entity kinds a card may be attached to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityType {
    Character,
    Weapon,
    Artifact,
    Talent,
    Support,
    Summon,
}

/// Character a skill is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillTarget {
    pub player: PlayerId,
    pub position: CharPos,
}

/// Entity a card is played onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardTarget {
    pub player: PlayerId,
    pub entity: EntityType,
    pub position: CharPos,
}

/// Mulligan: indices of hand cards to redraw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeCardsAction {
    pub cards_idx: Vec<usize>,
}

/// Switch the active character, paying with the given dice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeCharacterAction {
    pub position: CharPos,
    pub dice_idx: Vec<usize>,
}

/// Reroll the dice at the given indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollDiceAction {
    pub dice_idx: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseSkillAction {
    pub user_position: CharPos,
    pub skill_name: String,
    pub dice_idx: Vec<usize>,
    pub skill_targets: Vec<SkillTarget>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseCardAction {
    /// Index into the hand.
    pub card_idx: usize,
    pub card_target: Vec<CardTarget>,
    pub dice_idx: Vec<usize>,
    pub card_user_pos: CharPos,
}

/// One decision emitted by a policy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    ChangeCards(ChangeCardsAction),
    ChangeCharacter(ChangeCharacterAction),
    RollDice(RollDiceAction),
    UseSkill(UseSkillAction),
    UseCard(UseCardAction),
    /// Pass for the rest of the phase.
    DeclareEnd,
}

impl Action {
    pub fn change_cards(cards_idx: Vec<usize>) -> Self {
        Self::ChangeCards(ChangeCardsAction { cards_idx })
    }

    /// Switch without paying dice (free switches at round end or on defeat).
    pub fn switch_to(position: CharPos) -> Self {
        Self::ChangeCharacter(ChangeCharacterAction {
            position,
            dice_idx: Vec::new(),
        })
    }

    pub fn roll_dice(dice_idx: Vec<usize>) -> Self {
        Self::RollDice(RollDiceAction { dice_idx })
    }

    /// Returns a static label for logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ChangeCards(_) => "change_cards",
            Self::ChangeCharacter(_) => "change_character",
            Self::RollDice(_) => "roll_dice",
            Self::UseSkill(_) => "use_skill",
            Self::UseCard(_) => "use_card",
            Self::DeclareEnd => "declare_end",
        }
    }

    /// Dice spent by this action, empty for actions that spend none.
    pub fn dice_idx(&self) -> &[usize] {
        match self {
            Self::ChangeCharacter(action) => &action.dice_idx,
            Self::UseSkill(action) => &action.dice_idx,
            Self::UseCard(action) => &action.dice_idx,
            Self::ChangeCards(_) | Self::RollDice(_) | Self::DeclareEnd => &[],
        }
    }

    pub fn is_declare_end(&self) -> bool {
        matches!(self, Self::DeclareEnd)
    }
}
