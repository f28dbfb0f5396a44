use crate::action::EntityType;
use crate::dice::{CostKey, CostSpec, Element};

/// Board limits shared by snapshot types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Character slots per side.
    pub const MAX_CHARACTERS: usize = 3;
    pub const PLAYERS: usize = 2;
}

/// A hand card the attack policy plays whenever its cost can be paid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardCombo {
    /// Hand card name, matched exactly against `PlayerView::hand_cards`.
    pub card: String,
    pub cost: CostSpec,
    /// Own-side entity of the active slot the card is attached to.
    pub target: EntityType,
}

impl CardCombo {
    pub fn new(card: impl Into<String>, cost: CostSpec, target: EntityType) -> Self {
        Self {
            card: card.into(),
            cost,
            target,
        }
    }
}

/// Tunables for the concrete policies.
///
/// Combos are tried in declaration order before any skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    pub combos: Vec<CardCombo>,
}

impl PolicyConfig {
    pub fn new() -> Self {
        Self {
            combos: vec![
                CardCombo::new(
                    "Kanten Senmyou Blessing",
                    CostSpec::single(CostKey::Element(Element::Cryo), 2),
                    EntityType::Character,
                ),
                CardCombo::new(
                    "Traveler's Handy Sword",
                    CostSpec::single(CostKey::Same, 2),
                    EntityType::Weapon,
                ),
                CardCombo::new(
                    "Sacrificial Sword",
                    CostSpec::single(CostKey::Same, 3),
                    EntityType::Weapon,
                ),
            ],
        }
    }

    /// Configuration that never plays cards.
    pub fn without_combos() -> Self {
        Self { combos: Vec::new() }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::new()
    }
}
