use crate::dice::{CostSpec, Element};

/// Provides character card metadata by card name.
pub trait CardOracle: Send + Sync {
    fn character(&self, name: &str) -> Option<&CharacterCard>;

    /// Returns every character card name known to this oracle.
    fn character_names(&self) -> Vec<&str>;
}

/// Category of a character skill.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillType {
    NormalAttack,
    ElementalSkill,
    /// Requires the character's power to be charged.
    ElementalBurst,
    /// Never activated by a player action.
    PassiveSkill,
}

/// A character skill and its price.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillDef {
    pub name: String,
    pub skill_type: SkillType,
    pub costs: CostSpec,
}

/// Static metadata for a character card.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterCard {
    pub name: String,
    pub element: Element,
    pub max_power: u32,
    pub skills: Vec<SkillDef>,
}

impl CharacterCard {
    /// First skill of the given type.
    pub fn skill(&self, skill_type: SkillType) -> Option<&SkillDef> {
        self.skills.iter().find(|skill| skill.skill_type == skill_type)
    }
}
