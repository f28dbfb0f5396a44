//! Read contracts and pure rules shared by the card catalog and the agents.
//!
//! `tcg-core` defines the snapshot types an agent observes (status, phase,
//! player views, dice), the actions it may emit, the card metadata oracle it
//! consults, and the greedy dice matcher used to pay action costs. Nothing
//! here mutates match state; the rules engine owns that.
pub mod action;
pub mod config;
pub mod dice;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, CardTarget, ChangeCardsAction, ChangeCharacterAction, EntityType, RollDiceAction,
    SkillTarget, UseCardAction, UseSkillAction,
};
pub use config::{CardCombo, GameConfig, PolicyConfig};
pub use dice::{
    CostKey, CostSpec, CostSpecError, Die, DiceResolver, Element, GreedyDiceResolver, select_dice,
};
pub use env::{CardOracle, CharacterCard, GameEnv, OracleError, SkillDef, SkillType};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    CharPos, CharacterView, GameInfo, GamePhase, GameStatus, InvalidCharPos, PlayerId, PlayerView,
};
