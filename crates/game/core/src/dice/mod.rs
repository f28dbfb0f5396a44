//! Dice tokens, cost specifications, and cost resolution.
//!
//! A [`CostSpec`] prices an action per [`CostKey`]. Everything except the
//! `Power` entry is paid with held [`Die`] tokens; [`DiceResolver`] decides
//! which held dice to spend, or reports that the cost cannot be paid.
mod cost;
mod element;
mod resolver;

pub use cost::{CostKey, CostSpec, CostSpecError};
pub use element::{Die, Element};
pub use resolver::{DiceResolver, GreedyDiceResolver, select_dice};
