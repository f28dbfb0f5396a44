//! Traits describing read-only card data.
//!
//! The [`CardOracle`] exposes character card metadata (element, skills and
//! their costs). [`GameEnv`] bundles the oracles a policy may consult so the
//! agent layer never couples to a concrete catalog.
mod cards;
mod error;

pub use cards::{CardOracle, CharacterCard, SkillDef, SkillType};
pub use error::OracleError;

/// Aggregates the read-only oracles available at a decision point.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    cards: Option<&'a dyn CardOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn new(cards: Option<&'a dyn CardOracle>) -> Self {
        Self { cards }
    }

    pub fn with_cards(cards: &'a dyn CardOracle) -> Self {
        Self::new(Some(cards))
    }

    pub fn empty() -> Self {
        Self { cards: None }
    }

    /// Returns the CardOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CardsNotAvailable` if no card oracle was provided.
    pub fn cards(&self) -> Result<&'a dyn CardOracle, OracleError> {
        self.cards.ok_or(OracleError::CardsNotAvailable)
    }

    /// Looks up a character card by name.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CardsNotAvailable` without a card oracle and
    /// `OracleError::CharacterNotFound` for unknown names.
    pub fn character_card(&self, name: &str) -> Result<&'a CharacterCard, OracleError> {
        self.cards()?
            .character(name)
            .ok_or_else(|| OracleError::CharacterNotFound(name.to_string()))
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("cards", &self.cards.is_some())
            .finish()
    }
}
