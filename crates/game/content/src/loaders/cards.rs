//! Character card catalog loader.
//!
//! Loads `CharacterCard` data from RON and serves it through `CardOracle`.

use std::collections::HashMap;
use std::path::Path;

use tcg_core::{CardOracle, CharacterCard};

use crate::loaders::{LoadResult, read_file};

const BUILTIN_CHARACTERS: &str = include_str!("../../data/characters.ron");

/// In-memory character card catalog keyed by card name.
#[derive(Debug, Clone, Default)]
pub struct CardCatalog {
    cards: Vec<CharacterCard>,
    by_name: HashMap<String, usize>,
}

impl CardCatalog {
    /// Loads the character cards embedded in this crate.
    pub fn load() -> LoadResult<Self> {
        CardLoader::parse(BUILTIN_CHARACTERS)
            .map_err(|e| anyhow::anyhow!("Failed to parse characters.ron: {}", e))
    }

    /// Builds a catalog from explicit cards. Later duplicates replace earlier ones.
    pub fn from_cards(cards: impl IntoIterator<Item = CharacterCard>) -> Self {
        let mut catalog = Self::default();
        for card in cards {
            catalog.insert(card);
        }
        catalog
    }

    pub fn insert(&mut self, card: CharacterCard) {
        match self.by_name.get(&card.name) {
            Some(&idx) => self.cards[idx] = card,
            None => {
                self.by_name.insert(card.name.clone(), self.cards.len());
                self.cards.push(card);
            }
        }
    }

    /// Returns an iterator over cards in load order.
    pub fn cards(&self) -> impl Iterator<Item = &CharacterCard> + '_ {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardOracle for CardCatalog {
    fn character(&self, name: &str) -> Option<&CharacterCard> {
        self.by_name.get(name).map(|&idx| &self.cards[idx])
    }

    fn character_names(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.name.as_str()).collect()
    }
}

/// Loader for character card catalogs from RON files.
pub struct CardLoader;

impl CardLoader {
    /// Load a catalog from a RON file containing a list of `CharacterCard`s.
    pub fn load(path: &Path) -> LoadResult<CardCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Parse a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<CardCatalog> {
        let cards: Vec<CharacterCard> = ron::from_str(content)?;
        Ok(CardCatalog::from_cards(cards))
    }
}
