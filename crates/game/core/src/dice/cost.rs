use std::fmt;
use std::str::FromStr;

use super::element::Element;
use crate::error::{ErrorSeverity, GameError};

/// What a single cost entry asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum CostKey {
    /// Dice of exactly this element; omni dice make up a shortfall.
    Element(Element),
    /// Character energy. Never paid with dice.
    Power,
    /// Dice of any face, preferably not the character's own element.
    Any,
    /// Dice that all show the same face.
    Same,
}

impl fmt::Display for CostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => write!(f, "{element}"),
            Self::Power => f.write_str("power"),
            Self::Any => f.write_str("any"),
            Self::Same => f.write_str("same"),
        }
    }
}

impl FromStr for CostKey {
    type Err = CostSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "power" => Ok(Self::Power),
            "any" => Ok(Self::Any),
            "same" => Ok(Self::Same),
            other => other
                .parse::<Element>()
                .map(Self::Element)
                .map_err(|_| CostSpecError::UnknownKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for CostKey {
    type Error = CostSpecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CostKey> for String {
    fn from(key: CostKey) -> Self {
        key.to_string()
    }
}

/// Rejected cost specification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CostSpecError {
    #[error("cost specification has more than one power entry")]
    DuplicatePower,

    #[error("cost key '{0}' appears more than once")]
    DuplicateKey(CostKey),

    #[error("unknown cost key '{0}'")]
    UnknownKey(String),
}

impl GameError for CostSpecError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicatePower => "COST_DUPLICATE_POWER",
            Self::DuplicateKey(_) => "COST_DUPLICATE_KEY",
            Self::UnknownKey(_) => "COST_UNKNOWN_KEY",
        }
    }
}

/// Ordered price of an action.
///
/// Entry order is significant: dice are allocated key by key in this order.
/// At most one entry per key, so at most one `Power` entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<(CostKey, u32)>", into = "Vec<(CostKey, u32)>")
)]
pub struct CostSpec {
    entries: Vec<(CostKey, u32)>,
}

impl CostSpec {
    /// A cost with no entries.
    pub const fn free() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn single(key: CostKey, amount: u32) -> Self {
        Self {
            entries: vec![(key, amount)],
        }
    }

    /// Builds a cost from ordered entries.
    ///
    /// # Errors
    ///
    /// Returns [`CostSpecError::DuplicatePower`] for a second power entry and
    /// [`CostSpecError::DuplicateKey`] for any other repeated key.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (CostKey, u32)>,
    ) -> Result<Self, CostSpecError> {
        let mut spec = Self::free();
        for (key, amount) in entries {
            if spec.entries.iter().any(|(existing, _)| *existing == key) {
                return Err(match key {
                    CostKey::Power => CostSpecError::DuplicatePower,
                    other => CostSpecError::DuplicateKey(other),
                });
            }
            spec.entries.push((key, amount));
        }
        Ok(spec)
    }

    /// All entries in allocation order, including `Power`.
    pub fn entries(&self) -> &[(CostKey, u32)] {
        &self.entries
    }

    /// Required energy, zero when the cost has no power entry.
    pub fn power(&self) -> u32 {
        self.amount(CostKey::Power)
    }

    pub fn amount(&self, key: CostKey) -> u32 {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map_or(0, |(_, amount)| *amount)
    }

    /// Entries paid with dice, in allocation order.
    pub fn dice_entries(&self) -> impl Iterator<Item = (CostKey, u32)> + '_ {
        self.entries
            .iter()
            .copied()
            .filter(|(key, _)| *key != CostKey::Power)
    }

    /// Number of dice a successful payment spends.
    pub fn dice_total(&self) -> u32 {
        self.dice_entries().map(|(_, amount)| amount).sum()
    }

    pub fn is_free(&self) -> bool {
        self.entries.iter().all(|(_, amount)| *amount == 0)
    }
}

impl TryFrom<Vec<(CostKey, u32)>> for CostSpec {
    type Error = CostSpecError;

    fn try_from(entries: Vec<(CostKey, u32)>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<CostSpec> for Vec<(CostKey, u32)> {
    fn from(spec: CostSpec) -> Self {
        spec.entries
    }
}

impl fmt::Display for CostSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (k, (key, amount)) in self.entries.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {amount}")?;
        }
        f.write_str("}")
    }
}
