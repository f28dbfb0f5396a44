/// Coarse lifecycle of a match. Determines which phases are meaningful.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameStatus {
    /// Deck setup: mulligan and opening character choice.
    #[default]
    Initializing,
    /// Rounds are being played.
    Running,
    /// The match is over. No phase is actionable.
    Terminated,
}

/// Current phase within the match status.
///
/// `ChangeCard` and `SelectActiveCharacter` belong to
/// [`GameStatus::Initializing`]; the rest belong to [`GameStatus::Running`].
/// The engine may report any combination, so consumers must tolerate
/// mismatches.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GamePhase {
    #[default]
    ChangeCard,
    SelectActiveCharacter,
    RollDice,
    PlayCards,
    RoundEnd,
}

impl GamePhase {
    /// Returns the status this phase is defined under.
    pub const fn status(self) -> GameStatus {
        match self {
            Self::ChangeCard | Self::SelectActiveCharacter => GameStatus::Initializing,
            Self::RollDice | Self::PlayCards | Self::RoundEnd => GameStatus::Running,
        }
    }
}
