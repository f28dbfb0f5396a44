//! Data-driven card content and loaders.
//!
//! This crate houses static match content and provides loaders for RON/TOML
//! data files:
//! - Character card catalog (data-driven via RON, embedded by default)
//! - Policy configuration (data-driven via TOML)
//!
//! Content is consumed through the `tcg_core::CardOracle` trait and never
//! appears in match snapshots.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CardCatalog, CardLoader, ConfigLoader, ContentFactory, LoadResult};
