//! Core types: errors, RNG, configuration.
//!
//! These are the building blocks the deck, navigation and session layers
//! share. Nothing here knows about cards.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{AssetConfig, RandomPolicy, SessionConfig};
pub use error::{DeckError, DeckResult};
pub use rng::{DeckRng, DeckRngState};
