//! Card system: card records and the deck store.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier assigned by the deck at construction
//! - `ImageKey` / `AudioKey`: Opaque asset references
//! - `Card`: Immutable deck entry
//! - `CardSpec`: Deserializable card description
//! - `DeckStore`: Fixed ordered card list

pub mod card;
pub mod deck;

pub use card::{AudioKey, Card, CardId, CardSpec, ImageKey};
pub use deck::DeckStore;
