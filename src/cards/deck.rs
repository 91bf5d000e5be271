//! Deck store: the fixed, ordered card list.
//!
//! A `DeckStore` is built once at startup and never mutated. Construction
//! assigns each card a sequential `CardId` and rejects empty decks, so every
//! consumer can rely on `count() >= 1`.

use std::sync::Arc;

use log::info;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::card::{Card, CardId, CardSpec};
use crate::core::{DeckError, DeckResult};

/// Manifest of the bundled character deck, baked in at build time.
const BUILTIN_MANIFEST: &str = include_str!("../../assets/deck.json");

/// Immutable ordered sequence of cards.
///
/// Cloning is O(1): the cards live behind an `Arc`.
///
/// ## Example
///
/// ```
/// use brainrot_deck::cards::{CardSpec, DeckStore};
///
/// let deck = DeckStore::new(vec![
///     CardSpec::new("Tralalero Tralala", "A shark in sneakers."),
///     CardSpec::new("Bombardiro Crocodilo", "A crocodile bomber plane."),
/// ])
/// .unwrap();
///
/// assert_eq!(deck.count(), 2);
/// assert_eq!(deck.get(1).unwrap().name(), "Bombardiro Crocodilo");
/// assert!(deck.get(2).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DeckStore {
    cards: Arc<[Card]>,
    positions: Arc<FxHashMap<CardId, usize>>,
}

/// Accepted manifest shapes: a bare array or `{ "cards": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Manifest {
    Bare(Vec<CardSpec>),
    Wrapped { cards: Vec<CardSpec> },
}

impl DeckStore {
    /// Build a deck from card specs, assigning IDs `0..n` in order.
    ///
    /// Fails with `EmptyDeck` when `specs` is empty, `TooManyCards` when the
    /// ids would overflow, and `EmptyAssetKey` when a card ends up with an
    /// empty image or audio key.
    pub fn new(specs: Vec<CardSpec>) -> DeckResult<Self> {
        if specs.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let cards: Arc<[Card]> = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| {
                let card = Card::from_spec(card_id(i)?, spec);
                if card.image_key().as_str().is_empty() || card.audio_key().as_str().is_empty() {
                    return Err(DeckError::EmptyAssetKey {
                        index: i,
                        name: card.name().to_string(),
                    });
                }
                Ok(card)
            })
            .collect::<DeckResult<_>>()?;

        let positions = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id(), i))
            .collect();

        info!("deck loaded with {} cards", cards.len());

        Ok(Self {
            cards,
            positions: Arc::new(positions),
        })
    }

    /// Parse a JSON manifest: an array of card specs, or an object with a
    /// `cards` array.
    pub fn from_json(json: &str) -> DeckResult<Self> {
        let specs = match serde_json::from_str(json)? {
            Manifest::Bare(cards) | Manifest::Wrapped { cards } => cards,
        };
        Self::new(specs)
    }

    /// The bundled five-character deck.
    pub fn builtin() -> DeckResult<Self> {
        Self::from_json(BUILTIN_MANIFEST)
    }

    /// Number of cards. Always at least one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Get the card at `index`.
    ///
    /// Fails with `OutOfRange` when `index >= count()`.
    pub fn get(&self, index: usize) -> DeckResult<&Card> {
        self.cards.get(index).ok_or(DeckError::OutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Find a card by ID.
    #[must_use]
    pub fn find(&self, id: CardId) -> Option<&Card> {
        self.position(id).map(|i| &self.cards[i])
    }

    /// Deck position of a card ID.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

/// Id for the card at deck position `index`.
fn card_id(index: usize) -> DeckResult<CardId> {
    u32::try_from(index)
        .map(CardId::new)
        .map_err(|_| DeckError::TooManyCards { len: index.saturating_add(1) })
}

impl<'a> IntoIterator for &'a DeckStore {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
