//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by deck construction, navigation and configuration.
///
/// Audio resolution failures are deliberately absent: a missing clip is
/// logged by the audio collaborator and playback simply does not happen.
#[derive(Debug, Error)]
pub enum DeckError {
    /// An index outside `[0, len)` was passed to the deck.
    #[error("card index {index} out of range for deck of {len} cards")]
    OutOfRange { index: usize, len: usize },

    /// A deck was constructed with no cards.
    #[error("deck must contain at least one card")]
    EmptyDeck,

    /// More cards than a `CardId` can number.
    #[error("deck of {len} cards exceeds the card id range")]
    TooManyCards { len: usize },

    /// A card's image or audio key resolved to an empty string, e.g. a name
    /// with no ASCII letters or digits and no explicit keys.
    #[error("card {index} ({name:?}) has an empty asset key; set `image` and `audio` explicitly")]
    EmptyAssetKey { index: usize, name: String },

    /// Malformed deck manifest or configuration document.
    #[error("invalid JSON document: {0}")]
    Manifest(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The audio worker thread could not be started.
    #[error("failed to start audio worker: {0}")]
    AudioWorkerSpawn(#[source] std::io::Error),

    /// The audio worker thread panicked before it could be joined.
    #[error("audio worker thread terminated abnormally")]
    AudioWorkerGone,
}

impl From<DeckError> for String {
    fn from(err: DeckError) -> Self {
        err.to_string()
    }
}

/// Result type alias for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;
