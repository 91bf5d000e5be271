//! # brainrot-deck
//!
//! A single-screen character flashcard deck: flip a card to reveal its
//! script, step forward or back, or jump to a random other card, with the
//! card's clip cued on every move.
//!
//! ## Design Principles
//!
//! 1. **Fixed Content**: The deck is built once at startup and never
//!    changes. Decks are never empty, so navigation never divides by zero.
//!
//! 2. **No Hidden Globals**: Navigation state is owned by a
//!    `NavigationController`, which is owned by a `Session`.
//!
//! 3. **Collaborators Behind Traits**: Rendering, audio playback and asset
//!    lookup are host concerns reached through `Renderer`, `AudioService`
//!    and `AssetResolver`.
//!
//! ## Modules
//!
//! - `core`: Errors, deterministic RNG, configuration
//! - `cards`: Card records and the deck store
//! - `navigation`: Index/flip state machine
//! - `audio`: Audio commands, services, asset resolution, dispatcher
//! - `session`: User events, render snapshots, stop-then-play cueing

pub mod core;
pub mod cards;
pub mod navigation;
pub mod audio;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AssetConfig, DeckError, DeckResult, DeckRng, DeckRngState, RandomPolicy, SessionConfig,
};

pub use crate::cards::{AudioKey, Card, CardId, CardSpec, DeckStore, ImageKey};

pub use crate::navigation::{NavigationController, NavigationState};

pub use crate::audio::{
    AssetCatalog, AssetResolver, AudioBackend, AudioCommand, AudioDispatcher, AudioService,
    InMemoryAssets, LoggingAudio, RecordingAudio, SilentAudio,
};

pub use crate::session::{
    AudioCues, CardFace, CardView, RecordingRenderer, Renderer, Session, UiEvent,
};
