//! Audio collaborators.
//!
//! The crate never decodes audio itself. It defines the contract a playback
//! engine implements (`AudioService`, or `AudioBackend` behind the
//! dispatcher) and how opaque keys map to files (`AssetResolver`).
//!
//! ## Implementations
//!
//! - `SilentAudio`: ignores everything
//! - `RecordingAudio`: keeps the command log
//! - `LoggingAudio`: resolves keys and logs instead of playing
//! - `AudioDispatcher`: sends commands to a worker thread owning a backend

pub mod assets;
pub mod dispatcher;
pub mod logging;
pub mod service;

pub use assets::{AssetCatalog, AssetResolver, InMemoryAssets};
pub use dispatcher::{AudioBackend, AudioDispatcher};
pub use logging::LoggingAudio;
pub use service::{AudioCommand, AudioService, RecordingAudio, SilentAudio};
