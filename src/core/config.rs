//! Session configuration.
//!
//! Hosts configure a session at startup by providing:
//! - `RandomPolicy`: whether a random jump may land on the current card
//! - `AssetConfig`: where image and audio assets live on disk
//! - `SessionConfig`: combines all configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{DeckError, DeckResult};

/// How `random()` picks the next card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomPolicy {
    /// Redraw until the pick differs from the current card.
    #[default]
    ExcludeCurrent,
    /// Take a single uniform draw; may land on the current card.
    AllowRepeat,
}

/// Location and naming of the asset bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding the asset files.
    pub root: PathBuf,

    /// Extension appended to audio keys.
    pub audio_extension: String,

    /// Extension appended to image keys.
    pub image_extension: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            audio_extension: "mp3".to_string(),
            image_extension: "png".to_string(),
        }
    }
}

impl AssetConfig {
    /// Create an asset config rooted at `root` with default extensions.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Random jump policy.
    pub random_policy: RandomPolicy,

    /// Play the new card's clip after every navigation.
    pub autoplay_on_navigate: bool,

    /// Asset bundle location.
    pub assets: AssetConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            random_policy: RandomPolicy::default(),
            autoplay_on_navigate: true,
            assets: AssetConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the random jump policy.
    #[must_use]
    pub fn with_random_policy(mut self, policy: RandomPolicy) -> Self {
        self.random_policy = policy;
        self
    }

    /// Disable playback after navigation.
    #[must_use]
    pub fn without_autoplay(mut self) -> Self {
        self.autoplay_on_navigate = false;
        self
    }

    /// Set the asset bundle location.
    #[must_use]
    pub fn with_assets(mut self, assets: AssetConfig) -> Self {
        self.assets = assets;
        self
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> DeckResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> DeckResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}
