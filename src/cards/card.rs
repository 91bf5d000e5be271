//! Card records - static card data.
//!
//! A `Card` is built once, when its deck is constructed, and never changes.
//! The deck assigns its `CardId`; callers describe cards with `CardSpec`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within its deck.
///
/// Assigned sequentially at deck construction and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

macro_rules! asset_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a key from any string.
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// The raw key.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self::new(key)
            }
        }
    };
}

asset_key! {
    /// Opaque image reference, resolved by the asset collaborator.
    ImageKey
}

asset_key! {
    /// Opaque audio clip reference, resolved by the audio collaborator.
    AudioKey
}

/// Immutable deck entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    id: CardId,
    name: String,
    image_key: ImageKey,
    audio_key: AudioKey,
    script: String,
}

impl Card {
    pub(crate) fn from_spec(id: CardId, spec: CardSpec) -> Self {
        let slug = slugify(&spec.name);
        Self {
            id,
            image_key: spec.image.unwrap_or_else(|| ImageKey::new(slug.clone())),
            audio_key: spec.audio.unwrap_or_else(|| AudioKey::new(slug)),
            name: spec.name,
            script: spec.script,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Display name shown on the front face.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn image_key(&self) -> &ImageKey {
        &self.image_key
    }

    #[must_use]
    pub fn audio_key(&self) -> &AudioKey {
        &self.audio_key
    }

    /// Text revealed when the card is flipped.
    #[must_use]
    pub fn script(&self) -> &str {
        &self.script
    }
}

/// Description of a card before the deck assigns it an ID.
///
/// `image` and `audio` default to the slug of `name` (lowercase, words
/// joined by `_`), which is how the bundled assets are named.
///
/// ## Example
///
/// ```
/// use brainrot_deck::cards::CardSpec;
///
/// let spec = CardSpec::new("Cappuccino Assassino", "Capu capu cappuccino!")
///     .with_audio("cappuccino_theme");
///
/// assert_eq!(spec.audio.unwrap().as_str(), "cappuccino_theme");
/// assert!(spec.image.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioKey>,
    #[serde(default)]
    pub script: String,
}

impl CardSpec {
    /// Create a spec with derived asset keys.
    pub fn new(name: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
            audio: None,
            script: script.into(),
        }
    }

    /// Override the image key.
    #[must_use]
    pub fn with_image(mut self, key: impl Into<String>) -> Self {
        self.image = Some(ImageKey::new(key));
        self
    }

    /// Override the audio key.
    #[must_use]
    pub fn with_audio(mut self, key: impl Into<String>) -> Self {
        self.audio = Some(AudioKey::new(key));
        self
    }
}

/// Lowercase ASCII alphanumerics, every other run of characters becomes `_`.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}
