//! Asset lookup: resolving opaque keys to files.

use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::cards::{AudioKey, ImageKey};
use crate::core::AssetConfig;

/// Resolves asset keys to concrete files.
///
/// `None` means the bundle has no such asset.
pub trait AssetResolver {
    fn resolve_audio(&self, key: &AudioKey) -> Option<PathBuf>;

    fn resolve_image(&self, key: &ImageKey) -> Option<PathBuf>;
}

/// Filesystem bundle: `<root>/<key>.<extension>`.
///
/// A key resolves only if the file exists.
#[derive(Clone, Debug)]
pub struct AssetCatalog {
    config: AssetConfig,
}

impl AssetCatalog {
    #[must_use]
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Path a key maps to, whether or not the file exists.
    ///
    /// The extension is appended, so a dotted key keeps its dots.
    #[must_use]
    pub fn path_for(&self, key: &str, extension: &str) -> PathBuf {
        if extension.is_empty() {
            self.config.root.join(key)
        } else {
            self.config.root.join(format!("{key}.{extension}"))
        }
    }

    fn existing(&self, key: &str, extension: &str) -> Option<PathBuf> {
        // An empty key would name the bundle root itself.
        if key.is_empty() {
            return None;
        }
        let path = self.path_for(key, extension);
        path.is_file().then_some(path)
    }
}

impl AssetResolver for AssetCatalog {
    fn resolve_audio(&self, key: &AudioKey) -> Option<PathBuf> {
        self.existing(key.as_str(), &self.config.audio_extension)
    }

    fn resolve_image(&self, key: &ImageKey) -> Option<PathBuf> {
        self.existing(key.as_str(), &self.config.image_extension)
    }
}

/// In-memory key table, for embedded bundles and tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAssets {
    audio: FxHashMap<AudioKey, PathBuf>,
    images: FxHashMap<ImageKey, PathBuf>,
}

impl InMemoryAssets {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an audio asset (builder pattern).
    #[must_use]
    pub fn with_audio(mut self, key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.audio.insert(AudioKey::new(key), path.into());
        self
    }

    /// Register an image asset (builder pattern).
    #[must_use]
    pub fn with_image(mut self, key: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.images.insert(ImageKey::new(key), path.into());
        self
    }
}

impl AssetResolver for InMemoryAssets {
    fn resolve_audio(&self, key: &AudioKey) -> Option<PathBuf> {
        self.audio.get(key).cloned()
    }

    fn resolve_image(&self, key: &ImageKey) -> Option<PathBuf> {
        self.images.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for() {
        let catalog = AssetCatalog::new(AssetConfig::new("/bundle"));
        assert_eq!(
            catalog.path_for("tralalero_tralala", "mp3"),
            PathBuf::from("/bundle/tralalero_tralala.mp3")
        );
        assert_eq!(catalog.path_for("raw", ""), PathBuf::from("/bundle/raw"));
        assert_eq!(
            catalog.path_for("tralalero.v2", "mp3"),
            PathBuf::from("/bundle/tralalero.v2.mp3")
        );
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!("brainrot-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        root
    }

    #[test]
    fn test_dotted_key_does_not_fall_back_to_sibling() {
        let root = scratch_dir("dotted");
        std::fs::write(root.join("clip.mp3"), b"ID3").unwrap();

        let catalog = AssetCatalog::new(AssetConfig::new(&root));
        assert_eq!(catalog.resolve_audio(&AudioKey::new("clip.v2")), None);

        std::fs::write(root.join("clip.v2.mp3"), b"ID3").unwrap();
        assert_eq!(
            catalog.resolve_audio(&AudioKey::new("clip.v2")),
            Some(root.join("clip.v2.mp3"))
        );

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_empty_key_never_resolves() {
        let root = scratch_dir("empty-key");
        let bundle = root.join("assets");
        std::fs::create_dir_all(&bundle).unwrap();
        // The file an empty key would otherwise map to, outside the bundle.
        std::fs::write(root.join("assets.mp3"), b"ID3").unwrap();
        std::fs::write(root.join("assets.png"), b"PNG").unwrap();

        let catalog = AssetCatalog::new(AssetConfig::new(&bundle));
        assert_eq!(catalog.resolve_audio(&AudioKey::new("")), None);
        assert_eq!(catalog.resolve_image(&ImageKey::new("")), None);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_catalog_resolves_existing_files_only() {
        let root = scratch_dir("assets");
        std::fs::write(root.join("patapim.mp3"), b"ID3").unwrap();

        let catalog = AssetCatalog::new(AssetConfig::new(&root));

        assert_eq!(
            catalog.resolve_audio(&AudioKey::new("patapim")),
            Some(root.join("patapim.mp3"))
        );
        assert_eq!(catalog.resolve_audio(&AudioKey::new("missing")), None);
        assert_eq!(catalog.resolve_image(&ImageKey::new("patapim")), None);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_in_memory() {
        let assets = InMemoryAssets::new()
            .with_audio("a", "/clips/a.mp3")
            .with_image("a", "/img/a.png");

        assert_eq!(assets.resolve_audio(&AudioKey::new("a")), Some(PathBuf::from("/clips/a.mp3")));
        assert_eq!(assets.resolve_image(&ImageKey::new("a")), Some(PathBuf::from("/img/a.png")));
        assert_eq!(assets.resolve_audio(&AudioKey::new("b")), None);
    }
}
