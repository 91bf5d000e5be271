//! Audio service that only logs.
//!
//! Stands in for a real playback engine on hosts without one, while still
//! exercising asset resolution so missing clips show up in the logs.

use std::path::PathBuf;

use log::{info, warn};

use super::assets::AssetResolver;
use super::service::AudioService;
use crate::cards::AudioKey;

#[derive(Clone, Debug)]
pub struct LoggingAudio<R> {
    resolver: R,
    playing: Option<(AudioKey, PathBuf)>,
}

impl<R: AssetResolver> LoggingAudio<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            playing: None,
        }
    }

    /// Key and file of the clip "playing" right now.
    #[must_use]
    pub fn playing(&self) -> Option<&(AudioKey, PathBuf)> {
        self.playing.as_ref()
    }

    #[must_use]
    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

impl<R: AssetResolver> AudioService for LoggingAudio<R> {
    fn play(&mut self, key: &AudioKey) {
        match self.resolver.resolve_audio(key) {
            Some(path) => {
                info!("play {key} ({})", path.display());
                self.playing = Some((key.clone(), path));
            }
            None => {
                warn!("audio asset {key} not found");
                self.playing = None;
            }
        }
    }

    fn stop(&mut self) {
        if let Some((key, _)) = self.playing.take() {
            info!("stop {key}");
        }
    }
}
