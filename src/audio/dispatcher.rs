//! Message-send audio: commands cross a channel to a worker thread that owns
//! the playback backend.
//!
//! The session stays synchronous and never waits on playback. The channel is
//! FIFO, so a `Stop` sent before a `Play` is always handled before it.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::{trace, warn};

use super::assets::AssetResolver;
use super::service::{AudioCommand, AudioService};
use crate::cards::AudioKey;
use crate::core::{DeckError, DeckResult};

/// Playback engine driven by the dispatcher's worker thread.
pub trait AudioBackend: Send + 'static {
    /// Start playing the file at `path`, replacing anything in flight.
    fn play_path(&mut self, path: &Path);

    /// Stop playback.
    fn stop(&mut self);
}

/// `AudioService` that forwards commands to a worker thread.
///
/// Dropping the dispatcher closes the channel and joins the worker; use
/// `shutdown` to observe a worker panic.
#[derive(Debug)]
pub struct AudioDispatcher {
    sender: Option<Sender<AudioCommand>>,
    worker: Option<JoinHandle<()>>,
}

impl AudioDispatcher {
    /// Start the worker thread.
    pub fn spawn<R, B>(resolver: R, backend: B) -> DeckResult<Self>
    where
        R: AssetResolver + Send + 'static,
        B: AudioBackend,
    {
        let (sender, receiver) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("audio-dispatch".to_string())
            .spawn(move || run_worker(&receiver, &resolver, backend))
            .map_err(DeckError::AudioWorkerSpawn)?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Queue a command for the worker.
    pub fn send(&self, command: AudioCommand) {
        let Some(sender) = &self.sender else {
            return;
        };
        if sender.send(command).is_err() {
            warn!("audio worker is gone, dropping command");
        }
    }

    /// Close the channel and wait for the worker to drain it.
    pub fn shutdown(mut self) -> DeckResult<()> {
        self.close()
    }

    fn close(&mut self) -> DeckResult<()> {
        drop(self.sender.take());
        match self.worker.take() {
            Some(worker) => worker.join().map_err(|_| DeckError::AudioWorkerGone),
            None => Ok(()),
        }
    }
}

impl AudioService for AudioDispatcher {
    fn play(&mut self, key: &AudioKey) {
        self.send(AudioCommand::Play(key.clone()));
    }

    fn stop(&mut self) {
        self.send(AudioCommand::Stop);
    }
}

impl Drop for AudioDispatcher {
    fn drop(&mut self) {
        if self.close().is_err() {
            warn!("audio worker panicked");
        }
    }
}

fn run_worker<R: AssetResolver, B: AudioBackend>(
    receiver: &Receiver<AudioCommand>,
    resolver: &R,
    mut backend: B,
) {
    for command in receiver {
        trace!("audio command {command:?}");
        match command {
            AudioCommand::Stop => backend.stop(),
            AudioCommand::Play(key) => match resolver.resolve_audio(&key) {
                Some(path) => backend.play_path(&path),
                None => warn!("audio asset {key} not found"),
            },
        }
    }
    backend.stop();
}
