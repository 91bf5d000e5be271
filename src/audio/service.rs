//! Audio service contract and the commands that drive it.

use serde::{Deserialize, Serialize};

use crate::cards::AudioKey;

/// One request to the audio collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCommand {
    /// Stop whatever is playing. A no-op when nothing is.
    Stop,
    /// Start the clip for this key.
    Play(AudioKey),
}

/// Fire-and-forget audio playback.
///
/// Implementations must not fail from the caller's point of view: a key that
/// resolves to nothing is logged and ignored.
pub trait AudioService {
    /// Start playing the clip for `key`.
    fn play(&mut self, key: &AudioKey);

    /// Stop the clip in flight, if any.
    fn stop(&mut self);

    /// Apply a single command.
    fn apply(&mut self, command: &AudioCommand) {
        match command {
            AudioCommand::Stop => self.stop(),
            AudioCommand::Play(key) => self.play(key),
        }
    }
}

impl<T: AudioService + ?Sized> AudioService for Box<T> {
    fn play(&mut self, key: &AudioKey) {
        (**self).play(key);
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}

/// Audio service that ignores every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioService for SilentAudio {
    fn play(&mut self, _key: &AudioKey) {}

    fn stop(&mut self) {}
}

/// Audio service that records the commands it receives.
///
/// Useful for hosts that want to inspect cueing, and for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingAudio {
    commands: Vec<AudioCommand>,
}

impl RecordingAudio {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands received so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[AudioCommand] {
        &self.commands
    }

    /// Take and clear the recorded commands.
    pub fn drain(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl AudioService for RecordingAudio {
    fn play(&mut self, key: &AudioKey) {
        self.commands.push(AudioCommand::Play(key.clone()));
    }

    fn stop(&mut self) {
        self.commands.push(AudioCommand::Stop);
    }
}
