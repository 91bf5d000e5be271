//! The event-handling session: controller, audio and renderer bound together.
//!
//! Every navigation runs stop, then navigate, then play, so a clip never
//! overlaps the next one. The ordering lives here rather than in each host.

use log::{debug, info};
use smallvec::SmallVec;

use super::event::UiEvent;
use super::view::{CardView, Renderer};
use crate::audio::{AudioCommand, AudioService};
use crate::cards::DeckStore;
use crate::core::{DeckResult, DeckRng, SessionConfig};
use crate::navigation::NavigationController;

/// Audio commands issued for one event, in the order they were issued.
///
/// At most two per event, so they never touch the heap.
pub type AudioCues = SmallVec<[AudioCommand; 2]>;

/// One running flashcard screen.
///
/// ## Example
///
/// ```
/// use brainrot_deck::audio::{AudioCommand, RecordingAudio};
/// use brainrot_deck::cards::DeckStore;
/// use brainrot_deck::core::SessionConfig;
/// use brainrot_deck::session::{RecordingRenderer, Session, UiEvent};
///
/// let mut session = Session::new(
///     DeckStore::builtin().unwrap(),
///     SessionConfig::new().with_seed(7),
///     RecordingAudio::new(),
///     RecordingRenderer::new(),
/// );
///
/// let cues = session.handle(UiEvent::Next);
/// assert_eq!(cues[0], AudioCommand::Stop);
/// assert_eq!(session.controller().current_index(), 1);
/// ```
#[derive(Debug)]
pub struct Session<A, R> {
    controller: NavigationController,
    autoplay: bool,
    audio: A,
    renderer: R,
}

impl<A: AudioService, R: Renderer> Session<A, R> {
    /// Start a session on the first card and draw it.
    ///
    /// Nothing plays until the first navigation or play request.
    pub fn new(deck: DeckStore, config: SessionConfig, audio: A, renderer: R) -> Self {
        let rng = match config.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        };
        info!(
            "session start: {} cards, seed {}, policy {:?}",
            deck.count(),
            rng.seed(),
            config.random_policy
        );

        let controller = NavigationController::new(deck, rng).with_policy(config.random_policy);
        let mut session = Self {
            controller,
            autoplay: config.autoplay_on_navigate,
            audio,
            renderer,
        };
        session.redraw();
        session
    }

    /// Handle one user event.
    ///
    /// Returns the audio commands issued, in order.
    pub fn handle(&mut self, event: UiEvent) -> AudioCues {
        debug!("event {event:?}");
        let mut cues = AudioCues::new();

        match event {
            UiEvent::Next | UiEvent::Previous | UiEvent::Random => {
                self.cue(&mut cues, AudioCommand::Stop);
                match event {
                    UiEvent::Next => self.controller.next(),
                    UiEvent::Previous => self.controller.previous(),
                    _ => self.controller.random(),
                };
                if self.autoplay {
                    self.cue_current(&mut cues);
                }
                self.redraw();
            }
            UiEvent::Flip => {
                self.controller.toggle_flip();
                self.redraw();
            }
            UiEvent::Play => {
                self.cue(&mut cues, AudioCommand::Stop);
                self.cue_current(&mut cues);
            }
        }

        cues
    }

    /// Jump straight to a deck position, with the same audio cueing as
    /// the other navigation events.
    pub fn jump_to(&mut self, index: usize) -> DeckResult<AudioCues> {
        // Validate first so a bad index issues no audio at all.
        self.controller.deck().get(index)?;

        let mut cues = AudioCues::new();
        self.cue(&mut cues, AudioCommand::Stop);
        self.controller.jump_to(index)?;
        if self.autoplay {
            self.cue_current(&mut cues);
        }
        self.redraw();
        Ok(cues)
    }

    /// Snapshot of what is on screen.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView::capture(&self.controller)
    }

    #[must_use]
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Tear the session apart, stopping audio first.
    pub fn into_parts(mut self) -> (NavigationController, A, R) {
        self.audio.stop();
        (self.controller, self.audio, self.renderer)
    }

    fn cue(&mut self, cues: &mut AudioCues, command: AudioCommand) {
        self.audio.apply(&command);
        cues.push(command);
    }

    fn cue_current(&mut self, cues: &mut AudioCues) {
        let key = self.controller.current_card().audio_key().clone();
        self.cue(cues, AudioCommand::Play(key));
    }

    fn redraw(&mut self) {
        let view = CardView::capture(&self.controller);
        self.renderer.render(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::RecordingAudio;
    use crate::cards::{AudioKey, CardSpec};
    use crate::core::{DeckError, RandomPolicy};
    use crate::session::RecordingRenderer;

    type TestSession = Session<RecordingAudio, RecordingRenderer>;

    fn session(n: usize, config: SessionConfig) -> TestSession {
        let deck = DeckStore::new(
            (0..n)
                .map(|i| CardSpec::new(format!("Card {i}"), format!("Script {i}")))
                .collect(),
        )
        .unwrap();
        Session::new(deck, config.with_seed(42), RecordingAudio::new(), RecordingRenderer::new())
    }

    fn play(key: &str) -> AudioCommand {
        AudioCommand::Play(AudioKey::new(key))
    }

    #[test]
    fn test_initial_render_without_audio() {
        let s = session(5, SessionConfig::new());
        assert_eq!(s.renderer().views().len(), 1);
        assert_eq!(s.renderer().last().unwrap().position, 0);
        assert!(s.audio().commands().is_empty());
    }

    #[test]
    fn test_next_stops_then_plays_new_card() {
        let mut s = session(5, SessionConfig::new());
        let cues = s.handle(UiEvent::Next);

        assert_eq!(cues.as_slice(), &[AudioCommand::Stop, play("card_1")]);
        assert_eq!(s.audio().commands(), cues.as_slice());
        assert_eq!(s.renderer().last().unwrap().position, 1);
    }

    #[test]
    fn test_previous_wraps_and_plays() {
        let mut s = session(5, SessionConfig::new());
        let cues = s.handle(UiEvent::Previous);
        assert_eq!(cues.as_slice(), &[AudioCommand::Stop, play("card_4")]);
        assert_eq!(s.controller().current_index(), 4);
    }

    #[test]
    fn test_flip_is_silent() {
        let mut s = session(5, SessionConfig::new());
        let cues = s.handle(UiEvent::Flip);

        assert!(cues.is_empty());
        assert!(s.audio().commands().is_empty());
        assert!(s.renderer().last().unwrap().is_flipped);
    }

    #[test]
    fn test_play_replays_current_without_render() {
        let mut s = session(5, SessionConfig::new());
        s.handle(UiEvent::Flip);
        let renders = s.renderer().views().len();

        let cues = s.handle(UiEvent::Play);
        assert_eq!(cues.as_slice(), &[AudioCommand::Stop, play("card_0")]);
        assert_eq!(s.renderer().views().len(), renders);
        assert!(s.controller().is_flipped());
    }

    #[test]
    fn test_without_autoplay_only_stops() {
        let mut s = session(5, SessionConfig::new().without_autoplay());
        let cues = s.handle(UiEvent::Random);
        assert_eq!(cues.as_slice(), &[AudioCommand::Stop]);
    }

    #[test]
    fn test_random_single_card_replays() {
        let mut s = session(1, SessionConfig::new());
        let cues = s.handle(UiEvent::Random);

        assert_eq!(cues.as_slice(), &[AudioCommand::Stop, play("card_0")]);
        assert_eq!(s.controller().current_index(), 0);
    }

    #[test]
    fn test_random_moves_under_default_policy() {
        let mut s = session(5, SessionConfig::new());
        for _ in 0..50 {
            let before = s.controller().current_index();
            s.handle(UiEvent::Random);
            assert_ne!(s.controller().current_index(), before);
        }
    }

    #[test]
    fn test_policy_is_applied() {
        let s = session(5, SessionConfig::new().with_random_policy(RandomPolicy::AllowRepeat));
        assert_eq!(s.controller().policy(), RandomPolicy::AllowRepeat);
    }

    #[test]
    fn test_jump_to() {
        let mut s = session(5, SessionConfig::new());
        let cues = s.jump_to(3).unwrap();
        assert_eq!(cues.as_slice(), &[AudioCommand::Stop, play("card_3")]);

        let before = s.audio().commands().len();
        assert!(matches!(s.jump_to(9), Err(DeckError::OutOfRange { index: 9, len: 5 })));
        assert_eq!(s.audio().commands().len(), before);
        assert_eq!(s.controller().current_index(), 3);
    }

    #[test]
    fn test_into_parts_stops_audio() {
        let mut s = session(3, SessionConfig::new());
        s.handle(UiEvent::Next);
        let (nav, audio, renderer) = s.into_parts();

        assert_eq!(nav.current_index(), 1);
        assert_eq!(audio.commands().last(), Some(&AudioCommand::Stop));
        assert_eq!(renderer.views().len(), 2);
    }
}
