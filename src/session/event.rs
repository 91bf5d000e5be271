//! User events emitted by the presentation layer.

use serde::{Deserialize, Serialize};

/// A discrete user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    /// Next card (right chevron).
    Next,
    /// Previous card (left chevron).
    Previous,
    /// Random other card.
    Random,
    /// Tap on the card.
    Flip,
    /// Play button on the front face.
    Play,
}

impl UiEvent {
    pub const ALL: [UiEvent; 5] = [
        UiEvent::Next,
        UiEvent::Previous,
        UiEvent::Random,
        UiEvent::Flip,
        UiEvent::Play,
    ];

    /// Moves the deck position (and so cues audio).
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(self, UiEvent::Next | UiEvent::Previous | UiEvent::Random)
    }
}
