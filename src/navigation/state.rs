//! Navigation state: the current card and whether it is flipped.

use serde::{Deserialize, Serialize};

/// Position in the deck plus the flip flag.
///
/// `current_index` is always within `[0, deck.count())`; the controller is
/// the only writer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationState {
    /// Index of the card on screen.
    pub current_index: usize,

    /// Showing the script side instead of the image side.
    pub is_flipped: bool,
}

impl NavigationState {
    /// Start of the deck, front face up.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_index: 0,
            is_flipped: false,
        }
    }

    /// Move to `index` and show the front face.
    pub(crate) fn move_to(&mut self, index: usize) {
        self.current_index = index;
        self.is_flipped = false;
    }
}
