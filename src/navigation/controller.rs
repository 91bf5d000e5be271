//! Navigation controller: the index/flip state machine over a deck.
//!
//! ## Transitions
//!
//! | Operation     | Index                        | Flip      |
//! |---------------|------------------------------|-----------|
//! | `next`        | `(i + 1) mod n`              | `false`   |
//! | `previous`    | `(i + n - 1) mod n`          | `false`   |
//! | `random`      | uniform pick (see policy)    | `false`   |
//! | `jump_to(j)`  | `j`                          | `false`   |
//! | `toggle_flip` | unchanged                    | `!flip`   |
//!
//! None of these perform I/O. Audio cueing belongs to the session layer.

use log::debug;

use super::state::NavigationState;
use crate::cards::{Card, DeckStore};
use crate::core::{DeckError, DeckResult, DeckRng, RandomPolicy};

/// Owns the navigation state for one deck.
///
/// ## Example
///
/// ```
/// use brainrot_deck::cards::DeckStore;
/// use brainrot_deck::core::DeckRng;
/// use brainrot_deck::navigation::NavigationController;
///
/// let deck = DeckStore::builtin().unwrap();
/// let mut nav = NavigationController::new(deck, DeckRng::new(42));
///
/// nav.previous();
/// assert_eq!(nav.current_index(), 4);
/// assert_eq!(nav.current_card().name(), "Cappuccino Assassino");
/// ```
#[derive(Clone, Debug)]
pub struct NavigationController {
    deck: DeckStore,
    state: NavigationState,
    rng: DeckRng,
    policy: RandomPolicy,
}

impl NavigationController {
    /// Start at the first card, front face up, excluding the current card
    /// from random jumps.
    #[must_use]
    pub fn new(deck: DeckStore, rng: DeckRng) -> Self {
        Self {
            deck,
            state: NavigationState::new(),
            rng,
            policy: RandomPolicy::default(),
        }
    }

    /// Set the random jump policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RandomPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Advance one card, wrapping past the end.
    ///
    /// Returns whether the index changed (false only on a one-card deck).
    pub fn next(&mut self) -> bool {
        let n = self.deck.count();
        self.move_to((self.state.current_index + 1) % n)
    }

    /// Go back one card, wrapping past the start.
    pub fn previous(&mut self) -> bool {
        let n = self.deck.count();
        self.move_to((self.state.current_index + n - 1) % n)
    }

    /// Jump to a random card.
    ///
    /// On a one-card deck this is a no-op: neither index nor flip change.
    /// Under `ExcludeCurrent` draws repeat until they differ from the
    /// current index.
    pub fn random(&mut self) -> bool {
        let n = self.deck.count();
        if n <= 1 {
            return false;
        }

        let current = self.state.current_index;
        let pick = match self.policy {
            RandomPolicy::ExcludeCurrent => loop {
                let candidate = self.rng.gen_index(n);
                if candidate != current {
                    break candidate;
                }
            },
            RandomPolicy::AllowRepeat => self.rng.gen_index(n),
        };

        self.move_to(pick)
    }

    /// Jump directly to `index`.
    pub fn jump_to(&mut self, index: usize) -> DeckResult<bool> {
        if index >= self.deck.count() {
            return Err(DeckError::OutOfRange {
                index,
                len: self.deck.count(),
            });
        }
        Ok(self.move_to(index))
    }

    /// Toggle between the image side and the script side.
    ///
    /// Returns the new flip state.
    pub fn toggle_flip(&mut self) -> bool {
        self.state.is_flipped = !self.state.is_flipped;
        debug!("card {} flipped={}", self.state.current_index, self.state.is_flipped);
        self.state.is_flipped
    }

    /// The card at the current index.
    #[must_use]
    pub fn current_card(&self) -> &Card {
        // The index never leaves [0, count) and decks are never empty.
        &self.deck.cards()[self.state.current_index]
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.state.is_flipped
    }

    /// Snapshot of the navigation state.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn deck(&self) -> &DeckStore {
        &self.deck
    }

    #[must_use]
    pub fn policy(&self) -> RandomPolicy {
        self.policy
    }

    /// RNG stream, exposed so a session can be replayed.
    #[must_use]
    pub fn rng(&self) -> &DeckRng {
        &self.rng
    }

    fn move_to(&mut self, index: usize) -> bool {
        let from = self.state.current_index;
        self.state.move_to(index);
        debug!("navigate {from} -> {index}");
        from != index
    }
}
