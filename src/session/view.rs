//! Render snapshots and the renderer contract.

use serde::Serialize;

use crate::cards::{CardId, ImageKey};
use crate::navigation::NavigationController;

/// The visible side of the current card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "side", rename_all = "snake_case")]
pub enum CardFace {
    /// Image side: picture, name and play button.
    Front { name: String, image_key: ImageKey },
    /// Script side.
    Back { name: String, script: String },
}

/// Everything a renderer needs to draw the screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub card_id: CardId,
    /// 0-based deck position.
    pub position: usize,
    pub total: usize,
    pub is_flipped: bool,
    pub face: CardFace,
}

impl CardView {
    /// Snapshot the controller's current card.
    #[must_use]
    pub fn capture(nav: &NavigationController) -> Self {
        let card = nav.current_card();
        let face = if nav.is_flipped() {
            CardFace::Back {
                name: card.name().to_string(),
                script: card.script().to_string(),
            }
        } else {
            CardFace::Front {
                name: card.name().to_string(),
                image_key: card.image_key().clone(),
            }
        };

        Self {
            card_id: card.id(),
            position: nav.current_index(),
            total: nav.deck().count(),
            is_flipped: nav.is_flipped(),
            face,
        }
    }
}

/// Draws card views. Implemented by the host UI.
pub trait Renderer {
    fn render(&mut self, view: &CardView);
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&mut self, view: &CardView) {
        (**self).render(view);
    }
}

/// Renderer that keeps every view it was given.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    views: Vec<CardView>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn views(&self) -> &[CardView] {
        &self.views
    }

    #[must_use]
    pub fn last(&self) -> Option<&CardView> {
        self.views.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &CardView) {
        self.views.push(view.clone());
    }
}
