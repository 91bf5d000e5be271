//! Presentation-side session: turns user events into navigation, audio
//! cues and redraws.
//!
//! ## Event handling
//!
//! | Event                          | Audio                     | Redraw |
//! |--------------------------------|---------------------------|--------|
//! | `Next` / `Previous` / `Random` | `Stop`, then `Play(new)`  | yes    |
//! | `Flip`                         | none                      | yes    |
//! | `Play`                         | `Stop`, then `Play(cur)`  | no     |
//!
//! `Play(new)` is skipped when autoplay is off.

pub mod event;
pub mod handler;
pub mod view;

pub use event::UiEvent;
pub use handler::{AudioCues, Session};
pub use view::{CardFace, CardView, RecordingRenderer, Renderer};
