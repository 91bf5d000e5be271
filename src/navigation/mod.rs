//! Deck navigation: the current index and flip flag, and the controller
//! that moves them.

pub mod controller;
pub mod state;

pub use controller::NavigationController;
pub use state::NavigationState;
