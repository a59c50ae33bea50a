//! The six page enhancements.
//!
//! Each module binds to its elements at wiring time, skipping silently
//! when the page has none, and exposes small operations for the engine to
//! drive. None of them talks to another; the engine owns the wiring.

pub mod alerts;
pub mod anchor;
pub mod login;
pub mod navbar;
pub mod reveal;
pub mod typewriter;

pub use anchor::AnchorNavigator;
pub use login::{LoginGuard, SubmitOutcome};
pub use navbar::NavbarToggle;
pub use reveal::{RevealAnimator, VisibilityState};
pub use typewriter::Typewriter;
