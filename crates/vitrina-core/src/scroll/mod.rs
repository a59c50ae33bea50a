//! Smooth scrolling for the simulated viewport.
//!
//! Animations run on the engine's virtual millisecond clock, so a scroll
//! started at one instant lands on exactly the same positions no matter
//! how the caller slices its `advance` calls.
//!
//! - `easing` - pure easing functions (cubic, quintic, exponential)
//! - `timing` - progress and interpolation helpers
//! - `config` - convenience methods over [`crate::config::ScrollConfig`]
//! - `animation` - the animation controller combining the above

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::ScrollConfigExt;
pub use easing::EasingTypeExt;
