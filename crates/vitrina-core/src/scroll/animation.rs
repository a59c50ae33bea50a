//! Scroll animation controller.
//!
//! Combines easing functions and timing utilities to glide the viewport
//! towards a target offset. Positions are a pure function of the clock:
//! sampling more often never changes where the animation ends up.

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Clock reading when the animation started
    start_ms: u64,
    /// Starting scroll position
    from: f64,
    /// Target scroll position
    to: f64,
    /// Animation duration
    duration_ms: u64,
    /// Easing function
    easing: EasingType,
}

/// Scroll animation controller
///
/// Call `scroll_to()` to begin an animation, then `update()` at each
/// sample point to get the current interpolated position.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: ScrollConfig,
    /// Current scroll position (always up-to-date)
    current_scroll: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self {
            animation: None,
            config: ScrollConfig::default(),
            current_scroll: 0.0,
        }
    }
}

impl ScrollAnimator {
    /// Create a new scroll animator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0.0,
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the target scroll position (final position after animation)
    pub fn target_scroll(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    /// Get the current interpolated scroll position
    #[inline]
    pub fn current_scroll(&self) -> f64 {
        self.current_scroll
    }

    /// Set scroll position immediately (no animation)
    pub fn set_scroll(&mut self, scroll: f64) {
        self.animation = None;
        self.current_scroll = scroll.max(0.0);
    }

    /// Start a scroll animation to a target position
    ///
    /// If smooth scrolling is disabled, jumps immediately to target.
    pub fn scroll_to(&mut self, target: f64, max_scroll: f64, now_ms: u64) {
        let target = target.clamp(0.0, max_scroll);

        if !self.config.is_smooth() {
            // Instant jump when smooth scrolling is disabled
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        // Start from current visible position
        let from = self.current_scroll;

        // Skip animation if already at target
        if (from - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start_ms: now_ms,
            from,
            to: target,
            duration_ms: self.config.animation_duration_ms,
            easing: self.config.easing,
        });
    }

    /// Clock reading of the next frame sample, while an animation runs.
    ///
    /// Samples land on a grid aligned to the animation start, so callers
    /// advancing the clock in different increments still sample the same
    /// readings.
    pub fn next_frame_ms(&self, now_ms: u64) -> Option<u64> {
        let anim = self.animation.as_ref()?;
        let interval = self.config.frame_interval_ms();
        let elapsed = now_ms.saturating_sub(anim.start_ms);
        Some(anim.start_ms + (elapsed / interval + 1) * interval)
    }

    /// Update animation state and return current scroll position
    ///
    /// Call this at each sample point to advance the animation.
    pub fn update(&mut self, now_ms: u64, max_scroll: f64) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start_ms, now_ms, anim.duration_ms) {
                // Animation complete
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                // Calculate interpolated position
                let t = progress(anim.start_ms, now_ms, anim.duration_ms);
                let eased_t = anim.easing.apply(t);
                self.current_scroll = lerp(anim.from, anim.to, eased_t).min(max_scroll);
            }
        }

        self.current_scroll
    }

    /// Cancel any active animation and stop at current position
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}
