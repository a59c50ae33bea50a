//! Convenience methods over the scroll configuration.

pub use crate::config::{EasingType, ScrollConfig};

/// Extension trait for [`ScrollConfig`] with utility methods
pub trait ScrollConfigExt {
    /// Milliseconds between animation samples
    fn frame_interval_ms(&self) -> u64;

    /// Check if smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn frame_interval_ms(&self) -> u64 {
        if self.animation_fps == 0 {
            16 // ~60fps fallback
        } else {
            (1000 / self.animation_fps as u64).max(1)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration_ms, 400);
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.animation_fps, 60);
        assert_eq!(config.frame_interval_ms(), 16);
    }

    #[test]
    fn test_frame_interval_fallback() {
        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(config.frame_interval_ms(), 16);
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }
}
