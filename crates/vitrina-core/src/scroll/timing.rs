//! Time calculations for scroll animations on the virtual clock.

/// Calculate animation progress (0.0 to 1.0) from start, now and duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start_ms: u64, now_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now_ms.saturating_sub(start_ms);
    let ratio = elapsed as f64 / duration_ms as f64;
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start_ms: u64, now_ms: u64, duration_ms: u64) -> bool {
    now_ms.saturating_sub(start_ms) >= duration_ms
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor [0.0, 1.0]
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
