/// Inline style properties an effect can write on an element.
///
/// Only the handful of properties the enhancements touch are modeled.
/// Unset fields mean the property was never written; stylesheet values
/// are outside the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub opacity: Option<f64>,
    /// Vertical translation in pixels (positive moves down)
    pub translate_y: Option<f64>,
    /// CSS transition declaration, e.g. "opacity 0.6s ease, transform 0.6s ease"
    pub transition: Option<String>,
    pub background: Option<String>,
    pub backdrop_filter: Option<String>,
}

impl InlineStyle {
    /// Opacity as rendered: an element without an inline value is opaque.
    pub fn effective_opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }

    /// Vertical offset as rendered.
    pub fn effective_translate_y(&self) -> f64 {
        self.translate_y.unwrap_or(0.0)
    }
}

/// Format the transition declaration both reveal groups use.
///
/// Durations are written in seconds with trailing zeros trimmed, matching
/// the usual hand-written form ("0.6s", not "0.60s").
pub fn fade_transition(duration_ms: u64) -> String {
    let secs = format_secs(duration_ms);
    format!("opacity {secs} ease, transform {secs} ease")
}

fn format_secs(ms: u64) -> String {
    if ms % 1000 == 0 {
        format!("{}s", ms / 1000)
    } else {
        let s = format!("{:.3}", ms as f64 / 1000.0);
        format!("{}s", s.trim_end_matches('0').trim_end_matches('.'))
    }
}
