use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub alerts: AlertsConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            page: PageConfig::default(),
            scroll: ScrollConfig::default(),
            navbar: NavbarConfig::default(),
            reveal: RevealConfig::default(),
            alerts: AlertsConfig::default(),
            login: LoginConfig::default(),
            typewriter: TypewriterConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Viewport height in pixels
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport_height: default_viewport_height(),
        }
    }
}

/// Easing curve for animated scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump straight to the target
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animations
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing function for animations
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Animation sampling rate in frames per second
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Pixels moved per manual scroll step
    #[serde(default = "default_scroll_step")]
    pub scroll_step_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: default_easing(),
            animation_fps: default_animation_fps(),
            scroll_step_px: default_scroll_step(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarConfig {
    /// Scroll offset beyond which the navbar switches style
    #[serde(default = "default_navbar_threshold")]
    pub threshold_px: f64,
    /// Background when scrolled past the threshold
    #[serde(default = "default_scrolled_background")]
    pub scrolled_background: String,
    /// Backdrop filter when scrolled past the threshold
    #[serde(default = "default_scrolled_backdrop_filter")]
    pub scrolled_backdrop_filter: String,
    /// Background at or near the top of the page
    #[serde(default = "default_top_background")]
    pub top_background: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_navbar_threshold(),
            scrolled_background: default_scrolled_background(),
            scrolled_backdrop_filter: default_scrolled_backdrop_filter(),
            top_background: default_top_background(),
        }
    }
}

/// One class of elements animated on first viewport entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealGroup {
    /// Class selector the group is collected from
    pub selector: String,
    /// Initial downward offset in pixels
    pub offset_px: f64,
    /// Transition duration in milliseconds
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of an element that must be visible to count as intersecting
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
    /// Adjustment to the viewport bottom edge (negative shrinks)
    #[serde(default = "default_root_margin_bottom")]
    pub root_margin_bottom_px: f64,
    /// Element groups to animate
    #[serde(default = "default_reveal_groups")]
    pub groups: Vec<RevealGroup>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            root_margin_bottom_px: default_root_margin_bottom(),
            groups: default_reveal_groups(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsConfig {
    /// Delay before alert banners dismiss themselves
    #[serde(default = "default_alert_dismiss")]
    pub dismiss_after_ms: u64,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_alert_dismiss(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Notice shown when a required field is empty
    #[serde(default = "default_required_message")]
    pub required_message: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            required_message: default_required_message(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Milliseconds between typed characters
    #[serde(default = "default_type_speed")]
    pub speed_ms: u64,
    /// Delay before typing starts
    #[serde(default = "default_type_start_delay")]
    pub start_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed_ms: default_type_speed(),
            start_delay_ms: default_type_start_delay(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_viewport_height() -> f64 {
    800.0
}

fn default_scroll_duration() -> u64 {
    400
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_step() -> f64 {
    40.0
}

fn default_navbar_threshold() -> f64 {
    100.0
}

fn default_scrolled_background() -> String {
    "rgba(255, 255, 255, 0.95)".to_string()
}

fn default_scrolled_backdrop_filter() -> String {
    "blur(10px)".to_string()
}

fn default_top_background() -> String {
    "#ffffff".to_string()
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_root_margin_bottom() -> f64 {
    -50.0
}

fn default_reveal_groups() -> Vec<RevealGroup> {
    vec![
        RevealGroup {
            selector: ".producto-card".to_string(),
            offset_px: 30.0,
            duration_ms: 600,
        },
        RevealGroup {
            selector: ".dashboard-card".to_string(),
            offset_px: 20.0,
            duration_ms: 500,
        },
    ]
}

fn default_alert_dismiss() -> u64 {
    5000
}

fn default_required_message() -> String {
    "Por favor, completa todos los campos".to_string()
}

fn default_type_speed() -> u64 {
    150
}

fn default_type_start_delay() -> u64 {
    1000
}

fn default_tick_rate() -> u64 {
    100
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/vitrina/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("vitrina")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.navbar.threshold_px, 100.0);
        assert_eq!(config.alerts.dismiss_after_ms, 5000);
        assert_eq!(config.typewriter.speed_ms, 150);
        assert_eq!(config.typewriter.start_delay_ms, 1000);
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.root_margin_bottom_px, -50.0);
        assert_eq!(config.reveal.groups.len(), 2);
        assert_eq!(config.reveal.groups[0].selector, ".producto-card");
        assert_eq!(config.reveal.groups[0].offset_px, 30.0);
        assert_eq!(config.reveal.groups[1].duration_ms, 500);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[navbar]
threshold_px = 80.0

[typewriter]
speed_ms = 100
"#,
        )
        .unwrap();

        assert_eq!(config.navbar.threshold_px, 80.0);
        assert_eq!(config.navbar.top_background, "#ffffff");
        assert_eq!(config.typewriter.speed_ms, 100);
        assert_eq!(config.typewriter.start_delay_ms, 1000);
        assert!(config.scroll.smooth_enabled);
    }

    #[test]
    fn test_easing_names() {
        let config: AppConfig = toml::from_str(
            r#"
[scroll]
easing = "ease_out"
"#,
        )
        .unwrap();
        assert_eq!(config.scroll.easing, EasingType::EaseOut);
    }
}
