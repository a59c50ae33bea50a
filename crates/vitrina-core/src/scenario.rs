//! Scripted input scenarios.
//!
//! A scenario is a TOML file listing input steps to feed the engine in
//! order. Element references are markup ids, resolved at playback time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// A parsed scenario: a name and the steps to play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Advance the virtual clock
    Advance { ms: u64 },
    /// Jump to an absolute scroll offset
    Scroll { to: f64 },
    /// Scroll relative to the current offset
    ScrollBy { delta: f64 },
    /// Click the element with this markup id
    Click { target: String },
    /// Set a form field's value
    SetField { field: String, value: String },
    /// Submit the login form
    Submit,
    /// Close the notice modal
    DismissModal,
}

/// Parse a scenario file
pub fn parse_scenario_file(path: &Path) -> Result<Scenario> {
    let content = std::fs::read_to_string(path)?;
    parse_scenario(&content)
}

/// Parse scenario content string
pub fn parse_scenario(content: &str) -> Result<Scenario> {
    toml::from_str(content)
        .map_err(|e| crate::Error::Scenario(format!("Failed to parse scenario: {}", e)))
}
