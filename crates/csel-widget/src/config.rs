//! Widget configuration
//!
//! Cosmetic class names for the built chrome plus the open-scroll toggle.
//! Supplied by the bootstrapper, consumed at build time; none of these
//! affect behavior except scroll_to_selected.

use serde::{Deserialize, Serialize};

/// Build-time configuration record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Class for the wrapper that replaces the select in the document
    pub container_class: String,
    /// Class for the always-visible opener control
    pub opener_class: String,
    /// Class for the panel holding the rendered options
    pub panel_class: String,
    /// Class for each rendered option
    pub option_class: String,
    /// Class for each rendered option group
    pub optgroup_class: String,
    /// Scroll the panel to reveal the selected option on open
    pub scroll_to_selected: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_class: "custom-select-container".to_string(),
            opener_class: "custom-select-opener".to_string(),
            panel_class: "custom-select-panel".to_string(),
            option_class: "custom-select-option".to_string(),
            optgroup_class: "custom-select-optgroup".to_string(),
            scroll_to_selected: true,
        }
    }
}
