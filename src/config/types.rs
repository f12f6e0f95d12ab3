//! Configuration types for arc-console.

use crate::session::SummaryModel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration.
///
/// Loaded from `.arc-console.yaml` (see [`super::file`]); CLI flags
/// override file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// TUI preferences
    pub tui: TuiConfig,
    /// Export settings
    pub export: ExportConfig,
    /// Filter summary placeholder coefficients
    pub summary: SummaryModel,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// TUI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Color theme name ("dark" or "light")
    pub theme: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory CSV exports are written to (current directory when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tui.theme, "dark");
        assert!(config.export.output_dir.is_none());
        assert_eq!(config.summary.base_assets, 276);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "tui:\n  theme: light\n";
        let config: AppConfig = serde_yaml::from_str(yaml).expect("valid yaml");
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.summary.assets_step, 15, "unset sections default");
    }

    #[test]
    fn test_summary_coefficients_configurable() {
        let yaml = "summary:\n  base_assets: 300\n  assets_step: 10\n";
        let config: AppConfig = serde_yaml::from_str(yaml).expect("valid yaml");
        assert_eq!(config.summary.summarize(1).assets_match, 290);
    }
}
