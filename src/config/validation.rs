//! Configuration validation.

use super::types::{AppConfig, ExportConfig, TuiConfig};
use crate::session::SummaryModel;

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.export.validate());
        errors.extend(self.summary.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let valid_themes = ["dark", "light"];
        if valid_themes.contains(&self.theme.as_str()) {
            Vec::new()
        } else {
            vec![ConfigError {
                field: "tui.theme".to_string(),
                message: format!(
                    "Unknown theme '{}'. Valid options: {}",
                    self.theme,
                    valid_themes.join(", ")
                ),
            }]
        }
    }
}

impl Validatable for ExportConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(dir) = &self.output_dir {
            if dir.as_os_str().is_empty() {
                errors.push(ConfigError {
                    field: "export.output_dir".to_string(),
                    message: "Output directory must not be empty".to_string(),
                });
            }
        }
        errors
    }
}

impl Validatable for SummaryModel {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.base_assets == 0 {
            errors.push(ConfigError {
                field: "summary.base_assets".to_string(),
                message: "Base asset count must be at least 1".to_string(),
            });
        }
        if self.base_value_billions < 0.0 || self.value_step_billions < 0.0 {
            errors.push(ConfigError {
                field: "summary.base_value_billions".to_string(),
                message: "Value coefficients must be non-negative".to_string(),
            });
        }
        if self.min_low_risk_pct > self.base_low_risk_pct {
            errors.push(ConfigError {
                field: "summary.min_low_risk_pct".to_string(),
                message: format!(
                    "Floor {} exceeds base {}",
                    self.min_low_risk_pct, self.base_low_risk_pct
                ),
            });
        }
        if self.max_high_risk_pct < self.base_high_risk_pct {
            errors.push(ConfigError {
                field: "summary.max_high_risk_pct".to_string(),
                message: format!(
                    "Ceiling {} is below base {}",
                    self.max_high_risk_pct, self.base_high_risk_pct
                ),
            });
        }
        if self.base_low_risk_pct > 100 || self.base_high_risk_pct > 100 {
            errors.push(ConfigError {
                field: "summary.base_low_risk_pct".to_string(),
                message: "Risk percentages must not exceed 100".to_string(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let mut config = AppConfig::default();
        config.tui.theme = "solarized".to_string();

        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "tui.theme");
    }

    #[test]
    fn test_summary_floor_above_base_rejected() {
        let mut config = AppConfig::default();
        config.summary.min_low_risk_pct = 60;

        assert!(!config.is_valid());
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "summary.min_low_risk_pct"));
    }

    #[test]
    fn test_zero_base_assets_rejected() {
        let mut config = AppConfig::default();
        config.summary.base_assets = 0;
        assert!(!config.is_valid());
    }
}
