//! Application configuration.
//!
//! Settings load from YAML files discovered in standard locations and are
//! validated before use. A JSON schema for the full config surface can be
//! generated for editor tooling.

mod file;
mod types;
mod validation;

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, CONFIG_FILE_NAMES,
};
pub use types::{AppConfig, ExportConfig, TuiConfig};
pub use validation::{ConfigError, Validatable};

/// Generate the JSON schema for [`AppConfig`].
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::error::ArcError::config(format!("schema serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_generation() {
        let schema = generate_json_schema().expect("schema");
        assert!(schema.contains("\"title\""));
        assert!(schema.contains("summary"));
    }
}
