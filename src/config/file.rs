//! Configuration file loading and discovery.

use super::types::AppConfig;
use super::validation::Validatable;
use std::path::{Path, PathBuf};

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".arc-console.yaml",
    ".arc-console.yml",
    "arc-console.yaml",
    "arc-console.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/arc-console/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("arc-console")) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "Config file not found: {}", path.display()),
            Self::Io(err) => write!(f, "Failed to read config file: {err}"),
            Self::Parse(err) => write!(f, "Failed to parse config file: {err}"),
        }
    }
}

impl std::error::Error for ConfigFileError {}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load configuration from a specific YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load the discovered config file, or fall back to defaults.
///
/// Returns the config and the path it was loaded from (None when defaults
/// were used). A file that exists but fails to parse is reported via a
/// `tracing` warning rather than aborting startup.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    match discover_config_file(explicit_path) {
        Some(path) => match load_config_file(&path) {
            Ok(config) => {
                for err in config.validate() {
                    tracing::warn!("config file {}: {err}", path.display());
                }
                (config, Some(path))
            }
            Err(err) => {
                tracing::warn!("ignoring config file {}: {err}", path.display());
                (AppConfig::default(), None)
            }
        },
        None => (AppConfig::default(), None),
    }
}

/// Generate an example config file with the default values, commented.
#[must_use]
pub fn generate_example_config() -> String {
    let defaults = AppConfig::default();
    let body = serde_yaml::to_string(&defaults).unwrap_or_default();
    format!(
        "# arc-console configuration\n\
         # Place this file as .arc-console.yaml in your project root\n\
         # or ~/.config/arc-console/.\n\
         #\n\
         # The summary section holds the linear placeholder coefficients for\n\
         # the filter page statistics; direction and clamping are fixed, the\n\
         # literals are yours to tune.\n\
         {body}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".arc-console.yaml");
        let mut f = std::fs::File::create(&path).expect("create");
        writeln!(f, "tui:\n  theme: light").expect("write");

        let config = load_config_file(&path).expect("load");
        assert_eq!(config.tui.theme, "light");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_config_file(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(err, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".arc-console.yaml");
        std::fs::write(&path, "tui: [not a map").expect("write");

        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert!(loaded_from.is_none());
    }

    #[test]
    fn test_example_config_roundtrips() {
        let example = generate_example_config();
        let config: AppConfig = serde_yaml::from_str(&example).expect("example parses");
        assert_eq!(config, AppConfig::default());
    }
}
