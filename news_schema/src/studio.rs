//! Studio project configuration and loader.
//!
//! Identifies the hosted project and dataset the schemas are deployed to and
//! the studio plugins enabled alongside them. Values come from `studio.toml`;
//! when that file is missing or unreadable the built-in defaults are used.

use std::fmt;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::schema::{SchemaTypeInfo, schema_types};

/// Studio tools enabled in the editing UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plugin {
    /// Document list and editor panes.
    Structure,
    /// Query playground.
    Vision,
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plugin::Structure => write!(f, "structure"),
            Plugin::Vision => write!(f, "vision"),
        }
    }
}

/// Complete studio configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub name: String,
    pub title: String,
    pub project_id: String,
    pub dataset: String,
    pub plugins: Vec<Plugin>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            title: "BRICS News".to_string(),
            project_id: "e1afdefg".to_string(),
            dataset: "production".to_string(),
            plugins: vec![Plugin::Structure, Plugin::Vision],
        }
    }
}

impl StudioConfig {
    /// Check the identifiers the host uses to address the project.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_id.is_empty()
            || !self
                .project_id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(ConfigError::Invalid(format!(
                "project_id '{}' must be non-empty lowercase letters and digits",
                self.project_id
            )));
        }
        if self.dataset.is_empty()
            || !self
                .dataset
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
        {
            return Err(ConfigError::Invalid(format!(
                "dataset '{}' must be non-empty and use only a-z, 0-9, '_' or '-'",
                self.dataset
            )));
        }
        Ok(())
    }

    /// Document types deployed with this studio.
    pub fn schema_types(&self) -> Vec<SchemaTypeInfo> {
        schema_types()
    }
}

/// Loads studio configuration from a TOML file, falling back to defaults on error.
///
/// This function never fails.
///
/// # Logging
/// - `info!` on successful load
/// - `warn!` if the file cannot be read, parsed, or validated
pub fn load_config(toml_path: &Path) -> StudioConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!(
                "studio config '{}' loaded from '{}' (project {}, dataset {})",
                config.name,
                toml_path.display(),
                config.project_id,
                config.dataset
            );
            config
        },
        Err(e) => {
            warn!(
                "Could not load studio config from '{}': {}. Using built-in defaults.",
                toml_path.display(),
                e
            );
            StudioConfig::default()
        },
    }
}

/// Attempts to load and validate studio configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or fails [`StudioConfig::validate`].
pub fn try_load_config(toml_path: &Path) -> Result<StudioConfig, ConfigError> {
    let text = fs::read_to_string(toml_path).map_err(|source| ConfigError::Read {
        path: toml_path.to_path_buf(),
        source,
    })?;
    let config: StudioConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: toml_path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_the_deployed_studio() {
        let config = StudioConfig::default();
        assert_eq!(config.title, "BRICS News");
        assert_eq!(config.dataset, "production");
        assert_eq!(config.plugins, [Plugin::Structure, Plugin::Vision]);
        assert_eq!(Plugin::Vision.to_string(), "vision");
        assert!(config.validate().is_ok());
        assert_eq!(config.schema_types().len(), 2);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let file = write_config("dataset = \"staging\"\nplugins = [\"structure\"]\n");
        let config = try_load_config(file.path()).unwrap();
        assert_eq!(config.dataset, "staging");
        assert_eq!(config.plugins, [Plugin::Structure]);
        assert_eq!(config.project_id, "e1afdefg");
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studio.toml");
        assert!(matches!(try_load_config(&path), Err(ConfigError::Read { .. })));
        assert_eq!(load_config(&path), StudioConfig::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let file = write_config("plugins = [\"desk\"]\n");
        assert!(matches!(try_load_config(file.path()), Err(ConfigError::Parse { .. })));
        assert_eq!(load_config(file.path()), StudioConfig::default());
    }

    #[test]
    fn invalid_identifiers_are_rejected() {
        let file = write_config("project_id = \"My Project\"\n");
        assert!(matches!(try_load_config(file.path()), Err(ConfigError::Invalid(_))));

        let config = StudioConfig {
            dataset: String::new(),
            ..StudioConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
