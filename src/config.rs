//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/vtcli/vtcli.toml`
//! 3. Local config: `.vtcli.toml` next to the edited document
//! 4. Explicit config file passed with `--config`
//! 5. Environment variables: `VTCLI_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for vtcli.
///
/// Only affects how documents are written; navigation never depends on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces per nesting level when writing XML (0 = single line)
    pub indent: usize,
    /// Emit the `<?xml ...?>` declaration
    pub xml_declaration: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: 2,
            xml_declaration: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` = not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub indent: Option<usize>,
    pub xml_declaration: Option<bool>,
}

/// Get the XDG config directory for vtcli.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vtcli").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("vtcli.toml"))
}

/// Get the path to the local config file for documents in `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".vtcli.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            indent: overlay.indent.unwrap_or(self.indent),
            xml_declaration: overlay.xml_declaration.unwrap_or(self.xml_declaration),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `document_dir` - Directory of the edited document, searched for `.vtcli.toml`
    /// * `explicit` - Config file given on the command line; must exist
    pub fn load(
        document_dir: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = document_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        if let Some(path) = explicit {
            debug!("explicit config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply VTCLI_* environment variables as explicit overrides.
    ///
    /// `VTCLI_INDENT` and `VTCLI_XML_DECLARATION`; a value of the wrong type is
    /// a config error, not a silent fallback.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("VTCLI")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_int("indent"))? {
            settings.indent = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("VTCLI_INDENT must not be negative: {}", val),
            })?;
        }
        if let Some(val) = env_value(config.get_bool("xml_declaration"))? {
            settings.xml_declaration = val;
        }

        Ok(settings)
    }
}

/// Unset variables are `None`; unparsable ones are errors.
fn env_value<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let base = Settings::default();
        let overlay = RawSettings {
            indent: Some(4),
            xml_declaration: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.indent, 4);
        assert!(merged.xml_declaration);
    }
}
