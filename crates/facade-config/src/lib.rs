//! Scenario configuration for the facade driver.
//!
//! Settings resolve through a precedence stack:
//! override flag → working directory → built-in defaults.
//! Each layer may set any subset of keys; higher layers win key by key.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".facade.toml";

const DEFAULT_USER_NAME: &str = "john doe";
const DEFAULT_COUNTRY_UPDATE: &str = "USA";
const DEFAULT_ROLE_UPDATE: &str = "Editor";

/// Complete configuration resolved from defaults and on-disk overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub user: UserSettings,
    pub state: StateSettings,
    pub updates: UpdateSettings,
    pub sources: ConfigSources,
}

/// The user record handed to the orchestrator at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserSettings {
    pub name: String,
}

/// Initial values of the shared flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateSettings {
    pub is_loading: bool,
    pub is_saving: bool,
}

/// Values passed to the delegated updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateSettings {
    pub country: String,
    pub role: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user: UserSettings {
                name: DEFAULT_USER_NAME.to_owned(),
            },
            state: StateSettings {
                is_loading: true,
                is_saving: true,
            },
            updates: UpdateSettings {
                country: DEFAULT_COUNTRY_UPDATE.to_owned(),
                role: DEFAULT_ROLE_UPDATE.to_owned(),
            },
            sources: ConfigSources {
                layers: vec![ConfigSource::default()],
            },
        }
    }
}

/// Ordered list of the layers that contributed to a [`Config`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigSources {
    pub layers: Vec<ConfigSource>,
}

/// Provenance for one configuration layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigSource {
    pub kind: ConfigSourceKind,
    pub path: Option<PathBuf>,
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource {
            kind: ConfigSourceKind::Default,
            path: None,
        }
    }
}

impl ConfigSource {
    fn for_file(kind: ConfigSourceKind, path: PathBuf) -> Self {
        ConfigSource {
            kind,
            path: Some(path),
        }
    }

    fn describe(&self) -> String {
        match (&self.kind, &self.path) {
            (ConfigSourceKind::Default, _) => "built-in defaults".to_owned(),
            (kind, Some(path)) => format!("{} at {}", kind, path.display()),
            (kind, None) => kind.to_string(),
        }
    }
}

/// Kinds of configuration sources, ordered from lowest to highest precedence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigSourceKind {
    Default,
    Local,
    Override,
}

impl fmt::Display for ConfigSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigSourceKind::Default => "defaults",
            ConfigSourceKind::Local => "local config",
            ConfigSourceKind::Override => "override config",
        };
        f.write_str(label)
    }
}

/// Loader options, typically supplied by the CLI layer.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub override_path: Option<PathBuf>,
    pub working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_override_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }
}

/// Errors surfaced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve working directory {attempted}: {source}")]
    WorkingDirectory {
        attempted: PathBuf,
        source: io::Error,
    },
    #[error("override config {path} not found")]
    OverrideNotFound { path: PathBuf },
    #[error("failed to read config {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("configuration validation failed: {0}")]
    Validation(ConfigValidationError),
}

/// Validation failure with provenance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigValidationError {
    pub source: ConfigSource,
    pub key: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.key,
            self.message,
            self.source.describe()
        )
    }
}

impl Config {
    /// Loads configuration using the precedence rules and returns typed settings.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let working_dir = resolve_working_dir(options.working_dir)?;
        let override_path = options
            .override_path
            .map(|path| make_absolute(&path, &working_dir));

        if let Some(path) = &override_path {
            if !path.exists() {
                return Err(ConfigError::OverrideNotFound { path: path.clone() });
            }
        }

        let mut config = Config::default();

        let local_config_path = working_dir.join(CONFIG_FILE_NAME);
        if local_config_path.exists() && Some(&local_config_path) != override_path.as_ref() {
            let source = ConfigSource::for_file(ConfigSourceKind::Local, local_config_path.clone());
            let layer = load_layer(&local_config_path)?;
            config.apply(layer, source)?;
        }

        if let Some(path) = override_path {
            let source = ConfigSource::for_file(ConfigSourceKind::Override, path.clone());
            let layer = load_layer(&path)?;
            config.apply(layer, source)?;
        }

        debug!(layers = config.sources.layers.len(), "configuration resolved");
        Ok(config)
    }

    /// Parses a single TOML document on top of the built-in defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        let mut config = Config::default();
        config.apply(
            raw,
            ConfigSource {
                kind: ConfigSourceKind::Override,
                path: None,
            },
        )?;
        Ok(config)
    }

    fn apply(&mut self, layer: RawConfig, source: ConfigSource) -> Result<(), ConfigError> {
        if let Some(user) = layer.user {
            if let Some(name) = user.name {
                if name.trim().is_empty() {
                    return Err(ConfigError::Validation(ConfigValidationError {
                        source,
                        key: "user.name",
                        message: "must not be empty".to_owned(),
                    }));
                }
                self.user.name = name;
            }
        }

        if let Some(state) = layer.state {
            if let Some(value) = state.is_loading {
                self.state.is_loading = value;
            }
            if let Some(value) = state.is_saving {
                self.state.is_saving = value;
            }
        }

        if let Some(updates) = layer.updates {
            if let Some(country) = updates.country {
                self.updates.country = country;
            }
            if let Some(role) = updates.role {
                self.updates.role = role;
            }
        }

        self.sources.layers.push(source);
        Ok(())
    }
}

fn resolve_working_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match override_dir {
        Some(path) => fs::canonicalize(&path).map_err(|source| ConfigError::WorkingDirectory {
            attempted: path,
            source,
        }),
        None => env::current_dir().map_err(|source| ConfigError::WorkingDirectory {
            attempted: PathBuf::from("."),
            source,
        }),
    }
}

fn make_absolute(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn load_layer(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.into(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.into(),
        source,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    user: Option<RawUser>,
    #[serde(default)]
    state: Option<RawState>,
    #[serde(default)]
    updates: Option<RawUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUser {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawState {
    #[serde(default)]
    is_loading: Option<bool>,
    #[serde(default)]
    is_saving: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawUpdates {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_layer_overrides_only_named_keys() {
        let config = Config::from_toml_str(
            r#"
            [state]
            is_loading = false
            "#,
        )
        .expect("parse");

        assert!(!config.state.is_loading);
        assert!(config.state.is_saving);
        assert_eq!(config.user.name, "john doe");
        assert_eq!(config.updates.country, "USA");
        assert_eq!(config.sources.layers.len(), 2);
    }

    #[test]
    fn validation_error_names_key_and_source() {
        let err = Config::from_toml_str("[user]\nname = \"  \"\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("user.name: must not be empty"), "{message}");
        assert!(message.contains("override config"), "{message}");
    }
}
