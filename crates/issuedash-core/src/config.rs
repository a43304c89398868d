use crate::error::ErrorCode;
use crate::view::{PriorityFilter, SortDirection, ViewState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Read { .. } => ErrorCode::ConfigReadError,
            Self::Parse { .. } => ErrorCode::ConfigParseError,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial view state. Omitted keys fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub open_only: bool,
    #[serde(default)]
    pub priority: PriorityFilter,
    #[serde(default)]
    pub sort: SortDirection,
}

impl ViewConfig {
    #[must_use]
    pub fn to_view_state(&self) -> ViewState {
        ViewState {
            query: self.query.clone(),
            open_only: self.open_only,
            priority_filter: self.priority,
            sort_direction: self.sort,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// `<config dir>/issuedash/config.toml`, if the platform has a config dir.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("issuedash/config.toml"))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default location is used
/// and a missing file yields [`DashboardConfig::default`].
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or is not valid TOML
/// for this schema.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig, ConfigError> {
    let path = match path {
        Some(explicit) => explicit.to_path_buf(),
        None => match default_config_path() {
            Some(default) if default.exists() => default,
            _ => {
                debug!("no config file found; using defaults");
                return Ok(DashboardConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse a config document.
///
/// # Errors
///
/// Returns the TOML error for malformed input or unknown enum values.
pub fn parse_config(content: &str) -> Result<DashboardConfig, toml::de::Error> {
    toml::from_str(content)
}

const fn default_tick_rate_ms() -> u64 {
    250
}
