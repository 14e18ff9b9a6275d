use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::notify::Notification;

/// Name shown as the notification source when nothing else is configured
pub const APPLICATION_NAME: &str = "Magicicada Client";

const HOME_OVERRIDE_ENV: &str = "MAGICICADA_TEST_HOME";

/// Get the magicicada home directory (~/.magicicada)
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    if let Some(home) = std::env::var_os(HOME_OVERRIDE_ENV) {
        return Ok(PathBuf::from(home).join(".magicicada"));
    }
    dirs::home_dir()
        .map(|home| home.join(".magicicada"))
        .ok_or(ConfigError::MissingHome)
}

/// Get the notification settings file (~/.magicicada/notify.json)
pub fn settings_path() -> Result<PathBuf, ConfigError> {
    Ok(home_dir()?.join("notify.json"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Overrides the notification source name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
}

impl Settings {
    /// Load settings from the default location. A missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&settings_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write a settings file with the default application name. Refuses to
    /// overwrite an existing file.
    pub fn init(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Err(ConfigError::AlreadyExists(path.to_path_buf()));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let settings = Self {
            application_name: Some(APPLICATION_NAME.to_string()),
        };
        let mut json = serde_json::to_string_pretty(&settings).map_err(ConfigError::Serialize)?;
        json.push('\n');
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(settings)
    }

    pub fn application_name(&self) -> &str {
        self.application_name.as_deref().unwrap_or(APPLICATION_NAME)
    }

    pub fn notifier(&self) -> Notification {
        Notification::with_application_name(self.application_name())
    }
}
