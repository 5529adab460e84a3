//! Configuration management

use crate::domain::IdStrategy;
use crate::error::{Result, RosterError};
use crate::infrastructure::repository::ROSTER_DIR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub id_strategy: IdStrategy,
    /// Tracing filter directive, e.g. "info" or "roster=debug"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(id_strategy: IdStrategy) -> Self {
        Config {
            id_strategy,
            log_level: None,
            created: Utc::now(),
        }
    }

    /// Load config from .roster/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(ROSTER_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RosterError::NotRosterDirectory(path.to_path_buf())
            } else {
                RosterError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| RosterError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .roster/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let roster_dir = path.join(ROSTER_DIR);
        let config_path = roster_dir.join(CONFIG_FILE);

        if !roster_dir.exists() {
            fs::create_dir(&roster_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| RosterError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
