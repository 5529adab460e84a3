//! Config management use case

use crate::domain::IdStrategy;
use crate::error::{Result, RosterError};
use crate::infrastructure::{Config, FileSystemRepository, RosterRepository};
use std::str::FromStr;

/// Service for managing roster configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "id_strategy" => Ok(config.id_strategy.to_string()),
            "log_level" => Ok(config.log_level.unwrap_or_else(|| "none".to_string())),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(RosterError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: id_strategy, log_level, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "id_strategy" => {
                config.id_strategy = IdStrategy::from_str(value).map_err(RosterError::Config)?;
            }
            "log_level" => {
                config.log_level = match value {
                    "none" | "" => None,
                    level => Some(level.to_string()),
                };
            }
            "created" => {
                return Err(RosterError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(RosterError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: id_strategy, log_level",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        tracing::info!(key, value, "Config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
