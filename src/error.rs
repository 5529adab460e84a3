//! Error types for roster

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for roster application
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Not a roster directory: {0}")]
    NotRosterDirectory(PathBuf),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RosterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RosterError::NotRosterDirectory(_) => 2,
            RosterError::InvalidId(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RosterError::NotRosterDirectory(path) => {
                format!(
                    "Not a roster directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'roster init' in this directory to create a new list\n\
                    • Navigate to an existing roster directory\n\
                    • Set ROSTER_ROOT environment variable to your list path",
                    path.display()
                )
            }
            RosterError::InvalidId(raw) => {
                format!(
                    "Invalid id: '{}'\n\n\
                    IDs are whole numbers as shown by 'roster list'.\n\n\
                    Examples:\n\
                    roster delete 2\n\
                    roster update 2 Alice",
                    raw
                )
            }
            RosterError::Config(msg) => {
                if msg.contains("Invalid id strategy") {
                    format!(
                        "{}\n\n\
                        Valid strategies: length, after-max\n\
                        Example: roster config id_strategy after-max",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_roster_directory_suggestion() {
        let err = RosterError::NotRosterDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("roster init"));
        assert!(msg.contains("ROSTER_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_id_examples() {
        let err = RosterError::InvalidId("abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("roster delete 2"));
    }

    #[test]
    fn test_config_invalid_strategy_suggestions() {
        let err = RosterError::Config("Invalid id strategy: xyz".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("length, after-max"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(RosterError::NotRosterDirectory(PathBuf::new()).exit_code(), 2);
        assert_eq!(RosterError::InvalidId("x".to_string()).exit_code(), 3);
        assert_eq!(RosterError::Storage("boom".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = RosterError::Storage("disk full".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Storage error: disk full");
    }
}
