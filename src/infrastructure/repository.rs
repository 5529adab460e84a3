//! File system repository

use crate::error::{Result, RosterError};
use crate::infrastructure::{Config, FileStore, KeyValueStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Marker directory that identifies a roster root
pub const ROSTER_DIR: &str = ".roster";

/// Directory (inside `ROSTER_DIR`) holding the key-value files
pub const STORE_DIR: &str = "store";

/// Abstract repository for roster state
pub trait RosterRepository {
    /// Backend the list is persisted into
    type Store: KeyValueStore;

    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .roster/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .roster/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .roster directory exists
    fn is_initialized(&self) -> bool;

    /// Create .roster directory structure
    fn initialize(&self) -> Result<()>;

    /// Open the key-value store the list lives in
    fn open_store(&self) -> Self::Store;
}

/// File system implementation of RosterRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover roster root by walking up from current directory
    /// First checks ROSTER_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("ROSTER_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_roster_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(RosterError::Config(format!(
                    "ROSTER_ROOT is set to '{}' but no .roster directory found. \
                    Run 'roster init' in that directory or unset ROSTER_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover roster root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_roster_dir(&current) {
                tracing::debug!(root = %current.display(), "Roster root found");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(RosterError::NotRosterDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Directory holding the key-value files
    pub fn store_dir(&self) -> PathBuf {
        self.root.join(ROSTER_DIR).join(STORE_DIR)
    }

    fn has_roster_dir(path: &Path) -> bool {
        path.join(ROSTER_DIR).is_dir()
    }
}

impl RosterRepository for FileSystemRepository {
    type Store = FileStore;

    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_roster_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let roster_dir = self.root.join(ROSTER_DIR);

        if roster_dir.exists() {
            return Err(RosterError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&roster_dir)?;
        fs::create_dir(self.store_dir())?;
        Ok(())
    }

    fn open_store(&self) -> FileStore {
        FileStore::new(self.store_dir())
    }
}
