//! Initialize roster use case

use crate::domain::IdStrategy;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, RosterRepository};
use std::fs;
use std::path::Path;

/// Initialize a new roster at the specified path.
pub fn init(path: &Path, id_strategy: IdStrategy) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;

    let config = Config::new(id_strategy);
    repo.save_config(&config)?;

    tracing::info!(root = %path.display(), %id_strategy, "Roster initialized");
    println!("Initialized roster at {}", path.display());
    println!("ID strategy: {}", id_strategy);

    Ok(())
}
