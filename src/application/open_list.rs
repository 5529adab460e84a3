//! Open list use case

use crate::application::ListStore;
use crate::error::Result;
use crate::infrastructure::{FileStore, FileSystemRepository, RosterRepository};

/// Open the repository's list with its configured id strategy, loading the
/// persisted sequence.
pub fn open_list<R: RosterRepository>(repository: &R) -> Result<ListStore<R::Store>> {
    let config = repository.load_config()?;
    tracing::debug!(root = %repository.root().display(), "Opening list");
    Ok(ListStore::open(repository.open_store(), config.id_strategy))
}

/// Discover the repository from the environment and open its list
pub fn discover_list() -> Result<ListStore<FileStore>> {
    let repository = FileSystemRepository::discover()?;
    open_list(&repository)
}
