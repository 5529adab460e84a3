//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod file_store;
pub mod kv;
pub mod logging;
pub mod repository;

pub use config::Config;
pub use file_store::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use repository::{FileSystemRepository, RosterRepository};
