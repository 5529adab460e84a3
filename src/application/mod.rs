//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_store;
pub mod manage_config;
pub mod open_list;
pub mod shared;

pub use list_store::{ListStore, LoadStatus, STORAGE_KEY};
pub use manage_config::ConfigService;
pub use open_list::{discover_list, open_list};
pub use shared::SharedListStore;
