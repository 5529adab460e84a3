//! CLI layer - Command-line interface

pub mod commands;
pub mod edit;
pub mod output;
pub mod shell;

pub use commands::{parse_id, Cli, Commands};
pub use edit::EditSession;
pub use output::{format_record, format_record_list};
pub use shell::Shell;
