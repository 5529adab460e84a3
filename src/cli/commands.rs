//! CLI command definitions

use crate::error::{Result, RosterError};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Keep a persisted list of first names", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new roster
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Id strategy for new entries (length, after-max)
        #[arg(long, default_value = "length")]
        id_strategy: String,
    },

    /// Add an entry
    Add {
        /// First name (may be empty)
        name: String,
    },

    /// List all entries
    List,

    /// Delete the entry with the given ID
    Delete {
        /// Entry ID
        id: String,
    },

    /// Replace the first name of the entry with the given ID
    Update {
        /// Entry ID
        id: String,

        /// New first name
        value: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Start an interactive session
    Shell,
}

/// Parse an entry ID argument
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| RosterError::InvalidId(raw.to_string()))
}
