//! roster - persisted list of first names
//!
//! Keeps an ordered list of `{id, first}` records in memory and mirrors it,
//! after every change, into a key-value store under a single key.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RosterError;
