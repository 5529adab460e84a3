//! Id assignment for newly added records

use crate::domain::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the next record id is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// Current sequence length plus one. Deleting an earlier record makes
    /// the next add reuse an id that is still live.
    #[default]
    Length,
    /// Largest live id plus one
    AfterMax,
}

impl IdStrategy {
    /// Compute the id for a record appended to `records`
    pub fn next_id(&self, records: &[Record]) -> i64 {
        match self {
            IdStrategy::Length => records.len() as i64 + 1,
            IdStrategy::AfterMax => {
                let max = records.iter().map(|r| r.id).max().unwrap_or(0).max(0);
                max.checked_add(1).unwrap_or_else(|| {
                    let id = lowest_free_id(records);
                    tracing::warn!(max, id, "Largest id is at the limit, reusing a free id");
                    id
                })
            }
        }
    }
}

/// Smallest positive id not held by any record. At most `len + 1`.
fn lowest_free_id(records: &[Record]) -> i64 {
    (1..)
        .find(|id| !records.iter().any(|r| r.id == *id))
        .unwrap_or(1)
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Length => write!(f, "length"),
            IdStrategy::AfterMax => write!(f, "after-max"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "length" => Ok(IdStrategy::Length),
            "after-max" | "after_max" => Ok(IdStrategy::AfterMax),
            _ => Err(format!(
                "Invalid id strategy: '{}'. Valid strategies are: length, after-max",
                s
            )),
        }
    }
}
