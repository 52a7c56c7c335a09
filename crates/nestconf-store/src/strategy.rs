//! Merge strategies for conflicting lists

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// How two lists found at the same path are combined during a merge.
///
/// Mappings are always merged recursively and scalars are always replaced;
/// the strategy only decides what happens when both sides hold a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// The incoming list replaces the existing one.
    #[default]
    ReplaceIndexed,

    /// Both lists are concatenated and duplicates removed, keeping the
    /// first occurrence of each element.
    MergeIndexed,
}

impl MergeStrategy {
    /// Check whether lists are concatenated under this strategy.
    pub fn merges_lists(&self) -> bool {
        matches!(self, MergeStrategy::MergeIndexed)
    }
}

impl FromStr for MergeStrategy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "replace_indexed" | "replace-indexed" | "replace" | "0" => {
                Ok(MergeStrategy::ReplaceIndexed)
            }
            "merge_indexed" | "merge-indexed" | "merge" | "1" => Ok(MergeStrategy::MergeIndexed),
            _ => Err(Error::InvalidStrategy {
                strategy: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeStrategy::ReplaceIndexed => write!(f, "replace_indexed"),
            MergeStrategy::MergeIndexed => write!(f, "merge_indexed"),
        }
    }
}
