// file: src/models/item_type.rs
// description: item type hints and forge browse methods
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller hint about what a repository path points at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Decide by probing the working copy.
    #[default]
    Automatic,
    File,
    Directory,
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "automatic" | "auto" => Ok(Self::Automatic),
            "file" => Ok(Self::File),
            "directory" | "dir" => Ok(Self::Directory),
            other => Err(format!(
                "unknown item type '{}' (expected automatic, file or directory)",
                other
            )),
        }
    }
}

/// URL segment GitHub uses to show a directory (`tree`) or a file (`blob`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseMethod {
    Tree,
    Blob,
}

impl BrowseMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Blob => "blob",
        }
    }
}

impl fmt::Display for BrowseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
