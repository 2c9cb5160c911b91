// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Repository endpoint '{endpoint}' is not a supported forge (expected github.com)")]
    UnsupportedForge { endpoint: String },

    #[error("Malformed repository identifier '{0}' (expected owner/name)")]
    MalformedIdentifier(String),

    #[error("Path {path} is not inside the repository root {}", .root.as_deref().unwrap_or("<none>"))]
    PathNotInRepository { path: String, root: Option<String> },

    #[error("No branch given and the repository has no checked-out branch")]
    NoBranchAvailable,

    #[error("A path is required for this operation")]
    PathRequired,

    #[error("Could not determine whether {path} is a file or a directory")]
    AmbiguousItemType { path: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid remote URL: {0}")]
    InvalidRemoteUrl(String),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
