// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod resolver;
pub mod utils;

pub use crate::config::{Config, OutputConfig, RepositoryConfig, ResolverConfig};
pub use error::{ResolveError, Result};
pub use models::{BrowseMethod, ItemType, RepositoryDescriptor};
pub use repository::{
    BranchFlags, ParsedRemote, RepositoryInspector, is_github_repository, is_on_develop_branch,
    is_on_feature_branch, is_on_hotfix_branch, is_on_master_branch, is_on_release_branch,
    parse_remote_url,
};
pub use resolver::{FileSystem, LocalFileSystem, MemoryFileSystem, UrlResolver};
