// file: src/repository/mod.rs
// description: Repository inspection and classification module exports
// reference: Internal module structure

pub mod classifier;
pub mod inspector;
pub mod remote;

pub use classifier::{
    BranchFlags, is_github_repository, is_on_develop_branch, is_on_feature_branch,
    is_on_hotfix_branch, is_on_master_branch, is_on_release_branch,
};
pub use inspector::RepositoryInspector;
pub use remote::{ParsedRemote, parse_remote_url};
