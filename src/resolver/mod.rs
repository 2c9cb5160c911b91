// file: src/resolver/mod.rs
// description: path and forge url resolution module exports
// reference: Internal module structure

pub mod filesystem;
pub mod paths;
pub mod urls;

pub use filesystem::{FileSystem, LocalFileSystem, MemoryFileSystem};
pub use paths::{is_descendant, is_rooted, make_relative, normalize, repository_relative_path};
pub use urls::UrlResolver;
