// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod descriptor;
pub mod item_type;

pub use descriptor::RepositoryDescriptor;
pub use item_type::{BrowseMethod, ItemType};
