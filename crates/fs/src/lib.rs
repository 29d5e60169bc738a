//! stowage-fs: file-system inspection and housekeeping helpers
//!
//! This crate provides the file-side utilities of stowage:
//! - `node`: read-through handles over the live file system
//! - `walk`: recursive subtree size, emptiness and deletion
//! - `name`: filename validation and sanitization
//! - `format`: human-readable size and date rendering
//! - `text`: whole-file text reads with an explicit encoding

pub mod error;
pub mod format;
pub mod name;
pub mod node;
pub mod text;
pub mod walk;

#[cfg(test)]
pub mod testutil;

pub use error::FsError;
pub use node::{DiskNode, FileNode};
pub use walk::{delete, is_empty, size};
