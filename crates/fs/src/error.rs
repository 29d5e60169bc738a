//! Error types for stowage-fs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the file-system helpers.
///
/// Every variant that touches the disk names the path that failed, so a
/// caller aborting a partial deletion knows where the walk stopped.
#[derive(Debug, Error)]
pub enum FsError {
  #[error("failed to delete {path}: {source}")]
  Delete { path: PathBuf, source: io::Error },

  #[error("failed to read metadata for {path}: {source}")]
  Metadata { path: PathBuf, source: io::Error },

  #[error("failed to read {path}: {source}")]
  Read { path: PathBuf, source: io::Error },

  #[error("unsupported encoding: {0}")]
  UnknownEncoding(String),
}
