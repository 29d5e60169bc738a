//! Recursive traversal of a file-system subtree.
//!
//! All walks are synchronous and re-read the file system on every call;
//! a tree modified concurrently by another process can yield inconsistent
//! results, which is accepted rather than mitigated.

use tracing::{debug, warn};

use crate::error::FsError;
use crate::node::FileNode;

/// Total size in bytes of a file or directory subtree.
///
/// A regular file contributes its byte length. For a directory, file
/// children always contribute their length; directory children contribute
/// their own subtree size only when `recursive` is true. Shallow mode
/// skips nested directories entirely, their immediate files included.
///
/// A path that does not exist contributes nothing.
pub fn size<N: FileNode>(node: &N, recursive: bool) -> u64 {
  if !node.is_dir() {
    return node.len();
  }

  let mut total = 0;
  for child in node.children() {
    if child.is_dir() {
      if recursive {
        total += size(&child, recursive);
      }
    } else {
      total += child.len();
    }
  }
  total
}

/// Whether a directory holds no bytes of content.
///
/// Size-based, not entry-count-based: a directory containing only empty
/// subdirectories and zero-length files counts as empty. Always false for
/// regular files and missing paths.
pub fn is_empty<N: FileNode>(node: &N) -> bool {
  node.is_dir() && size(node, true) == 0
}

/// Delete a file or directory subtree.
///
/// Deleting an absent path succeeds without touching the file system, so
/// the operation is idempotent. Directory children are removed depth-first
/// in enumeration order; the first child failure aborts the walk
/// immediately, so an `Err` leaves the subtree in an unknown
/// partially-deleted state. The error names the path that failed.
pub fn delete<N: FileNode>(node: &N) -> Result<(), FsError> {
  if !node.exists() {
    return Ok(());
  }

  if node.is_dir() {
    for child in node.children() {
      delete(&child)?;
    }
  }

  match node.remove() {
    Ok(()) => {
      debug!(path = %node.path().display(), "deleted");
      Ok(())
    }
    Err(source) => {
      warn!(path = %node.path().display(), error = %source, "delete failed");
      Err(FsError::Delete {
        path: node.path().to_path_buf(),
        source,
      })
    }
  }
}
