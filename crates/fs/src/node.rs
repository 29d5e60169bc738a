//! Read-through handles over the live file system.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A handle to a single path on a file system.
///
/// Every accessor re-queries the underlying store at call time; nothing is
/// cached between calls, so results always reflect current on-disk state.
/// A node has no identity beyond its path.
pub trait FileNode: Sized {
  /// The path this node refers to.
  fn path(&self) -> &Path;

  /// Whether the path currently exists.
  fn exists(&self) -> bool;

  /// Whether the path is a directory.
  fn is_dir(&self) -> bool;

  /// Byte length of a regular file.
  ///
  /// Returns 0 when the length cannot be determined (missing path,
  /// directory, unreadable metadata).
  fn len(&self) -> u64;

  /// Direct children of a directory, in enumeration order.
  ///
  /// Empty for regular files, missing paths and unreadable directories.
  fn children(&self) -> Vec<Self>;

  /// Remove this single entry: a file, or a directory that is already
  /// empty. Recursive removal lives in [`crate::walk::delete`].
  fn remove(&self) -> io::Result<()>;
}

/// [`FileNode`] backed by `std::fs`.
#[derive(Debug, Clone)]
pub struct DiskNode {
  path: PathBuf,
}

impl DiskNode {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

impl FileNode for DiskNode {
  fn path(&self) -> &Path {
    &self.path
  }

  fn exists(&self) -> bool {
    self.path.exists()
  }

  fn is_dir(&self) -> bool {
    self.path.is_dir()
  }

  fn len(&self) -> u64 {
    // Directory metadata reports the inode's own length (4096 on ext4),
    // not content, so only regular files count.
    fs::metadata(&self.path)
      .ok()
      .filter(|meta| meta.is_file())
      .map(|meta| meta.len())
      .unwrap_or(0)
  }

  fn children(&self) -> Vec<Self> {
    let entries = match fs::read_dir(&self.path) {
      Ok(entries) => entries,
      Err(_) => return Vec::new(),
    };

    entries
      .filter_map(|entry| entry.ok())
      .map(|entry| Self::new(entry.path()))
      .collect()
  }

  fn remove(&self) -> io::Result<()> {
    if self.path.is_dir() {
      fs::remove_dir(&self.path)
    } else {
      fs::remove_file(&self.path)
    }
  }
}
