//! Test utilities for stowage-fs.
//!
//! An in-memory file tree implementing [`FileNode`], so walker behavior
//! can be exercised without touching a real disk.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::node::FileNode;

#[derive(Debug, Clone)]
enum Entry {
  File { len: u64 },
  Dir { children: Vec<String> },
}

/// Builder and backing store for an in-memory file tree.
///
/// Children are kept in insertion order, which the short-circuit deletion
/// tests rely on.
#[derive(Debug, Default)]
pub struct MemTree {
  entries: RefCell<HashMap<PathBuf, Entry>>,
  poisoned: RefCell<HashSet<PathBuf>>,
}

impl MemTree {
  pub fn new() -> Rc<Self> {
    Rc::new(Self::default())
  }

  /// Handle to `path`, whether or not anything exists there.
  pub fn node(self: &Rc<Self>, path: impl Into<PathBuf>) -> MemNode {
    MemNode {
      tree: Rc::clone(self),
      path: path.into(),
    }
  }

  /// Insert a directory, creating missing ancestors as directories.
  pub fn add_dir(self: &Rc<Self>, path: impl Into<PathBuf>) -> MemNode {
    let path = path.into();
    self.insert(path.clone(), Entry::Dir { children: Vec::new() });
    self.node(path)
  }

  /// Insert a regular file of `len` bytes, creating missing ancestors.
  pub fn add_file(self: &Rc<Self>, path: impl Into<PathBuf>, len: u64) -> MemNode {
    let path = path.into();
    self.insert(path.clone(), Entry::File { len });
    self.node(path)
  }

  /// Make `remove` fail for `path` with a permission error.
  pub fn poison(&self, path: impl Into<PathBuf>) {
    self.poisoned.borrow_mut().insert(path.into());
  }

  fn insert(self: &Rc<Self>, path: PathBuf, entry: Entry) {
    if let Some(parent) = path.parent().map(Path::to_path_buf) {
      let parent_known = self.entries.borrow().contains_key(&parent);
      if !parent_known && parent.parent().is_some() {
        self.insert(parent.clone(), Entry::Dir { children: Vec::new() });
      }
      if let Some(Entry::Dir { children }) = self.entries.borrow_mut().get_mut(&parent) {
        let name = path
          .file_name()
          .map(|n| n.to_string_lossy().into_owned())
          .unwrap_or_default();
        if !children.contains(&name) {
          children.push(name);
        }
      }
    }
    self.entries.borrow_mut().insert(path, entry);
  }
}

/// [`FileNode`] handle into a [`MemTree`].
#[derive(Debug, Clone)]
pub struct MemNode {
  tree: Rc<MemTree>,
  path: PathBuf,
}

impl FileNode for MemNode {
  fn path(&self) -> &Path {
    &self.path
  }

  fn exists(&self) -> bool {
    self.tree.entries.borrow().contains_key(&self.path)
  }

  fn is_dir(&self) -> bool {
    matches!(
      self.tree.entries.borrow().get(&self.path),
      Some(Entry::Dir { .. })
    )
  }

  fn len(&self) -> u64 {
    match self.tree.entries.borrow().get(&self.path) {
      Some(Entry::File { len }) => *len,
      _ => 0,
    }
  }

  fn children(&self) -> Vec<Self> {
    let names = match self.tree.entries.borrow().get(&self.path) {
      Some(Entry::Dir { children }) => children.clone(),
      _ => return Vec::new(),
    };
    names
      .into_iter()
      .map(|name| self.tree.node(self.path.join(name)))
      .collect()
  }

  fn remove(&self) -> io::Result<()> {
    if self.tree.poisoned.borrow().contains(&self.path) {
      return Err(io::Error::new(
        io::ErrorKind::PermissionDenied,
        "poisoned for testing",
      ));
    }

    let mut entries = self.tree.entries.borrow_mut();
    match entries.get(&self.path) {
      None => Err(io::Error::new(io::ErrorKind::NotFound, "no such entry")),
      Some(Entry::Dir { children }) if !children.is_empty() => {
        Err(io::Error::other("directory not empty"))
      }
      Some(_) => {
        entries.remove(&self.path);
        if let Some(parent) = self.path.parent() {
          if let Some(Entry::Dir { children }) = entries.get_mut(parent) {
            let name = self
              .path
              .file_name()
              .map(|n| n.to_string_lossy().into_owned())
              .unwrap_or_default();
            children.retain(|child| child != &name);
          }
        }
        Ok(())
      }
    }
  }
}
