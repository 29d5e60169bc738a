//! Error types for stowage-platform.

use std::io;

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
  #[error("environment variable {name} is not set")]
  MissingEnv { name: &'static str },

  #[error("failed to launch {program}: {source}")]
  Launch { program: String, source: io::Error },

  #[error("IO error: {0}")]
  Io(#[from] io::Error),
}
