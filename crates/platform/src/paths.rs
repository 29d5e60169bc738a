//! App-data and home path resolution.
//!
//! Resolution is environment-variable driven and holds no global state;
//! every call re-reads the environment.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::PlatformError;

fn env_path(name: &'static str) -> Result<PathBuf, PlatformError> {
  std::env::var_os(name)
    .map(PathBuf::from)
    .ok_or(PlatformError::MissingEnv { name })
}

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> Result<PathBuf, PlatformError> {
  env_path("USERPROFILE")
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> Result<PathBuf, PlatformError> {
  env_path("HOME")
}

/// Returns the per-user data directory for `app_name`, creating it if it
/// does not exist yet
#[cfg(windows)]
pub fn app_data_dir(app_name: &str) -> Result<PathBuf, PlatformError> {
  ensure_dir(env_path("APPDATA")?.join(app_name))
}

/// Returns the per-user data directory for `app_name`, creating it if it
/// does not exist yet
#[cfg(target_os = "macos")]
pub fn app_data_dir(app_name: &str) -> Result<PathBuf, PlatformError> {
  let dir = home_dir()?
    .join("Library")
    .join("Application Support")
    .join(app_name);
  ensure_dir(dir)
}

/// Returns the per-user data directory for `app_name`, creating it if it
/// does not exist yet
#[cfg(not(any(windows, target_os = "macos")))]
pub fn app_data_dir(app_name: &str) -> Result<PathBuf, PlatformError> {
  let data_home = match std::env::var_os("XDG_DATA_HOME") {
    Some(path) => PathBuf::from(path),
    None => home_dir()?.join(".local").join("share"),
  };
  ensure_dir(data_home.join(app_name))
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf, PlatformError> {
  if !dir.exists() {
    fs::create_dir_all(&dir)?;
    debug!(path = %dir.display(), "created app data directory");
  }
  Ok(dir)
}
