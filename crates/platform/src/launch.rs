//! Launching external resources.
//!
//! Both operations are fire-and-forget process spawns: the child is not
//! waited on, and spawn failures surface unchanged as I/O errors.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::PlatformError;

/// Open `url` in the default browser
#[cfg(target_os = "windows")]
pub fn open_url(url: &str) -> Result<(), PlatformError> {
  spawn(Command::new("cmd").args(["/C", "start", "", url]))
}

/// Open `url` in the default browser
#[cfg(target_os = "macos")]
pub fn open_url(url: &str) -> Result<(), PlatformError> {
  spawn(Command::new("open").arg(url))
}

/// Open `url` in the default browser
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn open_url(url: &str) -> Result<(), PlatformError> {
  spawn(Command::new("xdg-open").arg(url))
}

/// Reveal `path` in the OS file manager
#[cfg(target_os = "windows")]
pub fn reveal_in_file_manager(path: &Path) -> Result<(), PlatformError> {
  spawn(Command::new("explorer.exe").arg(path))
}

/// Reveal `path` in the OS file manager
#[cfg(target_os = "macos")]
pub fn reveal_in_file_manager(path: &Path) -> Result<(), PlatformError> {
  spawn(Command::new("open").arg(path))
}

/// Reveal `path` in the OS file manager
///
/// No file manager is assumed on other platforms; the call is a no-op.
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn reveal_in_file_manager(_path: &Path) -> Result<(), PlatformError> {
  Ok(())
}

fn spawn(command: &mut Command) -> Result<(), PlatformError> {
  let program = command.get_program().to_string_lossy().into_owned();
  match command.spawn() {
    Ok(_) => {
      debug!(%program, "spawned");
      Ok(())
    }
    Err(source) => Err(PlatformError::Launch { program, source }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  #[cfg(not(any(target_os = "windows", target_os = "macos")))]
  fn reveal_is_a_noop_without_a_file_manager() {
    reveal_in_file_manager(Path::new("/tmp")).unwrap();
  }

  #[test]
  fn spawn_failure_names_the_program() {
    let err = spawn(&mut Command::new("stowage-no-such-binary")).unwrap_err();
    match err {
      PlatformError::Launch { program, .. } => {
        assert_eq!(program, "stowage-no-such-binary");
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }
}
