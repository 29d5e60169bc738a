//! Host identity gathered once at startup.

use serde::Serialize;
use sysinfo::System;

use crate::arch::Arch;
use crate::os::Os;

/// Read-only snapshot of the host's identity.
///
/// Computed once via [`HostInfo::detect`] and passed explicitly to
/// whatever needs platform identity, instead of re-querying process
/// globals ad hoc. Fields are `None`/"unknown" on platforms the probes
/// cannot classify.
#[derive(Debug, Clone, Serialize)]
pub struct HostInfo {
  pub os: Option<Os>,
  pub arch: Option<Arch>,
  /// Long OS name, e.g. "Windows" or "Ubuntu".
  pub os_name: String,
  /// OS version string, e.g. "24.04".
  pub os_version: String,
  /// Line separator convention on this host.
  pub line_break: &'static str,
}

impl HostInfo {
  /// Gather the current host's identity.
  pub fn detect() -> Self {
    Self {
      os: Os::current(),
      arch: Arch::current(),
      os_name: System::name().unwrap_or_else(|| "unknown".to_string()),
      os_version: System::os_version().unwrap_or_else(|| "unknown".to_string()),
      line_break: if cfg!(windows) { "\r\n" } else { "\n" },
    }
  }

  /// Check if running on macOS
  pub fn is_macos(&self) -> bool {
    self.os.map(|os| os.is_macos()).unwrap_or(false)
  }

  /// Check if running on Windows
  pub fn is_windows(&self) -> bool {
    self.os.map(|os| os.is_windows()).unwrap_or(false)
  }
}
