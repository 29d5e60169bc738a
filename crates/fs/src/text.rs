//! Whole-file text reads with an explicit character encoding.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;

use crate::error::FsError;

/// Encoding label used when the caller does not name one.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Decode `bytes` with the named encoding and join the lines with `"\n"`.
///
/// The label is resolved against the WHATWG encoding registry ("utf-8",
/// "windows-1252", ...). An unknown label is an error and never silently
/// falls back to a default; malformed sequences under a known encoding
/// decode to replacement characters. Joining normalizes CRLF endings and
/// drops a trailing newline.
pub fn decode_joined(bytes: &[u8], label: &str) -> Result<String, FsError> {
  let encoding = Encoding::for_label(label.as_bytes())
    .ok_or_else(|| FsError::UnknownEncoding(label.to_string()))?;

  let (text, _, _) = encoding.decode(bytes);
  Ok(text.lines().collect::<Vec<_>>().join("\n"))
}

/// Read `path` fully and decode it with the named encoding.
pub fn read_joined(path: &Path, label: &str) -> Result<String, FsError> {
  let bytes = fs::read(path).map_err(|source| FsError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  decode_joined(&bytes, label)
}
