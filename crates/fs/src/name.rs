//! Filename validation and sanitization.

/// Characters illegal in filenames on the file systems we target.
///
/// Besides the named punctuation the set covers backspace, NUL, TAB and
/// the control codes 0x10 through 0x19. U+0013 is deliberately absent
/// from that range; do not complete it.
pub const INVALID_FILENAME_CHARS: &[char] = &[
  '\\', '/', ':', '"', '<', '>', '|', '\u{0008}', '\u{0000}', '\t', '\u{0010}', '\u{0011}',
  '\u{0012}', '\u{0014}', '\u{0015}', '\u{0016}', '\u{0017}', '\u{0018}', '\u{0019}',
];

/// Returns the blacklisted characters present in `name`.
///
/// Characters come back in their original order with duplicates
/// preserved, so `"a:b:c"` yields `"::"`. An empty result means the name
/// is valid.
pub fn invalid_chars(name: &str) -> String {
  name
    .chars()
    .filter(|c| INVALID_FILENAME_CHARS.contains(c))
    .collect()
}

/// Returns `name` with every blacklisted character removed.
///
/// The order of the remaining characters is preserved; an all-blacklisted
/// input yields an empty string.
pub fn sanitize(name: &str) -> String {
  name
    .chars()
    .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
    .collect()
}

/// The extension of `name`, from the last `.` inclusive.
///
/// Empty when the name contains no dot.
pub fn extension(name: &str) -> &str {
  match name.rfind('.') {
    Some(i) => &name[i..],
    None => "",
  }
}

/// Whether `name` ends in `ext` (dot included), ignoring ASCII case.
pub fn has_extension(name: &str, ext: &str) -> bool {
  extension(name).eq_ignore_ascii_case(ext)
}

/// `name` with its extension cut off.
pub fn file_stem(name: &str) -> &str {
  match name.rfind('.') {
    Some(i) => &name[..i],
    None => name,
  }
}
