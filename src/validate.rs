//! Ordered rule checks for path strings
//!
//! The validator reports the first violation it finds and nothing else; a
//! badly malformed string needs several validate/repair rounds (see
//! [`correct`](crate::correct)) to come fully clean.

use crate::error::Violation;
use crate::rules::RuleSet;
use regex::Regex;

/// Check a path string against a rule set.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. Zero-length input → [`Violation::Empty`].
/// 2. Byte length over [`RuleSet::max_length`] → [`Violation::TooLong`].
/// 3. Per-segment scan: the string is split on the separator pattern and each
///    segment checked at its exact byte offset. Segments matching the drive
///    prefix are exempt from content checks. A segment exactly equal to a
///    reserved name → [`Violation::ReservedName`]; a match of the
///    invalid-character pattern → [`Violation::InvalidChar`] at the absolute
///    offset of the match start.
/// 4. Codepoint floor: any character below [`RuleSet::min_char_code`]
///    anywhere in the string → [`Violation::InvalidChar`] at its offset.
///
/// # Examples
/// ```
/// use path_rules::{validate, RuleSet, Violation};
///
/// assert!(validate("C:\\docs\\readme.txt", RuleSet::ntfs()).is_ok());
/// assert_eq!(validate("", RuleSet::ntfs()), Err(Violation::Empty));
/// assert_eq!(
///     validate("C:\\AUX\\song.mp3", RuleSet::ntfs()),
///     Err(Violation::ReservedName { name: "AUX".into() })
/// );
/// ```
pub fn validate(path: &str, rules: &RuleSet) -> Result<(), Violation> {
    if path.is_empty() {
        return Err(Violation::Empty);
    }
    if path.len() > rules.max_length() {
        return Err(Violation::TooLong {
            limit: rules.max_length(),
        });
    }

    for (start, segment) in split_segments(path, rules.separator()) {
        if rules.drive_prefix().is_match(segment) {
            continue;
        }
        if rules.reserved_names().iter().any(|name| name == segment) {
            return Err(Violation::ReservedName {
                name: segment.to_string(),
            });
        }
        if let Some(found) = rules.invalid_char().find(segment) {
            return Err(Violation::InvalidChar {
                offset: start + found.start(),
            });
        }
    }

    for (offset, ch) in path.char_indices() {
        if (ch as u32) < rules.min_char_code() {
            return Err(Violation::InvalidChar { offset });
        }
    }

    Ok(())
}

/// Check a path string against the default NTFS-like rules.
///
/// # Examples
/// ```
/// use path_rules::validate_ntfs;
///
/// assert!(validate_ntfs("C:\\Users\\demo\\notes.txt").is_ok());
/// assert!(validate_ntfs("C:\\bad|name").is_err());
/// ```
pub fn validate_ntfs(path: &str) -> Result<(), Violation> {
    validate(path, RuleSet::ntfs())
}

/// Check a path string against the default UNIX-like rules.
///
/// # Examples
/// ```
/// use path_rules::validate_unix;
///
/// assert!(validate_unix("/usr/local/bin").is_ok());
/// assert!(validate_unix("a:b").is_err());
/// ```
pub fn validate_unix(path: &str) -> Result<(), Violation> {
    validate(path, RuleSet::unix())
}

/// Split a path on the separator pattern, pairing each segment with its byte
/// offset in the original string.
fn split_segments<'a>(path: &'a str, separator: &Regex) -> Vec<(usize, &'a str)> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for sep in separator.find_iter(path) {
        segments.push((cursor, &path[cursor..sep.start()]));
        cursor = sep.end();
    }
    segments.push((cursor, &path[cursor..]));
    segments
}
