//! Fix-and-retry repair loop
//!
//! Each round validates, applies the one repair the violation calls for, and
//! tries again. One repair per round keeps the loop simple; badly malformed
//! strings just take more rounds.

use crate::error::Violation;
use crate::rules::RuleSet;
use crate::validate::validate;
use log::{debug, warn};

/// Maximum validate/repair rounds before [`correct`] gives up.
pub const MAX_REPAIR_ATTEMPTS: usize = 256;

/// Replacement for an empty input string.
pub const EMPTY_PATH_PLACEHOLDER: &str = "untitled";

/// Literal appended after a reserved name to break the exact match.
const RESERVED_NAME_SUFFIX: &str = "fix";

/// The outcome of a repair run.
///
/// `fully_corrected` distinguishes a string that passed validation from a
/// best-effort result returned because the repair budget ran out. Callers who
/// need certainty can also re-run [`validate`] on `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// The repaired (or best-effort) path string
    pub path: String,
    /// True when the returned path passed validation
    pub fully_corrected: bool,
}

/// Repair a path string until it satisfies `rules` or the budget runs out.
///
/// Never fails. Repairs by violation kind:
/// - [`Violation::Empty`] → replace with [`EMPTY_PATH_PLACEHOLDER`].
/// - [`Violation::TooLong`] → truncate to the limit, backing up to a
///   character boundary.
/// - [`Violation::InvalidChar`] → delete the one character at the reported
///   offset.
/// - [`Violation::ReservedName`] → insert `"fix"` after the first occurrence
///   of the name, so the segment is no longer an exact match.
///
/// Already-valid input comes back unchanged.
///
/// # Examples
/// ```
/// use path_rules::{correct, RuleSet};
///
/// let fixed = correct("C:\\AUX\\file.txt", RuleSet::ntfs());
/// assert_eq!(fixed.path, "C:\\AUXfix\\file.txt");
/// assert!(fixed.fully_corrected);
/// ```
pub fn correct(path: &str, rules: &RuleSet) -> Correction {
    let mut current = path.to_string();

    for attempt in 0..MAX_REPAIR_ATTEMPTS {
        let violation = match validate(&current, rules) {
            Ok(()) => {
                return Correction {
                    path: current,
                    fully_corrected: true,
                }
            }
            Err(violation) => violation,
        };
        debug!("repair attempt {attempt}: {violation} in {current:?}");

        match violation {
            Violation::Empty => {
                current = EMPTY_PATH_PLACEHOLDER.to_string();
            }
            Violation::TooLong { limit } => {
                truncate_to_char_boundary(&mut current, limit);
            }
            Violation::InvalidChar { offset } => {
                current.remove(offset);
            }
            Violation::ReservedName { name } => {
                if let Some(at) = current.find(&name) {
                    current.insert_str(at + name.len(), RESERVED_NAME_SUFFIX);
                }
            }
        }
    }

    warn!("repair budget of {MAX_REPAIR_ATTEMPTS} attempts exhausted, returning best effort");
    Correction {
        path: current,
        fully_corrected: false,
    }
}

/// Repair a path string against the default NTFS-like rules.
///
/// # Examples
/// ```
/// use path_rules::correct_ntfs;
///
/// assert_eq!(correct_ntfs("a:b<c>d").path, "abcd");
/// ```
pub fn correct_ntfs(path: &str) -> Correction {
    correct(path, RuleSet::ntfs())
}

/// Repair a path string against the default UNIX-like rules.
///
/// # Examples
/// ```
/// use path_rules::correct_unix;
///
/// assert_eq!(correct_unix("/tmp/a&b").path, "/tmp/ab");
/// ```
pub fn correct_unix(path: &str) -> Correction {
    correct(path, RuleSet::unix())
}

/// Truncate to at most `limit` bytes without splitting a character.
fn truncate_to_char_boundary(path: &mut String, limit: usize) {
    let mut cut = limit.min(path.len());
    while cut > 0 && !path.is_char_boundary(cut) {
        cut -= 1;
    }
    path.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{validate_ntfs, validate_unix};

    #[test]
    fn test_valid_input_is_untouched() {
        let fixed = correct_ntfs("C:\\Users\\demo\\notes.txt");
        assert_eq!(fixed.path, "C:\\Users\\demo\\notes.txt");
        assert!(fixed.fully_corrected);

        let fixed = correct_unix("/usr/local/bin");
        assert_eq!(fixed.path, "/usr/local/bin");
        assert!(fixed.fully_corrected);
    }

    #[test]
    fn test_empty_string_gets_placeholder() {
        let fixed = correct_ntfs("");
        assert_eq!(fixed.path, EMPTY_PATH_PLACEHOLDER);
        assert!(fixed.fully_corrected);
        assert!(validate_ntfs(&fixed.path).is_ok());
    }

    #[test]
    fn test_reserved_name_gets_suffix() {
        let fixed = correct_ntfs("C:\\AUX\\file.txt");
        assert_eq!(fixed.path, "C:\\AUXfix\\file.txt");
        assert!(fixed.fully_corrected);
    }

    #[test]
    fn test_invalid_chars_removed_one_per_round() {
        // ':' then '<' then '>' are removed over three rounds.
        let fixed = correct_ntfs("a:b<c>d");
        assert_eq!(fixed.path, "abcd");
        assert!(fixed.fully_corrected);
    }

    #[test]
    fn test_too_long_is_truncated() {
        let fixed = correct_ntfs(&"a".repeat(300));
        assert_eq!(fixed.path.len(), 255);
        assert!(fixed.fully_corrected);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 'é' is two bytes; a naive cut at the limit would split it.
        let mut path = "a".repeat(254);
        path.push('é');
        let fixed = correct_ntfs(&path);
        assert_eq!(fixed.path, "a".repeat(254));
        assert!(fixed.fully_corrected);
    }

    #[test]
    fn test_control_chars_removed() {
        let fixed = correct_unix("a\0b");
        assert_eq!(fixed.path, "ab");
        assert!(fixed.fully_corrected);

        let fixed = correct_ntfs("dir\\fi\tle");
        assert_eq!(fixed.path, "dir\\file");
        assert!(fixed.fully_corrected);
    }

    #[test]
    fn test_unix_then_ntfs_cleanup() {
        // First make the string valid for UNIX, then re-check the result
        // against NTFS content rules read with the UNIX layout.
        let messy = "file:/Misc /NUL/Ba*dD\"ir/Inv<ali>d.txt";

        let unix_fixed = correct_unix(messy);
        assert_eq!(unix_fixed.path, "file:/Misc /NUL/Ba*dD\"ir/Invalid.txt");
        assert!(unix_fixed.fully_corrected);

        let cross = RuleSet::ntfs().with_layout(RuleSet::unix());
        let both_fixed = correct(&unix_fixed.path, &cross);
        assert_eq!(both_fixed.path, "file:/Misc/NULfix/BadDir/Invalid.txt");
        assert!(both_fixed.fully_corrected);
        assert!(validate_unix(&both_fixed.path).is_ok());
    }

    #[test]
    fn test_budget_exhaustion_is_observable() {
        // A zero-length limit can never be satisfied: the placeholder for the
        // empty string is immediately too long, and truncation empties it
        // again. The loop must stop at the cap and say so.
        let rules =
            RuleSet::new(r"/+", r"^file:", r"[<>]", Vec::<&str>::new(), 1, 0).expect("valid patterns");
        let fixed = correct("x", &rules);
        assert!(!fixed.fully_corrected);
        assert!(validate(&fixed.path, &rules).is_err());
    }
}
