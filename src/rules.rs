//! Rule sets describing the naming conventions of a filesystem flavor
//!
//! A [`RuleSet`] is an immutable configuration value. The two canonical
//! flavors ([`RuleSet::ntfs`] and [`RuleSet::unix`]) are provided as statics;
//! custom flavors are built with [`RuleSet::new`] or derived with
//! [`RuleSet::with_layout`].

use crate::error::RuleError;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Segment names NTFS refuses outright, compared case-sensitively.
const NTFS_RESERVED_NAMES: [&str; 22] = [
    "AUX", "CLOCK$", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9", "NUL", "PRN",
];

static NTFS_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(
        r"\\+",
        r"^[A-Za-z]:$",
        r#"["*:<>?/|]|^\.|\.$|^ | $"#,
        NTFS_RESERVED_NAMES,
        32,
        255,
    )
    .expect("built-in NTFS rule patterns are valid")
});

static UNIX_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(r"/+", r"^file:", r"[<>|:&]", Vec::<&str>::new(), 1, 255)
        .expect("built-in UNIX rule patterns are valid")
});

/// Naming rules for one filesystem flavor.
///
/// Patterns are never mutated after construction. The drive-prefix pattern is
/// compiled case-insensitively and should anchor with `^` so it only matches
/// from the start of a segment.
#[derive(Debug, Clone)]
pub struct RuleSet {
    separator: Regex,
    drive_prefix: Regex,
    invalid_char: Regex,
    reserved_names: Vec<String>,
    min_char_code: u32,
    max_length: usize,
}

impl RuleSet {
    /// Build a custom rule set from pattern strings.
    ///
    /// `separator` should match a run of one-or-more separators (e.g. `\\+`),
    /// `drive_prefix` a leading volume or scheme token, and `invalid_char`
    /// any character or leading/trailing condition disallowed inside a
    /// segment. Reserved names are matched against whole segments,
    /// case-sensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::Pattern`] if any of the three patterns fails to
    /// compile.
    ///
    /// # Examples
    /// ```
    /// use path_rules::RuleSet;
    ///
    /// let fat_like = RuleSet::new(r"\\+", r"^[A-Za-z]:$", r#"["*:<>?/|]"#, ["AUX"], 32, 64)?;
    /// assert_eq!(fat_like.max_length(), 64);
    /// # Ok::<(), path_rules::RuleError>(())
    /// ```
    pub fn new<I, S>(
        separator: &str,
        drive_prefix: &str,
        invalid_char: &str,
        reserved_names: I,
        min_char_code: u32,
        max_length: usize,
    ) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(RuleSet {
            separator: Regex::new(separator)?,
            drive_prefix: RegexBuilder::new(drive_prefix)
                .case_insensitive(true)
                .build()?,
            invalid_char: Regex::new(invalid_char)?,
            reserved_names: reserved_names.into_iter().map(Into::into).collect(),
            min_char_code,
            max_length,
        })
    }

    /// The canonical NTFS-like flavor.
    ///
    /// Backslash separators, single-letter drive prefix (`C:`), the usual
    /// `"*:<>?/|` character set plus leading/trailing dots and spaces, the
    /// classic device-name reserved list, code points below 32 rejected,
    /// 255-byte limit.
    pub fn ntfs() -> &'static RuleSet {
        &NTFS_RULES
    }

    /// The canonical UNIX-like flavor.
    ///
    /// Forward-slash separators, a `file:` scheme prefix, a small
    /// `<>|:&` character set, no reserved names, only NUL rejected by code
    /// point, 255-byte limit.
    pub fn unix() -> &'static RuleSet {
        &UNIX_RULES
    }

    /// Clone of `self` with the separator and drive-prefix patterns taken
    /// from `layout`.
    ///
    /// This is the cross-flavor use case: keep one flavor's content rules
    /// (characters, reserved names, code-point floor, length) while reading
    /// the string with another flavor's structure.
    ///
    /// # Examples
    /// ```
    /// use path_rules::{validate, RuleSet, Violation};
    ///
    /// // NTFS content rules applied to a slash-separated path.
    /// let rules = RuleSet::ntfs().with_layout(RuleSet::unix());
    /// assert_eq!(
    ///     validate("file:/docs /note.txt", &rules),
    ///     Err(Violation::InvalidChar { offset: 10 })
    /// );
    /// ```
    pub fn with_layout(&self, layout: &RuleSet) -> RuleSet {
        RuleSet {
            separator: layout.separator.clone(),
            drive_prefix: layout.drive_prefix.clone(),
            ..self.clone()
        }
    }

    /// Pattern matching a run of path separators.
    pub fn separator(&self) -> &Regex {
        &self.separator
    }

    /// Pattern matching a leading volume or scheme token (case-insensitive).
    pub fn drive_prefix(&self) -> &Regex {
        &self.drive_prefix
    }

    /// Pattern matching disallowed content within a segment.
    pub fn invalid_char(&self) -> &Regex {
        &self.invalid_char
    }

    /// Segment names forbidden outright (exact, case-sensitive).
    pub fn reserved_names(&self) -> &[String] {
        &self.reserved_names
    }

    /// Lowest allowed code point anywhere in the string.
    pub fn min_char_code(&self) -> u32 {
        self.min_char_code
    }

    /// Maximum allowed total length in bytes.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}
