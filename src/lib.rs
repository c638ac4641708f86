//! # path-rules
//!
//! Flavor-aware validation and auto-correction of directory path strings.
//!
//! This crate checks path strings against the naming rules of a target
//! filesystem flavor (NTFS-like or UNIX-like) and mechanically repairs them
//! until they conform. It is a pure string-transformation library: nothing
//! here touches an actual filesystem, and a "fixed" string is only guaranteed
//! to satisfy the rule set, not to be meaningful.
//!
//! ## Features
//!
//! - **Ordered validation**: empty/length checks, a per-segment scan for
//!   reserved names and invalid characters, and a code-point floor sweep;
//!   the first violation wins and carries its exact location
//! - **Auto-correction**: a bounded fix-and-retry loop that applies one
//!   repair per round and reports whether it fully converged
//! - **Two built-in flavors**: NTFS-like and UNIX-like rule sets, plus
//!   custom and cross-flavor rule sets for checking one flavor's string
//!   layout against another's content rules
//! - **No filesystem access**: every call is a pure function of the string
//!   and the rule set
//!
//! ## Examples
//!
//! ### Validation
//!
//! ```rust
//! use path_rules::{validate_ntfs, Violation};
//!
//! assert!(validate_ntfs("C:\\Music\\song.mp3").is_ok());
//! assert_eq!(
//!     validate_ntfs("C:\\AUX\\song.mp3"),
//!     Err(Violation::ReservedName { name: "AUX".into() })
//! );
//! ```
//!
//! ### Auto-correction
//!
//! ```rust
//! use path_rules::correct_ntfs;
//!
//! let fixed = correct_ntfs("C:\\AUX\\song.mp3");
//! assert_eq!(fixed.path, "C:\\AUXfix\\song.mp3");
//! assert!(fixed.fully_corrected);
//! ```
//!
//! ### Cross-flavor checking
//!
//! ```rust
//! use path_rules::{correct, RuleSet};
//!
//! // A slash-separated path destined for an NTFS volume: read it with the
//! // UNIX layout but enforce NTFS content rules.
//! let rules = RuleSet::ntfs().with_layout(RuleSet::unix());
//! let fixed = correct("file:/B-sides: Vol.1/NUL/mix.mp3", &rules);
//! assert_eq!(fixed.path, "file:/B-sides Vol.1/NULfix/mix.mp3");
//! ```

mod correct;
mod error;
mod rules;
mod validate;

// Re-export main public API
pub use correct::{
    correct, correct_ntfs, correct_unix, Correction, EMPTY_PATH_PLACEHOLDER, MAX_REPAIR_ATTEMPTS,
};
pub use error::{RuleError, Violation};
pub use rules::RuleSet;
pub use validate::{validate, validate_ntfs, validate_unix};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
