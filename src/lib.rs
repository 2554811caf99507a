//! Wildcard matching for batch job transition patterns.
//!
//! Job specification transitions (`next`, `end`, `fail`, `stop`) select the
//! step to run next by matching an exit status against an `on` pattern.
//! This crate decides whether such a candidate string matches a pattern.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one character
//! - Any other character matches itself, case-sensitively
//! - There is no escape syntax
//!
//! Runs of consecutive `*` are equivalent to a single `*` and are collapsed
//! before matching. Both the pattern and the candidate must be non-empty.
//!
//! # Examples
//!
//! ```
//! use jsl_glob::{matches, GlobMatcher, Pattern, PatternMatcher};
//!
//! assert!(matches("COMPLETED", "COMP*").unwrap());
//! assert!(matches("xx", "*x*x*").unwrap());
//! assert!(!matches("abc", "abcd").unwrap());
//!
//! let matcher = GlobMatcher::new();
//! assert!(matcher.matches("FAILED", "*ED").unwrap());
//!
//! let pattern = Pattern::new("step-?").unwrap();
//! assert!(pattern.matches("step-1").unwrap());
//! ```

// public modules
pub mod error;

// private modules
mod matcher;
mod normalize;
mod pattern;
mod segment;
mod utf8;

// public uses
pub use error::{Error, Result};
pub use matcher::{GlobMatcher, PatternMatcher, matches};
pub use normalize::{normalize, required_len};
pub use pattern::Pattern;
