// third-party imports
use memchr::{memchr, memrchr};

// local imports
use crate::{
    error::{Error, Result},
    normalize::{normalize, required_len},
    segment::{find_tail, matches_fixed},
    utf8::{head_len, tail_start},
};

// ---

/// Tests whether the whole `candidate` matches the wildcard `pattern`.
///
/// - `*` matches zero or more characters
/// - `?` matches exactly one character
/// - any other character matches itself, case-sensitively
///
/// There is no escape syntax, so a literal `*` or `?` cannot be matched on its own.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if either `candidate` or `pattern` is empty.
///
/// # Examples
///
/// ```
/// use jsl_glob::matches;
///
/// assert!(matches("COMPLETED", "COMP*").unwrap());
/// assert!(matches("abc", "a?c").unwrap());
/// assert!(!matches("abc", "a?d").unwrap());
/// assert!(matches("abcXYZdefUVWghi", "abc*def*ghi").unwrap());
/// assert!(matches("", "*").is_err());
/// ```
pub fn matches(candidate: &str, pattern: &str) -> Result<bool> {
    if candidate.is_empty() || pattern.is_empty() {
        return Err(Error::InvalidArgument {
            pattern: pattern.to_owned(),
            candidate: candidate.to_owned(),
        });
    }

    log::trace!("matching {candidate:?} against {pattern:?}");

    let pattern = normalize(pattern);
    if candidate.chars().count() < required_len(&pattern) {
        return Ok(false);
    }

    match_normalized(candidate, &pattern)
}

/// Matches `text` against a pattern that has no adjacent asterisks.
fn match_normalized(mut text: &str, pattern: &str) -> Result<bool> {
    let bytes = pattern.as_bytes();
    let Some(first) = memchr(b'*', bytes) else {
        return matches_fixed(text, pattern);
    };
    let last = memrchr(b'*', bytes).unwrap_or(first);

    let prefix = &pattern[..first];
    if !prefix.is_empty() {
        let Some(n) = head_len(text, prefix.chars().count()) else {
            return Ok(false);
        };
        if !matches_fixed(&text[..n], prefix)? {
            return Ok(false);
        }
        text = &text[n..];
    }

    let suffix = &pattern[last + 1..];
    if !suffix.is_empty() {
        let Some(n) = tail_start(text, suffix.chars().count()) else {
            return Ok(false);
        };
        if !matches_fixed(&text[n..], suffix)? {
            return Ok(false);
        }
        text = &text[..n];
    }

    if first == last {
        return Ok(true);
    }

    let second = memchr(b'*', &bytes[first + 1..]).map_or(last, |i| first + 1 + i);
    let run = &pattern[first + 1..second];

    let Some(tail) = find_tail(text, run)? else {
        return Ok(false);
    };
    if second == last {
        return Ok(true);
    }

    // `nested` starts with `*` and the tail after any later occurrence is a suffix
    // of this one, so the leftmost occurrence decides the result
    let nested = &pattern[second..=last];
    match_normalized(tail, nested)
}

// ---

/// Decides whether a candidate string matches a wildcard pattern.
pub trait PatternMatcher {
    /// Tests whether the whole `candidate` matches `pattern`.
    fn matches(&self, candidate: &str, pattern: &str) -> Result<bool>;
}

/// Stateless [`PatternMatcher`] implementing `*` and `?` wildcards.
///
/// # Examples
///
/// ```
/// use jsl_glob::{GlobMatcher, PatternMatcher};
///
/// let matcher = GlobMatcher::new();
/// assert!(matcher.matches("step-1", "step-?").unwrap());
/// assert!(!matcher.matches("step-10", "step-?").unwrap());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlobMatcher;

impl GlobMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl PatternMatcher for GlobMatcher {
    #[inline]
    fn matches(&self, candidate: &str, pattern: &str) -> Result<bool> {
        matches(candidate, pattern)
    }
}

impl<T: PatternMatcher + ?Sized> PatternMatcher for &T {
    #[inline]
    fn matches(&self, candidate: &str, pattern: &str) -> Result<bool> {
        (**self).matches(candidate, pattern)
    }
}
