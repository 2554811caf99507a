// std imports
use std::{borrow::Cow, str::FromStr};

// third-party imports
use derive_more::{Deref, Display, Into};
use serde::{Deserialize, Serialize};

// local imports
use crate::{
    error::{Error, Result},
    matcher,
    normalize::{normalize, required_len},
};

// ---

/// A non-empty wildcard pattern, such as the `on` attribute of a job transition.
///
/// The raw text is kept as written; normalization happens on every match.
/// Patterns serialize as plain strings, so they can be loaded from configuration files.
///
/// # Examples
///
/// ```
/// use jsl_glob::Pattern;
///
/// let pattern: Pattern = "COMP*".parse().unwrap();
/// assert!(pattern.matches("COMPLETED").unwrap());
/// assert!(!pattern.matches("FAILED").unwrap());
///
/// assert!("".parse::<Pattern>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, Into, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[deref(forward)]
pub struct Pattern(String);

impl Pattern {
    /// Creates a pattern, failing with [`Error::EmptyPattern`] if `raw` is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(Self(raw))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tests whether the whole `candidate` matches the pattern.
    ///
    /// Returns [`Error::InvalidArgument`] if `candidate` is empty.
    #[inline]
    pub fn matches(&self, candidate: &str) -> Result<bool> {
        matcher::matches(candidate, &self.0)
    }

    /// Returns the pattern with runs of `*` collapsed.
    pub fn normalized(&self) -> Cow<'_, str> {
        normalize(&self.0)
    }

    /// Returns the minimum length of a matching candidate in characters.
    pub fn required_len(&self) -> usize {
        required_len(&self.0)
    }
}

impl AsRef<str> for Pattern {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Pattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}
