// std imports
use std::borrow::Cow;

// third-party imports
use memchr::memmem;

/// Collapses every run of two or more consecutive `*` in `pattern` into a single `*`.
///
/// The result is borrowed when `pattern` has no adjacent asterisks.
/// Normalization never changes which candidates a pattern matches.
///
/// # Examples
///
/// ```
/// use jsl_glob::normalize;
///
/// assert_eq!(normalize("foo**bar"), "foo*bar");
/// assert_eq!(normalize("***"), "*");
/// assert_eq!(normalize("a*b?c"), "a*b?c");
/// ```
pub fn normalize(pattern: &str) -> Cow<'_, str> {
    if memmem::find(pattern.as_bytes(), b"**").is_none() {
        return Cow::Borrowed(pattern);
    }

    let mut result = String::with_capacity(pattern.len());
    let mut asterisk = false;
    for ch in pattern.chars() {
        if ch == '*' {
            if asterisk {
                continue;
            }
            asterisk = true;
        } else {
            asterisk = false;
        }
        result.push(ch);
    }

    Cow::Owned(result)
}

/// Returns the minimum number of characters a candidate needs to match `pattern`.
///
/// Every character other than `*` consumes exactly one candidate character.
#[inline]
pub fn required_len(pattern: &str) -> usize {
    pattern.chars().filter(|&ch| ch != '*').count()
}
