// third-party imports
use memchr::{memchr, memmem::Finder};

// local imports
use crate::{
    error::{Error, Result},
    utf8::{head_len, utf8_char_width},
};

/// Matches `text` against an asterisk-free `segment`.
///
/// The match succeeds if both have the same number of characters and every
/// segment character is either `?` or equal to the text character at the same position.
///
/// Returns [`Error::InvariantViolation`] if `segment` contains `*`.
pub(crate) fn matches_fixed(text: &str, segment: &str) -> Result<bool> {
    ensure_fixed(segment)?;

    let mut chars = text.chars();
    for expected in segment.chars() {
        match chars.next() {
            Some(actual) if expected == '?' || expected == actual => {}
            _ => return Ok(false),
        }
    }

    Ok(chars.next().is_none())
}

/// Scans `text` left to right for occurrences of the asterisk-free `segment`.
///
/// For each occurrence `f` is called with the remainder of `text` following it.
/// Scanning stops at the first occurrence for which `f` returns `true`.
pub(crate) fn scan<'t, F>(text: &'t str, segment: &str, mut f: F) -> Result<bool>
where
    F: FnMut(&'t str) -> Result<bool>,
{
    ensure_fixed(segment)?;

    // an empty needle would match inside multi-byte characters
    if !segment.is_empty() && memchr(b'?', segment.as_bytes()).is_none() {
        let finder = Finder::new(segment);
        let bytes = text.as_bytes();
        let mut pos = 0;
        while let Some(i) = finder.find(&bytes[pos..]) {
            let start = pos + i;
            if f(&text[start + segment.len()..])? {
                return Ok(true);
            }
            // occurrences may overlap
            pos = start + utf8_char_width(bytes[start]);
        }
        return Ok(false);
    }

    let n = segment.chars().count();
    for (i, _) in text.char_indices() {
        let rest = &text[i..];
        let Some(len) = head_len(rest, n) else {
            break;
        };
        if matches_fixed(&rest[..len], segment)? && f(&rest[len..])? {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Returns the remainder of `text` following the leftmost occurrence of the asterisk-free `segment`.
pub(crate) fn find_tail<'t>(text: &'t str, segment: &str) -> Result<Option<&'t str>> {
    let mut found = None;
    scan(text, segment, |tail| {
        found = Some(tail);
        Ok(true)
    })?;
    Ok(found)
}

#[inline]
fn ensure_fixed(segment: &str) -> Result<()> {
    if memchr(b'*', segment.as_bytes()).is_some() {
        log::error!("fixed segment {segment:?} contains an asterisk");
        return Err(Error::InvariantViolation {
            segment: segment.to_owned(),
        });
    }
    Ok(())
}
