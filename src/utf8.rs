/// Returns the width in bytes of a UTF-8 encoded character given its leading byte.
///
/// Continuation bytes and invalid leading bytes are reported as width 1,
/// which never happens for bytes taken at a character boundary of a `str`.
#[inline]
pub(crate) const fn utf8_char_width(b: u8) -> usize {
    match b {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Returns the byte length of the first `n` characters of `text`,
/// or `None` if `text` has fewer than `n` characters.
#[inline]
pub(crate) fn head_len(text: &str, n: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut offset = 0;
    for _ in 0..n {
        let &b = bytes.get(offset)?;
        offset += utf8_char_width(b);
    }
    Some(offset)
}

/// Returns the byte offset where the last `n` characters of `text` start,
/// or `None` if `text` has fewer than `n` characters.
#[inline]
pub(crate) fn tail_start(text: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(text.len());
    }
    text.char_indices().nth_back(n - 1).map(|(i, _)| i)
}
