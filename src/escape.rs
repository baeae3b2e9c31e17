//! Decoding of entity and character references.
//!
//! Recognized references are the five predefined entities (`&amp;`, `&lt;`,
//! `&gt;`, `&quot;`, `&apos;`) and numeric character references in decimal
//! (`&#65;`) or hexadecimal (`&#x41;`) form. Every reference decodes to
//! exactly one byte: a numeric reference keeps only the lowest 8 bits of its
//! code point, no UTF-8 encoding is performed.

use crate::class::{DigitTable, DECIMAL, HEXADECIMAL, NOT_A_DIGIT};
use crate::errors::{SyntaxError, SyntaxErrorKind};

/// Decodes the reference at the start of `bytes`, which must start with `&`.
///
/// Returns the decoded byte and the length of the reference, including the
/// trailing `;`. On error returns the offset of the problem inside `bytes`
/// together with its kind.
pub(crate) fn parse_reference(bytes: &[u8]) -> Result<(u8, usize), (usize, SyntaxErrorKind)> {
    debug_assert_eq!(bytes.first(), Some(&b'&'));
    let at = |i: usize| bytes.get(i).copied().unwrap_or(0);

    match at(1) {
        0 => Err((0, SyntaxErrorKind::UnexpectedEnd)),
        b'#' if at(2) == b'x' => parse_numeric(bytes, 3, &HEXADECIMAL),
        b'#' => parse_numeric(bytes, 2, &DECIMAL),
        _ => {
            let name = &bytes[1..];
            let decoded = if name.starts_with(b"amp;") {
                Some((b'&', 5))
            } else if name.starts_with(b"apos;") {
                Some((b'\'', 6))
            } else if name.starts_with(b"gt;") {
                Some((b'>', 4))
            } else if name.starts_with(b"lt;") {
                Some((b'<', 4))
            } else if name.starts_with(b"quot;") {
                Some((b'"', 6))
            } else {
                None
            };
            decoded.ok_or((0, SyntaxErrorKind::UnexpectedReference))
        }
    }
}

/// Parses the digits of a numeric character reference, starting at `start`.
fn parse_numeric(
    bytes: &[u8],
    start: usize,
    digits: &DigitTable,
) -> Result<(u8, usize), (usize, SyntaxErrorKind)> {
    let mut i = start;
    if bytes.get(i) == Some(&b';') {
        return Err((i, SyntaxErrorKind::UnexpectedSemicolon));
    }
    let mut code: u32 = 0;
    while let Some(&b) = bytes.get(i) {
        let value = digits.value(b);
        if value == NOT_A_DIGIT {
            break;
        }
        code = code.wrapping_mul(digits.base()).wrapping_add(value as u32);
        i += 1;
    }
    if bytes.get(i) != Some(&b';') {
        return Err((i, SyntaxErrorKind::ExpectedSemicolon));
    }
    // TODO: write code points above 0x7F as UTF-8 once the output encoding of
    // numeric references is settled
    Ok((code as u8, i + 1))
}

/// Decodes all references in `buf` in place and returns the length of the
/// decoded content, which is stored at the start of `buf`.
///
/// The error position is an offset inside `buf`. On error the content of
/// `buf` is partially rewritten.
///
/// # Example
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use inplace_xml::escape::unescape_in_place;
///
/// let mut buf = *b"&lt;tag attr=&quot;&#65;&#x42;&quot;&gt;";
/// let len = unescape_in_place(&mut buf).unwrap();
/// assert_eq!(&buf[..len], b"<tag attr=\"AB\">");
/// ```
pub fn unescape_in_place(buf: &mut [u8]) -> Result<usize, SyntaxError> {
    let mut read = 0;
    let mut write = 0;
    while let Some(i) = memchr::memchr(b'&', &buf[read..]) {
        if read != write {
            buf.copy_within(read..read + i, write);
        }
        read += i;
        write += i;

        let (byte, len) =
            parse_reference(&buf[read..]).map_err(|(i, kind)| SyntaxError::new(read + i, kind))?;
        debug_assert!(write < read + len);
        buf[write] = byte;
        write += 1;
        read += len;
    }
    let tail = buf.len() - read;
    if read != write {
        buf.copy_within(read.., write);
    }
    Ok(write + tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn predefined() {
        assert_eq!(parse_reference(b"&amp;rest"), Ok((b'&', 5)));
        assert_eq!(parse_reference(b"&lt;"), Ok((b'<', 4)));
        assert_eq!(parse_reference(b"&gt;"), Ok((b'>', 4)));
        assert_eq!(parse_reference(b"&quot;"), Ok((b'"', 6)));
        assert_eq!(parse_reference(b"&apos;"), Ok((b'\'', 6)));
    }

    #[test]
    fn numeric() {
        assert_eq!(parse_reference(b"&#65;"), Ok((b'A', 5)));
        assert_eq!(parse_reference(b"&#x41;"), Ok((b'A', 6)));
        assert_eq!(parse_reference(b"&#x6a;"), Ok((b'j', 6)));
        assert_eq!(parse_reference(b"&#x6A;"), Ok((b'j', 6)));
        assert_eq!(parse_reference(b"&#0065;"), Ok((b'A', 7)));
    }

    #[test]
    fn truncated_to_byte() {
        // U+0141 LATIN CAPITAL LETTER L WITH STROKE
        assert_eq!(parse_reference(b"&#321;"), Ok((0x41, 6)));
        assert_eq!(parse_reference(b"&#x141;"), Ok((0x41, 7)));
        // accumulation wraps instead of overflowing
        assert_eq!(parse_reference(b"&#x1000000041;").map(|r| r.0), Ok(0x41));
    }

    #[test]
    fn errors() {
        use SyntaxErrorKind::*;

        assert_eq!(parse_reference(b"&"), Err((0, UnexpectedEnd)));
        assert_eq!(parse_reference(b"&#;"), Err((2, UnexpectedSemicolon)));
        assert_eq!(parse_reference(b"&#x;"), Err((3, UnexpectedSemicolon)));
        assert_eq!(parse_reference(b"&#65"), Err((4, ExpectedSemicolon)));
        assert_eq!(parse_reference(b"&#6a;"), Err((3, ExpectedSemicolon)));
        assert_eq!(parse_reference(b"&#xg;"), Err((3, ExpectedSemicolon)));
        assert_eq!(parse_reference(b"&#X41;"), Err((2, ExpectedSemicolon)));
        assert_eq!(parse_reference(b"&foo;"), Err((0, UnexpectedReference)));
        assert_eq!(parse_reference(b"&amp"), Err((0, UnexpectedReference)));
        assert_eq!(parse_reference(b"&AMP;"), Err((0, UnexpectedReference)));
    }

    #[test]
    fn unescape() {
        let mut buf = *b"a&amp;b";
        let len = unescape_in_place(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"a&b");

        let mut buf = *b"no references";
        let len = unescape_in_place(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"no references");

        let mut buf = *b"&#x49;&#x44;";
        let len = unescape_in_place(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"ID");

        let mut buf = *b"1 &lt; 2 &amp;&amp; 3 &gt; 2";
        let len = unescape_in_place(&mut buf).unwrap();
        assert_eq!(&buf[..len], b"1 < 2 && 3 > 2");
    }

    #[test]
    fn unescape_error() {
        let mut buf = *b"x &lt; &foo;";
        assert_eq!(
            unescape_in_place(&mut buf),
            Err(SyntaxError::new(7, SyntaxErrorKind::UnexpectedReference))
        );
    }
}
