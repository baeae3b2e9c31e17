//! In-place decoding of character data and attribute values.
//!
//! Decoding is split into two passes:
//! - [`compact`] copies the content towards its start while decoding
//!   references and collapsing whitespace runs;
//! - [`trim_end`] drops trailing whitespace from the compacted content.

use crate::class::{self, ByteClass, SPACE};
use crate::errors::SyntaxErrorKind;
use crate::escape::parse_reference;

/// What [`compact`] does with the content besides copying it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Decode {
    /// Decode `&...;` references
    pub references: bool,
    /// Replace each whitespace run with a single space
    pub collapse_space: bool,
}

impl Decode {
    /// Content bytes that are copied without any processing. `delimiter` is
    /// the byte that ends the content.
    fn verbatim(self, delimiter: u8) -> &'static ByteClass {
        match (delimiter, self.references, self.collapse_space) {
            (b'"', false, _) => &class::DOUBLE_QUOTED,
            (b'"', true, _) => &class::DOUBLE_QUOTED_NO_REF,
            (b'\'', false, _) => &class::SINGLE_QUOTED,
            (b'\'', true, _) => &class::SINGLE_QUOTED_NO_REF,
            (_, false, false) => &class::TEXT,
            (_, false, true) => &class::TEXT_NO_SPACE,
            (_, true, false) => &class::TEXT_NO_REF,
            (_, true, true) => &class::TEXT_NO_SPACE_REF,
        }
    }
}

/// Rewrites content at the start of `buf`, up to the first `delimiter`, in
/// place.
///
/// Returns `(read, written)`: `read` is the index of the delimiter in `buf`
/// and `written` is the length of the rewritten content, stored in
/// `buf[..written]`. The write position never overtakes the read position,
/// so no unread byte is overwritten.
///
/// `delimiter` must be `<` for character data and the opening quote for
/// attribute values. Collapsing of whitespace is applied only to character
/// data.
///
/// On error returns the index in `buf` at which the error was detected.
pub(crate) fn compact(
    buf: &mut [u8],
    delimiter: u8,
    decode: Decode,
) -> Result<(usize, usize), (usize, SyntaxErrorKind)> {
    let verbatim = decode.verbatim(delimiter);
    let mut read = 0;
    let mut write = 0;
    loop {
        let len = verbatim.span(&buf[read..]);
        if read != write {
            buf.copy_within(read..read + len, write);
        }
        read += len;
        write += len;

        match buf.get(read) {
            None => return Err((read, SyntaxErrorKind::UnexpectedEnd)),
            Some(b'&') if decode.references => {
                let (byte, len) =
                    parse_reference(&buf[read..]).map_err(|(i, kind)| (read + i, kind))?;
                buf[write] = byte;
                write += 1;
                read += len;
            }
            Some(&b) if decode.collapse_space && class::is_whitespace(b) => {
                read += SPACE.span(&buf[read..]);
                buf[write] = b' ';
                write += 1;
            }
            Some(_) => break,
        }
        debug_assert!(write <= read, "write cursor overtook read cursor");
    }
    Ok((read, write))
}

/// Returns the length of `content` without trailing whitespace.
#[inline]
pub(crate) fn trim_end(content: &[u8]) -> usize {
    content
        .iter()
        .rposition(|&b| !class::is_whitespace(b))
        .map_or(0, |i| i + 1)
}
