//! The read cursor over a document buffer that is parsed in place.

use std::mem;

use crate::class::ByteClass;
use crate::errors::{SyntaxError, SyntaxErrorKind};

/// Exclusive view of the not yet parsed part of a document.
///
/// The cursor owns the `&'a mut` borrow of the remaining input. When a token
/// is finished, its bytes are split off the front of the buffer and handed
/// out as `&'a [u8]`: the parser never looks at them again, so tokens stay
/// valid for the whole borrow of the buffer while the rest is rewritten.
///
/// Reads past the end of input observe `0`, the end-of-input sentinel.
pub(crate) struct Cursor<'a> {
    rest: &'a mut [u8],
    /// Offset of `rest[0]` from the start of the document
    offset: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over a document. The document ends at the first `0`
    /// byte, or at the end of `buf` if there is none.
    pub fn new(buf: &'a mut [u8]) -> Self {
        let len = memchr::memchr(0, buf).unwrap_or(buf.len());
        Self {
            rest: &mut buf[..len],
            offset: 0,
        }
    }

    /// Offset of the read position from the start of the document.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rest.len()
    }

    /// Unparsed input
    #[inline]
    pub fn rest(&self) -> &[u8] {
        &self.rest[..]
    }

    /// Unparsed input, for in-place rewriting
    #[inline]
    pub fn rest_mut(&mut self) -> &mut [u8] {
        &mut self.rest[..]
    }

    /// Returns the byte `i` positions after the read position, or `0` past
    /// the end of input.
    #[inline]
    pub fn peek(&self, i: usize) -> u8 {
        self.rest.get(i).copied().unwrap_or(0)
    }

    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest.starts_with(prefix)
    }

    /// Returns the length of the span of `class` bytes that starts `from`
    /// bytes after the read position.
    #[inline]
    pub fn span(&self, class: &ByteClass, from: usize) -> usize {
        self.rest.get(from..).map_or(0, |bytes| class.span(bytes))
    }

    /// Moves the read position over the span of `class` bytes and returns
    /// the span length.
    #[inline]
    pub fn skip(&mut self, class: &ByteClass) -> usize {
        let len = class.span(self.rest);
        self.advance(len);
        len
    }

    /// Moves the read position `count` bytes forward.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        let rest = mem::take(&mut self.rest);
        self.rest = &mut rest[count..];
        self.offset += count;
    }

    /// Consumes `consumed` bytes and returns the first `len` of them as a
    /// finished token.
    #[inline]
    pub fn split(&mut self, len: usize, consumed: usize) -> &'a [u8] {
        debug_assert!(len <= consumed, "token is longer than consumed input");
        let rest = mem::take(&mut self.rest);
        let (head, tail) = rest.split_at_mut(consumed);
        self.rest = tail;
        self.offset += consumed;

        let head: &'a [u8] = head;
        &head[..len]
    }

    /// Creates an error at `i` bytes after the read position.
    #[inline]
    pub fn error(&self, i: usize, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::new(self.offset + i, kind)
    }

    /// Creates an error for a byte that is not expected at `i` bytes after the
    /// read position. Distinguishes the end of input from a wrong byte.
    #[inline]
    pub fn unexpected(&self, i: usize) -> SyntaxError {
        if i >= self.rest.len() {
            self.error(i, SyntaxErrorKind::UnexpectedEnd)
        } else {
            self.error(i, SyntaxErrorKind::UnexpectedCharacter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{NAME, SPACE};
    use pretty_assertions::assert_eq;

    #[test]
    fn stops_at_nul() {
        let mut buf = *b"<a/>\0garbage";
        let cursor = Cursor::new(&mut buf);
        assert_eq!(cursor.len(), 4);
        assert_eq!(cursor.peek(3), b'>');
        assert_eq!(cursor.peek(4), 0);
        assert_eq!(cursor.peek(100), 0);
    }

    #[test]
    fn skip() {
        let mut buf = *b"  \t\nname rest";
        let mut cursor = Cursor::new(&mut buf);
        assert_eq!(cursor.skip(&SPACE), 4);
        assert_eq!(cursor.offset(), 4);
        assert_eq!(cursor.skip(&SPACE), 0);
        assert_eq!(cursor.span(&NAME, 0), 4);
        assert_eq!(cursor.span(&NAME, 2), 2);
        assert_eq!(cursor.span(&NAME, 100), 0);
    }

    #[test]
    fn tokens_outlive_rewriting() {
        let mut buf = *b"first second";
        let mut cursor = Cursor::new(&mut buf);
        let first = cursor.split(5, 6);
        cursor.rest_mut()[0] = b'S';
        let second = cursor.split(6, 6);
        assert!(cursor.is_empty());
        assert_eq!(cursor.offset(), 12);
        assert_eq!(first, b"first");
        assert_eq!(second, b"Second");
    }

    #[test]
    fn errors() {
        let mut buf = *b"ab";
        let mut cursor = Cursor::new(&mut buf);
        cursor.advance(1);
        assert_eq!(
            cursor.unexpected(0),
            SyntaxError::new(1, SyntaxErrorKind::UnexpectedCharacter)
        );
        assert_eq!(
            cursor.unexpected(1),
            SyntaxError::new(2, SyntaxErrorKind::UnexpectedEnd)
        );
    }
}
