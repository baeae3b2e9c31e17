//! Contains a parser for elements: the start tag with attributes, content and
//! the end tag.
//!
//! ```text
//! element   := '<' Name (S Attribute)* S? ('/>' | '>' content '</' Name S? '>')
//! Attribute := AttName S? '=' S? ('"' [^"]* '"' | "'" [^']* "'")
//! content   := (text | Comment | CDSect | PI | element)*
//! ```
//!
//! Open elements are kept on an explicit stack of names instead of the call
//! stack, so deeply nested input cannot overflow the stack. The nesting depth
//! is still bounded by [`Config::max_depth`](crate::Config::max_depth).

use crate::class::{is_whitespace, ATTRIBUTE_NAME, NAME, SPACE};
use crate::config::Flags;
use crate::errors::{Result, SyntaxErrorKind};
use crate::handler::Handler;
use crate::parser::text::{compact, trim_end, Decode};
use crate::parser::Document;

impl<'a, 'h, H: Handler<'a> + ?Sized> Document<'a, 'h, H> {
    /// Parses a top-level element after its `<`, including everything nested
    /// inside it.
    pub(super) fn parse_element(&mut self) -> Result<()> {
        // Names of the elements whose end tags are not yet seen, innermost last
        let mut opened: Vec<&'a [u8]> = Vec::new();
        if let Some(name) = self.parse_start_tag(1)? {
            opened.push(name);
        }

        let trim = self.flag(Flags::TRIM_SPACE);
        while let Some(&name) = opened.last() {
            if trim {
                self.cursor.skip(&SPACE);
            }
            if self.cursor.peek(0) != b'<' {
                self.parse_text()?;
            }

            match self.cursor.peek(1) {
                b'!' => {
                    if self.cursor.starts_with(b"<!--") {
                        self.cursor.advance(4);
                        self.parse_comment()?;
                    } else if self.cursor.starts_with(b"<![CDATA[") {
                        self.cursor.advance(9);
                        self.parse_cdata()?;
                    } else {
                        return Err(self.cursor.unexpected(2).into());
                    }
                }
                b'/' => {
                    self.cursor.advance(2);
                    self.parse_end_tag(name)?;
                    opened.pop();
                }
                b'?' => {
                    self.cursor.advance(2);
                    self.parse_pi()?;
                }
                _ => {
                    self.cursor.advance(1);
                    if let Some(name) = self.parse_start_tag(opened.len() + 1)? {
                        opened.push(name);
                    }
                }
            }
        }
        Ok(())
    }

    /// Parses a start tag after its `<`. `depth` is the nesting level of the
    /// element, starting from 1 for top-level elements.
    ///
    /// Returns the element name if the element has content. For a self-closing
    /// tag `end_element` is already reported and `None` is returned.
    fn parse_start_tag(&mut self, depth: usize) -> Result<Option<&'a [u8]>> {
        if matches!(self.config.max_depth, Some(max) if depth > max) {
            return Err(self.error(0, SyntaxErrorKind::TooDeep));
        }

        let len = self.cursor.span(&NAME, 0);
        if len == 0 {
            return Err(self.error(0, SyntaxErrorKind::ExpectedElementType));
        }
        let (name, empty) = match self.cursor.peek(len) {
            b'>' => {
                let name = self.cursor.split(len, len + 1);
                self.handler.start_element(name)?;
                (name, false)
            }
            b'/' => {
                if self.cursor.peek(len + 1) != b'>' {
                    return Err(self.error(len + 1, SyntaxErrorKind::ExpectedGreaterThan));
                }
                let name = self.cursor.split(len, len + 2);
                self.handler.start_element(name)?;
                (name, true)
            }
            b if is_whitespace(b) => {
                let name = self.cursor.split(len, len + 1);
                self.handler.start_element(name)?;
                (name, self.parse_attributes()?)
            }
            _ => return Err(self.cursor.unexpected(len).into()),
        };
        self.handler.end_attributes()?;

        if empty {
            self.handler.end_element(name)?;
            return Ok(None);
        }
        Ok(Some(name))
    }

    /// Parses attributes up to and including the end of the start tag.
    /// Returns `true` for a self-closing tag.
    fn parse_attributes(&mut self) -> Result<bool> {
        let decode = Decode {
            references: self.flag(Flags::ENTITY_TRANSLATION),
            collapse_space: false,
        };

        self.cursor.skip(&SPACE);
        while ATTRIBUTE_NAME.contains(self.cursor.peek(0)) {
            let len = self.cursor.span(&ATTRIBUTE_NAME, 0);
            let eq = len + self.cursor.span(&SPACE, len);
            if self.cursor.peek(eq) != b'=' {
                return Err(self.error(eq, SyntaxErrorKind::ExpectedEquals));
            }
            let name = self.cursor.split(len, eq + 1);

            self.cursor.skip(&SPACE);
            let quote = self.cursor.peek(0);
            if quote != b'"' && quote != b'\'' {
                return Err(self.error(0, SyntaxErrorKind::ExpectedQuote));
            }
            self.cursor.advance(1);
            let (read, written) = compact(self.cursor.rest_mut(), quote, decode)
                .map_err(|(i, kind)| self.cursor.error(i, kind))?;
            let value = self.cursor.split(written, read + 1);
            self.handler.attribute(name, value)?;

            self.cursor.skip(&SPACE);
        }

        match self.cursor.peek(0) {
            b'>' => {
                self.cursor.advance(1);
                Ok(false)
            }
            b'/' => {
                if self.cursor.peek(1) != b'>' {
                    return Err(self.error(1, SyntaxErrorKind::ExpectedGreaterThan));
                }
                self.cursor.advance(2);
                Ok(true)
            }
            _ => Err(self.cursor.unexpected(0).into()),
        }
    }

    /// Parses a run of character data up to the next `<`.
    fn parse_text(&mut self) -> Result<()> {
        let decode = Decode {
            references: self.flag(Flags::ENTITY_TRANSLATION),
            collapse_space: self.flag(Flags::NORMALIZE_SPACE),
        };
        let (read, mut written) = compact(self.cursor.rest_mut(), b'<', decode)
            .map_err(|(i, kind)| self.cursor.error(i, kind))?;
        if self.flag(Flags::TRIM_SPACE) {
            written = trim_end(&self.cursor.rest()[..written]);
        }

        let text = self.cursor.split(written, read);
        if text.is_empty() {
            return Ok(());
        }
        self.handler.text(text)
    }

    /// Parses an end tag after its `</`. Unless [`Flags::CLOSING_TAG_VALIDATE`]
    /// is set, the tag must close the element `name`.
    fn parse_end_tag(&mut self, name: &'a [u8]) -> Result<()> {
        let len = if self.flag(Flags::CLOSING_TAG_VALIDATE) {
            self.cursor.span(&NAME, 0)
        } else {
            let len = name.len();
            if !self.cursor.starts_with(name) || NAME.contains(self.cursor.peek(len)) {
                return Err(self.error(0, SyntaxErrorKind::MismatchedEndTag));
            }
            len
        };

        let gt = len + self.cursor.span(&SPACE, len);
        if self.cursor.peek(gt) != b'>' {
            return Err(self.error(gt, SyntaxErrorKind::ExpectedGreaterThan));
        }
        let end = self.cursor.split(len, gt + 1);
        self.handler.end_element(end)
    }
}
