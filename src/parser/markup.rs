//! Contains parsers for markup with verbatim content: comments, CDATA sections
//! and processing instructions.
//!
//! ```text
//! Comment := '<!--' .* '-->'
//! CDSect  := '<![CDATA[' .* ']]>'
//! PI      := '<?' PITarget (S .*)? '?>'
//! ```
//!
//! The content ends at the first terminator and is reported as is. `--` inside
//! a comment is not an error.

use crate::class::{NAME, SPACE};
use crate::errors::{Result, SyntaxErrorKind};
use crate::handler::Handler;
use crate::parser::Document;

impl<'a, 'h, H: Handler<'a> + ?Sized> Document<'a, 'h, H> {
    /// Parses a comment after its `<!--`.
    pub(super) fn parse_comment(&mut self) -> Result<()> {
        let comment = self.take_until(b"-->")?;
        self.handler.comment(comment)
    }

    /// Parses a CDATA section after its `<![CDATA[`.
    pub(super) fn parse_cdata(&mut self) -> Result<()> {
        let cdata = self.take_until(b"]]>")?;
        self.handler.cdata(cdata)
    }

    /// Parses a processing instruction after its `<?`.
    pub(super) fn parse_pi(&mut self) -> Result<()> {
        let len = self.cursor.span(&NAME, 0);
        if len == 0 {
            return Err(self.error(0, SyntaxErrorKind::ExpectedPiTarget));
        }

        let mut start = len;
        if !self.cursor.rest()[len..].starts_with(b"?>") {
            let space = self.cursor.span(&SPACE, len);
            if space == 0 {
                return Err(self.error(len, SyntaxErrorKind::ExpectedSpace));
            }
            start += space;
        }
        let target = self.cursor.split(len, start);
        let content = self.take_until(b"?>")?;
        self.handler.processing_instruction(target, content)
    }
}
