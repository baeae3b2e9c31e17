//! Contains a parser for the document prolog: an optional byte order mark
//! followed by an optional XML declaration.
//!
//! ```text
//! XMLDecl      := '<?xml' VersionInfo EncodingDecl? SDDecl? S? '?>'
//! VersionInfo  := S 'version' Eq Value
//! EncodingDecl := S 'encoding' Eq Value
//! SDDecl       := S 'standalone' Eq Value
//! Eq           := S? '=' S?
//! Value        := '"' [^"]* '"' | "'" [^']* "'"
//! ```
//!
//! Values are not validated.

use crate::class::{self, is_whitespace, SPACE};
use crate::errors::{Result, SyntaxErrorKind};
use crate::handler::Handler;
use crate::parser::Document;

/// UTF-8 byte order mark
const BOM: &[u8] = b"\xEF\xBB\xBF";

impl<'a, 'h, H: Handler<'a> + ?Sized> Document<'a, 'h, H> {
    pub(super) fn parse_prolog(&mut self) -> Result<()> {
        if self.cursor.starts_with(BOM) {
            trace!("skip BOM");
            self.cursor.advance(BOM.len());
        }
        // `<?xml-stylesheet` and `<?xml?>` are processing instructions
        if self.cursor.starts_with(b"<?xml") && is_whitespace(self.cursor.peek(5)) {
            self.cursor.advance(6);
            self.parse_declaration()?;
        }
        Ok(())
    }

    /// Parses the declaration after `<?xml` and one whitespace byte.
    fn parse_declaration(&mut self) -> Result<()> {
        self.cursor.skip(&SPACE);
        if !self.cursor.starts_with(b"version") {
            return Err(self.error(0, SyntaxErrorKind::ExpectedVersion));
        }
        let version = self.parse_pseudo_attribute(b"version")?;
        let mut spaced = self.end_of_pseudo_attribute()?;

        let mut encoding = None;
        if spaced && self.cursor.starts_with(b"encoding") {
            encoding = Some(self.parse_pseudo_attribute(b"encoding")?);
            spaced = self.end_of_pseudo_attribute()?;
        }

        let mut standalone = None;
        if spaced && self.cursor.starts_with(b"standalone") {
            standalone = Some(self.parse_pseudo_attribute(b"standalone")?);
            self.end_of_pseudo_attribute()?;
        }

        if !self.cursor.starts_with(b"?>") {
            return Err(self.error(0, SyntaxErrorKind::ExpectedDeclarationEnd));
        }
        self.cursor.advance(2);

        trace!("XML declaration, version {:?}", crate::utils::Bytes(version));
        self.handler.xml_declaration(version, encoding, standalone)
    }

    /// Parses `name = "value"` where the cursor is at `name`, and returns the
    /// value without quotes.
    fn parse_pseudo_attribute(&mut self, name: &[u8]) -> Result<&'a [u8]> {
        self.cursor.advance(name.len());
        self.cursor.skip(&SPACE);
        if self.cursor.peek(0) != b'=' {
            return Err(self.error(0, SyntaxErrorKind::ExpectedEquals));
        }
        self.cursor.advance(1);
        self.cursor.skip(&SPACE);

        let quote = self.cursor.peek(0);
        let (value, unclosed) = match quote {
            b'"' => (&class::DOUBLE_QUOTED, SyntaxErrorKind::ExpectedDoubleQuote),
            b'\'' => (&class::SINGLE_QUOTED, SyntaxErrorKind::ExpectedSingleQuote),
            _ => return Err(self.error(0, SyntaxErrorKind::ExpectedQuote)),
        };
        let len = self.cursor.span(value, 1);
        if self.cursor.peek(1 + len) != quote {
            return Err(self.error(1 + len, unclosed));
        }
        self.cursor.advance(1);
        Ok(self.cursor.split(len, len + 1))
    }

    /// Checks that a value is followed by whitespace or `?` and skips the
    /// whitespace. Returns `true` if there was any.
    fn end_of_pseudo_attribute(&mut self) -> Result<bool> {
        let next = self.cursor.peek(0);
        if next != b'?' && !is_whitespace(next) {
            return Err(self.cursor.unexpected(0).into());
        }
        Ok(self.cursor.skip(&SPACE) > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{Error, SyntaxError, SyntaxErrorKind};
    use crate::events::{Event::*, Recorder};
    use crate::{parse, Flags};
    use pretty_assertions::assert_eq;

    fn declaration(xml: &str) -> Result<Vec<String>, SyntaxError> {
        let mut buf = xml.as_bytes().to_vec();
        let mut recorder = Recorder::new();
        match parse(&mut buf, Flags::DEFAULT, &mut recorder) {
            Ok(()) => Ok(recorder
                .events
                .iter()
                .filter(|e| !matches!(e, StartDocument | EndDocument))
                .map(|e| format!("{:?}", e))
                .collect()),
            Err(Error::Syntax(e)) => Err(e),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    fn error(position: usize, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError { position, kind }
    }

    #[test]
    fn version_only() {
        assert_eq!(
            declaration(r#"<?xml version="1.0"?>"#),
            Ok(vec![
                r#"Declaration { version: "1.0", encoding: None, standalone: None }"#.into()
            ])
        );
        assert_eq!(
            declaration("<?xml\tversion = '1.1' ?>"),
            Ok(vec![
                r#"Declaration { version: "1.1", encoding: None, standalone: None }"#.into()
            ])
        );
    }

    #[test]
    fn all_pseudo_attributes() {
        assert_eq!(
            declaration(r#"<?xml version="1.0" encoding='UTF-8' standalone="yes"?><a/>"#),
            Ok(vec![
                r#"Declaration { version: "1.0", encoding: Some("UTF-8"), standalone: Some("yes") }"#.into(),
                r#"StartElement("a")"#.into(),
                "EndAttributes".into(),
                r#"EndElement("a")"#.into(),
            ])
        );
    }

    #[test]
    fn standalone_without_encoding() {
        assert_eq!(
            declaration(r#"<?xml version="1.0" standalone="no"?>"#),
            Ok(vec![
                r#"Declaration { version: "1.0", encoding: None, standalone: Some("no") }"#.into()
            ])
        );
    }

    #[test]
    fn bom() {
        assert_eq!(
            declaration("\u{FEFF}<?xml version='1.0'?>"),
            Ok(vec![
                r#"Declaration { version: "1.0", encoding: None, standalone: None }"#.into()
            ])
        );
        assert_eq!(declaration("\u{FEFF}"), Ok(vec![]));
    }

    #[test]
    fn not_a_declaration() {
        assert_eq!(
            declaration("<?xml-stylesheet href='a.xsl'?>"),
            Ok(vec![r#"PI("xml-stylesheet", "href='a.xsl'")"#.into()])
        );
        assert_eq!(declaration("<?xml?>"), Ok(vec![r#"PI("xml", "")"#.into()]));
    }

    #[test]
    fn errors() {
        use SyntaxErrorKind::*;

        assert_eq!(
            declaration("<?xml encoding='UTF-8'?>"),
            Err(error(6, ExpectedVersion))
        );
        assert_eq!(
            declaration("<?xml version '1.0'?>"),
            Err(error(14, ExpectedEquals))
        );
        assert_eq!(
            declaration("<?xml version=1.0?>"),
            Err(error(14, ExpectedQuote))
        );
        assert_eq!(
            declaration("<?xml version=\"1.0?>"),
            Err(error(20, ExpectedDoubleQuote))
        );
        assert_eq!(
            declaration("<?xml version='1.0?>"),
            Err(error(20, ExpectedSingleQuote))
        );
        assert_eq!(
            declaration("<?xml version='1.0'encoding='UTF-8'?>"),
            Err(error(19, UnexpectedCharacter))
        );
        assert_eq!(
            declaration("<?xml version='1.0'"),
            Err(error(19, UnexpectedEnd))
        );
        assert_eq!(
            declaration("<?xml version='1.0' foo='bar'?>"),
            Err(error(20, ExpectedDeclarationEnd))
        );
        // pseudo-attributes have a fixed order
        assert_eq!(
            declaration("<?xml version='1.0' standalone='yes' encoding='UTF-8'?>"),
            Err(error(37, ExpectedDeclarationEnd))
        );
    }
}
