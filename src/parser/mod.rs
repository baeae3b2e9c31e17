//! The parser: drives a [`Handler`] over a document that is decoded in place.
//!
//! A document is parsed by one call, from the first byte to the end of input:
//!
//! ```text
//! document := BOM? XMLDecl? (S | Comment | PI | element)*
//! ```
//!
//! The top level is not required to contain exactly one element: any number of
//! elements, comments and processing instructions is accepted. A `<!DOCTYPE`
//! declaration is not supported and always fails the parse.

use crate::class::SPACE;
use crate::config::{Config, Flags};
use crate::cursor::Cursor;
use crate::errors::{Error, Result, SyntaxErrorKind};
use crate::handler::Handler;

mod decl;
mod element;
mod markup;
mod text;

/// A destructive XML parser.
///
/// The parser does not allocate: it rewrites the document buffer in place
/// while decoding it and hands slices of the buffer to a [`Handler`]. After
/// parsing the buffer no longer contains the original document.
///
/// A `Parser` only holds a configuration, so one parser can be used for any
/// number of documents, also from several threads at once.
///
/// # Example
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use inplace_xml::events::{Event::*, Recorder};
/// use inplace_xml::{Flags, Parser};
///
/// let parser = Parser::new(Flags::TRIM_SPACE | Flags::NORMALIZE_SPACE);
/// let mut xml = b"<p>  Hello,\n    world!  </p>".to_vec();
/// let mut recorder = Recorder::new();
/// parser.parse(&mut xml, &mut recorder).unwrap();
/// assert_eq!(recorder.events[3], Text(b"Hello, world!"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Parser {
    config: Config,
}

impl Parser {
    /// Creates a parser with the specified flags and otherwise default
    /// configuration.
    pub fn new(flags: Flags) -> Self {
        Self::with_config(Config::from(flags))
    }

    /// Creates a parser with the specified configuration.
    pub const fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns reference to the parser configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns mutable reference to the parser configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Parses the document in `buf`, calling `handler` for each recognized
    /// construct.
    ///
    /// The document ends at the first `0` byte of `buf`, or at the end of
    /// `buf` if it has none. The buffer is rewritten while parsing, also when
    /// parsing fails.
    ///
    /// The first syntax error or the first error returned by the handler
    /// stops parsing and is returned.
    pub fn parse<'a, H>(&self, buf: &'a mut [u8], handler: &mut H) -> Result<()>
    where
        H: Handler<'a> + ?Sized,
    {
        let mut document = Document {
            cursor: Cursor::new(buf),
            config: self.config,
            handler,
        };
        let result = document.parse();
        if let Err(Error::Syntax(e)) = &result {
            debug!("parse failed at position {}: {}", e.position, e.kind);
        }
        result
    }
}

/// Parses the document in `buf` using the specified `flags`.
///
/// A shortcut for [`Parser::new(flags).parse(buf, handler)`](Parser::parse).
///
/// # Example
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use inplace_xml::events::{Event::*, Recorder};
/// use inplace_xml::{parse, Flags};
///
/// let mut xml = br#"<?xml version="1.0"?><r a="1"><c>text &amp; more</c></r>"#.to_vec();
/// let mut recorder = Recorder::new();
/// parse(&mut xml, Flags::DEFAULT, &mut recorder).unwrap();
/// assert_eq!(
///     recorder.events,
///     [
///         StartDocument,
///         Declaration { version: b"1.0", encoding: None, standalone: None },
///         StartElement(b"r"),
///         Attribute(b"a", b"1"),
///         EndAttributes,
///         StartElement(b"c"),
///         EndAttributes,
///         Text(b"text & more"),
///         EndElement(b"c"),
///         EndElement(b"r"),
///         EndDocument,
///     ]
/// );
/// ```
pub fn parse<'a, H>(buf: &'a mut [u8], flags: Flags, handler: &mut H) -> Result<()>
where
    H: Handler<'a> + ?Sized,
{
    Parser::new(flags).parse(buf, handler)
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// State of one parse call.
struct Document<'a, 'h, H: ?Sized> {
    cursor: Cursor<'a>,
    config: Config,
    handler: &'h mut H,
}

impl<'a, 'h, H: Handler<'a> + ?Sized> Document<'a, 'h, H> {
    fn parse(&mut self) -> Result<()> {
        trace!("start document ({} bytes)", self.cursor.len());
        self.handler.start_document()?;
        self.parse_prolog()?;

        loop {
            self.cursor.skip(&SPACE);
            if self.cursor.is_empty() {
                break;
            }
            if self.cursor.peek(0) != b'<' {
                return Err(self.error(0, SyntaxErrorKind::ExpectedLessThan));
            }
            match self.cursor.peek(1) {
                b'!' => {
                    if self.cursor.starts_with(b"<!--") {
                        trace!("comment at {}", self.cursor.offset());
                        self.cursor.advance(4);
                        self.parse_comment()?;
                    } else if self.cursor.starts_with(b"<!DOCTYPE") {
                        return Err(self.error(0, SyntaxErrorKind::NotImplemented));
                    } else {
                        return Err(self.cursor.unexpected(2).into());
                    }
                }
                b'?' => {
                    trace!("processing instruction at {}", self.cursor.offset());
                    self.cursor.advance(2);
                    self.parse_pi()?;
                }
                _ => {
                    trace!("root element at {}", self.cursor.offset());
                    self.cursor.advance(1);
                    self.parse_element()?;
                }
            }
        }

        self.handler.end_document()?;
        trace!("end document");
        Ok(())
    }

    #[inline]
    fn flag(&self, flag: Flags) -> bool {
        self.config.flags.contains(flag)
    }

    /// Creates a syntax error at `i` bytes after the read position.
    #[inline]
    fn error(&self, i: usize, kind: SyntaxErrorKind) -> Error {
        Error::Syntax(self.cursor.error(i, kind))
    }

    /// Consumes input up to and including `terminator`, and returns the input
    /// before it.
    fn take_until(&mut self, terminator: &[u8]) -> Result<&'a [u8]> {
        match memchr::memmem::find(self.cursor.rest(), terminator) {
            Some(end) => Ok(self.cursor.split(end, end + terminator.len())),
            None => Err(self.error(self.cursor.len(), SyntaxErrorKind::UnexpectedEnd)),
        }
    }
}
