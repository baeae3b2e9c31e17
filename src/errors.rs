//! Error management module

use std::fmt;

/// Kinds of syntax errors. Each kind maps to a fixed, human-readable message,
/// returned by [`SyntaxErrorKind::message`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    /// The document ended inside a construct that was not closed yet: a text
    /// run outside of `<` markup, a quoted value, a comment, a CDATA section,
    /// a processing instruction or a reference.
    UnexpectedEnd,
    /// A numeric character reference without digits: `&#;` or `&#x;`.
    UnexpectedSemicolon,
    /// A numeric character reference with a digit sequence not followed by `;`.
    ExpectedSemicolon,
    /// A reference with an unknown name, like `&nbsp;`.
    UnexpectedReference,
    /// The XML declaration does not start with the `version` pseudo-attribute.
    ExpectedVersion,
    /// A pseudo-attribute or an attribute name is not followed by `=`.
    ExpectedEquals,
    /// A value opened with `"` is not closed.
    ExpectedDoubleQuote,
    /// A value opened with `'` is not closed.
    ExpectedSingleQuote,
    /// An attribute value does not start with `"` or `'`.
    ExpectedQuote,
    /// A byte that cannot start or continue the construct being parsed.
    UnexpectedCharacter,
    /// The XML declaration is not closed by `?>`.
    ExpectedDeclarationEnd,
    /// `<!DOCTYPE` markup, which is not supported.
    NotImplemented,
    /// A processing instruction without a target name: `<??>`.
    ExpectedPiTarget,
    /// A processing instruction target not followed by whitespace or `?>`.
    ExpectedSpace,
    /// An element tag without a name: `<>`, `</>` or `< a>`.
    ExpectedElementType,
    /// A tag which should be closed by `>` at this position.
    ExpectedGreaterThan,
    /// The closing tag name is not the same as the name of the opened element.
    MismatchedEndTag,
    /// Top-level content which is not markup.
    ExpectedLessThan,
    /// Elements are nested deeper than [`Config::max_depth`] allows.
    ///
    /// [`Config::max_depth`]: crate::Config::max_depth
    TooDeep,
}

impl SyntaxErrorKind {
    /// Returns the fixed message of this kind of error.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::UnexpectedEnd => "unexpected end",
            Self::UnexpectedSemicolon => "unexpected ;",
            Self::ExpectedSemicolon => "expected ;",
            Self::UnexpectedReference => "unexpected reference",
            Self::ExpectedVersion => "expected version",
            Self::ExpectedEquals => "expected =",
            Self::ExpectedDoubleQuote => "expected \"",
            Self::ExpectedSingleQuote => "expected '",
            Self::ExpectedQuote => "expected \" or '",
            Self::UnexpectedCharacter => "unexpected character",
            Self::ExpectedDeclarationEnd => "expected ?>",
            Self::NotImplemented => "not implemented",
            Self::ExpectedPiTarget => "expected PI target",
            Self::ExpectedSpace => "expected space",
            Self::ExpectedElementType => "expected element type",
            Self::ExpectedGreaterThan => "expected >",
            Self::MismatchedEndTag => "unmatch element type",
            Self::ExpectedLessThan => "expected <",
            Self::TooDeep => "element nesting too deep",
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// An unrecoverable syntax error. Contains the offset of the offending byte
/// from the start of the document (the BOM, if any, is counted).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SyntaxError {
    /// Offset from the start of the parsed buffer
    pub position: usize,
    /// What was wrong
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    #[inline]
    pub(crate) const fn new(position: usize, kind: SyntaxErrorKind) -> Self {
        Self { position, kind }
    }

    /// The fixed message describing this error.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.kind.message()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "syntax error at position {}: {}", self.position, self.kind)
    }
}

impl std::error::Error for SyntaxError {}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// The error type used by this crate.
#[derive(Debug)]
pub enum Error {
    /// The document is malformed or uses an unsupported construct.
    Syntax(SyntaxError),
    /// An error raised by a [`Handler`] from one of its callbacks. It is
    /// returned from the parse call exactly as the handler produced it.
    ///
    /// [`Handler`]: crate::Handler
    Handler(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wraps any error produced by a handler. Use it to abort the parse from
    /// inside a callback.
    pub fn handler<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Error::Handler(error.into())
    }

    /// Returns the position of a syntax error, or `None` for errors raised by
    /// a handler.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax(e) => Some(e.position),
            Error::Handler(_) => None,
        }
    }
}

impl From<SyntaxError> for Error {
    /// Creates a new `Error::Syntax` from the given error
    #[inline]
    fn from(error: SyntaxError) -> Error {
        Error::Syntax(error)
    }
}

/// A specialized `Result` type where the error is hard-wired to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "{}", e),
            Error::Handler(e) => write!(f, "handler error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Handler(e) => Some(e.as_ref()),
        }
    }
}
