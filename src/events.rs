//! Parse events as values.
//!
//! [`Recorder`] is a [`Handler`] that stores every event it receives as an
//! [`Event`]. It is the simplest way to look at what the parser reports, and
//! is handy in tests.

use std::fmt::{self, Debug, Formatter};

use crate::errors::Result;
use crate::handler::Handler;
use crate::utils::Bytes;

/// One callback of a [`Handler`] with its arguments.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum Event<'a> {
    /// [`Handler::start_document`]
    StartDocument,
    /// [`Handler::end_document`]
    EndDocument,
    /// [`Handler::xml_declaration`]
    Declaration {
        /// Value of the `version` pseudo-attribute
        version: &'a [u8],
        /// Value of the `encoding` pseudo-attribute
        encoding: Option<&'a [u8]>,
        /// Value of the `standalone` pseudo-attribute
        standalone: Option<&'a [u8]>,
    },
    /// [`Handler::start_element`]
    StartElement(&'a [u8]),
    /// [`Handler::attribute`]
    Attribute(&'a [u8], &'a [u8]),
    /// [`Handler::end_attributes`]
    EndAttributes,
    /// [`Handler::text`]
    Text(&'a [u8]),
    /// [`Handler::comment`]
    Comment(&'a [u8]),
    /// [`Handler::cdata`]
    CData(&'a [u8]),
    /// [`Handler::processing_instruction`]
    PI(&'a [u8], &'a [u8]),
    /// [`Handler::end_element`]
    EndElement(&'a [u8]),
}

impl<'a> Debug for Event<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartDocument => f.write_str("StartDocument"),
            Self::EndDocument => f.write_str("EndDocument"),
            Self::Declaration {
                version,
                encoding,
                standalone,
            } => f
                .debug_struct("Declaration")
                .field("version", &Bytes(version))
                .field("encoding", &encoding.map(Bytes))
                .field("standalone", &standalone.map(Bytes))
                .finish(),
            Self::StartElement(name) => f.debug_tuple("StartElement").field(&Bytes(name)).finish(),
            Self::Attribute(name, value) => f
                .debug_tuple("Attribute")
                .field(&Bytes(name))
                .field(&Bytes(value))
                .finish(),
            Self::EndAttributes => f.write_str("EndAttributes"),
            Self::Text(data) => f.debug_tuple("Text").field(&Bytes(data)).finish(),
            Self::Comment(data) => f.debug_tuple("Comment").field(&Bytes(data)).finish(),
            Self::CData(data) => f.debug_tuple("CData").field(&Bytes(data)).finish(),
            Self::PI(target, content) => f
                .debug_tuple("PI")
                .field(&Bytes(target))
                .field(&Bytes(content))
                .finish(),
            Self::EndElement(name) => f.debug_tuple("EndElement").field(&Bytes(name)).finish(),
        }
    }
}

/// A [`Handler`] that records all events in order.
///
/// # Example
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use inplace_xml::events::{Event::*, Recorder};
/// use inplace_xml::{parse, Flags};
///
/// let mut xml = b"<a x='1'>hi</a>".to_vec();
/// let mut recorder = Recorder::default();
/// parse(&mut xml, Flags::DEFAULT, &mut recorder).unwrap();
/// assert_eq!(
///     recorder.events,
///     [
///         StartDocument,
///         StartElement(b"a"),
///         Attribute(b"x", b"1"),
///         EndAttributes,
///         Text(b"hi"),
///         EndElement(b"a"),
///         EndDocument,
///     ]
/// );
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Recorder<'a> {
    /// Events in the order of their arrival
    pub events: Vec<Event<'a>>,
}

impl<'a> Recorder<'a> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events, consuming the recorder.
    pub fn into_events(self) -> Vec<Event<'a>> {
        self.events
    }
}

impl<'a> Handler<'a> for Recorder<'a> {
    fn start_document(&mut self) -> Result<()> {
        self.events.push(Event::StartDocument);
        Ok(())
    }

    fn end_document(&mut self) -> Result<()> {
        self.events.push(Event::EndDocument);
        Ok(())
    }

    fn xml_declaration(
        &mut self,
        version: &'a [u8],
        encoding: Option<&'a [u8]>,
        standalone: Option<&'a [u8]>,
    ) -> Result<()> {
        self.events.push(Event::Declaration {
            version,
            encoding,
            standalone,
        });
        Ok(())
    }

    fn start_element(&mut self, name: &'a [u8]) -> Result<()> {
        self.events.push(Event::StartElement(name));
        Ok(())
    }

    fn attribute(&mut self, name: &'a [u8], value: &'a [u8]) -> Result<()> {
        self.events.push(Event::Attribute(name, value));
        Ok(())
    }

    fn end_attributes(&mut self) -> Result<()> {
        self.events.push(Event::EndAttributes);
        Ok(())
    }

    fn text(&mut self, data: &'a [u8]) -> Result<()> {
        self.events.push(Event::Text(data));
        Ok(())
    }

    fn comment(&mut self, data: &'a [u8]) -> Result<()> {
        self.events.push(Event::Comment(data));
        Ok(())
    }

    fn cdata(&mut self, data: &'a [u8]) -> Result<()> {
        self.events.push(Event::CData(data));
        Ok(())
    }

    fn processing_instruction(&mut self, target: &'a [u8], content: &'a [u8]) -> Result<()> {
        self.events.push(Event::PI(target, content));
        Ok(())
    }

    fn end_element(&mut self, name: &'a [u8]) -> Result<()> {
        self.events.push(Event::EndElement(name));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", Event::Attribute(b"a", b"say \"hi\"\n")),
            r#"Attribute("a", "say \"hi\"0xA")"#
        );
        assert_eq!(
            format!(
                "{:?}",
                Event::Declaration {
                    version: b"1.0",
                    encoding: None,
                    standalone: Some(&b"yes"[..]),
                }
            ),
            r#"Declaration { version: "1.0", encoding: None, standalone: Some("yes") }"#
        );
    }
}
