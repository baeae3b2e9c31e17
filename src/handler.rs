//! The callback interface through which a parser reports a document.

use crate::errors::Result;

/// Receives parse events, synchronously and in document order.
///
/// Every slice passed to a handler points into the parsed buffer and lives as
/// long as the buffer borrow `'a`. Slices are already decoded according to
/// the [`Flags`] in effect.
///
/// All methods have a default implementation that ignores the event, so a
/// handler implements only what it is interested in. Returning an error from
/// any method aborts parsing; the error is returned from the parse call
/// unchanged.
///
/// For every element the calls are ordered as follows:
///
/// ```text
/// start_element attribute* end_attributes (text | comment | cdata |
///     processing_instruction | <nested element>)* end_element
/// ```
///
/// `end_attributes` is called exactly once for each element, including
/// self-closing elements and elements without attributes.
///
/// # Example
///
/// ```
/// # use pretty_assertions::assert_eq;
/// use inplace_xml::{parse, Flags, Handler, Result};
///
/// #[derive(Default)]
/// struct Titles<'a>(Vec<&'a [u8]>);
///
/// impl<'a> Handler<'a> for Titles<'a> {
///     fn attribute(&mut self, name: &'a [u8], value: &'a [u8]) -> Result<()> {
///         if name == b"title" {
///             self.0.push(value);
///         }
///         Ok(())
///     }
/// }
///
/// let mut xml = br#"<books><book title="Dune"/><book title="Solaris"/></books>"#.to_vec();
/// let mut titles = Titles::default();
/// parse(&mut xml, Flags::DEFAULT, &mut titles).unwrap();
/// assert_eq!(titles.0, [&b"Dune"[..], b"Solaris"]);
/// ```
///
/// [`Flags`]: crate::Flags
#[allow(unused_variables)]
pub trait Handler<'a> {
    /// Called once before anything else.
    fn start_document(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once after the whole document was parsed successfully.
    fn end_document(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called after a well-formed XML declaration `<?xml ...?>`. Values are
    /// reported without quotes and are not interpreted: an `encoding` does not
    /// change how the rest of the document is read.
    fn xml_declaration(
        &mut self,
        version: &'a [u8],
        encoding: Option<&'a [u8]>,
        standalone: Option<&'a [u8]>,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when an element tag name has been read, before its attributes.
    fn start_element(&mut self, name: &'a [u8]) -> Result<()> {
        Ok(())
    }

    /// Called for each attribute of the current element.
    fn attribute(&mut self, name: &'a [u8], value: &'a [u8]) -> Result<()> {
        Ok(())
    }

    /// Called after the last attribute of the current element.
    fn end_attributes(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called for every non-empty run of character data.
    fn text(&mut self, data: &'a [u8]) -> Result<()> {
        Ok(())
    }

    /// Called with the content of a `<!--...-->` comment.
    fn comment(&mut self, data: &'a [u8]) -> Result<()> {
        Ok(())
    }

    /// Called with the content of a `<![CDATA[...]]>` section. It is never
    /// decoded.
    fn cdata(&mut self, data: &'a [u8]) -> Result<()> {
        Ok(())
    }

    /// Called for a `<?target content?>` processing instruction.
    fn processing_instruction(&mut self, target: &'a [u8], content: &'a [u8]) -> Result<()> {
        Ok(())
    }

    /// Called when an element is closed, either by a closing tag or because
    /// it was self-closing.
    fn end_element(&mut self, name: &'a [u8]) -> Result<()> {
        Ok(())
    }
}

impl<'a, H: Handler<'a> + ?Sized> Handler<'a> for &mut H {
    #[inline]
    fn start_document(&mut self) -> Result<()> {
        (**self).start_document()
    }

    #[inline]
    fn end_document(&mut self) -> Result<()> {
        (**self).end_document()
    }

    #[inline]
    fn xml_declaration(
        &mut self,
        version: &'a [u8],
        encoding: Option<&'a [u8]>,
        standalone: Option<&'a [u8]>,
    ) -> Result<()> {
        (**self).xml_declaration(version, encoding, standalone)
    }

    #[inline]
    fn start_element(&mut self, name: &'a [u8]) -> Result<()> {
        (**self).start_element(name)
    }

    #[inline]
    fn attribute(&mut self, name: &'a [u8], value: &'a [u8]) -> Result<()> {
        (**self).attribute(name, value)
    }

    #[inline]
    fn end_attributes(&mut self) -> Result<()> {
        (**self).end_attributes()
    }

    #[inline]
    fn text(&mut self, data: &'a [u8]) -> Result<()> {
        (**self).text(data)
    }

    #[inline]
    fn comment(&mut self, data: &'a [u8]) -> Result<()> {
        (**self).comment(data)
    }

    #[inline]
    fn cdata(&mut self, data: &'a [u8]) -> Result<()> {
        (**self).cdata(data)
    }

    #[inline]
    fn processing_instruction(&mut self, target: &'a [u8], content: &'a [u8]) -> Result<()> {
        (**self).processing_instruction(target, content)
    }

    #[inline]
    fn end_element(&mut self, name: &'a [u8]) -> Result<()> {
        (**self).end_element(name)
    }
}

/// A handler that ignores every event. Useful to check that a document is
/// well-formed.
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoredAny;

impl<'a> Handler<'a> for IgnoredAny {}
