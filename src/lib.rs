//! Destructive in-place XML parser.
//!
//! The parser reads a mutable byte buffer holding a whole document and
//! reports what it finds to a [`Handler`], SAX-style. Instead of allocating,
//! it decodes references and normalizes whitespace by rewriting the buffer
//! itself, so every name, value and text run handed to the handler is a
//! slice of the original buffer. After a parse the buffer contents are
//! unspecified.
//!
//! What is decoded is controlled by [`Flags`]:
//!
//! - [`Flags::TRIM_SPACE`] drops leading and trailing whitespace of text runs,
//!   and whitespace-only runs altogether;
//! - [`Flags::NORMALIZE_SPACE`] collapses whitespace runs inside text into one
//!   space;
//! - [`Flags::ENTITY_TRANSLATION`] decodes `&...;` references in text and
//!   attribute values;
//! - [`Flags::CLOSING_TAG_VALIDATE`] makes the parser report end tags without
//!   comparing them with the opened element.
//!
//! Only UTF-8 (and other ASCII-compatible) input is understood, and the
//! document type declaration (`<!DOCTYPE`) is not supported.
//!
//! # Example
//!
//! ```
//! # use pretty_assertions::assert_eq;
//! use inplace_xml::{parse, Flags, Handler, Result};
//!
//! /// Collects the text of every `<name>` element
//! #[derive(Default)]
//! struct Names<'a> {
//!     in_name: bool,
//!     names: Vec<&'a str>,
//! }
//!
//! impl<'a> Handler<'a> for Names<'a> {
//!     fn start_element(&mut self, name: &'a [u8]) -> Result<()> {
//!         self.in_name = name == b"name";
//!         Ok(())
//!     }
//!
//!     fn text(&mut self, data: &'a [u8]) -> Result<()> {
//!         if self.in_name {
//!             let name = std::str::from_utf8(data).map_err(inplace_xml::Error::handler)?;
//!             self.names.push(name);
//!         }
//!         Ok(())
//!     }
//!
//!     fn end_element(&mut self, _name: &'a [u8]) -> Result<()> {
//!         self.in_name = false;
//!         Ok(())
//!     }
//! }
//!
//! let mut xml = br#"<?xml version="1.0" encoding="UTF-8"?>
//! <people>
//!     <person><name>  Tom &amp; Jerry  </name></person>
//!     <person><name>&#x4A;ane</name></person>
//! </people>"#
//!     .to_vec();
//!
//! let mut names = Names::default();
//! parse(&mut xml, Flags::DEFAULT, &mut names)?;
//! assert_eq!(names.names, ["Tom & Jerry", "Jane"]);
//! # Ok::<(), inplace_xml::Error>(())
//! ```
//!
//! # Features
//!
//! `inplace-xml` supports the following features:
#![cfg_attr(feature = "document-features", doc = ::document_features::document_features!())]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[macro_use]
extern crate log;

mod class;
mod config;
mod cursor;
pub mod errors;
pub mod escape;
pub mod events;
pub mod handler;
mod parser;
mod utils;

pub use crate::config::{Config, Flags, DEFAULT_MAX_DEPTH};
pub use crate::errors::{Error, Result, SyntaxError, SyntaxErrorKind};
pub use crate::handler::{Handler, IgnoredAny};
pub use crate::parser::{parse, Parser};
