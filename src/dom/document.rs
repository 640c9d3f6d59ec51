// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;

use crate::parser::parse_svg;
use crate::writer;
use crate::{
    ParseOptions,
    ParserError,
    ToStringWithOptions,
    WriteBuffer,
    WriteOptions,
};

use super::canvas::Canvas;
use super::iterators::{Descendants, Leaves};
use super::node::Node;

/// A parsed SVG document.
///
/// Contains a root `svg` element and the canvas metadata captured from it.
#[derive(Clone, PartialEq, Debug)]
pub struct Document {
    root: Node,
    canvas: Canvas,
}

impl Document {
    /// Constructs a new, empty `Document` with the selected canvas.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgparts::{Canvas, Document};
    ///
    /// let doc = Document::new(Canvas::default());
    /// assert_eq!(doc.to_string(), "<svg xmlns=\"http://www.w3.org/2000/svg\"/>");
    /// ```
    pub fn new(canvas: Canvas) -> Document {
        Document {
            root: canvas.to_root(),
            canvas,
        }
    }

    /// Constructs a new `Document` from the text using a default `ParseOptions`.
    pub fn parse(text: &str) -> Result<Document, ParserError> {
        Document::parse_with_opt(text, &ParseOptions::default())
    }

    /// Constructs a new `Document` from the text using a supplied `ParseOptions`.
    pub fn parse_with_opt(text: &str, opt: &ParseOptions) -> Result<Document, ParserError> {
        parse_svg(text, opt)
    }

    pub(crate) fn from_parts(root: Node, canvas: Canvas) -> Document {
        debug_assert!(root.has_tag_name("svg"));
        Document { root, canvas }
    }

    /// Returns the root `svg` element.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns a mutable reference to the root `svg` element.
    #[inline]
    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Returns the canvas metadata.
    #[inline]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Returns an iterator over the root element and its descendants.
    #[inline]
    pub fn descendants(&self) -> Descendants {
        self.root.descendants()
    }

    /// Returns an iterator over all non-group elements.
    #[inline]
    pub fn leaves(&self) -> Leaves {
        self.root.leaves()
    }

    /// Returns the number of elements that can be addressed by index.
    ///
    /// Same as `leaves().count()`.
    pub fn element_count(&self) -> usize {
        self.leaves().count()
    }

    /// Unwraps the document into a root element and canvas.
    pub fn into_parts(self) -> (Node, Canvas) {
        (self.root, self.canvas)
    }
}

impl FromStr for Document {
    type Err = ParserError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Document::parse(text)
    }
}

impl WriteBuffer for Document {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        writer::write_svg(&self.root, &self.canvas.xmlns, opt, buf);
    }
}

impl_display!(Document);
