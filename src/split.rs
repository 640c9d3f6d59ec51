// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use log::debug;

use crate::error::Result;
use crate::{
    serialize,
    Attributes,
    Canvas,
    Document,
    ElementKind,
};

/// A single element extracted from a document.
#[derive(Clone, PartialEq, Debug)]
pub struct Fragment {
    /// Kind of the extracted element.
    pub kind: ElementKind,
    /// A copy of the element attributes.
    pub attributes: Attributes,
    /// A standalone SVG document that contains only this element.
    pub svg: String,
}

/// Result of the [`decompose`] function.
///
/// [`decompose`]: fn.decompose.html
#[derive(Clone, PartialEq, Debug)]
pub struct Decomposition {
    /// Canvas metadata of the source document.
    pub canvas: Canvas,
    /// All non-group elements of the source document, in document order.
    pub fragments: Vec<Fragment>,
}

/// Splits an SVG document into one standalone document per element.
///
/// All groups are unwrapped, at any depth. Every other element becomes
/// a separate document with the canvas metadata of the source.
///
/// # Examples
///
/// ```
/// let parts = svgparts::split("<svg><g><g><path d='M0 0'/></g></g><rect/></svg>").unwrap();
///
/// assert_eq!(parts, [
///     "<svg xmlns=\"http://www.w3.org/2000/svg\"><path d=\"M0 0\"/></svg>",
///     "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/></svg>",
/// ]);
/// ```
pub fn split(text: &str) -> Result<Vec<String>> {
    let doc = Document::parse(text)?;
    Ok(split_document(&doc))
}

/// Splits a parsed document into one standalone document per element.
///
/// See [`split`](fn.split.html) for details.
pub fn split_document(doc: &Document) -> Vec<String> {
    let list: Vec<_> = doc.leaves()
        .map(|node| serialize(doc.canvas(), node))
        .collect();

    debug!("Document split into {} part(s).", list.len());

    list
}

/// Splits an SVG document by element kinds.
///
/// Elements are classified first and only `Group` elements are unwrapped,
/// which leads to the same result as [`split`](fn.split.html).
pub fn split_shallow(text: &str) -> Result<Vec<String>> {
    let decomposition = decompose(text)?;
    Ok(decomposition.fragments.into_iter().map(|f| f.svg).collect())
}

/// Splits an SVG document and keeps an information about each element.
///
/// # Examples
///
/// ```
/// use svgparts::ElementKind;
///
/// let d = svgparts::decompose("<svg width='5'><g><circle r='1'/></g><text>Hi</text></svg>").unwrap();
///
/// assert_eq!(d.canvas.width.as_ref().map(String::as_str), Some("5"));
/// assert_eq!(d.fragments.len(), 2);
/// assert_eq!(d.fragments[0].kind, ElementKind::Circle);
/// assert_eq!(d.fragments[0].attributes.get_value("r"), Some("1"));
/// assert_eq!(d.fragments[1].kind, ElementKind::Text);
/// assert_eq!(d.fragments[1].svg,
///     "<svg width=\"5\" xmlns=\"http://www.w3.org/2000/svg\"><text>Hi</text></svg>");
/// ```
pub fn decompose(text: &str) -> Result<Decomposition> {
    let doc = Document::parse(text)?;

    let fragments: Vec<_> = doc.leaves()
        .map(|node| {
            Fragment {
                kind: node.kind(),
                attributes: node.attributes().clone(),
                svg: serialize(doc.canvas(), node),
            }
        })
        .collect();

    debug!("Document decomposed into {} fragment(s).", fragments.len());

    let (_, canvas) = doc.into_parts();
    Ok(Decomposition { canvas, fragments })
}
