// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use log::debug;

use crate::attribute::names;
use crate::error::Result;
use crate::writer::write_to_string;
use crate::{
    Document,
    Error,
    Node,
    WriteOptions,
};

/// The `id` of the group created by [`group`](fn.group.html).
pub const GROUP_ID: &str = "svg-group";

/// Combines SVG documents into one document with a single `g` element.
///
/// The group has the `svg-group` id and contains copies of all top-level elements
/// of all documents, in order. Canvas metadata is taken from the first document.
///
/// A single document is returned as is. If any document cannot be parsed,
/// the whole operation fails.
///
/// # Examples
///
/// ```
/// let svg = svgparts::group(&[
///     "<svg viewBox='0 0 10 10'><rect/></svg>",
///     "<svg viewBox='0 0 20 20'><circle/></svg>",
/// ]).unwrap();
///
/// assert_eq!(svg,
///     "<svg viewBox=\"0 0 10 10\" xmlns=\"http://www.w3.org/2000/svg\">\
///      <g id=\"svg-group\"><rect/><circle/></g></svg>");
/// ```
pub fn group<S: AsRef<str>>(inputs: &[S]) -> Result<String> {
    compose(inputs, group_documents)
}

/// Combines SVG documents into one document without an additional group.
///
/// Same as [`group`](fn.group.html), but top-level elements of all documents
/// are placed directly inside the root element.
///
/// # Examples
///
/// ```
/// let svg = svgparts::merge(&["<svg><rect/></svg>", "<svg><circle/><path/></svg>"]).unwrap();
///
/// assert_eq!(svg, "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/><circle/><path/></svg>");
/// ```
pub fn merge<S: AsRef<str>>(inputs: &[S]) -> Result<String> {
    compose(inputs, merge_documents)
}

/// Combines parsed documents into one document with a single `g` element.
///
/// Unlike [`group`](fn.group.html), a single document is serialized as well.
pub fn group_documents(docs: &[Document]) -> Result<String> {
    let first = docs.first().ok_or(Error::EmptyInput)?;

    let mut g = Node::new_element("g");
    g.set_attribute(names::ID, GROUP_ID);
    for node in top_level_nodes(docs) {
        g.append(node);
    }

    let root = first.canvas().wrap(Some(g));
    Ok(write_to_string(&root, &first.canvas().xmlns, &WriteOptions::default()))
}

/// Combines parsed documents into one document without an additional group.
///
/// Unlike [`merge`](fn.merge.html), a single document is serialized as well.
pub fn merge_documents(docs: &[Document]) -> Result<String> {
    let first = docs.first().ok_or(Error::EmptyInput)?;

    let root = first.canvas().wrap(top_level_nodes(docs));
    Ok(write_to_string(&root, &first.canvas().xmlns, &WriteOptions::default()))
}

fn compose<S, F>(inputs: &[S], f: F) -> Result<String>
    where S: AsRef<str>, F: Fn(&[Document]) -> Result<String>
{
    match inputs.len() {
        0 => Err(Error::EmptyInput),
        // A single document is a composition by itself.
        1 => Ok(inputs[0].as_ref().to_string()),
        _ => {
            let docs = inputs.iter()
                .map(|text| Document::parse(text.as_ref()))
                .collect::<::std::result::Result<Vec<_>, _>>()?;

            debug!("Composing {} documents.", docs.len());

            f(&docs)
        }
    }
}

/// Returns copies of the top-level elements of all documents.
fn top_level_nodes<'a>(docs: &'a [Document]) -> impl Iterator<Item = Node> + 'a {
    if let Some((first, rest)) = docs.split_first() {
        for (i, doc) in rest.iter().enumerate() {
            if doc.canvas() != first.canvas() {
                debug!("Canvas of the document #{} is ignored.", i + 1);
            }
        }
    }

    docs.iter().flat_map(|doc| doc.root().children().cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_documents_single_1() {
        let doc = Document::parse("<svg width='1'><rect/></svg>").unwrap();
        assert_eq!(group_documents(&[doc]).unwrap(),
            "<svg width=\"1\" xmlns=\"http://www.w3.org/2000/svg\"><g id=\"svg-group\"><rect/></g></svg>");
    }

    #[test]
    fn merge_documents_empty_1() {
        assert!(matches!(merge_documents(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn sources_are_untouched_1() {
        let docs = vec![
            Document::parse("<svg><rect/></svg>").unwrap(),
            Document::parse("<svg><circle/></svg>").unwrap(),
        ];
        let copy = docs.clone();

        merge_documents(&docs).unwrap();
        assert_eq!(docs, copy);
    }
}
