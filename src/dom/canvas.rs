// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::attribute::names;
use crate::{
    Node,
    SVG_NS,
};

/// Canvas metadata of a document.
///
/// It's captured from the root `svg` element during parsing and copied
/// unchanged into every document derived from it.
#[derive(Clone, PartialEq, Debug)]
pub struct Canvas {
    /// The `viewBox` attribute.
    pub view_box: Option<String>,
    /// The `width` attribute.
    pub width: Option<String>,
    /// The `height` attribute.
    pub height: Option<String>,
    /// The default namespace.
    pub xmlns: String,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas {
            view_box: None,
            width: None,
            height: None,
            xmlns: SVG_NS.to_string(),
        }
    }
}

impl Canvas {
    /// Captures canvas metadata from the root element.
    ///
    /// Empty attributes are treated as missing. When `xmlns` is `None`,
    /// the default SVG namespace is used.
    pub fn from_root(root: &Node, xmlns: Option<&str>) -> Canvas {
        fn non_empty(root: &Node, name: &str) -> Option<String> {
            root.attribute(name).filter(|v| !v.is_empty()).map(String::from)
        }

        let xmlns = xmlns
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| SVG_NS.to_string());

        Canvas {
            view_box: non_empty(root, names::VIEW_BOX),
            width: non_empty(root, names::WIDTH),
            height: non_empty(root, names::HEIGHT),
            xmlns,
        }
    }

    /// Creates a fresh `svg` element with `viewBox`, `width` and `height` attributes.
    ///
    /// The namespace is not stored as an attribute. The writer appends it
    /// after all attributes of the top-level element.
    pub fn to_root(&self) -> Node {
        let mut root = Node::new_element("svg");

        let attrs = [
            (names::VIEW_BOX, &self.view_box),
            (names::WIDTH, &self.width),
            (names::HEIGHT, &self.height),
        ];

        for &(name, value) in &attrs {
            if let Some(ref value) = *value {
                root.set_attribute(name, value.as_str());
            }
        }

        root
    }

    /// Creates a fresh `svg` element and appends the selected nodes to it.
    pub fn wrap<I>(&self, children: I) -> Node
        where I: IntoIterator<Item = Node>
    {
        let mut root = self.to_root();
        for child in children {
            root.append(child);
        }

        root
    }
}
