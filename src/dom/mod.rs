// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

pub use self::canvas::Canvas;
pub use self::document::Document;
pub use self::iterators::*;
pub use self::namespace::Namespace;
pub use self::node::Node;

mod canvas;
mod document;
mod iterators;
mod namespace;
mod node;

/// List of supported node types.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NodeType {
    /// Element node.
    ///
    /// Only an element can have attributes, tag name and children.
    Element,
    /// Text node.
    ///
    /// Whitespace-only text is never stored.
    Text,
}
