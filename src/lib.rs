// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
This library splits, groups, merges and recolors SVG documents.

Every operation works on a simple owned tree:

- [`Document`]
    - [`Canvas`] (`viewBox`, `width`, `height` and `xmlns` of the source)
    - root [`Node`] (always an `svg` element)
        - [`Node`]
            - tag name
            - [`Attributes`]
            - children
        - [`Node`]
        - ...

Unlike a classical DOM, nodes are plain values. A node belongs to exactly one parent
and `Clone` performs a deep copy. All derived documents (split fragments, compositions)
are built from such copies, so they never share anything with their source.

Only element and text nodes are stored. Comments, processing instructions
and whitespace-only text are dropped during parsing.

# Example

```
let text = "<svg viewBox='0 0 10 10'><g><circle r='1'/><rect width='2' height='2'/></g></svg>";

let parts = svgparts::split(text).unwrap();
assert_eq!(parts.len(), 2);
assert_eq!(parts[0],
    "<svg viewBox=\"0 0 10 10\" xmlns=\"http://www.w3.org/2000/svg\"><circle r=\"1\"/></svg>");

let joined = svgparts::group(&parts).unwrap();
assert_eq!(joined,
    "<svg viewBox=\"0 0 10 10\" xmlns=\"http://www.w3.org/2000/svg\">\
     <g id=\"svg-group\"><circle r=\"1\"/><rect width=\"2\" height=\"2\"/></g></svg>");
```

[`Attributes`]: struct.Attributes.html
[`Canvas`]: struct.Canvas.html
[`Document`]: struct.Document.html
[`Node`]: struct.Node.html
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use crate::attribute::*;
pub use crate::color::*;
pub use crate::compose::*;
pub use crate::dom::*;
pub use crate::element_kind::*;
pub use crate::error::{Error, ParserError, Result};
pub use crate::parser::ParseOptions;
pub use crate::split::*;
pub use crate::traits::*;
pub use crate::writer::{serialize, serialize_with_opt, Indent, WriteOptions};

pub use svgtypes::Color;

#[macro_use]
mod traits;

mod attribute;
mod color;
mod compose;
mod dom;
mod element_kind;
mod error;
mod parser;
mod split;
mod writer;

/// The default SVG namespace.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The XLink namespace.
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// The XML namespace.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";
