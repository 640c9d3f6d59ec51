// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Options that defines SVG parsing.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Allow an internal DTD.
    ///
    /// Enables documents that declare their own entities, like the ones exported
    /// by Adobe Illustrator.
    ///
    /// Default: disabled
    pub allow_dtd: bool,

    /// Maximum number of XML nodes in a document.
    ///
    /// Default: `u32::MAX`
    pub nodes_limit: u32,

    /// Add unknown elements to the DOM during parsing.
    ///
    /// An element is unknown when its namespace differs from the namespace
    /// of the root element, like `sodipodi:namedview` in Inkscape files.
    /// Such elements are stored using their local name.
    ///
    /// Default: enabled
    pub parse_unknown_elements: bool,
}

impl Default for ParseOptions {
    fn default() -> ParseOptions {
        ParseOptions {
            allow_dtd: false,
            nodes_limit: ::std::u32::MAX,
            parse_unknown_elements: true,
        }
    }
}
