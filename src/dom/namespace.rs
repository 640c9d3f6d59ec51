// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A namespace binding required by an element.
///
/// An empty prefix binds the default namespace.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Namespace {
    /// Namespace prefix, like `rdf`.
    pub prefix: String,
    /// Namespace URI.
    pub uri: String,
}

impl Namespace {
    /// Constructs a new namespace binding.
    pub fn new<P, U>(prefix: P, uri: U) -> Namespace
        where P: Into<String>, U: Into<String>
    {
        Namespace {
            prefix: prefix.into(),
            uri: uri.into(),
        }
    }

    /// Returns the declaration attribute name: `xmlns` or `xmlns:prefix`.
    pub fn attribute_name(&self) -> String {
        if self.prefix.is_empty() {
            "xmlns".to_string()
        } else {
            format!("xmlns:{}", self.prefix)
        }
    }
}
