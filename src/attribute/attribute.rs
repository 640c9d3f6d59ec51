// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

use crate::{
    ToStringWithOptions,
    WriteBuffer,
    WriteOptions,
};
use crate::writer::write_escaped_attribute;

/// Names of the presentation attributes that can be changed via [`ColorSpec`].
///
/// [`ColorSpec`]: struct.ColorSpec.html
pub mod names {
    /// `fill`
    pub const FILL: &str = "fill";
    /// `stroke`
    pub const STROKE: &str = "stroke";
    /// `fill-opacity`
    pub const FILL_OPACITY: &str = "fill-opacity";
    /// `stroke-opacity`
    pub const STROKE_OPACITY: &str = "stroke-opacity";
    /// `id`
    pub const ID: &str = "id";
    /// `viewBox`
    pub const VIEW_BOX: &str = "viewBox";
    /// `width`
    pub const WIDTH: &str = "width";
    /// `height`
    pub const HEIGHT: &str = "height";
}

/// Representation of the SVG attribute object.
///
/// The value is always stored as is. No numeric or unit parsing is performed.
#[derive(PartialEq, Clone, Debug)]
pub struct Attribute {
    /// Attribute name.
    ///
    /// Namespaced attributes use a prefix, like `xlink:href`.
    pub name: String,
    /// Attribute value.
    pub value: String,
}

impl Attribute {
    /// Constructs a new attribute.
    pub fn new<N, V>(name: N, value: V) -> Attribute
        where N: Into<String>, V: Into<String>
    {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the name prefix, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgparts::Attribute;
    ///
    /// assert_eq!(Attribute::new("xlink:href", "#a").prefix(), Some("xlink"));
    /// assert_eq!(Attribute::new("fill", "red").prefix(), None);
    /// ```
    pub fn prefix(&self) -> Option<&str> {
        self.name.find(':').map(|idx| &self.name[..idx])
    }
}

fn write_quote(opt: &WriteOptions, out: &mut Vec<u8>) {
    out.push(if opt.use_single_quote { b'\'' } else { b'"' });
}

impl WriteBuffer for Attribute {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.name.as_bytes());
        buf.push(b'=');
        write_quote(opt, buf);
        write_escaped_attribute(&self.value, opt.use_single_quote, buf);
        write_quote(opt, buf);
    }
}

impl_display!(Attribute);
