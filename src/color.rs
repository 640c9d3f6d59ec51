// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use crate::attribute::names;
use crate::error::Result;
use crate::{
    Color,
    Document,
    Error,
    Node,
};

/// A set of presentation attributes to apply.
///
/// `None` leaves an attribute unchanged, `Some` sets it to the selected value.
/// There is no way to remove an attribute.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ColorSpec {
    /// The `fill` attribute.
    pub fill: Option<String>,
    /// The `stroke` attribute.
    pub stroke: Option<String>,
    /// The `fill-opacity` attribute.
    pub fill_opacity: Option<String>,
    /// The `stroke-opacity` attribute.
    pub stroke_opacity: Option<String>,
}

impl ColorSpec {
    /// Constructs a new, empty `ColorSpec`.
    pub fn new() -> Self {
        ColorSpec::default()
    }

    /// Sets the `fill` value.
    pub fn with_fill<T: Into<String>>(mut self, value: T) -> Self {
        self.fill = Some(value.into());
        self
    }

    /// Sets the `stroke` value.
    pub fn with_stroke<T: Into<String>>(mut self, value: T) -> Self {
        self.stroke = Some(value.into());
        self
    }

    /// Sets the `fill-opacity` value.
    pub fn with_fill_opacity<T: Into<String>>(mut self, value: T) -> Self {
        self.fill_opacity = Some(value.into());
        self
    }

    /// Sets the `stroke-opacity` value.
    pub fn with_stroke_opacity<T: Into<String>>(mut self, value: T) -> Self {
        self.stroke_opacity = Some(value.into());
        self
    }

    /// Returns `true` if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attributes().all(|(_, value)| value.is_none())
    }

    /// Sets the present attributes on a single node.
    pub fn apply_to(&self, node: &mut Node) {
        for (name, value) in self.attributes() {
            if let Some(value) = value {
                node.set_attribute(name, value.as_str());
            }
        }
    }

    fn attributes(&self) -> impl Iterator<Item = (&'static str, &Option<String>)> {
        vec![
            (names::FILL, &self.fill),
            (names::STROKE, &self.stroke),
            (names::FILL_OPACITY, &self.fill_opacity),
            (names::STROKE_OPACITY, &self.stroke_opacity),
        ].into_iter()
    }
}

/// Colors extracted from an element.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ColorInfo {
    /// The `fill` attribute.
    pub fill: Option<String>,
    /// The `stroke` attribute.
    pub stroke: Option<String>,
}

/// Applies colors to all elements of the document.
///
/// Every element inside the root is changed, including groups.
/// The root element itself is changed only when it has no child elements.
pub fn apply_color(doc: &mut Document, spec: &ColorSpec) {
    let root = doc.root_mut();

    if !root.has_children() {
        spec.apply_to(root);
        return;
    }

    for child in root.children_mut() {
        child.visit_mut(&mut |node: &mut Node| spec.apply_to(node));
    }
}

/// Applies colors to a single element of the document.
///
/// The index addresses the list of all non-group elements in document order.
/// Groups are transparent and cannot be selected.
pub fn apply_color_to_element(doc: &mut Document, index: isize, spec: &ColorSpec) -> Result<()> {
    let count = doc.element_count();

    let out_of_range = Error::IndexOutOfRange { index, count };
    if index < 0 {
        return Err(out_of_range);
    }

    match doc.root_mut().leaf_mut(index as usize) {
        Some(node) => {
            spec.apply_to(node);
            Ok(())
        }
        None => Err(out_of_range),
    }
}

/// Extracts colors from the document.
///
/// Uses the first shape element (`path`, `circle`, `rect`, `ellipse`,
/// `line`, `polyline` or `polygon`) in document order, or the root
/// element if there are no shapes. Empty attributes are ignored.
pub fn extract_color(doc: &Document) -> ColorInfo {
    let node = doc.descendants()
        .skip(1)
        .find(|n| n.kind().is_shape())
        .unwrap_or_else(|| doc.root());

    let get = |name: &str| {
        node.attribute(name).filter(|v| !v.is_empty()).map(String::from)
    };

    ColorInfo {
        fill: get(names::FILL),
        stroke: get(names::STROKE),
    }
}

/// Parses an SVG document, applies colors to all elements and writes it back.
///
/// # Examples
///
/// ```
/// use svgparts::ColorSpec;
///
/// let spec = ColorSpec::new().with_fill("#00F").with_stroke_opacity("0.5");
/// let svg = svgparts::recolor("<svg><circle/></svg>", &spec).unwrap();
///
/// assert_eq!(svg,
///     "<svg xmlns=\"http://www.w3.org/2000/svg\"><circle fill=\"#00F\" stroke-opacity=\"0.5\"/></svg>");
/// ```
pub fn recolor(text: &str, spec: &ColorSpec) -> Result<String> {
    let mut doc = Document::parse(text)?;
    apply_color(&mut doc, spec);
    Ok(doc.to_string())
}

/// Parses an SVG document, applies colors to a single element and writes it back.
///
/// See [`apply_color_to_element`](fn.apply_color_to_element.html) for details.
pub fn recolor_element(text: &str, index: isize, spec: &ColorSpec) -> Result<String> {
    let mut doc = Document::parse(text)?;
    apply_color_to_element(&mut doc, index, spec)?;
    Ok(doc.to_string())
}

/// Parses an SVG document and extracts its colors.
///
/// # Examples
///
/// ```
/// let colors = svgparts::extract_colors("<svg fill='red'><g><rect stroke='blue'/></g></svg>").unwrap();
///
/// assert_eq!(colors.fill, None);
/// assert_eq!(colors.stroke.as_ref().map(String::as_str), Some("blue"));
/// ```
pub fn extract_colors(text: &str) -> Result<ColorInfo> {
    let doc = Document::parse(text)?;
    Ok(extract_color(&doc))
}

/// Parses a hex color.
///
/// Only the `#rrggbb` notation is supported. The `#` prefix is optional.
///
/// # Examples
///
/// ```
/// use svgparts::{hex_to_rgb, Color};
///
/// assert_eq!(hex_to_rgb("#FF8000"), Some(Color::new_rgb(255, 128, 0)));
/// assert_eq!(hex_to_rgb("ff8000"), Some(Color::new_rgb(255, 128, 0)));
/// assert_eq!(hex_to_rgb("#f80"), None);
/// ```
pub fn hex_to_rgb(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Color::from_str(&format!("#{}", digits)).ok()
}

/// Writes a color using the `#rrggbb` notation.
///
/// # Examples
///
/// ```
/// use svgparts::{rgb_to_hex, Color};
///
/// assert_eq!(rgb_to_hex(Color::new_rgb(255, 128, 0)), "#ff8000");
/// ```
pub fn rgb_to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_is_empty_1() {
        assert!(ColorSpec::new().is_empty());
        assert!(!ColorSpec::new().with_stroke("red").is_empty());
    }

    #[test]
    fn apply_to_order_1() {
        let mut node = Node::new_element("rect");
        node.set_attribute("stroke", "black");

        ColorSpec::new().with_fill("red").with_stroke("blue").apply_to(&mut node);
        assert_eq!(node.to_string(), "<rect stroke=\"blue\" fill=\"red\"/>");
    }

    #[test]
    fn hex_roundtrip_1() {
        let color = hex_to_rgb("#0a0B0c").unwrap();
        assert_eq!((color.red, color.green, color.blue), (10, 11, 12));
        assert_eq!(rgb_to_hex(color), "#0a0b0c");
    }

    #[test]
    fn hex_invalid_1() {
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#"), None);
        assert_eq!(hex_to_rgb("red"), None);
        assert_eq!(hex_to_rgb("#gggggg"), None);
        assert_eq!(hex_to_rgb("#ff00ff00"), None);
        assert_eq!(hex_to_rgb("##ff00ff"), None);
    }
}
