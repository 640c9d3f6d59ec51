// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

/// A semantic kind of an element.
///
/// Only `Group` is a container. All other kinds are leaves for the
/// split and recolor operations, even if they have children.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ElementKind {
    /// `path`
    Path,
    /// `g`
    Group,
    /// `circle`
    Circle,
    /// `rect`
    Rect,
    /// `ellipse`
    Ellipse,
    /// `line`
    Line,
    /// `polyline`
    Polyline,
    /// `polygon`
    Polygon,
    /// `text`
    Text,
    /// Any other element, including unknown ones.
    Other,
}

/// Classifies a tag name.
///
/// Shorthand for `ElementKind::from_tag`.
#[inline]
pub fn classify(tag_name: &str) -> ElementKind {
    ElementKind::from_tag(tag_name)
}

macro_rules! is_func {
    ($name:ident, $($pattern:tt)+) => (
        #[allow(missing_docs)]
        #[inline]
        pub fn $name(&self) -> bool {
            match *self {
                $($pattern)+ => true,
                _ => false,
            }
        }
    )
}

impl ElementKind {
    /// Classifies a tag name.
    ///
    /// Matching is case-insensitive. Unknown tags are never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgparts::ElementKind;
    ///
    /// assert_eq!(ElementKind::from_tag("g"), ElementKind::Group);
    /// assert_eq!(ElementKind::from_tag("Circle"), ElementKind::Circle);
    /// assert_eq!(ElementKind::from_tag("linearGradient"), ElementKind::Other);
    /// ```
    pub fn from_tag(tag_name: &str) -> ElementKind {
        const KINDS: &[(&str, ElementKind)] = &[
            ("path", ElementKind::Path),
            ("g", ElementKind::Group),
            ("circle", ElementKind::Circle),
            ("rect", ElementKind::Rect),
            ("ellipse", ElementKind::Ellipse),
            ("line", ElementKind::Line),
            ("polyline", ElementKind::Polyline),
            ("polygon", ElementKind::Polygon),
            ("text", ElementKind::Text),
        ];

        KINDS.iter()
            .find(|&&(name, _)| name.eq_ignore_ascii_case(tag_name))
            .map(|&(_, kind)| kind)
            .unwrap_or(ElementKind::Other)
    }

    /// Returns the kind name.
    pub fn as_str(&self) -> &'static str {
        match *self {
            ElementKind::Path => "path",
            ElementKind::Group => "group",
            ElementKind::Circle => "circle",
            ElementKind::Rect => "rect",
            ElementKind::Ellipse => "ellipse",
            ElementKind::Line => "line",
            ElementKind::Polyline => "polyline",
            ElementKind::Polygon => "polygon",
            ElementKind::Text => "text",
            ElementKind::Other => "other",
        }
    }

    is_func!(is_group, ElementKind::Group);

    // List: `path`, `rect`, `circle`, `ellipse`, `line`, `polyline` and `polygon`.
    is_func!(is_shape,
          ElementKind::Path
        | ElementKind::Rect
        | ElementKind::Circle
        | ElementKind::Ellipse
        | ElementKind::Line
        | ElementKind::Polyline
        | ElementKind::Polygon);
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
