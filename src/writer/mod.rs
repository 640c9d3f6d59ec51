// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::iter;

mod options;

pub use self::options::*;

use crate::{
    Attribute,
    Canvas,
    Namespace,
    Node,
    NodeType,
    WriteBuffer,
    XLINK_NS,
};

/// An indent counter.
struct Depth {
    /// Current depth.
    value: u32,
    block: Vec<u8>,
}

impl Depth {
    /// Creates a new `Depth`.
    #[inline]
    fn new(indent: Indent) -> Depth {
        Depth {
            value: 0,
            block: Depth::gen_indent(indent),
        }
    }

    fn gen_indent(indent: Indent) -> Vec<u8> {
        match indent {
            Indent::None => Vec::new(),
            Indent::Spaces(n) => vec![b' '; n as usize],
            Indent::Tabs => vec![b'\t'],
        }
    }

    /// Writes an indent to the buffer.
    #[inline]
    fn write_indent(&self, buf: &mut Vec<u8>) {
        for _ in 0..self.value {
            buf.extend_from_slice(&self.block);
        }
    }
}

/// Writer state shared by all nodes of a single output.
struct State<'a> {
    opt: &'a WriteOptions,
    depth: Depth,
    attrs_depth: Depth,
    /// Namespace bindings declared by the currently open elements.
    scope: Vec<Namespace>,
}

/// Serializes a node as a standalone SVG document.
///
/// A fresh `svg` root is created from the canvas metadata, with `viewBox`, `width`,
/// `height` and `xmlns` attributes written in that order. A deep copy of `node`
/// becomes its only child.
///
/// # Examples
///
/// ```
/// use svgparts::{serialize, Canvas, Node};
///
/// let mut canvas = Canvas::default();
/// canvas.view_box = Some("0 0 10 10".to_string());
///
/// let mut circle = Node::new_element("circle");
/// circle.set_attribute("r", "1");
///
/// assert_eq!(serialize(&canvas, &circle),
///     "<svg viewBox=\"0 0 10 10\" xmlns=\"http://www.w3.org/2000/svg\"><circle r=\"1\"/></svg>");
/// ```
pub fn serialize(canvas: &Canvas, node: &Node) -> String {
    serialize_with_opt(canvas, node, &WriteOptions::default())
}

/// Serializes a node as a standalone SVG document using a supplied `WriteOptions`.
pub fn serialize_with_opt(canvas: &Canvas, node: &Node, opt: &WriteOptions) -> String {
    let root = canvas.wrap(iter::once(node.clone()));
    write_to_string(&root, &canvas.xmlns, opt)
}

/// Writes a top-level `svg` element into a string.
pub(crate) fn write_to_string(root: &Node, xmlns: &str, opt: &WriteOptions) -> String {
    let mut out = Vec::with_capacity(256);
    write_svg(root, xmlns, opt, &mut out);
    String::from_utf8_lossy(&out).into_owned()
}

/// Writes a top-level element with namespace declarations.
///
/// `xmlns` is written after the element's own attributes, unless already present.
/// It's followed by a declaration of every prefix used in the tree. The first binding
/// of a prefix wins, other bindings are declared on the elements that use them.
/// `xmlns:xlink` is added when some attribute uses the `xlink` prefix without a binding.
pub(crate) fn write_svg(root: &Node, xmlns: &str, opt: &WriteOptions, out: &mut Vec<u8>) {
    let mut state = State::new(opt);
    state.scope.push(Namespace::new("", xmlns));

    for ns in root.descendants().flat_map(|n| n.namespaces()) {
        if !ns.prefix.is_empty() && state.lookup(&ns.prefix).is_none() {
            state.scope.push(ns.clone());
        }
    }

    let xlink_needed = root.descendants()
        .flat_map(|n| n.attributes().iter())
        .any(|a| a.prefix() == Some("xlink"));
    if xlink_needed && state.lookup("xlink").is_none() {
        state.scope.push(Namespace::new("xlink", XLINK_NS));
    }

    let mut decls = Vec::new();
    for ns in &state.scope {
        let name = ns.attribute_name();
        if !root.has_attribute(&name) {
            decls.push(Attribute::new(name, ns.uri.as_str()));
        }
    }

    write_element(root, &decls, &mut state, out);
}

/// Writes a node without namespace declarations of its parents.
pub(crate) fn write_node(node: &Node, opt: &WriteOptions, out: &mut Vec<u8>) {
    let mut state = State::new(opt);
    match node.node_type() {
        NodeType::Element => write_element(node, &[], &mut state, out),
        NodeType::Text => write_escaped_text(node.text(), out),
    }
}

impl<'a> State<'a> {
    fn new(opt: &'a WriteOptions) -> Self {
        let mut attrs_depth = Depth::new(opt.attributes_indent);
        attrs_depth.value += 1;

        State {
            opt,
            depth: Depth::new(opt.indent),
            attrs_depth,
            scope: Vec::new(),
        }
    }

    fn lookup(&self, prefix: &str) -> Option<&str> {
        self.scope.iter().rev().find(|ns| ns.prefix == prefix).map(|ns| ns.uri.as_str())
    }

    /// Opens a scope for the node bindings that are not declared yet.
    ///
    /// Returns the declarations to write and the previous scope length.
    fn open_scope(&mut self, node: &Node, extra_attrs: &[Attribute]) -> (Vec<Attribute>, usize) {
        let len = self.scope.len();
        let mut attrs = extra_attrs.to_vec();

        for ns in node.namespaces() {
            if self.lookup(&ns.prefix) != Some(ns.uri.as_str()) {
                attrs.push(Attribute::new(ns.attribute_name(), ns.uri.as_str()));
                self.scope.push(ns.clone());
            }
        }

        (attrs, len)
    }
}

fn write_element(node: &Node, extra_attrs: &[Attribute], state: &mut State, out: &mut Vec<u8>) {
    state.depth.write_indent(out);

    // Indention inside a text is not allowed, because it will change the text.
    if node.nodes().iter().any(|c| c.is_text()) {
        write_text_elem(node, extra_attrs, state, out);
        write_newline(state.opt.indent, out);
        return;
    }

    let (attrs, scope_len) = state.open_scope(node, extra_attrs);
    write_element_start(node, &attrs, state, out);

    if !node.nodes().is_empty() {
        state.depth.value += 1;
        write_newline(state.opt.indent, out);

        for child in node.children() {
            write_element(child, &[], state, out);
        }

        state.depth.value -= 1;
        state.depth.write_indent(out);
    }

    write_element_end(node, out);
    write_newline(state.opt.indent, out);
    state.scope.truncate(scope_len);
}

/// Writes an element start.
///
/// Order:
/// - `<`
/// - tag name
/// - attributes
/// - extra attributes, like namespace declarations
/// - `>`, if a node has children
fn write_element_start(node: &Node, extra_attrs: &[Attribute], state: &State, out: &mut Vec<u8>) {
    out.push(b'<');
    out.extend_from_slice(node.tag_name().as_bytes());

    for attr in node.attributes().iter().chain(extra_attrs) {
        write_attribute(attr, state, out);
    }

    if !node.nodes().is_empty() {
        out.push(b'>');
    }
}

fn write_attribute(attr: &Attribute, state: &State, out: &mut Vec<u8>) {
    if state.opt.attributes_indent == Indent::None {
        out.push(b' ');
    } else {
        out.push(b'\n');
        state.depth.write_indent(out);
        state.attrs_depth.write_indent(out);
    }

    attr.write_buf_opt(state.opt, out);
}

/// Writes an element, that contains text, and it's children without indention.
fn write_text_elem(node: &Node, extra_attrs: &[Attribute], state: &mut State, out: &mut Vec<u8>) {
    let (attrs, scope_len) = state.open_scope(node, extra_attrs);
    write_element_start(node, &attrs, state, out);

    for child in node.nodes() {
        match child.node_type() {
            NodeType::Element => write_text_elem(child, &[], state, out),
            NodeType::Text => write_escaped_text(child.text(), out),
        }
    }

    write_element_end(node, out);
    state.scope.truncate(scope_len);
}

/// Writes an element closing tag.
fn write_element_end(node: &Node, out: &mut Vec<u8>) {
    if node.nodes().is_empty() {
        out.extend_from_slice(b"/>");
    } else {
        out.extend_from_slice(b"</");
        out.extend_from_slice(node.tag_name().as_bytes());
        out.push(b'>');
    }
}

/// Writes a new line.
#[inline]
fn write_newline(indent: Indent, out: &mut Vec<u8>) {
    if indent != Indent::None {
        out.push(b'\n');
    }
}

fn write_escaped_text(text: &str, out: &mut Vec<u8>) {
    for c in text.as_bytes() {
        match *c {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            _ => out.push(*c),
        }
    }
}

/// Writes an attribute value.
///
/// Whitespace characters are written as character references,
/// otherwise an XML parser will normalize them into spaces.
pub(crate) fn write_escaped_attribute(value: &str, use_single_quote: bool, out: &mut Vec<u8>) {
    for c in value.as_bytes() {
        match *c {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            b'"' if !use_single_quote => out.extend_from_slice(b"&quot;"),
            b'\'' if use_single_quote => out.extend_from_slice(b"&apos;"),
            b'\n' => out.extend_from_slice(b"&#10;"),
            b'\r' => out.extend_from_slice(b"&#13;"),
            b'\t' => out.extend_from_slice(b"&#9;"),
            _ => out.push(*c),
        }
    }
}
