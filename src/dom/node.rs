// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

use crate::{
    Attributes,
    ElementKind,
    ToStringWithOptions,
    WriteBuffer,
    WriteOptions,
};
use crate::writer;
use super::iterators::*;
use super::{Namespace, NodeType};

/// Representation of the SVG node.
///
/// Node consists of:
///  - The `NodeType`, which indicates it's type. It can't be changed.
///  - Tag name, used only by element nodes.
///  - List of attributes, used only by element nodes.
///  - Text data, used only by text nodes.
///  - Namespace bindings required by the tag name and attributes, used only by element nodes.
///  - Ordered list of children.
///
/// Children are owned by the node, so the structure is always a tree.
/// `Clone` creates a deep copy that shares nothing with the original.
#[derive(Clone, PartialEq)]
pub struct Node {
    node_type: NodeType,
    tag_name: String,
    attributes: Attributes,
    text: String,
    namespaces: Vec<Namespace>,
    children: Vec<Node>,
}

impl Node {
    /// Constructs a new element node without attributes and children.
    pub fn new_element<T: Into<String>>(tag_name: T) -> Node {
        Node {
            node_type: NodeType::Element,
            tag_name: tag_name.into(),
            attributes: Attributes::new(),
            text: String::new(),
            namespaces: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Constructs a new text node.
    pub fn new_text<T: Into<String>>(text: T) -> Node {
        Node {
            node_type: NodeType::Text,
            tag_name: String::new(),
            attributes: Attributes::new(),
            text: text.into(),
            namespaces: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns node's type.
    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Returns `true` if the node is an element.
    #[inline]
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Returns `true` if the node is a text.
    #[inline]
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Returns a tag name of the element node.
    ///
    /// The name is stored as it was written in the source, so it can be `linearGradient`.
    /// Text nodes have an empty tag name.
    #[inline]
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Returns `true` if the node has a selected tag name.
    #[inline]
    pub fn has_tag_name(&self, name: &str) -> bool {
        self.is_element() && self.tag_name == name
    }

    /// Returns the element kind of the node.
    ///
    /// Text nodes are always `ElementKind::Other`.
    pub fn kind(&self) -> ElementKind {
        if self.is_element() {
            ElementKind::from_tag(&self.tag_name)
        } else {
            ElementKind::Other
        }
    }

    /// Returns a text data of the text node.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns a reference to the attributes list.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns an attribute value.
    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get_value(name)
    }

    /// Returns namespace bindings required by this element.
    ///
    /// Prefixed names like `rdf:about` are stored as is. The bindings are used
    /// to declare the prefixes during writing.
    #[inline]
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Adds a namespace binding to the element.
    ///
    /// A binding with the same prefix will be overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgparts::{Canvas, Node};
    ///
    /// let mut node = Node::new_element("rdf:RDF");
    /// node.set_namespace("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
    ///
    /// assert_eq!(svgparts::serialize(&Canvas::default(), &node),
    ///     "<svg xmlns=\"http://www.w3.org/2000/svg\" \
    ///      xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\"><rdf:RDF/></svg>");
    /// ```
    pub fn set_namespace<P, U>(&mut self, prefix: P, uri: U)
        where P: Into<String>, U: Into<String>
    {
        debug_assert!(self.is_element());
        let ns = Namespace::new(prefix, uri);
        match self.namespaces.iter_mut().find(|n| n.prefix == ns.prefix) {
            Some(prev) => prev.uri = ns.uri,
            None => self.namespaces.push(ns),
        }
    }

    /// Returns `true` if the node has an attribute with such name.
    #[inline]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Inserts a new attribute into the attributes list.
    ///
    /// An existing attribute with the same name will be overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgparts::Node;
    ///
    /// let mut node = Node::new_element("rect");
    /// node.set_attribute("fill", "red");
    /// node.set_attribute("fill", "blue");
    ///
    /// assert_eq!(node.to_string(), "<rect fill=\"blue\"/>");
    /// ```
    pub fn set_attribute<N, V>(&mut self, name: N, value: V)
        where N: Into<String>, V: Into<String>
    {
        debug_assert!(self.is_element());
        self.attributes.insert_from(name, value);
    }

    /// Appends a new child to this node, after existing children.
    pub fn append(&mut self, new_child: Node) {
        debug_assert!(self.is_element());
        self.children.push(new_child);
    }

    /// Returns all child nodes, including text nodes.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    /// Returns an iterator over element children.
    #[inline]
    pub fn children(&self) -> Children {
        Children::new(&self.children)
    }

    /// Returns a mutable iterator over element children.
    #[inline]
    pub fn children_mut(&mut self) -> ChildrenMut {
        ChildrenMut::new(&mut self.children)
    }

    /// Returns `true` if the node has element children.
    #[inline]
    pub fn has_children(&self) -> bool {
        self.children().next().is_some()
    }

    /// Returns the first element child.
    #[inline]
    pub fn first_child(&self) -> Option<&Node> {
        self.children().next()
    }

    /// Returns an iterator over the node and its element descendants, in pre-order.
    #[inline]
    pub fn descendants(&self) -> Descendants {
        Descendants::new(self)
    }

    /// Returns an iterator over all non-group element descendants, in document order.
    ///
    /// Groups are transparent at every depth: they are never yielded,
    /// but their content is. Non-group elements are not descended into.
    ///
    /// # Examples
    ///
    /// ```
    /// use svgparts::Document;
    ///
    /// let doc = Document::parse("<svg><g><g><path/></g><rect/></g><circle/></svg>").unwrap();
    /// let tags: Vec<_> = doc.root().leaves().map(|n| n.tag_name()).collect();
    ///
    /// assert_eq!(tags, ["path", "rect", "circle"]);
    /// ```
    #[inline]
    pub fn leaves(&self) -> Leaves {
        Leaves::new(self)
    }

    /// Returns a mutable reference to the non-group element descendant
    /// at the selected position in `leaves()` order.
    pub fn leaf_mut(&mut self, index: usize) -> Option<&mut Node> {
        fn find<'a>(node: &'a mut Node, index: &mut usize) -> Option<&'a mut Node> {
            for child in node.children_mut() {
                if child.kind().is_group() {
                    if let Some(n) = find(child, index) {
                        return Some(n);
                    }
                } else if *index == 0 {
                    return Some(child);
                } else {
                    *index -= 1;
                }
            }

            None
        }

        let mut index = index;
        find(self, &mut index)
    }

    /// Calls a closure on the node and on each element descendant, in pre-order.
    pub fn visit_mut<F>(&mut self, f: &mut F)
        where F: FnMut(&mut Node)
    {
        f(self);

        for child in self.children_mut() {
            child.visit_mut(f);
        }
    }
}

impl WriteBuffer for Node {
    fn write_buf_opt(&self, opt: &WriteOptions, buf: &mut Vec<u8>) {
        writer::write_node(self, opt, buf);
    }
}

impl_display!(Node);

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.node_type {
            NodeType::Element => {
                write!(f, "Element({}", self.tag_name)?;
                if !self.attributes.is_empty() {
                    write!(f, " {}", self.attributes)?;
                }

                if !self.children.is_empty() {
                    f.debug_list().entries(self.children.iter()).finish()?;
                }

                write!(f, ")")
            }
            NodeType::Text => write!(f, "Text({})", self.text),
        }
    }
}
