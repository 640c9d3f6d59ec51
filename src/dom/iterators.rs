// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::slice;

use super::node::Node;

/// An iterator over element children of a node.
#[derive(Clone)]
pub struct Children<'a>(slice::Iter<'a, Node>);

impl<'a> Children<'a> {
    pub(crate) fn new(nodes: &'a [Node]) -> Self {
        Children(nodes.iter())
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        self.0.find(|n| n.is_element())
    }
}

impl<'a> DoubleEndedIterator for Children<'a> {
    fn next_back(&mut self) -> Option<&'a Node> {
        self.0.rfind(|n| n.is_element())
    }
}

/// A mutable iterator over element children of a node.
pub struct ChildrenMut<'a>(slice::IterMut<'a, Node>);

impl<'a> ChildrenMut<'a> {
    pub(crate) fn new(nodes: &'a mut [Node]) -> Self {
        ChildrenMut(nodes.iter_mut())
    }
}

impl<'a> Iterator for ChildrenMut<'a> {
    type Item = &'a mut Node;

    fn next(&mut self) -> Option<&'a mut Node> {
        self.0.find(|n| n.is_element())
    }
}

/// An iterator over a node and its element descendants, in pre-order.
#[derive(Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(node: &'a Node) -> Self {
        Descendants { stack: vec![node] }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}

/// An iterator over non-group element descendants, in document order.
///
/// Groups are transparent: their children are visited instead of them.
#[derive(Clone)]
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Leaves<'a> {
    pub(crate) fn new(node: &'a Node) -> Self {
        Leaves { stack: node.children().rev().collect() }
    }
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        loop {
            let node = self.stack.pop()?;
            if node.kind().is_group() {
                self.stack.extend(node.children().rev());
            } else {
                return Some(node);
            }
        }
    }
}
