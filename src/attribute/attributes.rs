// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::slice::Iter;

use crate::{
    Attribute,
    WriteBuffer,
};

/// An ordered attributes list.
///
/// Attribute names are unique and case-sensitive.
/// The insertion order is preserved and used during writing.
#[derive(Clone, PartialEq, Default)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    /// Constructs a new, empty attributes list.
    #[inline]
    pub fn new() -> Attributes {
        Attributes(Vec::new())
    }

    /// Returns an optional reference to [`Attribute`].
    ///
    /// [`Attribute`]: struct.Attribute.html
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.iter().find(|v| v.name == name)
    }

    /// Returns an optional mutable reference to [`Attribute`].
    ///
    /// [`Attribute`]: struct.Attribute.html
    #[inline]
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.0.iter_mut().find(|v| v.name == name)
    }

    /// Returns an optional reference to the attribute value.
    #[inline]
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.value.as_str())
    }

    /// Inserts a new attribute. Previous will be overwritten.
    ///
    /// An overwritten attribute keeps its position.
    pub fn insert(&mut self, attr: Attribute) {
        match self.get_mut(&attr.name) {
            Some(prev) => prev.value = attr.value,
            None => self.0.push(attr),
        }
    }

    /// Creates a new attribute from name and value and inserts it. Previous will be overwritten.
    pub fn insert_from<N, V>(&mut self, name: N, value: V)
        where N: Into<String>, V: Into<String>
    {
        self.insert(Attribute::new(name, value));
    }

    /// Removes an existing attribute and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.0.iter().position(|x| x.name == name)?;
        Some(self.0.remove(idx).value)
    }

    /// Returns `true` if the container contains an attribute with such name.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|a| a.name == name)
    }

    /// Returns count of the attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if attributes is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator.
    #[inline]
    pub fn iter(&self) -> Iter<Attribute> {
        self.0.iter()
    }
}

impl IntoIterator for Attributes {
    type Item = Attribute;
    type IntoIter = ::std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Attributes()");
        }

        let mut out = Vec::with_capacity(256);

        out.extend_from_slice(b"Attributes(");

        for attr in self.iter() {
            attr.write_buf(&mut out);
            out.push(b',');
            out.push(b' ');
        }

        out.pop();
        out.pop();
        out.push(b')');

        write!(f, "{}", String::from_utf8_lossy(&out))
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = Vec::with_capacity(256);
        for (i, attr) in self.iter().enumerate() {
            if i != 0 {
                out.push(b' ');
            }
            attr.write_buf(&mut out);
        }

        write!(f, "{}", String::from_utf8_lossy(&out))
    }
}
