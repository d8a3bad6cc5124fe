//! Navigation handles over document tree nodes.
//!
//! An [`ElementRef`] is a cheap, copyable handle borrowing one node of a
//! [`Document`]. It carries the shared navigation contract of every node
//! kind: parent and positional metadata, child lookup by key or index,
//! child iteration, descendant searches, and canonical JSON rendering via
//! [`Display`](std::fmt::Display).
//!
//! ## Examples
//!
//! ```rust
//! use json_dom::{parse, Kind};
//!
//! let doc = parse("{\"a\":[null,1.0]}").unwrap();
//! let a = doc.root().child_by_key("a").unwrap();
//! assert_eq!(a.kind(), Kind::Array);
//! assert_eq!(a.size(), 2);
//! assert_eq!(a.child_by_index(1).unwrap().to_string(), "1.0");
//! assert!(a.child_by_index(2).is_none());
//! ```

use std::collections::btree_map;
use std::fmt;
use std::slice;

use crate::document::{Document, Locator, NodeData, NodeId};

/// The kind tag of an element, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Object,
    Array,
}

impl Kind {
    /// Returns `true` for the four scalar kinds.
    #[inline]
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(self, Kind::Object | Kind::Array)
    }
}

/// A borrowed handle to one element of a document tree.
///
/// Handles are `Copy` and compare equal only when they refer to the same
/// node of the same document.
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'doc> {
    doc: &'doc Document,
    id: NodeId,
}

impl<'doc> ElementRef<'doc> {
    pub(crate) fn new(doc: &'doc Document, id: NodeId) -> Self {
        ElementRef { doc, id }
    }

    /// Returns the id of this element within its document.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the kind tag of this element.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self.data() {
            NodeData::Null => Kind::Null,
            NodeData::Boolean(_) => Kind::Boolean,
            NodeData::Number(_) => Kind::Number,
            NodeData::String(_) => Kind::String,
            NodeData::Object(_) => Kind::Object,
            NodeData::Array(_) => Kind::Array,
        }
    }

    /// Returns the parent element, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<ElementRef<'doc>> {
        self.node().parent.map(|id| ElementRef::new(self.doc, id))
    }

    /// Returns the object key under which this element is stored, or
    /// `None` for array children and the root.
    #[must_use]
    pub fn key(&self) -> Option<&'doc str> {
        match &self.node().locator {
            Locator::Key(key) => Some(key),
            _ => None,
        }
    }

    /// Returns the array index at which this element is stored, or `None`
    /// for object children and the root.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self.node().locator {
            Locator::Index(index) => Some(index),
            _ => None,
        }
    }

    /// Returns `true` if this element is a null, boolean, number or string.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }

    /// Returns `true` if this element is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.kind() == Kind::Object
    }

    /// Returns `true` if this element is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    /// Returns the literal text of a scalar element, or `None` for
    /// containers. String literals come back without surrounding quotes
    /// and with any escape sequences still unexpanded.
    #[must_use]
    pub fn literal(&self) -> Option<&'doc str> {
        match self.data() {
            NodeData::Null => Some("null"),
            NodeData::Boolean(true) => Some("true"),
            NodeData::Boolean(false) => Some("false"),
            NodeData::Number(literal) => Some(literal),
            NodeData::String(text) => Some(text),
            NodeData::Object(_) | NodeData::Array(_) => None,
        }
    }

    /// Returns the number of immediate children; always 0 for scalars.
    #[must_use]
    pub fn size(&self) -> usize {
        match self.data() {
            NodeData::Object(map) => map.len(),
            NodeData::Array(children) => children.len(),
            _ => 0,
        }
    }

    /// Indicates whether this element is an object containing `key`.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        match self.data() {
            NodeData::Object(map) => map.contains_key(key),
            _ => false,
        }
    }

    /// Indicates whether this element is an array with an element at
    /// `index`.
    #[must_use]
    pub fn has_index(&self, index: usize) -> bool {
        match self.data() {
            NodeData::Array(children) => index < children.len(),
            _ => false,
        }
    }

    /// Returns the immediate child stored under `key`, or `None` if the
    /// key is absent or this element is not an object.
    #[must_use]
    pub fn child_by_key(&self, key: &str) -> Option<ElementRef<'doc>> {
        match self.data() {
            NodeData::Object(map) => map.get(key).map(|id| ElementRef::new(self.doc, *id)),
            _ => None,
        }
    }

    /// Returns the immediate child at `index`, or `None` if the index is
    /// out of bounds or this element is not an array.
    #[must_use]
    pub fn child_by_index(&self, index: usize) -> Option<ElementRef<'doc>> {
        match self.data() {
            NodeData::Array(children) => {
                children.get(index).map(|id| ElementRef::new(self.doc, *id))
            }
            _ => None,
        }
    }

    /// Returns an iterator over the immediate children in canonical order:
    /// ascending key order for objects, positional order for arrays, empty
    /// for scalars.
    #[must_use]
    pub fn children(&self) -> Children<'doc> {
        let inner = match self.data() {
            NodeData::Object(map) => ChildrenInner::Object(map.values()),
            NodeData::Array(children) => ChildrenInner::Array(children.iter()),
            _ => ChildrenInner::Empty,
        };
        Children {
            doc: self.doc,
            inner,
        }
    }

    /// Appends to `into` every descendant stored under the object key
    /// `key`, in document order. A matched element is not searched further
    /// for nested occurrences of the same key, but every unmatched child
    /// is descended into.
    pub fn descendants_with_key(&self, key: &str, into: &mut Vec<ElementRef<'doc>>) {
        for child in self.children() {
            if child.key() == Some(key) {
                into.push(child);
            } else {
                child.descendants_with_key(key, into);
            }
        }
    }

    /// Appends to `into` every scalar reachable at or beneath this
    /// element, in document order. A scalar element contributes itself.
    pub fn scalar_descendants(&self, into: &mut Vec<ElementRef<'doc>>) {
        if self.is_scalar() {
            into.push(*self);
            return;
        }
        for child in self.children() {
            child.scalar_descendants(into);
        }
    }

    fn node(&self) -> &'doc crate::document::Node {
        self.doc.node(self.id)
    }

    fn data(&self) -> &'doc NodeData {
        &self.node().data
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for ElementRef<'_> {}

impl fmt::Display for ElementRef<'_> {
    /// Renders this element as canonical compact JSON: no whitespace,
    /// object keys in ascending order, scalars as their literal text with
    /// strings re-wrapped in double quotes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data() {
            NodeData::Null => f.write_str("null"),
            NodeData::Boolean(b) => write!(f, "{b}"),
            NodeData::Number(literal) => f.write_str(literal),
            NodeData::String(text) => write!(f, "\"{text}\""),
            NodeData::Object(map) => {
                f.write_str("{")?;
                for (position, (key, id)) in map.iter().enumerate() {
                    if position > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "\"{key}\":{}", ElementRef::new(self.doc, *id))?;
                }
                f.write_str("}")
            }
            NodeData::Array(children) => {
                f.write_str("[")?;
                for (position, id) in children.iter().enumerate() {
                    if position > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", ElementRef::new(self.doc, *id))?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Iterator over the immediate children of one element, in canonical
/// order. Produced by [`ElementRef::children`].
pub struct Children<'doc> {
    doc: &'doc Document,
    inner: ChildrenInner<'doc>,
}

enum ChildrenInner<'doc> {
    Empty,
    Object(btree_map::Values<'doc, String, NodeId>),
    Array(slice::Iter<'doc, NodeId>),
}

impl<'doc> Iterator for Children<'doc> {
    type Item = ElementRef<'doc>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = match &mut self.inner {
            ChildrenInner::Empty => None,
            ChildrenInner::Object(values) => values.next().copied(),
            ChildrenInner::Array(ids) => ids.next().copied(),
        }?;
        Some(ElementRef::new(self.doc, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ChildrenInner::Empty => (0, Some(0)),
            ChildrenInner::Object(values) => values.size_hint(),
            ChildrenInner::Array(ids) => ids.size_hint(),
        }
    }
}
