//! The arena-backed document tree.
//!
//! A [`Document`] owns every node of one parsed or hand-built JSON tree in
//! a flat arena. Containers hold their children as [`NodeId`] indices and
//! each node keeps a non-owning `NodeId` back-reference to its parent, so
//! the logical parent link never creates a second owner. Navigation happens
//! through borrowed [`ElementRef`] handles rather than through the ids
//! directly.
//!
//! Once a node is attached its position never changes: there are no removal
//! or reordering operations. Object children iterate in ascending
//! lexicographic key order regardless of insertion order, and inserting an
//! existing key replaces the previous value (last write wins).
//!
//! ## Examples
//!
//! ```rust
//! use json_dom::{Document, Value};
//!
//! let mut doc = Document::new(Value::Object);
//! let root = doc.root_id();
//! let items = doc.insert(root, "items", Value::Array);
//! doc.push(items, Value::from(1));
//! doc.push(items, Value::from("two"));
//!
//! assert_eq!(doc.to_string(), "{\"items\":[1,\"two\"]}");
//! assert_eq!(doc.root().child_by_key("items").unwrap().size(), 2);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::element::ElementRef;
use crate::path::Path;
use crate::value::Value;

/// An index identifying one node inside its owning [`Document`].
///
/// Ids are only meaningful for the document that produced them; using an id
/// with a different document is a logic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// How a node is attached to its parent: object children carry their key,
/// array children carry their index, the root carries neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Locator {
    Root,
    Key(String),
    Index(usize),
}

/// The payload of one node. Scalars keep their value as literal source
/// text; containers own their children by id.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum NodeData {
    Null,
    Boolean(bool),
    Number(String),
    String(String),
    Object(BTreeMap<String, NodeId>),
    Array(Vec<NodeId>),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) data: NodeData,
    pub(crate) parent: Option<NodeId>,
    pub(crate) locator: Locator,
}

/// One owned JSON tree: a single root and the arena of every node below it.
///
/// Documents are produced by [`parse`](crate::parse) or built by hand
/// starting from [`Document::new`]. A built tree is logically immutable
/// apart from attaching new children, so sharing a `&Document` across
/// threads for read-only navigation is safe.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Creates a document whose root node is seeded from `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dom::{Document, Kind, Value};
    ///
    /// let doc = Document::new(Value::Array);
    /// assert_eq!(doc.root().kind(), Kind::Array);
    /// assert_eq!(doc.to_string(), "[]");
    /// ```
    #[must_use]
    pub fn new(value: Value) -> Self {
        let mut doc = Document {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        let root = doc.alloc(data_from_value(value));
        doc.root = root;
        doc
    }

    /// Creates an empty arena for the parser to fill; `set_root` must be
    /// called before the document is handed out.
    pub(crate) fn empty() -> Self {
        Document {
            nodes: Vec::new(),
            root: NodeId(0),
        }
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    /// Returns a navigation handle for the root element.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        ElementRef::new(self, self.root)
    }

    /// Returns the id of the root node, the starting point for the
    /// building API.
    #[must_use]
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Returns a navigation handle for the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this document.
    #[must_use]
    pub fn element(&self, id: NodeId) -> ElementRef<'_> {
        assert!(id.0 < self.nodes.len(), "node id from another document");
        ElementRef::new(self, id)
    }

    /// Inserts a child under `parent` at the given key and returns the new
    /// node's id. If the key already exists the previous value is replaced;
    /// the replaced node becomes unreachable through navigation.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not an object element.
    pub fn insert(&mut self, parent: NodeId, key: impl Into<String>, value: Value) -> NodeId {
        let child = self.alloc(data_from_value(value));
        self.attach_key(parent, key.into(), child);
        child
    }

    /// Appends a child to the end of the `parent` array and returns the new
    /// node's id. The child's index is the array length before the append.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not an array element.
    pub fn push(&mut self, parent: NodeId, value: Value) -> NodeId {
        let child = self.alloc(data_from_value(value));
        self.attach_index(parent, child);
        child
    }

    /// Resolves a path against this tree, or `None` if any step is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dom::{parse, Path};
    ///
    /// let doc = parse("[{\"a\":null}]").unwrap();
    /// let path = Path::new("/#0/@a").unwrap();
    /// assert_eq!(doc.get(&path).unwrap().to_string(), "null");
    /// assert!(doc.get(&Path::new("/#1/@a").unwrap()).is_none());
    /// ```
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<ElementRef<'_>> {
        path.resolve(self.root())
    }

    /// Indicates whether this tree contains the given path.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    /// Indicates whether this tree contains every one of the given paths,
    /// short-circuiting on the first miss.
    #[must_use]
    pub fn contains_all(&self, paths: &[Path]) -> bool {
        paths.iter().all(|path| self.contains(path))
    }

    /// Indicates whether this tree contains at least one of the given
    /// paths, short-circuiting on the first hit.
    #[must_use]
    pub fn contains_any(&self, paths: &[Path]) -> bool {
        paths.iter().any(|path| self.contains(path))
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn alloc(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            data,
            parent: None,
            locator: Locator::Root,
        });
        id
    }

    /// Stores `child` under `key` in the `parent` object and rewrites the
    /// child's parent link and locator. Last write wins on duplicate keys.
    pub(crate) fn attach_key(&mut self, parent: NodeId, key: String, child: NodeId) {
        {
            let node = &mut self.nodes[child.0];
            node.parent = Some(parent);
            node.locator = Locator::Key(key.clone());
        }
        match &mut self.nodes[parent.0].data {
            NodeData::Object(map) => {
                map.insert(key, child);
            }
            _ => panic!("insert requires an object element"),
        }
    }

    /// Appends `child` to the `parent` array, assigning the next index.
    pub(crate) fn attach_index(&mut self, parent: NodeId, child: NodeId) {
        let index = match &self.nodes[parent.0].data {
            NodeData::Array(children) => children.len(),
            _ => panic!("push requires an array element"),
        };
        {
            let node = &mut self.nodes[child.0];
            node.parent = Some(parent);
            node.locator = Locator::Index(index);
        }
        match &mut self.nodes[parent.0].data {
            NodeData::Array(children) => children.push(child),
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for Document {
    /// Renders the whole tree as canonical compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root(), f)
    }
}

fn data_from_value(value: Value) -> NodeData {
    match value {
        Value::Null => NodeData::Null,
        Value::Boolean(b) => NodeData::Boolean(b),
        Value::Number(literal) => NodeData::Number(literal),
        Value::String(text) => NodeData::String(text),
        Value::Object => NodeData::Object(BTreeMap::new()),
        Value::Array => NodeData::Array(Vec::new()),
    }
}
