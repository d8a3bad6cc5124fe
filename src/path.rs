//! Compiled navigation paths.
//!
//! A [`Path`] compiles a textual address like `/@location/@latitude` or
//! `/@items/#0/@name` into a sequence of [`Tag`]s that can be resolved
//! against any number of parsed trees without re-parsing the address.
//!
//! The first character of the path string is adopted as the separator for
//! that instance — `/` and `\` are common choices but any character works.
//! Each segment is a prefix and content: `@` followed by an object key, or
//! `#` followed by a decimal array index.
//!
//! ## Examples
//!
//! ```rust
//! use json_dom::{parse, Path};
//!
//! let doc = parse("{\"a\":[1,2,3]}").unwrap();
//! let third = Path::new("/@a/#2").unwrap();
//! assert_eq!(doc.get(&third).unwrap().to_string(), "3");
//!
//! // Any leading character is a valid separator.
//! let same = Path::new("\\@a\\#2").unwrap();
//! assert_eq!(doc.get(&same), doc.get(&third));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::element::ElementRef;
use crate::error::{Error, Result};

/// Prefix character introducing an object key tag.
pub const KEY_PREFIX: char = '@';
/// Prefix character introducing an array index tag.
pub const INDEX_PREFIX: char = '#';

/// One step of a path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Key(String),
    Index(usize),
}

/// A compiled, reusable address of one location in any structurally
/// compatible tree.
///
/// Construct with [`Path::new`] or [`str::parse`]; the original text is
/// reproduced exactly by [`Display`](fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    separator: char,
    tags: Vec<Tag>,
}

impl Path {
    /// Compiles a path string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dom::Path;
    ///
    /// let path = Path::new("/@items/#0/@name").unwrap();
    /// assert_eq!(path.to_string(), "/@items/#0/@name");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] for an input shorter than two
    /// characters and [`Error::BadTag`] for a segment shorter than two
    /// characters, an unknown prefix, or a non-digit index.
    pub fn new(text: &str) -> Result<Self> {
        text.parse()
    }

    /// Returns the separator adopted from the path string's first
    /// character.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Returns the compiled tags in navigation order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Walks this path down from `root`, returning the element it lands
    /// on, or `None` as soon as any step is absent.
    #[must_use]
    pub fn resolve<'doc>(&self, root: ElementRef<'doc>) -> Option<ElementRef<'doc>> {
        let mut element = root;
        for tag in &self.tags {
            element = match tag {
                Tag::Key(key) => element.child_by_key(key)?,
                Tag::Index(index) => element.child_by_index(*index)?,
            };
        }
        Some(element)
    }

    /// Returns the tag of a single element: `@key` for an object child,
    /// `#index` for an array child, and the empty string for the root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dom::{parse, Path};
    ///
    /// let doc = parse("{\"a\":[null]}").unwrap();
    /// let inner = doc.root().child_by_key("a").unwrap().child_by_index(0).unwrap();
    /// assert_eq!(Path::tag_of(inner), "#0");
    /// assert_eq!(Path::tag_of(doc.root()), "");
    /// ```
    #[must_use]
    pub fn tag_of(element: ElementRef<'_>) -> String {
        if let Some(key) = element.key() {
            format!("{KEY_PREFIX}{key}")
        } else if let Some(index) = element.index() {
            format!("{INDEX_PREFIX}{index}")
        } else {
            String::new()
        }
    }

    /// Derives the canonical path string of an element by walking its
    /// parent links up to the root. The root itself contributes nothing,
    /// so its path is the empty string.
    ///
    /// For any reachable element, compiling the derived string with
    /// [`Path::new`] and resolving it against the same root lands back on
    /// the same element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dom::{parse, Path};
    ///
    /// let doc = parse("[{\"a\":null}]").unwrap();
    /// let inner = doc.root().child_by_index(0).unwrap().child_by_key("a").unwrap();
    /// assert_eq!(Path::path_of(inner, '/'), "/#0/@a");
    /// ```
    #[must_use]
    pub fn path_of(element: ElementRef<'_>, separator: char) -> String {
        let mut tags = Vec::new();
        let mut current = element;
        while let Some(parent) = current.parent() {
            tags.push(Path::tag_of(current));
            current = parent;
        }

        let mut text = String::new();
        for tag in tags.iter().rev() {
            text.push(separator);
            text.push_str(tag);
        }
        text
    }
}

impl FromStr for Path {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut chars = text.chars();
        let separator = chars.next().ok_or_else(|| Error::empty_path(text))?;
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(Error::empty_path(text));
        }

        let mut tags = Vec::new();
        for (segment, tag_text) in rest.split(separator).enumerate() {
            let mut tag_chars = tag_text.chars();
            let prefix = tag_chars.next();
            let content = tag_chars.as_str();
            if content.is_empty() {
                return Err(Error::bad_tag(text, segment));
            }
            match prefix {
                Some(KEY_PREFIX) => tags.push(Tag::Key(content.to_string())),
                Some(INDEX_PREFIX) => {
                    if !content.bytes().all(|byte| byte.is_ascii_digit()) {
                        return Err(Error::bad_tag(text, segment));
                    }
                    let index = content
                        .parse()
                        .map_err(|_| Error::bad_tag(text, segment))?;
                    tags.push(Tag::Index(index));
                }
                _ => return Err(Error::bad_tag(text, segment)),
            }
        }

        Ok(Path { separator, tags })
    }
}

impl fmt::Display for Path {
    /// Reproduces the exact text this path was compiled from.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.tags {
            match tag {
                Tag::Key(key) => write!(f, "{}{KEY_PREFIX}{key}", self.separator)?,
                Tag::Index(index) => write!(f, "{}{INDEX_PREFIX}{index}", self.separator)?,
            }
        }
        Ok(())
    }
}
