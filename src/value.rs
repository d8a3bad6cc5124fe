//! Seed values for building document trees by hand.
//!
//! [`Value`] describes one node to be created through the building API on
//! [`Document`](crate::Document): a scalar carrying its literal text, or an
//! empty container to be filled with [`insert`](crate::Document::insert)
//! and [`push`](crate::Document::push) calls.
//!
//! Scalars never hold binary numeric representations — a number is kept as
//! the exact text it was written with, so `1.0` stays `1.0` and precision
//! is never lost.
//!
//! ## Examples
//!
//! ```rust
//! use json_dom::{Document, Value};
//!
//! let mut doc = Document::new(Value::Object);
//! let root = doc.root_id();
//! doc.insert(root, "id", Value::from(12345));
//! doc.insert(root, "name", Value::from("sensor-7"));
//! doc.insert(root, "ratio", Value::number("0.50"));
//!
//! assert_eq!(
//!     doc.to_string(),
//!     "{\"id\":12345,\"name\":\"sensor-7\",\"ratio\":0.50}"
//! );
//! ```

/// A seed for one tree node: a scalar with its literal text, or an empty
/// container.
///
/// Conversions from Rust primitives produce the obvious literal text
/// (`true`, `42`, `1.5`); [`Value::number`] gives exact control over a
/// number's spelling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    /// A number held as literal text, e.g. `"-1.0e+1"`.
    Number(String),
    /// A string value without surrounding quotes; backslash escapes are
    /// kept verbatim and never interpreted.
    String(String),
    /// An empty object, to be populated with [`Document::insert`](crate::Document::insert).
    Object,
    /// An empty array, to be populated with [`Document::push`](crate::Document::push).
    Array,
}

impl Value {
    /// Creates a number value from its literal text.
    ///
    /// The text is stored exactly as given; no numeric conversion or
    /// validation takes place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_dom::Value;
    ///
    /// assert_eq!(Value::number("1.0"), Value::Number("1.0".to_string()));
    /// ```
    #[must_use]
    pub fn number(literal: impl Into<String>) -> Self {
        Value::Number(literal.into())
    }

    /// Returns `true` if this seed produces a scalar node.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Value::Object | Value::Array)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value.to_string())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value.to_string())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
