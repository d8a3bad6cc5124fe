//! Error types for JSON parsing and path construction.
//!
//! Two things can fail in this crate: parsing a message that is not valid
//! JSON, and compiling a path string that does not follow the tag grammar.
//! Both surface synchronously as an [`Error`] and abort the call that
//! triggered them. Navigating a parsed tree never fails — a path that does
//! not exist in a message is a normal negative result (`false` or `None`),
//! not an error.
//!
//! ## Examples
//!
//! ```rust
//! use json_dom::{parse, Error, Path};
//!
//! // A structural violation aborts the parse entirely.
//! assert!(parse("{\"a\"}").is_err());
//!
//! // A malformed path is rejected before any tree is consulted.
//! assert!(matches!(Path::new("/@"), Err(Error::BadTag { .. })));
//! ```

use thiserror::Error;

/// Represents all possible errors raised by parsing and path construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A structural violation in the message being parsed: an unexpected
    /// character at a decision point, an unterminated string or number, or
    /// premature end of input.
    ///
    /// The diagnostic context splits the message around the parse position,
    /// with `consumed` holding everything already read and `remaining`
    /// holding the unread tail.
    #[error("invalid syntax: {consumed} ^ {remaining}")]
    Syntax {
        consumed: String,
        remaining: String,
    },

    /// A path string too short to hold a separator and one tag.
    #[error("empty path: {path:?}")]
    EmptyPath { path: String },

    /// A malformed tag in a path string: a segment shorter than two
    /// characters, an unknown prefix, or non-digit characters in an index
    /// segment. `segment` is the zero-based position of the offending tag.
    #[error("bad tag: {path:?} [{segment}]")]
    BadTag { path: String, segment: usize },
}

impl Error {
    /// Creates a syntax error with the diagnostic context split at the
    /// given byte position of the message. The position is rounded down
    /// to a character boundary: the cursor can sit inside a multi-byte
    /// character when the offending byte was not ASCII.
    pub(crate) fn syntax_at(message: &str, position: usize) -> Self {
        let mut boundary = position.min(message.len());
        while !message.is_char_boundary(boundary) {
            boundary -= 1;
        }
        let (consumed, remaining) = message.split_at(boundary);
        Error::Syntax {
            consumed: consumed.to_string(),
            remaining: remaining.to_string(),
        }
    }

    pub(crate) fn empty_path(path: &str) -> Self {
        Error::EmptyPath {
            path: path.to_string(),
        }
    }

    pub(crate) fn bad_tag(path: &str, segment: usize) -> Self {
        Error::BadTag {
            path: path.to_string(),
            segment,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
