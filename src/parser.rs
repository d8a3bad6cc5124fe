//! Recursive-descent parsing of JSON messages into document trees.
//!
//! The parser is built for streams of messages that share an expected
//! structure: construct the [`Path`]s of interest once, then call
//! [`Parser::parse`] per message and test them against the resulting tree.
//! Each call fully replaces the previously held tree; independent `Parser`
//! instances are independent, but one instance must not be shared between
//! concurrent parses.
//!
//! Two deliberate departures from strict JSON semantics are preserved for
//! compatibility with the message formats this crate targets:
//!
//! - String escape sequences are copied verbatim into the literal — a
//!   backslash and the character after it are kept uninterpreted.
//! - Numbers are never converted to a binary numeric type; the literal
//!   text is kept exactly as written. A number must be terminated by `]`,
//!   `}` or `,`, so a bare number at the top level is a syntax error.
//!
//! Recursion depth equals the nesting depth of the input, so adversarially
//! deep messages can exhaust the call stack; no depth limit is imposed.
//!
//! ## Examples
//!
//! ```rust
//! use json_dom::{Parser, Path};
//!
//! let identity = Path::new("/@identity").unwrap();
//! let latitude = Path::new("/@location/@latitude").unwrap();
//!
//! let mut parser = Parser::new();
//! parser
//!     .parse("{\"identity\":12345,\"location\":{\"latitude\":51.50,\"longitude\":-2.48}}")
//!     .unwrap();
//!
//! assert!(parser.contains_all(&[identity.clone(), latitude.clone()]));
//! assert_eq!(parser.get_element(&identity).unwrap().to_string(), "12345");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::document::{Document, NodeData, NodeId};
use crate::element::ElementRef;
use crate::error::{Error, Result};
use crate::path::Path;

/// Parses a single JSON message into an owned [`Document`].
///
/// Any valid JSON value is accepted at the root. Characters after the root
/// value are ignored.
///
/// # Examples
///
/// ```rust
/// use json_dom::parse;
///
/// let doc = parse("[null,false,1,1.0,\"string\"]").unwrap();
/// assert_eq!(doc.to_string(), "[null,false,1,1.0,\"string\"]");
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] on any structural violation; no partial tree
/// is produced.
pub fn parse(message: &str) -> Result<Document> {
    let mut cursor = Cursor::new(message);
    let mut doc = Document::empty();
    cursor.skip_whitespace();
    let root = parse_value(&mut cursor, &mut doc)?;
    doc.set_root(root);
    Ok(doc)
}

/// A reusable message parser holding the most recently parsed tree.
///
/// One instance amortizes path compilation across many messages; the tree
/// from the previous message is dropped wholesale on the next
/// [`parse`](Parser::parse) call.
#[derive(Debug, Default)]
pub struct Parser {
    document: Option<Document>,
}

impl Parser {
    /// Creates a parser with no held tree.
    #[must_use]
    pub fn new() -> Self {
        Parser::default()
    }

    /// Parses a message, replacing any previously held tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Syntax`] on invalid input, in which case no tree
    /// is retained at all — [`root`](Parser::root) reports `None` until
    /// the next successful parse.
    pub fn parse(&mut self, message: &str) -> Result<()> {
        self.document = None;
        self.document = Some(parse(message)?);
        Ok(())
    }

    /// Returns the root element of the last parsed message, or `None` if
    /// nothing has been parsed successfully yet.
    #[must_use]
    pub fn root(&self) -> Option<ElementRef<'_>> {
        self.document.as_ref().map(Document::root)
    }

    /// Returns the document holding the last parsed tree.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Consumes the parser, handing out the owned tree.
    #[must_use]
    pub fn into_document(self) -> Option<Document> {
        self.document
    }

    /// Indicates whether the last parsed message contains the given path.
    /// Always `false` when no tree is held.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.document
            .as_ref()
            .is_some_and(|doc| doc.contains(path))
    }

    /// Indicates whether the last parsed message contains every one of the
    /// given paths, short-circuiting on the first miss.
    #[must_use]
    pub fn contains_all(&self, paths: &[Path]) -> bool {
        self.document
            .as_ref()
            .is_some_and(|doc| doc.contains_all(paths))
    }

    /// Indicates whether the last parsed message contains at least one of
    /// the given paths, short-circuiting on the first hit.
    #[must_use]
    pub fn contains_any(&self, paths: &[Path]) -> bool {
        self.document
            .as_ref()
            .is_some_and(|doc| doc.contains_any(paths))
    }

    /// Resolves a path against the last parsed message, or `None` if the
    /// path is absent or no tree is held.
    #[must_use]
    pub fn get_element(&self, path: &Path) -> Option<ElementRef<'_>> {
        self.document.as_ref().and_then(|doc| doc.get(path))
    }
}

impl fmt::Display for Parser {
    /// Renders the last parsed tree as canonical compact JSON; writes
    /// nothing when no tree is held.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.document {
            Some(doc) => fmt::Display::fmt(doc, f),
            None => Ok(()),
        }
    }
}

/// Byte cursor over the message being parsed. All structural characters
/// are ASCII, so byte-level dispatch is safe; multi-byte characters only
/// ever appear inside strings, where they are copied through as whole
/// slices.
struct Cursor<'a> {
    message: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(message: &'a str) -> Self {
        Cursor {
            message,
            position: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.message.as_bytes().get(self.position).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Some(byte)
    }

    /// Rewinds one byte, pushing the last consumed byte back.
    fn back(&mut self) {
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// Skips up to `count` bytes, clamping at the end of the message.
    fn skip(&mut self, count: usize) {
        self.position = (self.position + count).min(self.message.len());
    }

    /// Skips control characters and spaces (any byte <= 0x20).
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(byte) if byte <= b' ') {
            self.position += 1;
        }
    }

    fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.message[from..to]
    }

    fn error(&self) -> Error {
        Error::syntax_at(self.message, self.position)
    }
}

/// Dispatches on the lookahead byte to parse one value of any kind.
fn parse_value(cursor: &mut Cursor<'_>, doc: &mut Document) -> Result<NodeId> {
    match cursor.peek() {
        Some(b'n') => {
            parse_null(cursor);
            Ok(doc.alloc(NodeData::Null))
        }
        Some(b't') | Some(b'f') => {
            let value = parse_boolean(cursor);
            Ok(doc.alloc(NodeData::Boolean(value)))
        }
        Some(b'-') | Some(b'0'..=b'9') => {
            let literal = parse_number(cursor)?;
            Ok(doc.alloc(NodeData::Number(literal)))
        }
        Some(b'"') => {
            let text = parse_string(cursor)?;
            Ok(doc.alloc(NodeData::String(text)))
        }
        Some(b'[') => parse_array(cursor, doc),
        Some(b'{') => parse_object(cursor, doc),
        _ => Err(cursor.error()),
    }
}

/// Consumes the four bytes of a `null` token. Only the leading `n` is
/// inspected; a skip past the end of the message clamps.
fn parse_null(cursor: &mut Cursor<'_>) {
    cursor.bump();
    cursor.skip(3);
}

/// Consumes a `true` or `false` token, dispatching on the leading byte
/// alone.
fn parse_boolean(cursor: &mut Cursor<'_>) -> bool {
    match cursor.bump() {
        Some(b't') => {
            cursor.skip(3);
            true
        }
        _ => {
            cursor.skip(4);
            false
        }
    }
}

/// Accumulates number bytes until a terminator. The terminator must be
/// one of `]` `}` `,` and is pushed back for the caller; anything else,
/// including end of input, is a syntax error.
fn parse_number(cursor: &mut Cursor<'_>) -> Result<String> {
    let start = cursor.position;
    loop {
        match cursor.bump() {
            Some(b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-') => {}
            Some(b']' | b'}' | b',') => {
                cursor.back();
                return Ok(cursor.slice(start, cursor.position).to_string());
            }
            _ => return Err(cursor.error()),
        }
    }
}

/// Consumes a quoted string, copying the contents verbatim. A backslash
/// and the byte after it are both kept uninterpreted; reaching the end of
/// the message before the closing quote is a syntax error.
fn parse_string(cursor: &mut Cursor<'_>) -> Result<String> {
    cursor.bump(); // opening quote
    let start = cursor.position;
    loop {
        match cursor.bump() {
            Some(b'"') => return Ok(cursor.slice(start, cursor.position - 1).to_string()),
            Some(b'\\') => {
                if cursor.bump().is_none() {
                    return Err(cursor.error());
                }
            }
            Some(_) => {}
            None => return Err(cursor.error()),
        }
    }
}

/// Parses an array: skip whitespace and commas, parse one value per
/// iteration, until the closing bracket is consumed.
fn parse_array(cursor: &mut Cursor<'_>, doc: &mut Document) -> Result<NodeId> {
    let array = doc.alloc(NodeData::Array(Vec::new()));
    cursor.bump(); // opening bracket
    loop {
        match cursor.peek() {
            Some(b' ' | b'\t' | b'\n' | b'\r' | b',') => {
                cursor.bump();
            }
            Some(b']') => {
                cursor.bump();
                return Ok(array);
            }
            Some(_) => {
                let child = parse_value(cursor, doc)?;
                doc.attach_index(array, child);
            }
            None => return Err(cursor.error()),
        }
    }
}

/// Parses an object: each entry is a quoted key, a colon, and a value
/// parsed by lookahead dispatch. A duplicate key overwrites the earlier
/// entry.
fn parse_object(cursor: &mut Cursor<'_>, doc: &mut Document) -> Result<NodeId> {
    let object = doc.alloc(NodeData::Object(BTreeMap::new()));
    cursor.bump(); // opening brace
    loop {
        match cursor.peek() {
            Some(b' ' | b'\t' | b'\n' | b'\r' | b',') => {
                cursor.bump();
            }
            Some(b'}') => {
                cursor.bump();
                return Ok(object);
            }
            Some(b'"') => {
                let key = parse_string(cursor)?;
                cursor.skip_whitespace();
                if cursor.bump() != Some(b':') {
                    return Err(cursor.error());
                }
                cursor.skip_whitespace();
                let child = parse_value(cursor, doc)?;
                doc.attach_key(object, key, child);
            }
            _ => return Err(cursor.error()),
        }
    }
}
