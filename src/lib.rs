//! # json_dom
//!
//! A DOM-style JSON parser with compiled navigation paths, built for
//! repeated, schema-light inspection of streamed messages.
//!
//! ## When to use it
//!
//! This crate targets the case where many JSON messages share an expected
//! structure and the navigation path to each value of interest is known in
//! advance: compile the paths once, parse each message, and test or
//! extract without walking the tree by hand. It is not a general-purpose
//! validating JSON library — see the fidelity notes below.
//!
//! ## Key features
//!
//! - **Typed element tree**: every parsed value is an element with a kind
//!   tag, a parent back-reference, and its object key or array index, so
//!   any element can report exactly where it lives.
//! - **Compiled paths**: a [`Path`] like `/@location/@latitude` or
//!   `/@items/#0/@name` is compiled once and resolved against any number
//!   of parsed trees; the inverse operation [`Path::path_of`] derives the
//!   canonical path string of any element.
//! - **Literal fidelity**: numbers are kept as their source text (never a
//!   float, so `1.0` stays `1.0`) and string escapes are preserved
//!   verbatim rather than interpreted.
//! - **Canonical rendering**: [`Document`] and [`ElementRef`] display as
//!   compact JSON with object keys in sorted order and no inserted
//!   whitespace.
//!
//! ## Quick start
//!
//! ```rust
//! use json_dom::{Parser, Path};
//!
//! let mut parser = Parser::new();
//! let identity = Path::new("/@identity").unwrap();
//! let latitude = Path::new("/@location/@latitude").unwrap();
//!
//! parser
//!     .parse("{\"identity\":12345,\"location\":{\"latitude\":51.5047650,\"longitude\":-2.4841220}}")
//!     .unwrap();
//!
//! assert!(parser.contains(&identity));
//! assert_eq!(
//!     parser.get_element(&latitude).unwrap().to_string(),
//!     "51.5047650"
//! );
//! ```
//!
//! One-shot parsing without a reusable instance:
//!
//! ```rust
//! use json_dom::parse;
//!
//! let doc = parse("{\"b\":2,\"a\":1}").unwrap();
//! // Keys render in sorted order regardless of input order.
//! assert_eq!(doc.to_string(), "{\"a\":1,\"b\":2}");
//! ```
//!
//! ## Fidelity notes
//!
//! Deliberate departures from strict JSON semantics, kept for
//! compatibility with the message formats this crate targets:
//!
//! - String escape sequences (including `\uXXXX`) are stored uninterpreted
//!   and re-emitted verbatim.
//! - Object keys iterate in ascending lexicographic order, never insertion
//!   order, and a duplicate key silently overwrites the earlier value.
//! - Literal tokens are recognized by their first character only, and a
//!   number must be terminated by `]`, `}` or `,` — a bare number at the
//!   top level is a syntax error.
//! - Parsing recurses per nesting level with no depth limit, so input
//!   nested deeply enough can exhaust the call stack. Treat inputs as
//!   trusted.
//!
//! ## Concurrency
//!
//! Everything is synchronous and lock-free. A [`Parser`] instance holds
//! mutable state across calls and must not be shared between concurrent
//! parses; independent instances are fully independent. A built
//! [`Document`] is immutable apart from explicit building calls, so
//! read-only navigation from multiple threads is safe.

pub mod document;
pub mod element;
pub mod error;
pub mod parser;
pub mod path;
pub mod value;

pub use document::{Document, NodeId};
pub use element::{Children, ElementRef, Kind};
pub use error::{Error, Result};
pub use parser::{parse, Parser};
pub use path::{Path, Tag, INDEX_PREFIX, KEY_PREFIX};
pub use value::Value;
