//! Integration tests for message parsing: acceptance, canonical
//! round-trips, diagnostics, and the path existence checks.

use json_dom::{parse, Error, Kind, Parser, Path};

fn path(text: &str) -> Path {
    Path::new(text).unwrap()
}

#[test]
fn accepts_well_formed_messages() {
    let messages = [
        "{}",
        "[]",
        "[{}]",
        "{\"a\":null}",
        "{\"a\":false}",
        "{\"a\":true}",
        "{\"a\":1}",
        "{\"a\":1.0}",
        "{\"a\":-1.0e+1}",
        "{\"a\":\"string\"}",
        "{\"a\":null,\"b\":null}",
        "{\"a\":{\"b\":null}}",
        "[null]",
        "[null,false,1,1.0,\"string\"]",
        "[[null]]",
        "[{\"a\":null},{\"a\":null}]",
    ];
    for message in messages {
        assert!(parse(message).is_ok(), "rejected {message}");
    }
}

#[test]
fn accepts_scalar_roots() {
    assert_eq!(parse("null").unwrap().root().kind(), Kind::Null);
    assert_eq!(parse("true").unwrap().root().kind(), Kind::Boolean);
    assert_eq!(parse("false").unwrap().root().kind(), Kind::Boolean);
    assert_eq!(parse("\"text\"").unwrap().root().kind(), Kind::String);
    assert_eq!(parse("\"\"").unwrap().root().to_string(), "\"\"");
}

#[test]
fn bare_number_root_is_unterminated() {
    // Numbers must end at ']', '}' or ',' so a top-level number runs off
    // the end of the message.
    assert!(parse("1").is_err());
    assert!(parse("1.5").is_err());
}

#[test]
fn root_kind_matches_message() {
    let doc = parse("{}").unwrap();
    assert!(doc.root().is_object());
    assert_eq!(doc.root().size(), 0);

    let doc = parse("[]").unwrap();
    assert!(doc.root().is_array());
    assert_eq!(doc.root().size(), 0);
}

#[test]
fn canonical_messages_round_trip() {
    let messages = [
        "{}",
        "[]",
        "[{}]",
        "[[]]",
        "{\"a\":null}",
        "{\"a\":false}",
        "{\"a\":true}",
        "{\"a\":1}",
        "{\"a\":1.0}",
        "{\"a\":-1.0e+1}",
        "{\"a\":\"string\"}",
        "{\"a\":null,\"b\":null}",
        "{\"a\":{\"b\":[{\"c\":null}]}}",
        "[null]",
        "[null,false,1,1.0,\"string\"]",
        "[{\"a\":null},{\"a\":null}]",
    ];
    for message in messages {
        assert_eq!(parse(message).unwrap().to_string(), message);
    }
}

#[test]
fn surrounding_whitespace_is_skipped() {
    let doc = parse(" \t\r\n {\"a\" : null} ").unwrap();
    assert_eq!(doc.to_string(), "{\"a\":null}");

    let doc = parse("[ null ,\n true ]").unwrap();
    assert_eq!(doc.to_string(), "[null,true]");
}

#[test]
fn object_keys_are_sorted_not_insertion_ordered() {
    let doc = parse("{\"c\":1,\"a\":2,\"b\":3}").unwrap();
    assert_eq!(doc.to_string(), "{\"a\":2,\"b\":3,\"c\":1}");
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let doc = parse("{\"a\":1,\"a\":2}").unwrap();
    assert_eq!(doc.root().size(), 1);
    assert_eq!(doc.to_string(), "{\"a\":2}");
}

#[test]
fn escapes_are_preserved_verbatim() {
    let messages = [
        "{\"a\":\"x\\ny\"}",
        "{\"a\":\"quote \\\" inside\"}",
        "{\"a\":\"\\u0041\"}",
        "[\"back\\\\slash\"]",
    ];
    for message in messages {
        assert_eq!(parse(message).unwrap().to_string(), message);
    }
}

#[test]
fn rejects_malformed_messages() {
    let messages = [
        "",
        "   ",
        "x",
        "{",
        "[",
        "{\"a\"}",
        "{\"a\":}",
        "{\"a\" null}",
        "{\"a\":\"unterminated",
        "{a:null}",
        "[1",
        "[;]",
        "{;}",
    ];
    for message in messages {
        assert!(
            matches!(parse(message), Err(Error::Syntax { .. })),
            "accepted {message:?}"
        );
    }
}

#[test]
fn syntax_error_reports_parse_context() {
    let err = parse("{\"a\":x}").unwrap_err();
    match err {
        Error::Syntax {
            consumed,
            remaining,
        } => {
            assert_eq!(consumed, "{\"a\":");
            assert_eq!(remaining, "x}");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn syntax_error_context_lands_on_character_boundaries() {
    // The offending byte is the first byte of a multi-byte character.
    let err = parse("[1é]").unwrap_err();
    match err {
        Error::Syntax {
            consumed,
            remaining,
        } => {
            assert_eq!(consumed, "[1");
            assert_eq!(remaining, "é]");
        }
        other => panic!("unexpected error {other:?}"),
    }

    // Multi-byte characters inside strings parse fine.
    let doc = parse("{\"étiquette\":\"café\"}").unwrap();
    assert_eq!(doc.to_string(), "{\"étiquette\":\"café\"}");
}

#[test]
fn contains_single_paths() {
    let mut parser = Parser::new();

    parser.parse("{}").unwrap();
    assert!(!parser.contains(&path("/@a")));

    parser.parse("{\"a\":null}").unwrap();
    assert!(parser.contains(&path("/@a")));
    assert!(!parser.contains(&path("/@b")));

    parser.parse("{\"a\":null,\"b\":null}").unwrap();
    assert!(parser.contains(&path("/@a")));
    assert!(parser.contains(&path("/@b")));
    assert!(!parser.contains(&path("/@a/@b")));

    parser.parse("{\"a\":{\"b\":null}}").unwrap();
    assert!(parser.contains(&path("/@a")));
    assert!(!parser.contains(&path("/@b")));
    assert!(parser.contains(&path("/@a/@b")));

    parser.parse("[]").unwrap();
    assert!(!parser.contains(&path("/#0")));

    parser.parse("[null]").unwrap();
    assert!(parser.contains(&path("/#0")));
    assert!(!parser.contains(&path("/#1")));

    parser.parse("[[null]]").unwrap();
    assert!(parser.contains(&path("/#0/#0")));
    assert!(!parser.contains(&path("/#1")));

    parser.parse("[{\"a\":null}]").unwrap();
    assert!(parser.contains(&path("/#0/@a")));
    assert!(!parser.contains(&path("/#0/@b")));
}

#[test]
fn contains_all_and_any_short_circuit_correctly() {
    let mut parser = Parser::new();
    parser.parse("{\"a\":null,\"b\":{\"c\":null}}").unwrap();

    let present = [path("/@a"), path("/@b/@c")];
    let mixed = [path("/@a"), path("/@missing")];
    let absent = [path("/@x"), path("/@y")];

    assert!(parser.contains_all(&present));
    assert!(!parser.contains_all(&mixed));
    assert!(parser.contains_any(&mixed));
    assert!(!parser.contains_any(&absent));
    assert!(parser.contains_all(&[]));
    assert!(!parser.contains_any(&[]));
}

#[test]
fn get_element_resolves_or_reports_absent() {
    let mut parser = Parser::new();
    parser.parse("[{\"a\":null}]").unwrap();

    let element = parser.get_element(&path("/#0/@a")).unwrap();
    assert_eq!(element.to_string(), "null");
    assert!(parser.get_element(&path("/#1/@a")).is_none());
    assert!(parser.get_element(&path("/#0/@b")).is_none());
}

#[test]
fn parser_with_no_tree_answers_negatively() {
    let parser = Parser::new();
    assert!(parser.root().is_none());
    assert!(!parser.contains(&path("/@a")));
    assert!(!parser.contains_any(&[path("/@a")]));
    assert!(parser.get_element(&path("/@a")).is_none());
}

#[test]
fn repeated_parses_replace_the_tree() {
    let mut parser = Parser::new();
    parser.parse("{\"a\":null}").unwrap();
    assert!(parser.contains(&path("/@a")));

    parser.parse("{\"b\":null}").unwrap();
    assert!(!parser.contains(&path("/@a")));
    assert!(parser.contains(&path("/@b")));
}

#[test]
fn detached_document_outlives_the_parser() {
    let mut parser = Parser::new();
    parser.parse("{\"a\":1}").unwrap();
    let doc = parser.into_document().unwrap();
    assert_eq!(doc.to_string(), "{\"a\":1}");
    assert!(doc.contains(&path("/@a")));
}

#[test]
fn worked_example_from_module_docs() {
    let mut parser = Parser::new();
    let identity = path("/@identity");
    let latitude = path("/@location/@latitude");
    let longitude = path("/@location/@longitude");

    parser
        .parse(
            "{\"identity\":12345,\"location\":{\"latitude\":51.5047650,\"longitude\":-2.4841220}}",
        )
        .unwrap();

    assert_eq!(parser.get_element(&identity).unwrap().to_string(), "12345");
    assert_eq!(
        parser.get_element(&latitude).unwrap().to_string(),
        "51.5047650"
    );
    assert_eq!(
        parser.get_element(&longitude).unwrap().to_string(),
        "-2.4841220"
    );
}
