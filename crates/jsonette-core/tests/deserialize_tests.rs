//! Parser tests: scalars, containers, whitespace and comma tolerance,
//! Unicode escapes, and every error path with its byte offset.

use jsonette_core::{deserialize, serialize, ParseError, Value};

// ============================================================================
// Well-formed input
// ============================================================================

#[test]
fn deserialize_null() {
    let v = deserialize("null").unwrap();
    assert!(v.is_null());
    assert_eq!(serialize(&v), "null");
}

#[test]
fn deserialize_booleans() {
    assert_eq!(deserialize("true").unwrap(), Value::Bool(true));
    assert_eq!(deserialize("false").unwrap(), Value::Bool(false));
}

#[test]
fn deserialize_numbers() {
    assert_eq!(deserialize("-123").unwrap(), Value::Number(-123.0));
    assert_eq!(deserialize("3.14").unwrap(), Value::Number(3.14));
    assert_eq!(deserialize("0").unwrap(), Value::Number(0.0));
}

#[test]
fn deserialize_string() {
    assert_eq!(
        deserialize(r#""hello world""#).unwrap(),
        Value::from("hello world")
    );
}

#[test]
fn deserialize_array() {
    let v = deserialize(r#"["R", "G", "B"]"#).unwrap();
    assert_eq!(v.items().unwrap().len(), 3);
    assert_eq!(serialize(&v), r#"["R", "G", "B"]"#);
}

#[test]
fn deserialize_object_roundtrips_exact_text() {
    let text = r#"{"pi": 3.14, "rule": {"work": 996}}"#;
    let v = deserialize(text).unwrap();
    assert_eq!(serialize(&v), text);
}

#[test]
fn deserialize_nested_object_before_sibling_key() {
    // The nested object's `}` must be consumed so the outer parse can
    // continue with `"c"`.
    let text = r#"{"a": {"b": 1}, "c": 2}"#;
    let v = deserialize(text).unwrap();
    assert_eq!(serialize(&v), text);
}

#[test]
fn deserialize_unicode_escapes() {
    // `\uXXXX` escapes decode to UTF-8 text, which serializes verbatim.
    let v = deserialize(r#"{"\u4f60\u597d": "\u4e16\u754c"}"#).unwrap();
    assert_eq!(serialize(&v), r#"{"你好": "世界"}"#);
}

#[test]
fn deserialize_surrogate_pair() {
    let v = deserialize(r#""\ud83d\ude00""#).unwrap();
    assert_eq!(v, Value::from("😀"));
}

#[test]
fn deserialize_escaped_quote_inside_string() {
    // An escaped quote must not terminate the string scan.
    let v = deserialize(r#""say \"hi\"""#).unwrap();
    assert_eq!(v, Value::from("say \"hi\""));
}

#[test]
fn deserialize_escaped_backslash_before_closing_quote() {
    let v = deserialize(r#""a\\""#).unwrap();
    assert_eq!(v, Value::from("a\\"));
}

#[test]
fn unrecognized_escapes_pass_through() {
    assert_eq!(deserialize(r#""a\qb""#).unwrap(), Value::from("a\\qb"));
}

#[test]
fn deep_keyed_access_after_parse() {
    let text = r#"{"Columns": {"farm_name": {"type": "str"}, "id": {"type": "int"}}}"#;
    let obj = deserialize(text).unwrap();
    assert_eq!(obj["Columns"]["farm_name"]["type"], Value::from("str"));
}

#[test]
fn whitespace_around_punctuation() {
    let v = deserialize("{ \"a\" : [ 1 , 2 ] ,\r\n \"b\" : null }").unwrap();
    assert_eq!(serialize(&v), r#"{"a": [1, 2], "b": null}"#);
}

// ============================================================================
// Tolerated dialect quirks
// ============================================================================

#[test]
fn empty_input_is_null() {
    assert_eq!(deserialize("").unwrap(), Value::Null);
}

#[test]
fn whitespace_only_input_is_null() {
    assert_eq!(deserialize(" \r\n").unwrap(), Value::Null);
}

#[test]
fn trailing_commas_are_tolerated() {
    assert_eq!(serialize(&deserialize("[1, 2, ]").unwrap()), "[1, 2]");
    assert_eq!(
        serialize(&deserialize(r#"{"a": 1, }"#).unwrap()),
        r#"{"a": 1}"#
    );
}

#[test]
fn duplicate_keys_overwrite() {
    let v = deserialize(r#"{"a": 1, "a": 2}"#).unwrap();
    assert_eq!(v["a"], Value::Number(2.0));
    assert_eq!(v.entries().unwrap().len(), 1);
}

#[test]
fn trailing_text_after_value_is_ignored() {
    // Prefix semantics: parsing stops after the first complete value.
    assert_eq!(deserialize("null garbage").unwrap(), Value::Null);
    assert_eq!(deserialize("[1] [2]").unwrap(), Value::from(vec![1]));
}

#[test]
fn exponent_notation_is_not_supported() {
    // At top level the number scan stops at `e` and the rest is trailing
    // text; inside a container the stray `e` is caught.
    assert_eq!(deserialize("1e5").unwrap(), Value::Number(1.0));
    assert!(deserialize("[1e5]").is_err());
}

// ============================================================================
// Error paths
// ============================================================================

#[test]
fn tab_is_not_whitespace() {
    // The whitespace set is space, \r, \n only.
    assert!(matches!(
        deserialize("\t1"),
        Err(ParseError::UnexpectedCharacter {
            found: '\t',
            offset: 0
        })
    ));
}

#[test]
fn misspelled_literals_are_errors() {
    assert!(matches!(
        deserialize("nul"),
        Err(ParseError::InvalidLiteral {
            expected: "null",
            ..
        })
    ));
    assert!(matches!(
        deserialize("ture"),
        Err(ParseError::InvalidLiteral {
            expected: "true",
            ..
        })
    ));
    assert!(matches!(
        deserialize("falsy"),
        Err(ParseError::InvalidLiteral {
            expected: "false",
            ..
        })
    ));
}

#[test]
fn unexpected_leading_character_is_an_error() {
    let err = deserialize("?").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedCharacter {
            found: '?',
            offset: 0
        }
    );
    assert_eq!(err.offset(), 0);
}

#[test]
fn error_offsets_point_into_the_input() {
    let err = deserialize(r#"{"key": ?}"#).unwrap_err();
    assert_eq!(err.offset(), 8);
}

#[test]
fn unterminated_string_is_an_error() {
    assert!(matches!(
        deserialize(r#""abc"#),
        Err(ParseError::UnterminatedString { offset: 0 })
    ));
    // A backslash right before end-of-input cannot be a complete escape.
    assert!(matches!(
        deserialize(r#""abc\"#),
        Err(ParseError::UnterminatedString { offset: 0 })
    ));
}

#[test]
fn unterminated_containers_are_errors() {
    assert!(matches!(
        deserialize("[1, 2"),
        Err(ParseError::UnexpectedEof { .. })
    ));
    assert!(matches!(
        deserialize(r#"{"a": 1"#),
        Err(ParseError::UnexpectedEof { .. })
    ));
}

#[test]
fn missing_colon_is_an_error() {
    assert!(matches!(
        deserialize(r#"{"a" 1}"#),
        Err(ParseError::Expected {
            expected: ':',
            offset: 5
        })
    ));
}

#[test]
fn non_string_object_key_is_an_error() {
    assert!(matches!(
        deserialize("{1: 2}"),
        Err(ParseError::Expected {
            expected: '"',
            offset: 1
        })
    ));
}

#[test]
fn malformed_numbers_are_errors() {
    assert!(matches!(
        deserialize("-"),
        Err(ParseError::InvalidNumber { offset: 0 })
    ));
    assert!(matches!(
        deserialize("1."),
        Err(ParseError::InvalidNumber { offset: 0 })
    ));
    assert!(matches!(
        deserialize("[-]"),
        Err(ParseError::InvalidNumber { offset: 1 })
    ));
}

#[test]
fn invalid_unicode_escapes_are_errors() {
    assert!(matches!(
        deserialize(r#""\u12""#),
        Err(ParseError::InvalidUnicodeEscape { .. })
    ));
    assert!(matches!(
        deserialize(r#""\uzzzz""#),
        Err(ParseError::InvalidUnicodeEscape { .. })
    ));
}

#[test]
fn unpaired_surrogates_are_errors() {
    // High surrogate with nothing after it.
    assert!(matches!(
        deserialize(r#""\ud800""#),
        Err(ParseError::UnpairedSurrogate { .. })
    ));
    // Lone low surrogate.
    assert!(matches!(
        deserialize(r#""\ude00""#),
        Err(ParseError::UnpairedSurrogate { .. })
    ));
    // High surrogate followed by a non-surrogate escape.
    assert!(matches!(
        deserialize(r#""\ud83dA""#),
        Err(ParseError::UnpairedSurrogate { .. })
    ));
}
