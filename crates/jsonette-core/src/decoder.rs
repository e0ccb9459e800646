//! Recursive-descent JSON parser.
//!
//! A set of mutually recursive functions threads a single byte cursor
//! through the input; there is no lexer and no lookahead beyond one
//! character. Dispatch is on the first non-whitespace byte of each value:
//! `n`/`t`/`f` select a keyword, `-` or a digit selects a number, `"` a
//! string, `[` an array, `{` an object. Anything else is a
//! [`ParseError::UnexpectedCharacter`].
//!
//! # Accepted grammar
//!
//! The grammar is deliberately the original jsonette dialect rather than
//! full RFC 8259:
//!
//! - whitespace is space, `\r`, and `\n` (tab is not skipped);
//! - numbers are `-? digits (. digits)?` — no exponents, no `+`, and no
//!   leading-zero rejection;
//! - trailing commas in arrays and objects are tolerated, as are missing
//!   commas between whitespace-separated elements;
//! - duplicate object keys overwrite, last one wins;
//! - parsing stops after the first complete value; trailing text is
//!   ignored;
//! - empty (or all-whitespace) input deserializes to null, not an error.
//!
//! Nesting depth is unbounded; pathologically deep input can exhaust the
//! call stack.

use std::collections::BTreeMap;

use crate::error::{ParseError, Result};
use crate::escape::unescape;
use crate::value::Value;

/// Deserialize JSON text into a [`Value`].
///
/// ```rust
/// use jsonette_core::{deserialize, Value};
///
/// let doc = deserialize(r#"{"pi": 3.14, "rule": {"work": 996}}"#).unwrap();
/// assert_eq!(doc["rule"]["work"].number(), Some(996.0));
/// ```
pub fn deserialize(input: &str) -> Result<Value> {
    let mut pos = 0;
    skip_whitespace(input, &mut pos);
    if pos == input.len() {
        return Ok(Value::Null);
    }
    parse_value(input, &mut pos)
}

fn parse_value(s: &str, pos: &mut usize) -> Result<Value> {
    skip_whitespace(s, pos);
    match s.as_bytes().get(*pos).copied() {
        None => Err(ParseError::UnexpectedEof { offset: *pos }),
        Some(b'n') => parse_literal(s, pos, "null").map(|()| Value::Null),
        Some(b't') => parse_literal(s, pos, "true").map(|()| Value::Bool(true)),
        Some(b'f') => parse_literal(s, pos, "false").map(|()| Value::Bool(false)),
        Some(b'-') | Some(b'0'..=b'9') => parse_number(s, pos),
        Some(b'"') => parse_string(s, pos).map(Value::String),
        Some(b'[') => parse_array(s, pos),
        Some(b'{') => parse_object(s, pos),
        Some(_) => {
            let found = s[*pos..].chars().next().unwrap_or('\u{FFFD}');
            Err(ParseError::UnexpectedCharacter {
                found,
                offset: *pos,
            })
        }
    }
}

/// Match a fixed keyword (`null`, `true`, `false`) by substring comparison.
fn parse_literal(s: &str, pos: &mut usize, literal: &'static str) -> Result<()> {
    let end = *pos + literal.len();
    if s.get(*pos..end) != Some(literal) {
        return Err(ParseError::InvalidLiteral {
            expected: literal,
            offset: *pos,
        });
    }
    *pos = end;
    Ok(())
}

/// Scan `-? digits (. digits)?` and parse the slice as a double. The
/// fractional part selects floating parsing, but storage is a double either
/// way; integral literals stay exact up to double precision.
fn parse_number(s: &str, pos: &mut usize) -> Result<Value> {
    let start = *pos;
    let bytes = s.as_bytes();
    if bytes.get(*pos) == Some(&b'-') {
        *pos += 1;
    }
    let int_start = *pos;
    while matches!(bytes.get(*pos), Some(b'0'..=b'9')) {
        *pos += 1;
    }
    if *pos == int_start {
        return Err(ParseError::InvalidNumber { offset: start });
    }
    if bytes.get(*pos) == Some(&b'.') {
        *pos += 1;
        let frac_start = *pos;
        while matches!(bytes.get(*pos), Some(b'0'..=b'9')) {
            *pos += 1;
        }
        if *pos == frac_start {
            return Err(ParseError::InvalidNumber { offset: start });
        }
    }
    s[start..*pos]
        .parse::<f64>()
        .map(Value::Number)
        .map_err(|_| ParseError::InvalidNumber { offset: start })
}

/// Scan a string's content up to its closing quote, then resolve escapes.
///
/// The scan skips `\x` pairs wholesale, so an escaped quote inside the
/// string never terminates it. Whitespace is not skipped anywhere inside.
fn parse_string(s: &str, pos: &mut usize) -> Result<String> {
    let open = *pos;
    // The caller dispatched on the opening quote.
    *pos += 1;
    let content_start = *pos;
    let bytes = s.as_bytes();
    loop {
        match bytes.get(*pos).copied() {
            None => return Err(ParseError::UnterminatedString { offset: open }),
            Some(b'"') => break,
            Some(b'\\') => *pos += 2,
            Some(_) => *pos += 1,
        }
    }
    let raw = &s[content_start..*pos];
    *pos += 1;
    unescape(raw, content_start)
}

fn parse_array(s: &str, pos: &mut usize) -> Result<Value> {
    // Past the `[`.
    *pos += 1;
    let mut items = Vec::new();
    loop {
        skip_whitespace(s, pos);
        match s.as_bytes().get(*pos).copied() {
            None => return Err(ParseError::UnexpectedEof { offset: *pos }),
            Some(b']') => {
                *pos += 1;
                break;
            }
            Some(_) => {
                items.push(parse_value(s, pos)?);
                skip_whitespace(s, pos);
                if s.as_bytes().get(*pos) == Some(&b',') {
                    *pos += 1;
                }
            }
        }
    }
    Ok(Value::Array(items))
}

fn parse_object(s: &str, pos: &mut usize) -> Result<Value> {
    // Past the `{`.
    *pos += 1;
    let mut entries = BTreeMap::new();
    loop {
        skip_whitespace(s, pos);
        match s.as_bytes().get(*pos).copied() {
            None => return Err(ParseError::UnexpectedEof { offset: *pos }),
            Some(b'}') => {
                *pos += 1;
                break;
            }
            Some(b'"') => {
                let key = parse_string(s, pos)?;
                skip_whitespace(s, pos);
                if s.as_bytes().get(*pos) != Some(&b':') {
                    return Err(ParseError::Expected {
                        expected: ':',
                        offset: *pos,
                    });
                }
                *pos += 1;
                let value = parse_value(s, pos)?;
                // Duplicate keys overwrite, last one wins.
                entries.insert(key, value);
                skip_whitespace(s, pos);
                if s.as_bytes().get(*pos) == Some(&b',') {
                    *pos += 1;
                }
            }
            Some(_) => {
                return Err(ParseError::Expected {
                    expected: '"',
                    offset: *pos,
                });
            }
        }
    }
    Ok(Value::Object(entries))
}

/// Skip the whitespace set: space, `\r`, `\n`. Tab is deliberately absent.
fn skip_whitespace(s: &str, pos: &mut usize) {
    while let Some(b' ' | b'\r' | b'\n') = s.as_bytes().get(*pos) {
        *pos += 1;
    }
}
