//! # jsonette-core
//!
//! Minimal JSON value representation with a recursive-descent parser and a
//! compact serializer.
//!
//! A [`Value`] holds one of the seven JSON kinds. Documents are built
//! programmatically through keyed assignment (a null value auto-vivifies
//! into an object on first write), rendered with [`serialize`], and parsed
//! back with [`deserialize`]. Object keys serialize in lexicographic order,
//! so output is deterministic regardless of insertion order.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonette_core::{deserialize, serialize, Value};
//!
//! // Build a document programmatically.
//! let mut doc = Value::default();
//! doc["name"] = Value::from("Alice");
//! doc["admin"] = Value::from(true);
//! assert_eq!(serialize(&doc), r#"{"admin": true, "name": "Alice"}"#);
//!
//! // Parse it back (roundtrip).
//! let parsed = deserialize(&serialize(&doc)).unwrap();
//! assert_eq!(parsed, doc);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` tagged union and its construction/access API
//! - [`encoder`] — `Value` → compact JSON text
//! - [`decoder`] — JSON text → `Value`, with positioned errors
//! - [`error`] — [`ParseError`], one variant per failure kind

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod value;

mod escape;

pub use decoder::deserialize;
pub use encoder::serialize;
pub use error::{ParseError, Result};
pub use value::Value;
