//! The JSON value model.
//!
//! [`Value`] is a tagged union over the seven JSON kinds. A value holds
//! exactly one kind at a time; the only in-place kind change is the
//! documented auto-vivification on keyed write (`value["key"] = ...`), which
//! retags any non-object receiver to an empty object before inserting.
//!
//! Objects are `BTreeMap`s, so iteration (and therefore serialization) is
//! lexicographic by key regardless of insertion order. Arrays preserve
//! insertion order exactly.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::decoder;
use crate::encoder;
use crate::error::ParseError;

/// A JSON datum: null, boolean, number, string, array, or object.
///
/// Values are built from scalars via `From`, from sequences via
/// `From<Vec<_>>`/`FromIterator`, or implicitly as [`Value::Null`] promoted
/// to an object on first keyed write.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// All JSON numbers are stored as doubles; whether the literal carried a
    /// fractional part is not retained after parsing.
    Number(f64),
    /// Fully decoded text. Escape sequences are resolved at parse time and
    /// re-applied at serialize time.
    String(String),
    Array(Vec<Value>),
    /// Keys are unique; inserting an existing key overwrites its value.
    Object(BTreeMap<String, Value>),
}

static NULL: Value = Value::Null;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The numeric payload, if this value is a number.
    pub fn number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text payload, if this value is a string.
    pub fn string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload, if this value is `true` or `false`.
    pub fn boolean(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The elements, if this value is an array.
    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn items_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The key-value entries, if this value is an object.
    pub fn entries(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn entries_mut(&mut self) -> Option<&mut BTreeMap<String, Value>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up `key` without vivifying. `None` for missing keys and for
    /// non-object receivers.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Serialize this value to compact JSON text.
    pub fn serialize(&self) -> String {
        encoder::serialize(self)
    }

    /// The slot for `key`, retagging `self` to an object first if needed.
    ///
    /// This is the single mutation point that changes a value's kind in
    /// place: a non-object payload is discarded and replaced by an empty
    /// object in one step, so a stale payload is never observable.
    fn slot(&mut self, key: &str) -> &mut Value {
        if !matches!(self, Value::Object(_)) {
            *self = Value::Object(BTreeMap::new());
        }
        match self {
            Value::Object(entries) => entries.entry(key.to_owned()).or_default(),
            _ => unreachable!("receiver was just retagged to an object"),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Keyed read access. Missing keys and non-object receivers read as
    /// null; reads never vivify.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Value {
    /// Keyed write access with auto-vivification: a non-object receiver is
    /// retagged to an empty object (its payload is discarded), and a missing
    /// key is created as null.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.slot(key)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

macro_rules! value_from_number {
    ($($ty:ty)*) => {$(
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::Number(v as f64)
            }
        }
    )*};
}

value_from_number!(i8 i16 i32 i64 isize u8 u16 u32 u64 usize f32 f64);

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Object(entries)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

impl fmt::Display for Value {
    /// Renders the compact serialized form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encoder::serialize(self))
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decoder::deserialize(s)
    }
}
