//! Engine-side value type.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::printer::Printer;
use super::{Edge, Path, PropertyMap, Vertex};

/// A value as decoded from the query engine.
///
/// Strings, identifiers and map keys are raw bytes; their text form depends
/// on the encoding the engine was configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Empty,
    Null(NullKind),
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Vec<u8>),

    // Temporal types (microsecond precision)
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),

    // Containers
    List(Vec<Value>),
    Set(Vec<Value>),
    Map(#[serde(with = "super::property_map::pairs")] PropertyMap),

    // Graph types
    Vertex(Box<Vertex>),
    Edge(Box<Edge>),
    Path(Box<Path>),
}

/// The engine distinguishes why a value is null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullKind {
    #[default]
    Null,
    NaN,
    BadData,
    BadType,
    Overflow,
    UnknownProp,
    DivByZero,
    OutOfRange,
}

impl NullKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NullKind::Null => "NULL",
            NullKind::NaN => "NaN",
            NullKind::BadData => "BAD_DATA",
            NullKind::BadType => "BAD_TYPE",
            NullKind::Overflow => "ERR_OVERFLOW",
            NullKind::UnknownProp => "UNKNOWN_PROP",
            NullKind::DivByZero => "DIV_BY_ZERO",
            NullKind::OutOfRange => "OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for NullKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    pub const NULL: Value = Value::Null(NullKind::Null);

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "EMPTY",
            Value::Null(_) => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::Int(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::Str(_) => "STRING",
            Value::Date(_) => "DATE",
            Value::Time(_) => "TIME",
            Value::DateTime(_) => "DATETIME",
            Value::List(_) => "LIST",
            Value::Set(_) => "SET",
            Value::Map(_) => "MAP",
            Value::Vertex(_) => "VERTEX",
            Value::Edge(_) => "EDGE",
            Value::Path(_) => "PATH",
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null(_)) }
    pub fn is_empty(&self) -> bool { matches!(self, Value::Empty) }

    /// A string value from raw engine bytes.
    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Value::Str(v.into())
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int(v as i64) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::Str(v.into_bytes()) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::Str(v.as_bytes().to_vec()) } }
impl From<NaiveDate> for Value { fn from(v: NaiveDate) -> Self { Value::Date(v) } }
impl From<NaiveTime> for Value { fn from(v: NaiveTime) -> Self { Value::Time(v) } }
impl From<NaiveDateTime> for Value { fn from(v: NaiveDateTime) -> Self { Value::DateTime(v) } }
impl From<NullKind> for Value { fn from(v: NullKind) -> Self { Value::Null(v) } }
impl From<Vertex> for Value { fn from(v: Vertex) -> Self { Value::Vertex(Box::new(v)) } }
impl From<Edge> for Value { fn from(v: Edge) -> Self { Value::Edge(Box::new(v)) } }
impl From<Path> for Value { fn from(v: Path) -> Self { Value::Path(Box::new(v)) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::NULL) }
}

// ============================================================================
// Display
// ============================================================================

/// Renders with UTF-8 decoding; use [`Printer`] for other encodings.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Printer::default().display(self))
    }
}
