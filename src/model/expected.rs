//! Fixture-side value type.
//!
//! `Expected` mirrors [`Value`] with three differences: strings are
//! authored [`Text`], any position may hold a [`Pattern`], and graph
//! expectations carry optional fields that loose mode treats as wildcards.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::encoding::Text;
use crate::pattern::Pattern;
use crate::printer::Printer;
use crate::Result;
use super::{
    ExpectedEdge, ExpectedMap, ExpectedPath, ExpectedVertex, NullKind, PropertyMap, Value,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    Empty,
    Null(NullKind),
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Text),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    List(Vec<Expected>),
    Set(Vec<Expected>),
    Map(ExpectedMap),
    Vertex(Box<ExpectedVertex>),
    Edge(Box<ExpectedEdge>),
    Path(Box<ExpectedPath>),
    /// Matches the actual value's rendering, whatever its type.
    Pattern(Pattern),
}

impl Expected {
    pub const NULL: Expected = Expected::Null(NullKind::Null);

    /// Compile `re` into a pattern expectation.
    pub fn pattern(re: &str) -> Result<Self> {
        Ok(Expected::Pattern(Pattern::new(re)?))
    }

    pub fn set<T: Into<Expected>>(items: impl IntoIterator<Item = T>) -> Self {
        Expected::Set(items.into_iter().map(Into::into).collect())
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Expected::Pattern(_))
    }
}

impl From<bool> for Expected { fn from(v: bool) -> Self { Expected::Bool(v) } }
impl From<i32> for Expected { fn from(v: i32) -> Self { Expected::Int(v as i64) } }
impl From<i64> for Expected { fn from(v: i64) -> Self { Expected::Int(v) } }
impl From<f64> for Expected { fn from(v: f64) -> Self { Expected::Float(v) } }
impl From<&str> for Expected { fn from(v: &str) -> Self { Expected::Str(Text::from(v)) } }
impl From<String> for Expected { fn from(v: String) -> Self { Expected::Str(Text::from(v)) } }
impl From<Text> for Expected { fn from(v: Text) -> Self { Expected::Str(v) } }
impl From<NaiveDate> for Expected { fn from(v: NaiveDate) -> Self { Expected::Date(v) } }
impl From<NaiveTime> for Expected { fn from(v: NaiveTime) -> Self { Expected::Time(v) } }
impl From<NaiveDateTime> for Expected { fn from(v: NaiveDateTime) -> Self { Expected::DateTime(v) } }
impl From<NullKind> for Expected { fn from(v: NullKind) -> Self { Expected::Null(v) } }
impl From<Pattern> for Expected { fn from(v: Pattern) -> Self { Expected::Pattern(v) } }
impl From<ExpectedVertex> for Expected { fn from(v: ExpectedVertex) -> Self { Expected::Vertex(Box::new(v)) } }
impl From<ExpectedEdge> for Expected { fn from(v: ExpectedEdge) -> Self { Expected::Edge(Box::new(v)) } }
impl From<ExpectedPath> for Expected { fn from(v: ExpectedPath) -> Self { Expected::Path(Box::new(v)) } }
impl<T: Into<Expected>> From<Vec<T>> for Expected {
    fn from(v: Vec<T>) -> Self { Expected::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Expected>> From<Option<T>> for Expected {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Expected::NULL) }
}

/// The exact expectation for a concrete value: every optional field is
/// filled in and strings keep their raw bytes.
impl From<&Value> for Expected {
    fn from(v: &Value) -> Self {
        match v {
            Value::Empty => Expected::Empty,
            Value::Null(k) => Expected::Null(*k),
            Value::Bool(b) => Expected::Bool(*b),
            Value::Int(i) => Expected::Int(*i),
            Value::Float(f) => Expected::Float(*f),
            Value::Str(s) => Expected::Str(Text::Bytes(s.clone())),
            Value::Date(d) => Expected::Date(*d),
            Value::Time(t) => Expected::Time(*t),
            Value::DateTime(dt) => Expected::DateTime(*dt),
            Value::List(l) => Expected::List(l.iter().map(Expected::from).collect()),
            Value::Set(s) => Expected::Set(s.iter().map(Expected::from).collect()),
            Value::Map(m) => Expected::Map(expect_map(m)),
            Value::Vertex(v) => Expected::Vertex(Box::new(ExpectedVertex::from(v.as_ref()))),
            Value::Edge(e) => Expected::Edge(Box::new(ExpectedEdge::from(e.as_ref()))),
            Value::Path(p) => Expected::Path(Box::new(ExpectedPath::from(p.as_ref()))),
        }
    }
}

pub(crate) fn expect_map(props: &PropertyMap) -> ExpectedMap {
    props
        .iter()
        .map(|(k, v)| (Text::Bytes(k.clone()), Expected::from(v)))
        .collect()
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Printer::default().display_expected(self))
    }
}
