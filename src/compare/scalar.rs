//! Scalar comparison and variant dispatch.

use crate::encoding::Text;
use crate::model::{Expected, Value};
use crate::printer::{date_string, datetime_string, time_string};
use super::DataSetComparator;

/// Absolute tolerance for float equality.
pub const FLOAT_TOLERANCE: f64 = 1.0e-8;

impl DataSetComparator {
    /// Compare one engine value against one expectation.
    ///
    /// Variants must agree, with two exceptions: a pattern expectation
    /// matches the rendering of any value, and a date, time or datetime
    /// matches a string holding its canonical form.
    pub fn compare_value(&self, actual: &Value, expected: &Expected) -> bool {
        match (actual, expected) {
            (_, Expected::Pattern(p)) => p.matches(&self.printer().render(actual)),

            (Value::Empty, Expected::Empty) => true,
            (Value::Null(a), Expected::Null(e)) => a == e,
            (Value::Bool(a), Expected::Bool(e)) => a == e,
            (Value::Int(a), Expected::Int(e)) => a == e,
            (Value::Float(a), Expected::Float(e)) => (a - e).abs() < FLOAT_TOLERANCE,
            (Value::Str(a), Expected::Str(e)) => e.matches(a, self.encoding),

            (Value::Date(a), Expected::Date(e)) => a == e,
            (Value::Date(a), Expected::Str(e)) => self.canonical_text_eq(&date_string(a), e),
            (Value::Time(a), Expected::Time(e)) => a == e,
            (Value::Time(a), Expected::Str(e)) => self.canonical_text_eq(&time_string(a), e),
            (Value::DateTime(a), Expected::DateTime(e)) => a == e,
            (Value::DateTime(a), Expected::Str(e)) => self.canonical_text_eq(&datetime_string(a), e),

            (Value::List(a), Expected::List(e)) => self.compare_list(a, e),
            (Value::Set(a), Expected::Set(e)) => self.compare_set(a, e),
            (Value::Map(a), Expected::Map(e)) => self.compare_map(a, e),

            (Value::Vertex(a), Expected::Vertex(e)) => self.compare_vertex(a, e),
            (Value::Edge(a), Expected::Edge(e)) => self.compare_edge(a, e),
            (Value::Path(a), Expected::Path(e)) => self.compare_path(a, e),

            _ => false,
        }
    }

    fn canonical_text_eq(&self, rendered: &str, expected: &Text) -> bool {
        match expected {
            Text::Str(s) => rendered == s,
            Text::Bytes(_) => self
                .encoding
                .encode(rendered)
                .is_some_and(|b| expected.matches(&b, self.encoding)),
        }
    }
}
