//! Canonical text rendering of result values.
//!
//! The rendering is what patterns are matched against, and what mismatch
//! reports show. Formats:
//!
//! ```text
//! NULL  BAD_TYPE  __EMPTY__  true  42  1.5  2021-03-04  12:30:00.000000
//! [1, "a"]   {1, 2}   {age: 42, name: "Tim"}
//! ("Tim" :player{age: 42} :bachelor{})
//! [:like "Tim"->"Tony" @0 {likeness: 95}]
//! <("Tim")-[:like@0 {}]->("Tony")<-[:serve@0 {}]-("Spurs")>
//! ```
//!
//! A string at the top level renders as its bare text; nested strings are
//! quoted. Map keys are sorted so the output is deterministic.

use std::fmt::{self, Write};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::encoding::{Text, TextEncoding};
use crate::model::*;

pub fn date_string(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn time_string(t: &NaiveTime) -> String {
    t.format("%H:%M:%S%.6f").to_string()
}

pub fn datetime_string(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Renders values, decoding engine bytes with a fixed encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printer {
    encoding: TextEncoding,
}

/// [`fmt::Display`] adapter returned by [`Printer::display`].
pub struct ValueDisplay<'a> {
    printer: Printer,
    value: &'a Value,
}

/// [`fmt::Display`] adapter returned by [`Printer::display_expected`].
pub struct ExpectedDisplay<'a> {
    printer: Printer,
    value: &'a Expected,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer.write_value(f, self.value)
    }
}

impl fmt::Display for ExpectedDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer.write_expected(f, self.value)
    }
}

impl Printer {
    pub fn new(encoding: TextEncoding) -> Self {
        Self { encoding }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// The text a pattern is matched against.
    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Str(s) => self.encoding.decode(s).into_owned(),
            _ => self.display(value).to_string(),
        }
    }

    pub fn display<'a>(&self, value: &'a Value) -> ValueDisplay<'a> {
        ValueDisplay { printer: *self, value }
    }

    pub fn display_expected<'a>(&self, value: &'a Expected) -> ExpectedDisplay<'a> {
        ExpectedDisplay { printer: *self, value }
    }

    pub fn row(&self, row: &Row) -> String {
        let mut out = String::from("|");
        for v in &row.values {
            out.push_str(&format!("{}|", self.display(v)));
        }
        out
    }

    pub fn expected_row(&self, row: &ExpectedRow) -> String {
        let mut out = String::from("|");
        for v in &row.values {
            out.push_str(&format!("{}|", self.display_expected(v)));
        }
        out
    }

    /// Header line of column names, then one line per row.
    pub fn dataset(&self, ds: &DataSet) -> String {
        let mut lines = Vec::with_capacity(ds.rows.len() + 1);
        let header: Vec<_> = ds.column_names.iter().map(|c| self.encoding.decode(c)).collect();
        lines.push(format!("|{}|", header.join("|")));
        lines.extend(ds.rows.iter().map(|r| self.row(r)));
        lines.join("\n")
    }

    pub fn expected_dataset(&self, ds: &ExpectedDataSet) -> String {
        let mut lines = Vec::with_capacity(ds.rows.len() + 1);
        let header: Vec<_> = ds.column_names.iter().map(|c| self.text(c)).collect();
        lines.push(format!("|{}|", header.join("|")));
        lines.extend(ds.rows.iter().map(|r| self.expected_row(r)));
        lines.join("\n")
    }

    // ========================================================================
    // Engine values
    // ========================================================================

    fn write_value(&self, f: &mut fmt::Formatter<'_>, v: &Value) -> fmt::Result {
        match v {
            Value::Empty => f.write_str("__EMPTY__"),
            Value::Null(k) => f.write_str(k.as_str()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write_float(f, *x),
            Value::Str(s) => write_quoted(f, &self.encoding.decode(s)),
            Value::Date(d) => f.write_str(&date_string(d)),
            Value::Time(t) => f.write_str(&time_string(t)),
            Value::DateTime(dt) => f.write_str(&datetime_string(dt)),
            Value::List(l) => self.write_seq(f, "[", l, "]"),
            Value::Set(s) => self.write_seq(f, "{", s, "}"),
            Value::Map(m) => self.write_props(f, m),
            Value::Vertex(v) => self.write_vertex(f, v),
            Value::Edge(e) => {
                write!(f, "[:{} ", self.encoding.decode(&e.name))?;
                self.write_value(f, &e.src)?;
                f.write_str("->")?;
                self.write_value(f, &e.dst)?;
                write!(f, " @{} ", e.ranking)?;
                self.write_props(f, &e.props)?;
                f.write_str("]")
            }
            Value::Path(p) => {
                f.write_str("<")?;
                self.write_vertex(f, &p.src)?;
                for step in &p.steps {
                    let (open, close) = arrows(step.edge_type.direction());
                    write!(f, "{open}[:{}@{} ", self.encoding.decode(&step.name), step.ranking)?;
                    self.write_props(f, &step.props)?;
                    write!(f, "]{close}")?;
                    self.write_vertex(f, &step.dst)?;
                }
                f.write_str(">")
            }
        }
    }

    fn write_seq(&self, f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
        f.write_str(open)?;
        for (i, v) in items.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            self.write_value(f, v)?;
        }
        f.write_str(close)
    }

    fn write_props(&self, f: &mut fmt::Formatter<'_>, props: &PropertyMap) -> fmt::Result {
        let mut entries: Vec<_> = props.iter().map(|(k, v)| (self.encoding.decode(k), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        f.write_str("{")?;
        for (i, (k, v)) in entries.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            write!(f, "{k}: ")?;
            self.write_value(f, v)?;
        }
        f.write_str("}")
    }

    fn write_vertex(&self, f: &mut fmt::Formatter<'_>, v: &Vertex) -> fmt::Result {
        f.write_str("(")?;
        self.write_value(f, &v.vid)?;
        for tag in &v.tags {
            write!(f, " :{}", self.encoding.decode(&tag.name))?;
            self.write_props(f, &tag.props)?;
        }
        f.write_str(")")
    }

    // ========================================================================
    // Expectations (wildcards render as `_`)
    // ========================================================================

    fn text(&self, t: &Text) -> String {
        match t {
            Text::Str(s) => s.clone(),
            Text::Bytes(b) => self.encoding.decode(b).into_owned(),
        }
    }

    fn write_expected(&self, f: &mut fmt::Formatter<'_>, v: &Expected) -> fmt::Result {
        match v {
            Expected::Empty => f.write_str("__EMPTY__"),
            Expected::Null(k) => f.write_str(k.as_str()),
            Expected::Bool(b) => write!(f, "{b}"),
            Expected::Int(i) => write!(f, "{i}"),
            Expected::Float(x) => write_float(f, *x),
            Expected::Str(t) => write_quoted(f, &self.text(t)),
            Expected::Date(d) => f.write_str(&date_string(d)),
            Expected::Time(t) => f.write_str(&time_string(t)),
            Expected::DateTime(dt) => f.write_str(&datetime_string(dt)),
            Expected::List(l) => self.write_expected_seq(f, "[", l, "]"),
            Expected::Set(s) => self.write_expected_seq(f, "{", s, "}"),
            Expected::Map(m) => self.write_expected_props(f, Some(m)),
            Expected::Pattern(p) => write!(f, "{p}"),
            Expected::Vertex(v) => self.write_expected_vertex(f, v),
            Expected::Edge(e) => {
                write!(f, "[:{} ", self.opt_text(e.name.as_ref()))?;
                self.write_opt_expected(f, e.src.as_ref())?;
                f.write_str("->")?;
                self.write_opt_expected(f, e.dst.as_ref())?;
                match e.ranking {
                    Some(r) => write!(f, " @{r} ")?,
                    None => f.write_str(" @_ ")?,
                }
                self.write_expected_props(f, e.props.as_ref())?;
                f.write_str("]")
            }
            Expected::Path(p) => {
                f.write_str("<")?;
                self.write_expected_vertex(f, &p.src)?;
                for step in &p.steps {
                    let dir = step.edge_type.map_or(Direction::Forward, EdgeType::direction);
                    let (open, close) = arrows(dir);
                    write!(f, "{open}[:{}@", self.opt_text(step.name.as_ref()))?;
                    match step.ranking {
                        Some(r) => write!(f, "{r} ")?,
                        None => f.write_str("_ ")?,
                    }
                    self.write_expected_props(f, step.props.as_ref())?;
                    write!(f, "]{close}")?;
                    self.write_expected_vertex(f, &step.dst)?;
                }
                f.write_str(">")
            }
        }
    }

    fn opt_text(&self, t: Option<&Text>) -> String {
        t.map_or_else(|| "_".to_owned(), |t| self.text(t))
    }

    fn write_opt_expected(&self, f: &mut fmt::Formatter<'_>, v: Option<&Expected>) -> fmt::Result {
        match v {
            Some(v) => self.write_expected(f, v),
            None => f.write_str("_"),
        }
    }

    fn write_expected_seq(&self, f: &mut fmt::Formatter<'_>, open: &str, items: &[Expected], close: &str) -> fmt::Result {
        f.write_str(open)?;
        for (i, v) in items.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            self.write_expected(f, v)?;
        }
        f.write_str(close)
    }

    fn write_expected_props(&self, f: &mut fmt::Formatter<'_>, props: Option<&ExpectedMap>) -> fmt::Result {
        let Some(props) = props else { return f.write_str("{_}") };
        let mut entries: Vec<_> = props.iter().map(|(k, v)| (self.text(k), v)).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        f.write_str("{")?;
        for (i, (k, v)) in entries.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            write!(f, "{k}: ")?;
            self.write_expected(f, v)?;
        }
        f.write_str("}")
    }

    fn write_expected_vertex(&self, f: &mut fmt::Formatter<'_>, v: &ExpectedVertex) -> fmt::Result {
        f.write_str("(")?;
        self.write_opt_expected(f, v.vid.as_ref())?;
        for tag in v.tags.iter().flatten() {
            write!(f, " :{}", self.text(&tag.name))?;
            if tag.props.is_some() {
                self.write_expected_props(f, tag.props.as_ref())?;
            }
        }
        f.write_str(")")
    }
}

fn arrows(dir: Direction) -> (&'static str, &'static str) {
    match dir {
        Direction::Forward => ("-", "->"),
        Direction::Reverse => ("<-", "-"),
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Integral floats keep a trailing `.0` so they never render like integers.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e16 {
        write!(f, "{x:.1}")
    } else {
        write!(f, "{x}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn utf8() -> Printer {
        Printer::default()
    }

    #[test]
    fn test_scalars() {
        let p = utf8();
        assert_eq!(p.render(&Value::NULL), "NULL");
        assert_eq!(p.render(&Value::Null(NullKind::DivByZero)), "DIV_BY_ZERO");
        assert_eq!(p.render(&Value::Empty), "__EMPTY__");
        assert_eq!(p.render(&Value::Float(2.0)), "2.0");
        assert_eq!(p.render(&Value::Float(0.25)), "0.25");
        assert_eq!(p.render(&Value::from("alice123")), "alice123");
    }

    #[test]
    fn test_temporal() {
        let d = NaiveDate::from_ymd_opt(2021, 3, 4).unwrap();
        let t = NaiveTime::from_hms_micro_opt(9, 5, 7, 120).unwrap();
        assert_eq!(date_string(&d), "2021-03-04");
        assert_eq!(time_string(&t), "09:05:07.000120");
        assert_eq!(datetime_string(&d.and_time(t)), "2021-03-04T09:05:07.000120");
    }

    #[test]
    fn test_nested_strings_are_quoted() {
        let v = Value::from(vec![Value::from("a\"b"), Value::Int(1)]);
        assert_eq!(utf8().render(&v), r#"["a\"b", 1]"#);
        let m = Value::map([("b", Value::Int(2)), ("a", Value::Int(1))]);
        assert_eq!(utf8().render(&m), "{a: 1, b: 2}");
    }

    #[test]
    fn test_graph_values() {
        let v = Vertex::new("Tim").with_tag(Tag::new("player").with_property("age", 42));
        assert_eq!(utf8().render(&Value::from(v.clone())), r#"("Tim" :player{age: 42})"#);

        let e = Edge::new("Tim", "Tony", 1, "like").with_property("likeness", 95);
        assert_eq!(utf8().render(&Value::from(e)), r#"[:like "Tim"->"Tony" @0 {likeness: 95}]"#);

        let path = Path::new(Vertex::new("Tim"))
            .then(Step::new(Vertex::new("Tony"), 1, "like"))
            .then(Step::new(Vertex::new("Spurs"), -2, "serve"));
        assert_eq!(
            utf8().render(&Value::from(path)),
            r#"<("Tim")-[:like@0 {}]->("Tony")<-[:serve@0 {}]-("Spurs")>"#
        );
    }

    #[test]
    fn test_latin1_decoding() {
        let p = Printer::new(TextEncoding::Latin1);
        assert_eq!(p.render(&Value::bytes(vec![b'c', b'a', b'f', 0xE9])), "café");
    }

    #[test]
    fn test_expected_wildcards() {
        let e = ExpectedEdge::any().with_name("like");
        assert_eq!(Expected::from(e).to_string(), "[:like _->_ @_ {_}]");
        let v = ExpectedVertex::id("Tim").with_tag(ExpectedTag::any_props("player"));
        assert_eq!(Expected::from(v).to_string(), r#"("Tim" :player)"#);
    }

    #[test]
    fn test_dataset_table() {
        let ds = DataSet::new(["name", "age"]).with_row(Row::new([Value::from("Tim"), Value::Int(42)]));
        assert_eq!(utf8().dataset(&ds), "|name|age|\n|\"Tim\"|42|");
    }

    #[test]
    fn test_expected_dataset_table() {
        let ds = ExpectedDataSet::new(["name", "v"])
            .with_row(ExpectedRow::new([Expected::pattern("^T").unwrap(), Expected::from(ExpectedVertex::id("Tim"))]))
            .with_row(ExpectedRow::new([Expected::from("Tony"), Expected::NULL]));
        assert_eq!(
            utf8().expected_dataset(&ds),
            "|name|v|\n|/^T/|(\"Tim\")|\n|\"Tony\"|NULL|"
        );
        assert_eq!(utf8().expected_dataset(&ExpectedDataSet::new(["x"])), "|x|");
    }
}
