//! Result sets: named columns and rows of values.

use serde::{Deserialize, Serialize};

use crate::encoding::Text;
use crate::{Error, Result};
use super::{Expected, Value};

/// A row of engine values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<Value>,
}

/// A result set as returned by the engine. Every row has one value per
/// column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataSet {
    pub column_names: Vec<Vec<u8>>,
    pub rows: Vec<Row>,
}

impl Row {
    pub fn new(values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self { values: values.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self { Self { values } }
}

impl DataSet {
    pub fn new<C: Into<Vec<u8>>>(columns: impl IntoIterator<Item = C>) -> Self {
        Self {
            column_names: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, checking its arity against the columns.
    pub fn push_row(&mut self, row: impl Into<Row>) -> Result<()> {
        let row = row.into();
        if row.len() != self.column_names.len() {
            return Err(Error::Arity { columns: self.column_names.len(), values: row.len() });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Builder form of [`push_row`](Self::push_row). Arity is not checked
    /// here; the comparator rejects rows of the wrong width.
    pub fn with_row(mut self, row: impl Into<Row>) -> Self {
        self.rows.push(row.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        match self.rows.iter().find(|r| r.len() != self.column_names.len()) {
            Some(row) => Err(Error::Arity { columns: self.column_names.len(), values: row.len() }),
            None => Ok(()),
        }
    }

    /// Load a captured result set.
    pub fn from_json(json: &str) -> Result<Self> {
        let ds: DataSet = serde_json::from_str(json)?;
        ds.validate()?;
        Ok(ds)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Expected side
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpectedRow {
    pub values: Vec<Expected>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpectedDataSet {
    pub column_names: Vec<Text>,
    pub rows: Vec<ExpectedRow>,
}

impl ExpectedRow {
    pub fn new(values: impl IntoIterator<Item = impl Into<Expected>>) -> Self {
        Self { values: values.into_iter().map(Into::into).collect() }
    }
}

impl From<Vec<Expected>> for ExpectedRow {
    fn from(values: Vec<Expected>) -> Self { Self { values } }
}

impl From<&Row> for ExpectedRow {
    fn from(row: &Row) -> Self {
        Self { values: row.values.iter().map(Expected::from).collect() }
    }
}

impl ExpectedDataSet {
    pub fn new<C: Into<Text>>(columns: impl IntoIterator<Item = C>) -> Self {
        Self {
            column_names: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, row: impl Into<ExpectedRow>) -> Self {
        self.rows.push(row.into());
        self
    }
}

/// The exact expectation for a concrete result set.
impl From<&DataSet> for ExpectedDataSet {
    fn from(ds: &DataSet) -> Self {
        Self {
            column_names: ds.column_names.iter().cloned().map(Text::Bytes).collect(),
            rows: ds.rows.iter().map(ExpectedRow::from).collect(),
        }
    }
}
