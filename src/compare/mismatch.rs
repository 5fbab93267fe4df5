//! Why a result set did not match.

/// The first dataset-level check that failed. Rows are rendered with the
/// comparator's printer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    #[error("expected no data set, got one")]
    UnexpectedDataSet,

    #[error("expected a data set, got none")]
    MissingDataSet,

    #[error("too few rows: got {actual}, expected at least {expected}")]
    RowCount { actual: usize, expected: usize },

    #[error("column count differs: got {actual}, expected {expected}")]
    ColumnCount { actual: usize, expected: usize },

    #[error("column {index} differs: got `{actual}`, expected `{expected}`")]
    ColumnName { index: usize, actual: String, expected: String },

    #[error("row {index} differs\n  got:      {actual}\n  expected: {expected}")]
    Row { index: usize, actual: String, expected: String },

    #[error("no unused result row matches expected row {index}: {expected}")]
    Unmatched { index: usize, expected: String },

    #[error("{count} result row(s) not covered by the expectation")]
    Uncovered { count: usize },
}
