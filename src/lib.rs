//! # graph-resultcmp: Semantic Equality for Graph Query Results
//!
//! Checks that a graph query engine's actual output matches an expected
//! result set that may be partially specified, order-insensitive,
//! pattern-based, or written with a different string representation than
//! the engine returns.
//!
//! ## Design Principles
//!
//! 1. **Two value families**: `Value` is what the engine decoded (bytes,
//!    every field present); `Expected` is what a test author wrote (text,
//!    patterns, optional wildcard fields).
//! 2. **Comparisons are total**: every check returns a boolean; `check`
//!    additionally says which part of a result set failed.
//! 3. **Layered comparator**: scalar → container → graph → row/dataset,
//!    each layer aware of strict/loose mode and the text encoding.
//!
//! ## Quick Start
//!
//! ```rust
//! use graph_resultcmp::{DataSet, DataSetComparator, Expected, ExpectedDataSet, ExpectedRow, Row, Value};
//!
//! let actual = DataSet::new(["name", "age"])
//!     .with_row(Row::new([Value::from("Tony Parker"), Value::from(36)]))
//!     .with_row(Row::new([Value::from("Tim Duncan"), Value::from(42)]));
//!
//! let expected = ExpectedDataSet::new(["name", "age"])
//!     .with_row(ExpectedRow::new([Expected::from("Tim Duncan"), Expected::from(42)]))
//!     .with_row(ExpectedRow::new([Expected::pattern(r"^Tony").unwrap(), Expected::from(36)]));
//!
//! assert!(DataSetComparator::default().compare(&actual, &expected));
//! ```
//!
//! ## Modes
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | `strict` | `true` | exact shape vs. expectation-as-partial-pattern |
//! | `order` | `false` | positional vs. multiset row matching |
//! | `included` | `false` | result may contain extra rows |
//! | `encoding` | `utf-8` | how authored text maps to engine bytes |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod compare;
pub mod config;
pub mod encoding;
pub mod pattern;
pub mod printer;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    DataSet, Row, Value, NullKind, Vertex, Tag, Edge, EdgeType, Direction, Path, Step,
    PropertyMap, Expected, ExpectedDataSet, ExpectedRow, ExpectedVertex, ExpectedTag,
    ExpectedEdge, ExpectedPath, ExpectedStep, ExpectedMap,
};

// ============================================================================
// Re-exports: Comparator
// ============================================================================

pub use compare::{DataSetComparator, Mismatch, FLOAT_TOLERANCE};
pub use config::ComparatorConfig;
pub use encoding::{Text, TextEncoding};
pub use pattern::Pattern;
pub use printer::Printer;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Row has {values} values but the data set has {columns} columns")]
    Arity { columns: usize, values: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
