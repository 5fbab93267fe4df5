//! # Comparator
//!
//! Compares engine output against a fixture expectation. The layers build
//! on each other:
//!
//! | Layer | Module | Entry points |
//! |-------|--------|--------------|
//! | Scalar | `scalar` | `compare_value` |
//! | Containers | `container` | `compare_list`, `compare_set`, `compare_map`, `compare_row` |
//! | Graph | `graph` | `compare_vertex`, `compare_edge`, `compare_path` |
//! | Result set | `dataset` | `compare`, `check` |
//!
//! All of them are methods on [`DataSetComparator`], which carries the mode
//! flags and the text encoding. A comparator holds no mutable state and can
//! be shared freely between threads.

pub mod scalar;
pub mod container;
pub mod graph;
pub mod dataset;
pub mod mismatch;
mod matching;

pub use mismatch::Mismatch;
pub use scalar::FLOAT_TOLERANCE;

use crate::config::ComparatorConfig;
use crate::encoding::TextEncoding;
use crate::printer::Printer;
use crate::Result;

/// Result-set comparator.
///
/// ```rust
/// use graph_resultcmp::{ComparatorConfig, DataSetComparator};
///
/// let loose = DataSetComparator::default().with_strict(false).with_included(true);
/// assert!(!loose.is_strict());
///
/// let cfg = ComparatorConfig { order: true, ..Default::default() };
/// assert!(DataSetComparator::new(&cfg).unwrap().is_ordered());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSetComparator {
    strict: bool,
    order: bool,
    included: bool,
    encoding: TextEncoding,
}

impl Default for DataSetComparator {
    fn default() -> Self {
        Self {
            strict: true,
            order: false,
            included: false,
            encoding: TextEncoding::Utf8,
        }
    }
}

impl DataSetComparator {
    /// Build from a configuration, resolving its encoding name.
    pub fn new(config: &ComparatorConfig) -> Result<Self> {
        Ok(Self {
            strict: config.strict,
            order: config.order,
            included: config.included,
            encoding: config.text_encoding()?,
        })
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_order(mut self, order: bool) -> Self {
        self.order = order;
        self
    }

    pub fn with_included(mut self, included: bool) -> Self {
        self.included = included;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn is_strict(&self) -> bool { self.strict }
    pub fn is_ordered(&self) -> bool { self.order }
    pub fn is_included(&self) -> bool { self.included }
    pub fn encoding(&self) -> TextEncoding { self.encoding }

    /// Printer matching this comparator's encoding.
    pub fn printer(&self) -> Printer {
        Printer::new(self.encoding)
    }
}
