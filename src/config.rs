//! Comparator configuration.

use serde::{Deserialize, Serialize};

use crate::encoding::TextEncoding;
use crate::Result;

/// How a result set is compared against its expectation.
///
/// Deserializes from partial JSON; absent fields take their defaults:
///
/// ```rust
/// use graph_resultcmp::ComparatorConfig;
///
/// let cfg = ComparatorConfig::from_json(r#"{"order": true}"#).unwrap();
/// assert!(cfg.strict && cfg.order && !cfg.included);
/// assert_eq!(cfg.encoding, "utf-8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Exact shape match. When false the expectation is a partial pattern.
    pub strict: bool,
    /// Rows compare by position instead of as a multiset.
    pub order: bool,
    /// The result may hold rows the expectation does not mention.
    pub included: bool,
    /// Encoding of engine strings, e.g. `"utf-8"` or `"latin-1"`.
    pub encoding: String,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            strict: true,
            order: false,
            included: false,
            encoding: TextEncoding::default().name().to_owned(),
        }
    }
}

impl ComparatorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn text_encoding(&self) -> Result<TextEncoding> {
        self.encoding.parse()
    }
}
