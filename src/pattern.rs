//! Regular-expression expectations.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::{Error, Result};

/// A compiled regular expression usable anywhere an expected value is.
///
/// Matching is anchored at the start of the rendered actual value: a match
/// that begins later in the text does not count. Use `$` to anchor the end.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(re: &str) -> Result<Self> {
        Ok(Self(Regex::new(re)?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.0.find(text).is_some_and(|m| m.start() == 0)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::new(s)
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self(re)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.0.as_str())
    }
}
