//! Text encodings.
//!
//! The engine reports identifiers and strings as raw bytes, while fixtures
//! are authored as native text. A [`TextEncoding`] turns the authored side
//! into bytes before any byte-wise comparison, and decodes engine bytes
//! back into text when a value has to be rendered.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A named text encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1: every code point below U+0100 maps to one byte.
    Latin1,
    Ascii,
}

impl TextEncoding {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Ascii => "ascii",
        }
    }

    /// Encode `text`. Returns `None` if some character has no
    /// representation in this encoding.
    pub fn encode<'a>(&self, text: &'a str) -> Option<Cow<'a, [u8]>> {
        match self {
            TextEncoding::Utf8 => Some(Cow::Borrowed(text.as_bytes())),
            TextEncoding::Ascii => text.is_ascii().then(|| Cow::Borrowed(text.as_bytes())),
            TextEncoding::Latin1 if text.is_ascii() => Some(Cow::Borrowed(text.as_bytes())),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(c).ok())
                .collect::<Option<Vec<u8>>>()
                .map(Cow::Owned),
        }
    }

    /// Decode `bytes`, replacing undecodable input with U+FFFD.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes),
            TextEncoding::Latin1 => match std::str::from_utf8(bytes) {
                Ok(s) if s.is_ascii() => Cow::Borrowed(s),
                _ => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
            },
            TextEncoding::Ascii => match std::str::from_utf8(bytes) {
                Ok(s) if s.is_ascii() => Cow::Borrowed(s),
                _ => Cow::Owned(
                    bytes
                        .iter()
                        .map(|&b| if b.is_ascii() { char::from(b) } else { char::REPLACEMENT_CHARACTER })
                        .collect(),
                ),
            },
        }
    }
}

impl FromStr for TextEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" => Ok(TextEncoding::Latin1),
            "ascii" | "us-ascii" => Ok(TextEncoding::Ascii),
            _ => Err(Error::UnknownEncoding(s.to_owned())),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Text: an authored string
// ============================================================================

/// A string on the expected side: native text, or raw bytes when the
/// fixture needs to pin an exact byte sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Text {
    Str(String),
    Bytes(Vec<u8>),
}

impl Text {
    /// The byte form of this text under `encoding`.
    pub fn to_bytes(&self, encoding: TextEncoding) -> Option<Cow<'_, [u8]>> {
        match self {
            Text::Str(s) => encoding.encode(s),
            Text::Bytes(b) => Some(Cow::Borrowed(b)),
        }
    }

    /// Whether `actual` is exactly this text once encoded.
    /// Unencodable text matches nothing.
    pub fn matches(&self, actual: &[u8], encoding: TextEncoding) -> bool {
        self.to_bytes(encoding).is_some_and(|b| b.as_ref() == actual)
    }
}

impl From<&str> for Text { fn from(v: &str) -> Self { Text::Str(v.to_owned()) } }
impl From<String> for Text { fn from(v: String) -> Self { Text::Str(v) } }
impl From<&[u8]> for Text { fn from(v: &[u8]) -> Self { Text::Bytes(v.to_vec()) } }
impl From<Vec<u8>> for Text { fn from(v: Vec<u8>) -> Self { Text::Bytes(v) } }

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Text::Str(s) => f.write_str(s),
            Text::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
        }
    }
}
