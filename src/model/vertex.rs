//! Vertices and their tags.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::encoding::Text;
use super::{Expected, ExpectedMap, PropertyMap, Value};

/// A vertex as reported by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Integer or string id.
    pub vid: Value,
    pub tags: SmallVec<[Tag; 2]>,
}

/// A named group of properties attached to a vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: Vec<u8>,
    #[serde(with = "super::property_map::pairs")]
    pub props: PropertyMap,
}

impl Vertex {
    pub fn new(vid: impl Into<Value>) -> Self {
        Self { vid: vid.into(), tags: SmallVec::new() }
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    pub fn tag(&self, name: &[u8]) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }
}

impl Tag {
    pub fn new(name: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), props: PropertyMap::new() }
    }

    pub fn with_property(mut self, key: impl Into<Vec<u8>>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Expected side
// ============================================================================

/// A vertex expectation. `None` fields are only honoured in loose mode;
/// strict comparisons require `vid` and `tags`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpectedVertex {
    pub vid: Option<Expected>,
    pub tags: Option<Vec<ExpectedTag>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedTag {
    pub name: Text,
    /// `None`: any properties (loose mode only).
    pub props: Option<ExpectedMap>,
}

impl ExpectedVertex {
    /// A vertex with the given id and an empty tag list.
    pub fn new(vid: impl Into<Expected>) -> Self {
        Self { vid: Some(vid.into()), tags: Some(Vec::new()) }
    }

    /// A vertex with the given id and unconstrained tags.
    pub fn id(vid: impl Into<Expected>) -> Self {
        Self { vid: Some(vid.into()), tags: None }
    }

    pub fn with_tag(mut self, tag: ExpectedTag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }
}

impl ExpectedTag {
    pub fn new(name: impl Into<Text>) -> Self {
        Self { name: name.into(), props: Some(ExpectedMap::new()) }
    }

    /// A tag whose properties are not checked.
    pub fn any_props(name: impl Into<Text>) -> Self {
        Self { name: name.into(), props: None }
    }

    pub fn with_property(mut self, key: impl Into<Text>, value: impl Into<Expected>) -> Self {
        self.props.get_or_insert_with(ExpectedMap::new).insert(key.into(), value.into());
        self
    }
}

impl From<&Vertex> for ExpectedVertex {
    fn from(v: &Vertex) -> Self {
        Self {
            vid: Some(Expected::from(&v.vid)),
            tags: Some(v.tags.iter().map(ExpectedTag::from).collect()),
        }
    }
}

impl From<&Tag> for ExpectedTag {
    fn from(t: &Tag) -> Self {
        Self {
            name: Text::Bytes(t.name.clone()),
            props: Some(super::expected::expect_map(&t.props)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_lookup() {
        let v = Vertex::new("Tim Duncan")
            .with_tag(Tag::new("player").with_property("age", 42))
            .with_tag(Tag::new("bachelor"));
        assert_eq!(v.tag(b"player").and_then(|t| t.props.get(b"age".as_slice())), Some(&Value::Int(42)));
        assert!(v.tag(b"team").is_none());
    }

    #[test]
    fn test_expected_from_vertex_is_fully_specified() {
        let v = Vertex::new(7).with_tag(Tag::new("player"));
        let e = ExpectedVertex::from(&v);
        assert_eq!(e.vid, Some(Expected::Int(7)));
        assert_eq!(e.tags.as_ref().map(Vec::len), Some(1));
        assert!(e.tags.unwrap()[0].props.is_some());
    }
}
