//! A path: a source vertex followed by a sequence of steps.

use serde::{Deserialize, Serialize};

use crate::encoding::Text;
use super::{expected::expect_map, EdgeType, ExpectedMap, ExpectedVertex, PropertyMap, Value, Vertex};

/// A path in the graph: src -[step]- dst -[step]- dst ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub src: Vertex,
    pub steps: Vec<Step>,
}

/// One hop of a path. The sign of `edge_type` says whether the hop follows
/// the edge forwards or backwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub dst: Vertex,
    pub edge_type: EdgeType,
    pub name: Vec<u8>,
    pub ranking: i64,
    #[serde(with = "super::property_map::pairs")]
    pub props: PropertyMap,
}

impl Path {
    pub fn new(src: Vertex) -> Self {
        Self { src, steps: Vec::new() }
    }

    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Vertices in visiting order, starting with `src`.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        std::iter::once(&self.src).chain(self.steps.iter().map(|s| &s.dst))
    }
}

impl Step {
    pub fn new(dst: Vertex, edge_type: impl Into<EdgeType>, name: impl Into<Vec<u8>>) -> Self {
        Self {
            dst,
            edge_type: edge_type.into(),
            name: name.into(),
            ranking: 0,
            props: PropertyMap::new(),
        }
    }

    pub fn with_ranking(mut self, ranking: i64) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_property(mut self, key: impl Into<Vec<u8>>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Expected side
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedPath {
    pub src: ExpectedVertex,
    pub steps: Vec<ExpectedStep>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedStep {
    pub dst: ExpectedVertex,
    /// `None` is read as a forward hop.
    pub edge_type: Option<EdgeType>,
    pub name: Option<Text>,
    pub ranking: Option<i64>,
    pub props: Option<ExpectedMap>,
}

impl ExpectedPath {
    pub fn new(src: ExpectedVertex) -> Self {
        Self { src, steps: Vec::new() }
    }

    pub fn then(mut self, step: ExpectedStep) -> Self {
        self.steps.push(step);
        self
    }
}

impl ExpectedStep {
    /// A fully specified step with ranking 0 and no properties.
    pub fn new(dst: ExpectedVertex, edge_type: impl Into<EdgeType>, name: impl Into<Text>) -> Self {
        Self {
            dst,
            edge_type: Some(edge_type.into()),
            name: Some(name.into()),
            ranking: Some(0),
            props: Some(ExpectedMap::new()),
        }
    }

    /// A forward step to `dst` with every edge attribute unconstrained.
    pub fn to(dst: ExpectedVertex) -> Self {
        Self { dst, edge_type: None, name: None, ranking: None, props: None }
    }

    pub fn with_ranking(mut self, ranking: i64) -> Self {
        self.ranking = Some(ranking);
        self
    }

    pub fn with_property(mut self, key: impl Into<Text>, value: impl Into<super::Expected>) -> Self {
        self.props.get_or_insert_with(ExpectedMap::new).insert(key.into(), value.into());
        self
    }
}

impl From<&Path> for ExpectedPath {
    fn from(p: &Path) -> Self {
        Self {
            src: ExpectedVertex::from(&p.src),
            steps: p.steps.iter().map(ExpectedStep::from).collect(),
        }
    }
}

impl From<&Step> for ExpectedStep {
    fn from(s: &Step) -> Self {
        Self {
            dst: ExpectedVertex::from(&s.dst),
            edge_type: Some(s.edge_type),
            name: Some(Text::Bytes(s.name.clone())),
            ranking: Some(s.ranking),
            props: Some(expect_map(&s.props)),
        }
    }
}
