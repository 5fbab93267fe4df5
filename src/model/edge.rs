//! Edges and traversal direction.
//!
//! The engine encodes direction in the sign of the edge type: a negative
//! type means the edge was reached against its declared direction, with
//! `src`/`dst` reported in traversal order. [`Direction::orient`] is the
//! single place where that sign is turned into endpoint order; edges and
//! path steps both go through it.

use serde::{Deserialize, Serialize};

use crate::encoding::Text;
use super::{expected::expect_map, Expected, ExpectedMap, PropertyMap, Value};

/// Signed edge type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeType(pub i32);

/// Traversal direction relative to the declared edge type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Reverse,
}

impl EdgeType {
    pub fn direction(self) -> Direction {
        if self.0 < 0 { Direction::Reverse } else { Direction::Forward }
    }

    /// The declared (unsigned) type.
    pub fn base(self) -> i32 {
        self.0.abs()
    }

    pub fn reversed(self) -> Self {
        Self(-self.0)
    }
}

impl From<i32> for EdgeType {
    fn from(v: i32) -> Self { Self(v) }
}

impl Direction {
    /// Lay out the two ends of a hop as `(src, dst)`: `near` is where the
    /// hop starts, `far` where it lands.
    pub fn orient<T>(self, near: T, far: T) -> (T, T) {
        match self {
            Direction::Forward => (near, far),
            Direction::Reverse => (far, near),
        }
    }

    /// How an expected edge's endpoints must be read to line up with an
    /// edge reported in `actual` direction. With no expected direction the
    /// expectation is taken as written in declared order.
    pub fn relative(actual: Direction, expected: Option<Direction>) -> Direction {
        match expected {
            Some(e) if e == actual => Direction::Forward,
            Some(_) => Direction::Reverse,
            None => actual,
        }
    }
}

/// An edge as reported by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub src: Value,
    pub dst: Value,
    pub edge_type: EdgeType,
    pub name: Vec<u8>,
    /// Disambiguates parallel edges between the same endpoints.
    pub ranking: i64,
    #[serde(with = "super::property_map::pairs")]
    pub props: PropertyMap,
}

impl Edge {
    pub fn new(
        src: impl Into<Value>,
        dst: impl Into<Value>,
        edge_type: impl Into<EdgeType>,
        name: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            src: src.into(),
            dst: dst.into(),
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

    /// The same edge reported from the other end.
    pub fn flipped(&self) -> Self {
        Self {
            src: self.dst.clone(),
            dst: self.src.clone(),
            edge_type: self.edge_type.reversed(),
            ..self.clone()
        }
    }
}

// ============================================================================
// Expected side
// ============================================================================

/// An edge expectation. In loose mode each `None` field is unconstrained;
/// strict mode requires everything except `edge_type`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpectedEdge {
    pub src: Option<Expected>,
    pub dst: Option<Expected>,
    /// Declared direction of `src`/`dst`; `None` means declared order.
    pub edge_type: Option<EdgeType>,
    pub name: Option<Text>,
    pub ranking: Option<i64>,
    pub props: Option<ExpectedMap>,
}

impl ExpectedEdge {
    /// A fully specified edge with ranking 0 and no properties.
    pub fn new(src: impl Into<Expected>, dst: impl Into<Expected>, name: impl Into<Text>) -> Self {
        Self {
            src: Some(src.into()),
            dst: Some(dst.into()),
            edge_type: None,
            name: Some(name.into()),
            ranking: Some(0),
            props: Some(ExpectedMap::new()),
        }
    }

    /// An edge with every field unconstrained.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn between(mut self, src: impl Into<Expected>, dst: impl Into<Expected>) -> Self {
        self.src = Some(src.into());
        self.dst = Some(dst.into());
        self
    }

    pub fn with_type(mut self, edge_type: impl Into<EdgeType>) -> Self {
        self.edge_type = Some(edge_type.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<Text>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_ranking(mut self, ranking: i64) -> Self {
        self.ranking = Some(ranking);
        self
    }

    pub fn with_property(mut self, key: impl Into<Text>, value: impl Into<Expected>) -> Self {
        self.props.get_or_insert_with(ExpectedMap::new).insert(key.into(), value.into());
        self
    }

    pub fn any_props(mut self) -> Self {
        self.props = None;
        self
    }
}

impl From<&Edge> for ExpectedEdge {
    fn from(e: &Edge) -> Self {
        Self {
            src: Some(Expected::from(&e.src)),
            dst: Some(Expected::from(&e.dst)),
            edge_type: Some(e.edge_type),
            name: Some(Text::Bytes(e.name.clone())),
            ranking: Some(e.ranking),
            props: Some(expect_map(&e.props)),
        }
    }
}
