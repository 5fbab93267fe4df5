//! Vertices, edges and paths.
//!
//! In strict mode the expectation must describe the whole shape: every tag,
//! every property, the edge name and ranking. In loose mode a `None` field
//! on the expected side is not checked at all.

use crate::model::{
    Direction, Edge, EdgeType, Expected, ExpectedEdge, ExpectedPath, ExpectedStep, ExpectedTag,
    ExpectedVertex, Path, Step, Vertex,
};
use super::DataSetComparator;

impl DataSetComparator {
    /// # Panics
    ///
    /// In strict mode, if `expected.vid` is `None`. Expectations are authored
    /// by the caller, so a strict vertex without an id is a broken fixture
    /// rather than a mismatch.
    pub fn compare_vertex(&self, actual: &Vertex, expected: &ExpectedVertex) -> bool {
        let tags: &[ExpectedTag] = if self.strict {
            let Some(vid) = &expected.vid else {
                panic!("strict vertex comparison requires an expected vid");
            };
            if !self.compare_value(&actual.vid, vid) {
                return false;
            }
            match &expected.tags {
                Some(tags) if tags.len() == actual.tags.len() => tags.as_slice(),
                _ => return false,
            }
        } else {
            if let Some(vid) = &expected.vid {
                if !self.compare_value(&actual.vid, vid) {
                    return false;
                }
            }
            match &expected.tags {
                Some(tags) if tags.len() > actual.tags.len() => return false,
                Some(tags) => tags.as_slice(),
                None => &[],
            }
        };

        tags.iter().all(|tag| {
            let mut found = actual.tags.iter().filter(|t| tag.name.matches(&t.name, self.encoding));
            let (Some(actual_tag), None) = (found.next(), found.next()) else {
                return false;
            };
            match &tag.props {
                Some(props) => self.compare_map(&actual_tag.props, props),
                None => !self.strict,
            }
        })
    }

    /// Direction is normalised before the endpoints are compared, so an edge
    /// and the same edge reported from its other end are equal.
    pub fn compare_edge(&self, actual: &Edge, expected: &ExpectedEdge) -> bool {
        let endpoints_match = |src: &Expected, dst: &Expected| {
            let dir = Direction::relative(
                actual.edge_type.direction(),
                expected.edge_type.map(EdgeType::direction),
            );
            let (src, dst) = dir.orient(src, dst);
            self.compare_value(&actual.src, src) && self.compare_value(&actual.dst, dst)
        };

        if self.strict {
            let (Some(src), Some(dst), Some(name), Some(ranking), Some(props)) = (
                &expected.src,
                &expected.dst,
                &expected.name,
                expected.ranking,
                &expected.props,
            ) else {
                return false;
            };
            return name.matches(&actual.name, self.encoding)
                && actual.ranking == ranking
                && endpoints_match(src, dst)
                && self.compare_map(&actual.props, props);
        }

        if let (Some(src), Some(dst)) = (&expected.src, &expected.dst) {
            if !endpoints_match(src, dst) {
                return false;
            }
        }
        if expected.ranking.is_some_and(|r| r != actual.ranking) {
            return false;
        }
        if expected.name.as_ref().is_some_and(|n| !n.matches(&actual.name, self.encoding)) {
            return false;
        }
        expected.props.as_ref().is_none_or(|p| self.compare_map(&actual.props, p))
    }

    /// Steps are walked in order. Each step is laid out as `(src, dst)` by
    /// its own direction sign, starting from the vertex the walk has reached;
    /// both ends go through [`compare_vertex`](Self::compare_vertex).
    ///
    /// Only steps are compared, so two paths without steps are equal
    /// whatever their source vertices.
    pub fn compare_path(&self, actual: &Path, expected: &ExpectedPath) -> bool {
        if actual.len() != expected.steps.len() {
            return false;
        }

        let mut actual_at = &actual.src;
        let mut expected_at = &expected.src;
        for (a, e) in actual.steps.iter().zip(&expected.steps) {
            let (asrc, adst) = a.edge_type.direction().orient(actual_at, &a.dst);
            let (esrc, edst) = e
                .edge_type
                .map_or(Direction::Forward, EdgeType::direction)
                .orient(expected_at, &e.dst);
            if !self.compare_vertex(asrc, esrc)
                || !self.compare_vertex(adst, edst)
                || !self.step_matches(a, e)
            {
                return false;
            }
            actual_at = &a.dst;
            expected_at = &e.dst;
        }
        true
    }

    fn step_matches(&self, actual: &Step, expected: &ExpectedStep) -> bool {
        if self.strict {
            return expected.ranking == Some(actual.ranking)
                && expected.name.as_ref().is_some_and(|n| n.matches(&actual.name, self.encoding))
                && expected.props.as_ref().is_some_and(|p| self.compare_map(&actual.props, p));
        }
        expected.ranking.is_none_or(|r| r == actual.ranking)
            && expected.name.as_ref().is_none_or(|n| n.matches(&actual.name, self.encoding))
            && expected.props.as_ref().is_none_or(|p| self.compare_map(&actual.props, p))
    }
}
