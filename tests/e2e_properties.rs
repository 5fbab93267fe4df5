//! Property tests for the comparator.
//!
//! Generated floats are multiples of 0.25 so that the float tolerance never
//! makes two distinct generated values compare equal.

use graph_resultcmp::{
    DataSet, DataSetComparator, Edge, Expected, ExpectedDataSet, ExpectedEdge, ExpectedRow,
    NullKind, Row, Tag, TextEncoding, Value, Vertex,
};
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Empty),
        prop::sample::select(vec![NullKind::Null, NullKind::NaN, NullKind::BadType, NullKind::DivByZero])
            .prop_map(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<i32>().prop_map(|i| Value::Float(i as f64 / 4.0)),
        "[a-zA-Z ]{0,8}".prop_map(Value::from),
    ]
}

fn vertex() -> impl Strategy<Value = Vertex> {
    (
        "[a-z]{1,6}",
        prop::sample::subsequence(vec!["player", "team", "bachelor"], 0..=3),
        any::<i64>(),
    )
        .prop_map(|(vid, tags, age)| {
            tags.into_iter().fold(Vertex::new(vid), |v, name| {
                v.with_tag(Tag::new(name).with_property("age", age))
            })
        })
}

fn edge() -> impl Strategy<Value = Edge> {
    ("[a-z]{1,6}", "[a-z]{1,6}", 1..100i32, any::<bool>(), any::<i64>(), "[a-z]{1,5}", any::<i64>())
        .prop_map(|(src, dst, ty, reverse, ranking, name, w)| {
            let ty = if reverse { -ty } else { ty };
            Edge::new(src, dst, ty, name).with_ranking(ranking).with_property("w", w)
        })
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => scalar(),
        1 => prop::collection::vec(scalar(), 0..4).prop_map(Value::List),
        1 => vertex().prop_map(Value::from),
        1 => edge().prop_map(Value::from),
    ]
}

fn dataset() -> impl Strategy<Value = DataSet> {
    prop::collection::vec(prop::collection::vec(value(), 3), 0..8).prop_map(|rows| {
        rows.into_iter()
            .fold(DataSet::new(["a", "b", "c"]), |ds, values| ds.with_row(Row::from(values)))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn strict_comparison_is_reflexive(ds in dataset()) {
        let exact = ExpectedDataSet::from(&ds);
        prop_assert!(DataSetComparator::default().compare(&ds, &exact));
        prop_assert!(DataSetComparator::default().with_order(true).compare(&ds, &exact));
    }

    #[test]
    fn row_permutations_match_unordered(
        (ds, order) in dataset().prop_flat_map(|ds| {
            let n = ds.rows.len();
            (Just(ds), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
        })
    ) {
        let exact = ExpectedDataSet::from(&ds);
        let permuted = ExpectedDataSet {
            column_names: exact.column_names.clone(),
            rows: order.iter().map(|&i| exact.rows[i].clone()).collect(),
        };
        prop_assert!(DataSetComparator::default().compare(&ds, &permuted));
    }

    #[test]
    fn included_accepts_any_prefix(ds in dataset(), keep in 0usize..8) {
        let exact = ExpectedDataSet::from(&ds);
        let keep = keep.min(exact.rows.len());
        let prefix = ExpectedDataSet {
            column_names: exact.column_names.clone(),
            rows: exact.rows[..keep].to_vec(),
        };
        prop_assert!(DataSetComparator::default().with_included(true).compare(&ds, &prefix));
    }

    #[test]
    fn utf8_text_matches_its_bytes(s in "\\PC{0,16}") {
        let c = DataSetComparator::default();
        prop_assert!(c.compare_value(&Value::bytes(s.as_bytes()), &Expected::from(s.as_str())));
    }

    #[test]
    fn latin1_text_matches_its_bytes(bytes in prop::collection::vec(any::<u8>(), 0..16)) {
        let text: String = bytes.iter().map(|&b| char::from(b)).collect();
        let c = DataSetComparator::default().with_encoding(TextEncoding::Latin1);
        prop_assert!(c.compare_value(&Value::bytes(bytes.clone()), &Expected::from(text)));
    }

    #[test]
    fn edges_match_from_either_end(e in edge()) {
        let c = DataSetComparator::default();
        prop_assert!(c.compare_edge(&e, &ExpectedEdge::from(&e.flipped())));
        prop_assert!(c.compare_edge(&e.flipped(), &ExpectedEdge::from(&e)));
    }

    #[test]
    fn loose_untagged_vertex_matches_by_id(v in vertex()) {
        let c = DataSetComparator::default().with_strict(false);
        let by_id = graph_resultcmp::ExpectedVertex::id(Expected::from(&v.vid));
        prop_assert!(c.compare_vertex(&v, &by_id));
    }
}

#[test]
fn test_distinct_rows_are_order_sensitive() {
    let ds = DataSet::new(["n"])
        .with_row(Row::new([1]))
        .with_row(Row::new([2]))
        .with_row(Row::new([3]));
    let reversed = ExpectedDataSet::new(["n"])
        .with_row(ExpectedRow::new([3]))
        .with_row(ExpectedRow::new([2]))
        .with_row(ExpectedRow::new([1]));
    assert!(DataSetComparator::default().compare(&ds, &reversed));
    assert!(!DataSetComparator::default().with_order(true).compare(&ds, &reversed));
}
