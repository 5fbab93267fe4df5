//! Lists, sets, maps and rows.

use std::borrow::Cow;

use hashbrown::HashMap;

use crate::model::{Expected, ExpectedMap, ExpectedRow, PropertyMap, Row, Value};
use super::matching::assign;
use super::DataSetComparator;

impl DataSetComparator {
    /// Ordered: same length, pairwise equal.
    pub fn compare_list(&self, actual: &[Value], expected: &[Expected]) -> bool {
        actual.len() == expected.len()
            && actual.iter().zip(expected).all(|(a, e)| self.compare_value(a, e))
    }

    /// Unordered: same length, and a greedy assignment covers both sides.
    pub fn compare_set(&self, actual: &[Value], expected: &[Expected]) -> bool {
        actual.len() == expected.len()
            && assign(actual, expected, |a, e| self.compare_value(a, e)).covers(actual.len(), false)
    }

    /// Every actual key has an expected entry with a matching value, and
    /// the expected side has no other keys. Keys compare as bytes after
    /// encoding; two expected keys that encode to the same bytes never match.
    pub fn compare_map(&self, actual: &PropertyMap, expected: &ExpectedMap) -> bool {
        if actual.len() != expected.len() {
            return false;
        }
        let mut encoded: HashMap<Cow<'_, [u8]>, &Expected> = HashMap::with_capacity(expected.len());
        for (key, e) in expected {
            let Some(k) = key.to_bytes(self.encoding) else {
                return false;
            };
            if encoded.insert(k, e).is_some() {
                return false;
            }
        }
        actual.iter().all(|(k, a)| {
            encoded.get(k.as_slice()).is_some_and(|e| self.compare_value(a, e))
        })
    }

    pub fn compare_row(&self, actual: &Row, expected: &ExpectedRow) -> bool {
        self.compare_list(&actual.values, &expected.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Text;

    fn cmp() -> DataSetComparator {
        DataSetComparator::default()
    }

    fn ints(v: &[i64]) -> Vec<Value> {
        v.iter().copied().map(Value::Int).collect()
    }

    fn expect_ints(v: &[i64]) -> Vec<Expected> {
        v.iter().copied().map(Expected::Int).collect()
    }

    #[test]
    fn test_list_is_ordered() {
        let c = cmp();
        assert!(c.compare_list(&ints(&[1, 2, 3]), &expect_ints(&[1, 2, 3])));
        assert!(!c.compare_list(&ints(&[1, 2, 3]), &expect_ints(&[3, 2, 1])));
        assert!(!c.compare_list(&ints(&[1, 2]), &expect_ints(&[1, 2, 3])));
    }

    #[test]
    fn test_set_is_unordered() {
        let c = cmp();
        assert!(c.compare_set(&ints(&[1, 2, 3]), &expect_ints(&[3, 1, 2])));
        assert!(!c.compare_set(&ints(&[1, 1, 2]), &expect_ints(&[1, 2, 2])));
        assert!(!c.compare_set(&ints(&[1, 2, 3]), &expect_ints(&[1, 2])));
        assert!(c.compare_value(
            &Value::Set(ints(&[5, 6])),
            &Expected::set([Expected::Int(6), Expected::pattern("5").unwrap()]),
        ));
    }

    #[test]
    fn test_map() {
        let c = cmp();
        let actual = PropertyMap::from_iter([
            (b"name".to_vec(), Value::from("Tim")),
            (b"age".to_vec(), Value::Int(42)),
        ]);
        let exact = ExpectedMap::from_iter([("name".into(), Expected::from("Tim")), ("age".into(), Expected::Int(42))]);
        assert!(c.compare_map(&actual, &exact));

        let missing = ExpectedMap::from_iter([("name".into(), Expected::from("Tim"))]);
        assert!(!c.compare_map(&actual, &missing));

        let wrong_key = ExpectedMap::from_iter([("name".into(), Expected::from("Tim")), ("years".into(), Expected::Int(42))]);
        assert!(!c.compare_map(&actual, &wrong_key));

        let wrong_value = ExpectedMap::from_iter([("name".into(), Expected::from("Tim")), ("age".into(), Expected::Int(41))]);
        assert!(!c.compare_map(&actual, &wrong_value));
    }

    #[test]
    fn test_map_keys_that_encode_alike_cover_one_key() {
        let c = cmp();
        let actual = PropertyMap::from_iter([(b"a".to_vec(), Value::Int(1)), (b"b".to_vec(), Value::Int(2))]);
        let twice_a = ExpectedMap::from_iter([
            (Text::from("a"), Expected::Int(1)),
            (Text::from(b"a".to_vec()), Expected::Int(1)),
        ]);
        assert!(!c.compare_map(&actual, &twice_a));

        let mixed = ExpectedMap::from_iter([
            (Text::from("a"), Expected::Int(1)),
            (Text::from(b"b".to_vec()), Expected::Int(2)),
        ]);
        assert!(c.compare_map(&actual, &mixed));
    }

    #[test]
    fn test_row() {
        let c = cmp();
        let row = Row::new([Value::from("Tim"), Value::Int(42)]);
        assert!(c.compare_row(&row, &ExpectedRow::new([Expected::from("Tim"), Expected::Int(42)])));
        assert!(!c.compare_row(&row, &ExpectedRow::new([Expected::from("Tim")])));
    }
}
