//! Result-set comparison.

use tracing::{debug, trace};

use crate::model::{DataSet, ExpectedDataSet};
use super::matching::{assign, Assignment};
use super::{DataSetComparator, Mismatch};

impl DataSetComparator {
    /// Whether `actual` satisfies `expected` under this comparator's modes.
    pub fn compare(&self, actual: &DataSet, expected: &ExpectedDataSet) -> bool {
        self.check(actual, expected).is_ok()
    }

    /// Like [`compare`](Self::compare), for possibly absent result sets. Two
    /// absent sets are equal; one absent set equals nothing.
    pub fn compare_opt(&self, actual: Option<&DataSet>, expected: Option<&ExpectedDataSet>) -> bool {
        self.check_opt(actual, expected).is_ok()
    }

    pub fn check_opt(
        &self,
        actual: Option<&DataSet>,
        expected: Option<&ExpectedDataSet>,
    ) -> Result<(), Mismatch> {
        match (actual, expected) {
            (None, None) => Ok(()),
            (Some(_), None) => Err(Mismatch::UnexpectedDataSet),
            (None, Some(_)) => Err(Mismatch::MissingDataSet),
            (Some(a), Some(e)) => self.check(a, e),
        }
    }

    /// Compare and report the first failing check.
    ///
    /// Columns must agree in number, name and order. With `order`, the
    /// leading result rows compare by position and trailing result rows are
    /// ignored. Otherwise rows are assigned greedily, first fit, and unless
    /// `included` every result row must be claimed.
    pub fn check(&self, actual: &DataSet, expected: &ExpectedDataSet) -> Result<(), Mismatch> {
        let outcome = self.check_rows(actual, expected);
        if let Err(mismatch) = &outcome {
            debug!(
                strict = self.strict,
                order = self.order,
                included = self.included,
                encoding = %self.encoding,
                "data set mismatch: {mismatch}"
            );
            let printer = self.printer();
            trace!(
                actual = %printer.dataset(actual),
                expected = %printer.expected_dataset(expected),
                "compared tables"
            );
        }
        outcome
    }

    fn check_rows(&self, actual: &DataSet, expected: &ExpectedDataSet) -> Result<(), Mismatch> {
        if actual.rows.len() < expected.rows.len() {
            return Err(Mismatch::RowCount { actual: actual.rows.len(), expected: expected.rows.len() });
        }
        if actual.column_names.len() != expected.column_names.len() {
            return Err(Mismatch::ColumnCount {
                actual: actual.column_names.len(),
                expected: expected.column_names.len(),
            });
        }

        let printer = self.printer();
        for (index, (a, e)) in actual.column_names.iter().zip(&expected.column_names).enumerate() {
            if !e.matches(a, self.encoding) {
                return Err(Mismatch::ColumnName {
                    index,
                    actual: self.encoding.decode(a).into_owned(),
                    expected: e.to_string(),
                });
            }
        }

        if self.order {
            for (index, (a, e)) in actual.rows.iter().zip(&expected.rows).enumerate() {
                if !self.compare_row(a, e) {
                    return Err(Mismatch::Row {
                        index,
                        actual: printer.row(a),
                        expected: printer.expected_row(e),
                    });
                }
            }
            return Ok(());
        }

        match assign(&actual.rows, &expected.rows, |a, e| self.compare_row(a, e)) {
            Assignment::Unmatched { expected: index } => Err(Mismatch::Unmatched {
                index,
                expected: printer.expected_row(&expected.rows[index]),
            }),
            Assignment::Complete { used } if !self.included && used != actual.rows.len() => {
                Err(Mismatch::Uncovered { count: actual.rows.len() - used })
            }
            Assignment::Complete { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Expected, ExpectedRow, Row, Value};
    use pretty_assertions::assert_eq;

    fn actual() -> DataSet {
        DataSet::new(["name", "age"])
            .with_row(Row::new([Value::from("Tim Duncan"), Value::Int(42)]))
            .with_row(Row::new([Value::from("Tony Parker"), Value::Int(36)]))
            .with_row(Row::new([Value::from("Manu Ginobili"), Value::Int(41)]))
    }

    fn expected_row(name: &str, age: i64) -> ExpectedRow {
        ExpectedRow::new([Expected::from(name), Expected::Int(age)])
    }

    fn expected() -> ExpectedDataSet {
        ExpectedDataSet::new(["name", "age"])
            .with_row(expected_row("Manu Ginobili", 41))
            .with_row(expected_row("Tim Duncan", 42))
            .with_row(expected_row("Tony Parker", 36))
    }

    #[test]
    fn test_unordered() {
        let c = DataSetComparator::default();
        assert_eq!(c.check(&actual(), &expected()), Ok(()));
    }

    #[test]
    fn test_ordered_reports_row() {
        let c = DataSetComparator::default().with_order(true);
        let err = c.check(&actual(), &expected()).unwrap_err();
        assert_eq!(
            err,
            Mismatch::Row {
                index: 0,
                actual: "|\"Tim Duncan\"|42|".into(),
                expected: "|\"Manu Ginobili\"|41|".into(),
            }
        );
    }

    #[test]
    fn test_column_checks() {
        let c = DataSetComparator::default();
        let mut renamed = expected();
        renamed.column_names[1] = "years".into();
        assert!(matches!(c.check(&actual(), &renamed), Err(Mismatch::ColumnName { index: 1, .. })));

        let mut swapped = expected();
        swapped.column_names.swap(0, 1);
        assert!(!c.compare(&actual(), &swapped));

        let mut narrow = expected();
        narrow.column_names.pop();
        assert_eq!(
            c.check(&actual(), &narrow),
            Err(Mismatch::ColumnCount { actual: 2, expected: 1 })
        );
    }

    #[test]
    fn test_row_count() {
        let c = DataSetComparator::default().with_included(true);
        let more = expected().with_row(expected_row("David West", 38));
        assert_eq!(c.check(&actual(), &more), Err(Mismatch::RowCount { actual: 3, expected: 4 }));
    }

    #[test]
    fn test_included() {
        let subset = ExpectedDataSet::new(["name", "age"]).with_row(expected_row("Tony Parker", 36));
        let c = DataSetComparator::default();
        assert_eq!(c.check(&actual(), &subset), Err(Mismatch::Uncovered { count: 2 }));
        assert!(c.with_included(true).compare(&actual(), &subset));
        assert!(!c.with_order(true).compare(&actual(), &subset));
    }

    #[test]
    fn test_ordered_ignores_trailing_rows() {
        let ints = DataSet::new(["n"])
            .with_row(Row::new([1]))
            .with_row(Row::new([2]))
            .with_row(Row::new([3]));
        let prefix = ExpectedDataSet::new(["n"])
            .with_row(ExpectedRow::new([1]))
            .with_row(ExpectedRow::new([2]));
        let ordered = DataSetComparator::default().with_order(true);
        assert_eq!(ordered.check(&ints, &prefix), Ok(()));
        assert_eq!(
            DataSetComparator::default().check(&ints, &prefix),
            Err(Mismatch::Uncovered { count: 1 })
        );

        let shifted = ExpectedDataSet::new(["n"])
            .with_row(ExpectedRow::new([2]))
            .with_row(ExpectedRow::new([3]));
        assert!(!ordered.compare(&ints, &shifted));
    }

    #[test]
    fn test_unmatched_row_is_reported() {
        let c = DataSetComparator::default();
        let wrong = ExpectedDataSet::new(["name", "age"])
            .with_row(expected_row("Tim Duncan", 42))
            .with_row(expected_row("Tony Parker", 37))
            .with_row(expected_row("Manu Ginobili", 41));
        assert_eq!(
            c.check(&actual(), &wrong),
            Err(Mismatch::Unmatched { index: 1, expected: "|\"Tony Parker\"|37|".into() })
        );
    }

    #[test]
    fn test_absent_data_sets() {
        let c = DataSetComparator::default();
        assert!(c.compare_opt(None, None));
        assert_eq!(c.check_opt(Some(&actual()), None), Err(Mismatch::UnexpectedDataSet));
        assert_eq!(c.check_opt(None, Some(&expected())), Err(Mismatch::MissingDataSet));
        assert!(c.compare_opt(Some(&actual()), Some(&expected())));
    }
}
