use crate::core::error::TableError;
use crate::core::value_counts::ValueCounts;
use std::sync::Arc;

/// One record: attribute values followed by the decision class.
pub type Row = Arc<[String]>;

/// An ordered, immutable collection of equally wide rows.
///
/// The last column is always the decision column. Rows are shared between a
/// table and the tables partitioned out of it, so splitting never copies the
/// underlying strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    width: usize,
}

impl Table {
    /// Builds a table from raw rows, numbering them from 1 in error reports.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        Self::from_numbered_rows(rows.into_iter().enumerate().map(|(i, r)| (i + 1, r)))
    }

    /// Builds a table from `(row_number, fields)` pairs.
    ///
    /// The first row fixes the width; every other row must match it.
    pub fn from_numbered_rows<I>(rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (usize, Vec<String>)>,
    {
        let mut out: Vec<Row> = Vec::new();
        let mut width = 0;

        for (row, fields) in rows {
            if fields.is_empty() {
                return Err(TableError::EmptyRow { row });
            }
            if out.is_empty() {
                width = fields.len();
            } else if fields.len() != width {
                return Err(TableError::MalformedRow {
                    row,
                    expected: width,
                    found: fields.len(),
                });
            }
            out.push(Arc::from(fields));
        }

        Ok(Self { rows: out, width })
    }

    pub(crate) fn from_shared(rows: Vec<Row>, width: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width));
        Self { rows, width }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns, decision column included. Zero for an empty table.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn decision_column(&self) -> usize {
        self.width.saturating_sub(1)
    }

    /// Indices of every column except the decision column.
    pub fn attribute_columns(&self) -> std::ops::Range<usize> {
        0..self.decision_column()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn check_column(&self, column: usize) -> Result<(), TableError> {
        if column < self.width {
            Ok(())
        } else {
            Err(TableError::ColumnOutOfRange {
                column,
                width: self.width,
            })
        }
    }

    pub fn column_counts(&self, column: usize) -> Result<ValueCounts, TableError> {
        self.check_column(column)?;
        Ok(self.rows.iter().map(|row| row[column].as_str()).collect())
    }

    /// Counts of each decision class; empty for an empty table.
    pub fn decision_counts(&self) -> ValueCounts {
        let column = self.decision_column();
        self.rows.iter().map(|row| row[column].as_str()).collect()
    }

    /// Distinct decision classes, first-seen first.
    pub fn decision_classes(&self) -> Vec<&str> {
        let column = self.decision_column();
        let mut classes: Vec<&str> = Vec::new();
        for row in &self.rows {
            let class = row[column].as_str();
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        classes
    }

    pub fn is_pure(&self) -> bool {
        self.decision_classes().len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{rows, weather_table};

    #[test]
    fn builds_from_rows_and_reports_shape() {
        let t = weather_table();
        assert_eq!(t.len(), 4);
        assert_eq!(t.width(), 3);
        assert_eq!(t.decision_column(), 2);
        assert_eq!(t.attribute_columns(), 0..2);
        assert_eq!(t.decision_classes(), vec!["yes", "no"]);
        assert!(!t.is_pure());
    }

    #[test]
    fn malformed_row_reports_its_number() {
        let err = Table::from_rows(rows(&[&["a", "b", "x"], &["a", "y"]])).unwrap_err();
        assert_eq!(
            err,
            TableError::MalformedRow {
                row: 2,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_row_is_rejected() {
        let err = Table::from_rows(vec![vec!["a".into()], vec![]]).unwrap_err();
        assert_eq!(err, TableError::EmptyRow { row: 2 });
    }

    #[test]
    fn numbered_rows_keep_caller_numbers() {
        let err = Table::from_numbered_rows(vec![
            (3, vec!["a".into(), "x".into()]),
            (7, vec!["a".into()]),
        ])
        .unwrap_err();
        assert!(matches!(err, TableError::MalformedRow { row: 7, .. }));
    }

    #[test]
    fn empty_table_is_valid() {
        let t = Table::from_rows(vec![]).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.width(), 0);
        assert!(t.decision_counts().is_empty());
        assert!(t.decision_classes().is_empty());
    }

    #[test]
    fn column_counts_checks_range() {
        let t = weather_table();
        let counts = t.column_counts(0).unwrap();
        assert_eq!(counts.count_of("sunny"), 2);
        assert_eq!(
            t.column_counts(3).unwrap_err(),
            TableError::ColumnOutOfRange {
                column: 3,
                width: 3
            }
        );
    }
}
