//! Table of named, equal-length columns.

use driftwatch_core::errors::TableError;
use driftwatch_core::types::Timestamp;

use super::column::Column;

/// Ordered collection of named columns sharing one row count.
///
/// Tables are never mutated by the analysis code; every selection produces a
/// new table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. The first column fixes the row count.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self, TableError> {
        let name = name.into();
        if self.columns.iter().any(|(existing, _)| *existing == name) {
            return Err(TableError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && column.len() != self.rows {
            return Err(TableError::LengthMismatch {
                name,
                expected: self.rows,
                actual: column.len(),
            });
        }
        self.rows = column.len();
        self.columns.push((name, column));
        Ok(self)
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn column(&self, name: &str) -> Result<&Column, TableError> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, column)| column)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    /// Borrow a timestamp column.
    pub fn timestamps(&self, name: &str) -> Result<&[Timestamp], TableError> {
        match self.column(name)? {
            Column::Timestamp(values) => Ok(values),
            other => Err(TableError::ColumnTypeMismatch {
                name: name.to_string(),
                expected: "timestamp",
                actual: other.type_name(),
            }),
        }
    }

    /// New table with only the named columns, in the given order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Table, TableError> {
        let mut selected = Table::new();
        for name in names {
            let name = name.as_ref();
            selected = selected.with_column(name, self.column(name)?.clone())?;
        }
        Ok(selected)
    }

    /// New table holding the rows at `indices`, in that order.
    pub fn take(&self, indices: &[usize]) -> Table {
        Table {
            columns: self
                .columns
                .iter()
                .map(|(name, column)| (name.clone(), column.take(indices)))
                .collect(),
            rows: indices.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new()
            .with_column("x", Column::numeric([1.0, 2.0, 3.0]))
            .unwrap()
            .with_column("c", Column::categorical(["a", "b", "a"]))
            .unwrap()
    }

    #[test]
    fn test_with_column_rejects_length_mismatch() {
        let err = sample()
            .with_column("y", Column::numeric([1.0]))
            .unwrap_err();
        assert!(matches!(err, TableError::LengthMismatch { expected: 3, actual: 1, .. }));
    }

    #[test]
    fn test_with_column_rejects_duplicates() {
        let err = sample()
            .with_column("x", Column::numeric([0.0, 0.0, 0.0]))
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicateColumn(_)));
    }

    #[test]
    fn test_missing_column() {
        assert!(matches!(
            sample().column("nope"),
            Err(TableError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_timestamps_type_mismatch() {
        let err = sample().timestamps("x").unwrap_err();
        assert!(matches!(
            err,
            TableError::ColumnTypeMismatch { expected: "timestamp", actual: "numeric", .. }
        ));
    }

    #[test]
    fn test_take_and_select() {
        let table = sample();
        let taken = table.take(&[2, 0]);
        assert_eq!(taken.num_rows(), 2);
        assert_eq!(taken.column("x").unwrap(), &Column::numeric([3.0, 1.0]));

        let selected = table.select(&["c"]).unwrap();
        assert_eq!(selected.num_columns(), 1);
        assert_eq!(selected.column_names().collect::<Vec<_>>(), vec!["c"]);
        // Source is untouched.
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.num_columns(), 2);
    }
}
