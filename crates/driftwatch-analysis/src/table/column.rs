//! Typed column storage.

use driftwatch_core::types::Timestamp;

/// A single typed column. Missing values are `None` (or NaN for numerics).
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Timestamp(Vec<Timestamp>),
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl Column {
    /// Build a numeric column with no missing values.
    pub fn numeric(values: impl IntoIterator<Item = f64>) -> Self {
        Self::Numeric(values.into_iter().map(Some).collect())
    }

    /// Build a categorical column with no missing values.
    pub fn categorical<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::Categorical(values.into_iter().map(|v| Some(v.into())).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Timestamp(v) => v.len(),
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Timestamp(_) => "timestamp",
            Self::Numeric(_) => "numeric",
            Self::Categorical(_) => "categorical",
        }
    }

    /// New column holding the rows at `indices`, in that order.
    pub fn take(&self, indices: &[usize]) -> Self {
        match self {
            Self::Timestamp(v) => Self::Timestamp(indices.iter().map(|&i| v[i]).collect()),
            Self::Numeric(v) => Self::Numeric(indices.iter().map(|&i| v[i]).collect()),
            Self::Categorical(v) => {
                Self::Categorical(indices.iter().map(|&i| v[i].clone()).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_preserves_requested_order() {
        let col = Column::categorical(["a", "b", "c", "d"]);
        let taken = col.take(&[3, 0, 2]);
        assert_eq!(
            taken,
            Column::Categorical(vec![Some("d".into()), Some("a".into()), Some("c".into())])
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Column::numeric([1.0]).type_name(), "numeric");
        assert_eq!(Column::Timestamp(Vec::new()).type_name(), "timestamp");
        assert!(Column::Timestamp(Vec::new()).is_empty());
    }
}
