//! Splits a table into consecutive time periods delimited by cutoffs.

use driftwatch_core::errors::{DriftError, SelectionError};
use driftwatch_core::types::{parse_timestamp, SmallVec4, Timestamp};

use crate::table::Table;

/// Two adjacent periods compared against each other.
#[derive(Debug, Clone)]
pub struct PeriodPair {
    /// Rows in `[previous cutoff, time_cutoff)`.
    pub baseline: Table,
    /// Rows in `[time_cutoff, window_end)`.
    pub new: Table,
    /// Boundary separating the two periods.
    pub time_cutoff: Timestamp,
    /// Cutoff closing the later period.
    pub window_end: Timestamp,
}

/// Holds validated, strictly increasing cutoffs and splits tables by them.
///
/// Each cutoff marks the end of a period: period `i` covers
/// `[cutoffs[i-1], cutoffs[i])`, period 0 covers everything before
/// `cutoffs[0]`. Rows at or after the last cutoff belong to no period.
#[derive(Debug, Clone)]
pub struct TimeBasedSelector {
    time_cutoffs: Vec<Timestamp>,
    value_column_names: SmallVec4<String>,
    splitting_column_name: String,
}

impl TimeBasedSelector {
    pub fn new<S: AsRef<str>>(
        time_cutoffs: Vec<Timestamp>,
        value_column_names: &[S],
        splitting_column_name: &str,
    ) -> Result<Self, SelectionError> {
        if time_cutoffs.is_empty() {
            return Err(SelectionError::EmptyInput);
        }
        check_cutoffs_order(&time_cutoffs)?;
        if value_column_names.is_empty() {
            return Err(SelectionError::NoValueColumns);
        }
        Ok(Self {
            time_cutoffs,
            value_column_names: value_column_names
                .iter()
                .map(|name| name.as_ref().to_string())
                .collect(),
            splitting_column_name: splitting_column_name.to_string(),
        })
    }

    /// Build a selector from cutoffs given as text.
    ///
    /// Unparseable cutoffs fail with `InvalidArgumentType`.
    pub fn from_strs<C: AsRef<str>, S: AsRef<str>>(
        time_cutoffs: &[C],
        value_column_names: &[S],
        splitting_column_name: &str,
    ) -> Result<Self, SelectionError> {
        let cutoffs = time_cutoffs
            .iter()
            .map(|c| parse_timestamp(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cutoffs, value_column_names, splitting_column_name)
    }

    pub fn time_cutoffs(&self) -> &[Timestamp] {
        &self.time_cutoffs
    }

    pub fn value_column_names(&self) -> &[String] {
        &self.value_column_names
    }

    pub fn splitting_column_name(&self) -> &str {
        &self.splitting_column_name
    }

    /// Split `table` into one table per period, in cutoff order.
    ///
    /// Each period keeps the splitting column and the value columns, with
    /// rows in their original order.
    pub fn split_periods(&self, table: &Table) -> Result<Vec<Table>, DriftError> {
        let timestamps = table.timestamps(&self.splitting_column_name)?;

        let mut columns: Vec<&str> = Vec::with_capacity(self.value_column_names.len() + 1);
        columns.push(&self.splitting_column_name);
        columns.extend(
            self.value_column_names
                .iter()
                .map(String::as_str)
                .filter(|name| *name != self.splitting_column_name),
        );
        let projected = table.select(&columns)?;

        let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); self.time_cutoffs.len()];
        let mut dropped = 0usize;
        for (row, ts) in timestamps.iter().enumerate() {
            // First cutoff strictly greater than ts.
            let bucket = self.time_cutoffs.partition_point(|cutoff| cutoff <= ts);
            match buckets.get_mut(bucket) {
                Some(rows) => rows.push(row),
                None => dropped += 1,
            }
        }

        tracing::debug!(
            rows = table.num_rows(),
            periods = buckets.len(),
            dropped,
            sizes = ?buckets.iter().map(Vec::len).collect::<Vec<_>>(),
            "split table into periods"
        );

        Ok(buckets.iter().map(|rows| projected.take(rows)).collect())
    }

    /// Split `table` into periods and pair every period with the next one.
    ///
    /// Returns `len(cutoffs) - 1` pairs; a single cutoff yields none.
    pub fn split_dataframe(&self, table: &Table) -> Result<Vec<PeriodPair>, DriftError> {
        let mut periods = self.split_periods(table)?.into_iter();
        let Some(mut previous) = periods.next() else {
            return Ok(Vec::new());
        };

        let mut pairs = Vec::with_capacity(self.time_cutoffs.len().saturating_sub(1));
        for (i, current) in periods.enumerate() {
            pairs.push(PeriodPair {
                baseline: previous,
                new: current.clone(),
                time_cutoff: self.time_cutoffs[i],
                window_end: self.time_cutoffs[i + 1],
            });
            previous = current;
        }
        Ok(pairs)
    }
}

/// Every cutoff must be strictly after the one before it.
fn check_cutoffs_order(time_cutoffs: &[Timestamp]) -> Result<(), SelectionError> {
    match time_cutoffs.windows(2).position(|w| w[1] <= w[0]) {
        Some(pos) => Err(SelectionError::UnorderedCutoffs {
            index: pos + 1,
            previous: time_cutoffs[pos].to_string(),
            current: time_cutoffs[pos + 1].to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn ts(s: &str) -> Timestamp {
        parse_timestamp(s).unwrap()
    }

    fn yearly_table() -> Table {
        let dates = [
            "2017-03-01",
            "2018-05-01",
            "2017-12-31",
            "2019-02-01",
            "2018-01-01",
            "2020-06-01",
        ];
        Table::new()
            .with_column("date", Column::Timestamp(dates.iter().map(|d| ts(d)).collect()))
            .unwrap()
            .with_column("x", Column::numeric([0.0, 1.0, 2.0, 3.0, 4.0, 5.0]))
            .unwrap()
            .with_column("unused", Column::categorical(["u"; 6]))
            .unwrap()
    }

    #[test]
    fn test_empty_cutoffs() {
        let err = TimeBasedSelector::new(Vec::new(), &["x"], "date").unwrap_err();
        assert!(matches!(err, SelectionError::EmptyInput));
    }

    #[test]
    fn test_unordered_cutoffs() {
        let err = TimeBasedSelector::new(vec![ts("2020-01-01"), ts("2019-01-01")], &["x"], "date")
            .unwrap_err();
        assert!(matches!(err, SelectionError::UnorderedCutoffs { index: 1, .. }));
    }

    #[test]
    fn test_equal_cutoffs_rejected() {
        let err = TimeBasedSelector::new(
            vec![ts("2018-01-01"), ts("2019-01-01"), ts("2019-01-01")],
            &["x"],
            "date",
        )
        .unwrap_err();
        assert!(matches!(err, SelectionError::UnorderedCutoffs { index: 2, .. }));
    }

    #[test]
    fn test_no_value_columns() {
        let err = TimeBasedSelector::new(vec![ts("2018-01-01")], &[] as &[&str], "date").unwrap_err();
        assert!(matches!(err, SelectionError::NoValueColumns));
    }

    #[test]
    fn test_from_strs_invalid_cutoff() {
        let err = TimeBasedSelector::from_strs(&["2018-01-01", "soon"], &["x"], "date").unwrap_err();
        assert!(matches!(err, SelectionError::InvalidArgumentType { .. }));
    }

    #[test]
    fn test_split_periods_bounds_and_order() {
        let selector =
            TimeBasedSelector::from_strs(&["2018-01-01", "2019-01-01", "2020-01-01"], &["x"], "date")
                .unwrap();
        let periods = selector.split_periods(&yearly_table()).unwrap();
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0].column("x").unwrap(), &Column::numeric([0.0, 2.0]));
        // 2018-01-01 is on the boundary and belongs to the later period.
        assert_eq!(periods[1].column("x").unwrap(), &Column::numeric([1.0, 4.0]));
        assert_eq!(periods[2].column("x").unwrap(), &Column::numeric([3.0]));
        // Only the splitting column and the value columns are kept.
        assert!(periods[0].column("unused").is_err());
    }

    #[test]
    fn test_split_dataframe_pairs() {
        let selector =
            TimeBasedSelector::from_strs(&["2018-01-01", "2019-01-01", "2020-01-01"], &["x"], "date")
                .unwrap();
        let pairs = selector.split_dataframe(&yearly_table()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].time_cutoff, ts("2018-01-01"));
        assert_eq!(pairs[0].window_end, ts("2019-01-01"));
        assert_eq!(pairs[1].baseline, pairs[0].new);
        assert_eq!(pairs[1].window_end, ts("2020-01-01"));
    }

    #[test]
    fn test_single_cutoff_yields_no_pairs() {
        let selector = TimeBasedSelector::from_strs(&["2019-01-01"], &["x"], "date").unwrap();
        let pairs = selector.split_dataframe(&yearly_table()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_missing_splitting_column() {
        let selector = TimeBasedSelector::from_strs(&["2019-01-01"], &["x"], "when").unwrap();
        assert!(matches!(
            selector.split_dataframe(&yearly_table()),
            Err(DriftError::Table(_))
        ));
    }
}
