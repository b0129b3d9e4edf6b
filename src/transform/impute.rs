//! Column-wide imputation of missing numeric values

use std::fmt;

use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::dataset::{Table, TableError};

#[derive(Error, Debug)]
pub enum ImputeError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Failed to fill column '{column}': {source}")]
    Fill {
        column: String,
        #[source]
        source: PolarsError,
    },
}

/// Statistic used to fill missing values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ImputeStrategy {
    /// Arithmetic mean of the observed values
    Mean,
    /// Median of the observed values
    Median,
}

impl ImputeStrategy {
    /// Compute the fill value, `None` when the column has no observed values
    pub fn statistic(self, values: &Float64Chunked) -> Option<f64> {
        match self {
            ImputeStrategy::Mean => values.mean(),
            ImputeStrategy::Median => values.median(),
        }
    }
}

impl fmt::Display for ImputeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImputeStrategy::Mean => f.write_str("mean"),
            ImputeStrategy::Median => f.write_str("median"),
        }
    }
}

/// Result of filling one column
///
/// `fill_value` is `None` when the column had no observed values; its nulls
/// are then left in place and `filled` is 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImputeOutcome {
    pub column: String,
    pub strategy: ImputeStrategy,
    pub fill_value: Option<f64>,
    pub filled: usize,
}

/// Replace every null in `column` with the column-wide statistic
///
/// The column is read as `Float64` (non-numbers count as null), so it should
/// be coerced first. The statistic is global to the column, not grouped by
/// any key.
pub fn fill_missing(
    table: &mut Table,
    column: &str,
    strategy: ImputeStrategy,
) -> Result<ImputeOutcome, ImputeError> {
    let values = table.float_column(column)?;
    let missing = values.null_count();

    let Some(fill_value) = strategy.statistic(&values) else {
        warn!(
            "Column {} has no observed values, leaving {} null(s) unfilled",
            column, missing
        );
        return Ok(ImputeOutcome {
            column: column.to_string(),
            strategy,
            fill_value: None,
            filled: 0,
        });
    };

    let filled = values
        .fill_null_with_values(fill_value)
        .map_err(|source| ImputeError::Fill {
            column: column.to_string(),
            source,
        })?;
    table
        .frame_mut()
        .with_column(filled.into_series())
        .map_err(TableError::from)?;

    if missing > 0 {
        info!(
            "Filled {} missing value(s) in {} with {} {}",
            missing, column, strategy, fill_value
        );
    }
    if !fill_value.is_finite() {
        warn!("Fill value for {} is not finite: {}", column, fill_value);
    }

    Ok(ImputeOutcome {
        column: column.to_string(),
        strategy,
        fill_value: Some(fill_value),
        filled: missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_table(column: &str, values: &[Option<f64>]) -> Table {
        let frame = DataFrame::new(vec![Column::new(column.into(), values)]).unwrap();
        Table::new("merged", frame)
    }

    #[test]
    fn test_statistics() {
        let odd = Float64Chunked::from_slice("v".into(), &[4.0, 1.0, 2.0]);
        let even = Float64Chunked::from_slice("v".into(), &[4.0, 1.0, 2.0, 3.0]);
        assert_eq!(ImputeStrategy::Median.statistic(&odd), Some(2.0));
        assert_eq!(ImputeStrategy::Median.statistic(&even), Some(2.5));
        assert_eq!(ImputeStrategy::Mean.statistic(&even), Some(2.5));
    }

    #[test]
    fn test_fill_with_median() {
        let mut table = numeric_table(
            "pesticides_tonnes",
            &[Some(1.0), Some(2.0), None, Some(4.0)],
        );

        let outcome =
            fill_missing(&mut table, "pesticides_tonnes", ImputeStrategy::Median).unwrap();

        assert_eq!(outcome.fill_value, Some(2.0));
        assert_eq!(outcome.filled, 1);
        assert_eq!(
            table.f64_values("pesticides_tonnes").unwrap(),
            vec![Some(1.0), Some(2.0), Some(2.0), Some(4.0)]
        );
    }

    #[test]
    fn test_fill_with_mean() {
        let mut table = numeric_table("rainfall_mm", &[Some(10.0), Some(20.0), None]);

        let outcome = fill_missing(&mut table, "rainfall_mm", ImputeStrategy::Mean).unwrap();

        assert_eq!(outcome.fill_value, Some(15.0));
        assert_eq!(
            table.f64_values("rainfall_mm").unwrap(),
            vec![Some(10.0), Some(20.0), Some(15.0)]
        );
    }

    #[test]
    fn test_fill_without_gaps_changes_nothing() {
        let mut table = numeric_table("temperature", &[Some(16.0), Some(18.0)]);
        let outcome = fill_missing(&mut table, "temperature", ImputeStrategy::Mean).unwrap();
        assert_eq!(outcome.filled, 0);
        assert_eq!(
            table.f64_values("temperature").unwrap(),
            vec![Some(16.0), Some(18.0)]
        );
    }

    #[test]
    fn test_all_missing_column_is_left_null() {
        let mut table = numeric_table("temperature", &[None, None]);

        let outcome = fill_missing(&mut table, "temperature", ImputeStrategy::Mean).unwrap();

        assert_eq!(outcome.fill_value, None);
        assert_eq!(outcome.filled, 0);
        assert_eq!(table.null_count("temperature").unwrap(), 2);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let mut table = numeric_table("temperature", &[Some(1.0)]);
        assert!(matches!(
            fill_missing(&mut table, "rainfall_mm", ImputeStrategy::Mean),
            Err(ImputeError::Table(TableError::MissingColumn { .. }))
        ));
    }
}
