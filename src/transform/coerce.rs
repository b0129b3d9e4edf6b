use polars::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::dataset::{Table, TableError};

/// Per-column counts from a numeric coercion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoercionStats {
    pub column: String,
    pub parsed: usize,
    pub already_missing: usize,
    pub unparseable: usize,
}

/// Convert a column to `Float64` in place
///
/// The cast is non-strict: text that does not parse becomes null, so
/// coercion never fails on a value, only on an absent column.
pub fn coerce_numeric(table: &mut Table, column: &str) -> Result<CoercionStats, TableError> {
    let idx = table.require_column(column)?;
    let original = &table.frame().get_columns()[idx];
    let already_missing = original.null_count();

    let coerced = original.cast(&DataType::Float64)?;
    let missing = coerced.null_count();
    table.frame_mut().with_column(coerced)?;

    let stats = CoercionStats {
        column: column.to_string(),
        parsed: table.height() - missing,
        already_missing,
        unparseable: missing - already_missing,
    };

    if stats.unparseable > 0 {
        warn!(
            "{} value(s) in column {} could not be parsed as numbers and were set to null",
            stats.unparseable, column
        );
    }
    debug!("Coerced column {}: {:?}", column, stats);

    Ok(stats)
}
