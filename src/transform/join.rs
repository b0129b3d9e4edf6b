use polars::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::dataset::{Table, TableError};

/// Suffix for a left-side column whose label also appears on the right
pub const LEFT_SUFFIX: &str = "_x";
/// Suffix for a right-side column whose label also appears on the left
pub const RIGHT_SUFFIX: &str = "_y";

const ROW_INDEX: &str = "__left_row";
const MATCH_FLAG: &str = "__matched";

/// What a single left-join did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinSummary {
    pub right_table: String,
    pub matched_rows: usize,
    pub unmatched_rows: usize,
    pub duplicate_right_keys: usize,
    pub suffixed_columns: Vec<String>,
}

/// Left-join `right` onto `left` on the `on` columns
///
/// Every left row appears exactly once in the result, in its original order:
/// - unmatched rows get null in every right-side column
/// - when several right rows share a key, the first one wins
/// - non-key labels present on both sides get `_x` / `_y` suffixes
/// - null keys never match
///
/// The result has the left columns followed by the right table's non-key
/// columns and keeps the left table's name.
pub fn left_join(
    left: Table,
    right: &Table,
    on: &[&str],
) -> Result<(Table, JoinSummary), TableError> {
    for key in on {
        left.require_column(key)?;
    }
    for key in on {
        right.require_column(key)?;
    }

    let left_labels = left.column_names();
    let mut suffixed_columns: Vec<String> = right
        .column_names()
        .into_iter()
        .filter(|c| !on.contains(&c.as_str()) && left_labels.contains(c))
        .collect();
    suffixed_columns.sort();
    if !suffixed_columns.is_empty() {
        debug!(
            "Columns present in both {} and {}: {:?}",
            left.name(),
            right.name(),
            suffixed_columns
        );
    }

    let name = left.name().to_string();
    let mut left_frame = left.into_frame();
    let mut right_frame = right.frame().clone();
    for column in &suffixed_columns {
        left_frame.rename(column, format!("{column}{LEFT_SUFFIX}").as_str().into())?;
    }
    align_key_types(&mut left_frame, &mut right_frame, on)?;

    let right_rows = right_frame.height();
    let deduped = right_frame
        .lazy()
        .unique_stable(
            Some(on.iter().map(|k| (*k).into()).collect()),
            UniqueKeepStrategy::First,
        )
        .with_column(lit(true).alias(MATCH_FLAG))
        .collect()?;
    let duplicate_right_keys = right_rows - deduped.height();

    let keys: Vec<Expr> = on.iter().map(|k| col(*k)).collect();
    let mut joined = left_frame
        .lazy()
        .with_row_index(ROW_INDEX, None)
        .join(
            deduped.lazy(),
            keys.clone(),
            keys,
            JoinArgs::new(JoinType::Left).with_suffix(Some(RIGHT_SUFFIX.into())),
        )
        .sort([ROW_INDEX], Default::default())
        .collect()?;

    let unmatched_rows = joined.column(MATCH_FLAG)?.null_count();
    joined.drop_in_place(MATCH_FLAG)?;
    joined.drop_in_place(ROW_INDEX)?;
    let matched_rows = joined.height() - unmatched_rows;

    if unmatched_rows > 0 {
        warn!(
            "{} of {} rows have no match in {}",
            unmatched_rows,
            joined.height(),
            right.name()
        );
    }
    if duplicate_right_keys > 0 {
        warn!(
            "{} duplicate key(s) in {} ignored, first row per key kept",
            duplicate_right_keys,
            right.name()
        );
    }
    info!(
        "Joined {}: {} matched, {} unmatched, {} columns",
        right.name(),
        matched_rows,
        unmatched_rows,
        joined.width()
    );

    Ok((
        Table::new(name, joined),
        JoinSummary {
            right_table: right.name().to_string(),
            matched_rows,
            unmatched_rows,
            duplicate_right_keys,
            suffixed_columns,
        },
    ))
}

/// Give each key column the same type on both sides
///
/// Numeric keys of different widths meet as `Float64` (so `1990` matches
/// `1990.0`); any other mismatch is compared as text.
fn align_key_types(
    left: &mut DataFrame,
    right: &mut DataFrame,
    on: &[&str],
) -> PolarsResult<()> {
    for key in on {
        let left_type = left.column(key)?.dtype().clone();
        let right_type = right.column(key)?.dtype().clone();
        if left_type == right_type {
            continue;
        }

        let numeric = |t: &DataType| t.is_integer() || t.is_float();
        let target = if numeric(&left_type) && numeric(&right_type) {
            DataType::Float64
        } else {
            DataType::String
        };
        debug!(
            "Key '{}' is {} on the left and {} on the right, comparing as {}",
            key, left_type, right_type, target
        );

        let cast = left.column(key)?.cast(&target)?;
        left.with_column(cast)?;
        let cast = right.column(key)?.cast(&target)?;
        right.with_column(cast)?;
    }
    Ok(())
}
