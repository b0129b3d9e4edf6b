// Transform module
//
// The in-memory steps between load and persist:
// - join: left-join a right table onto the accumulating base table
// - coerce: cast columns to numbers, nulling what does not parse
// - impute: fill nulls with a column-wide mean or median

pub mod coerce;
pub mod impute;
pub mod join;

pub use coerce::{coerce_numeric, CoercionStats};
pub use impute::{fill_missing, ImputeError, ImputeOutcome, ImputeStrategy};
pub use join::{left_join, JoinSummary, LEFT_SUFFIX, RIGHT_SUFFIX};
