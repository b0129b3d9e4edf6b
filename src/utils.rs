//! Shared utility functions for the crop yield preprocessor

use polars::prelude::NullValues;

/// Tokens that the loader treats as a missing value.
///
/// These are the spellings commonly written by spreadsheet tools and
/// dataframe libraries for "no value". Matching is exact (no trimming).
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// The missing-value tokens as a CSV reader null-value setting
///
/// # Examples
///
/// ```
/// use crop_yield_preprocessor::utils::missing_value_tokens;
/// use polars::prelude::NullValues;
///
/// match missing_value_tokens() {
///     NullValues::AllColumns(tokens) => assert!(tokens.iter().any(|t| t.as_str() == "NA")),
///     _ => panic!("expected one token list for every column"),
/// }
/// ```
pub fn missing_value_tokens() -> NullValues {
    NullValues::AllColumns(MISSING_VALUE_TOKENS.iter().map(|t| (*t).into()).collect())
}
