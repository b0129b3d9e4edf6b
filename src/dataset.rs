// Dataset module
//
// In-memory representation of the tabular sources and the merged output:
// - table: a named polars DataFrame with column lookup and renaming
// - source: the four input datasets and the label fixes each one needs

pub mod source;
pub mod table;

pub use source::SourceDataset;
pub use table::{Table, TableError};
