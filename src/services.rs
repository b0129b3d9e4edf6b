pub mod dataset_merger;

pub use dataset_merger::{DatasetMerger, MergeError, MergeReport, SourceTables};
