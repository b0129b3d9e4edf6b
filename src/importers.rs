// ! Source dataset importers

pub mod csv_importer;

// Re-export commonly used items
pub use csv_importer::{CsvImportError, CsvImporter};
