use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::dataset::Table;
use crate::utils::missing_value_tokens;

#[derive(Error, Debug)]
pub enum CsvImportError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

/// Loader for comma-delimited source files with a header row
pub struct CsvImporter {
    path: PathBuf,
    table_name: String,
}

impl CsvImporter {
    pub fn new(path: impl Into<PathBuf>, table_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            table_name: table_name.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file into a `Table`
    ///
    /// # Cell handling:
    /// ```text
    /// Header: empty labels become "Unnamed: <i>", repeats get polars'
    ///         "_duplicated_<n>" suffix
    /// Data:   missing-value tokens ("", "NA", "NaN", ...) become null,
    ///         column types are inferred from every row
    /// Short rows are padded with nulls, long rows are rejected
    /// ```
    pub fn load(&self) -> Result<Table, CsvImportError> {
        info!("Loading {} from {}", self.table_name, self.path.display());

        let file = File::open(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CsvImportError::NotFound {
                path: self.path.clone(),
            },
            _ => CsvImportError::Io {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let parse_options = CsvParseOptions::default()
            .with_quote_char(Some(b'"'))
            .with_null_values(Some(missing_value_tokens()));

        let mut frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .with_parse_options(parse_options)
            .into_reader_with_file_handle(file)
            .finish()
            .map_err(|e| self.parse_error(e))?;

        name_unlabelled_columns(&mut frame).map_err(|e| self.parse_error(e))?;
        debug!("Schema of {}: {:?}", self.table_name, frame.schema());

        info!(
            "Loaded {} rows x {} columns from {}",
            frame.height(),
            frame.width(),
            self.path.display()
        );
        Ok(Table::new(self.table_name.clone(), frame))
    }

    fn parse_error(&self, source: PolarsError) -> CsvImportError {
        CsvImportError::Parse {
            path: self.path.clone(),
            source,
        }
    }
}

/// Label for a header cell that was left empty
///
/// The reader names such a column `column_<i + 1>`; dataframe tools that wrote
/// the file expect `Unnamed: <i>`.
fn unlabelled_name(position: usize, label: &str) -> Option<String> {
    if label.is_empty() || label == format!("column_{}", position + 1) {
        Some(format!("Unnamed: {position}"))
    } else {
        None
    }
}

fn name_unlabelled_columns(frame: &mut DataFrame) -> PolarsResult<()> {
    let names: Vec<String> = frame
        .get_column_names()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let label = label.to_string();
            unlabelled_name(i, &label).unwrap_or(label)
        })
        .collect();
    frame.set_column_names(names)
}
