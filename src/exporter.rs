use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::dataset::Table;

#[derive(Error, Debug)]
pub enum CsvExportError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes a `Table` as a comma-delimited file with a header row
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the table, creating the parent directory when it is missing
    ///
    /// Nulls are written as empty fields, floats in shortest round-trip form
    /// with `.0` on integral values, and rows end with `\n`.
    pub fn write(&self, table: &mut Table) -> Result<(), CsvExportError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| CsvExportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            debug!("Ensured output directory {}", parent.display());
        }

        let file = File::create(&self.path).map_err(|source| CsvExportError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        CsvWriter::new(&mut writer)
            .include_header(true)
            .with_separator(b',')
            .finish(table.frame_mut())
            .map_err(|source| CsvExportError::Write {
                path: self.path.clone(),
                source,
            })?;

        info!(
            "Wrote {} rows x {} columns to {}",
            table.height(),
            table.width(),
            self.path.display()
        );
        Ok(())
    }
}
