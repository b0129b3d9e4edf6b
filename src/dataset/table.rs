use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Column '{column}' not found in table '{table}'")]
    MissingColumn { table: String, column: String },

    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),
}

/// A named `DataFrame`
///
/// The name identifies the source in logs and in `MissingColumn` errors.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    frame: DataFrame,
}

impl Table {
    pub fn new(name: impl Into<String>, frame: DataFrame) -> Self {
        Self {
            name: name.into(),
            frame,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut DataFrame {
        &mut self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.frame.get_column_index(column).is_some()
    }

    pub fn require_column(&self, column: &str) -> Result<usize, TableError> {
        self.frame
            .get_column_index(column)
            .ok_or_else(|| TableError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Trim leading/trailing whitespace from every column label
    pub fn strip_labels(&mut self) -> Result<(), TableError> {
        let names: Vec<String> = self
            .column_names()
            .iter()
            .map(|c| c.trim().to_string())
            .collect();
        self.frame.set_column_names(names)?;
        Ok(())
    }

    /// Rename column `from` to `to`, returning the label actually used
    ///
    /// An absent `from` is not an error (`Ok(None)`). When another column is
    /// already labelled `to`, the renamed column becomes `to.1` (or the next
    /// free `to.<n>`), the label that column gets when a file holding both
    /// under the same header is read back.
    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<Option<String>, TableError> {
        if !self.has_column(from) {
            return Ok(None);
        }

        let mut target = to.to_string();
        let mut n = 1;
        while from != target && self.has_column(&target) {
            target = format!("{to}.{n}");
            n += 1;
        }

        self.frame.rename(from, target.as_str().into())?;
        Ok(Some(target))
    }

    /// Drop `column`, returning whether it was present
    pub fn drop_column_if_present(&mut self, column: &str) -> Result<bool, TableError> {
        if !self.has_column(column) {
            return Ok(false);
        }
        self.frame.drop_in_place(column)?;
        Ok(true)
    }

    pub fn null_count(&self, column: &str) -> Result<usize, TableError> {
        let idx = self.require_column(column)?;
        Ok(self.frame.get_columns()[idx].null_count())
    }

    /// A column cast (non-strictly) to `Float64`
    pub fn float_column(&self, column: &str) -> Result<Float64Chunked, TableError> {
        let idx = self.require_column(column)?;
        let series = self.frame.get_columns()[idx]
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        Ok(series.f64()?.clone())
    }

    /// Column values as `Option<f64>`, `None` for nulls and non-numbers
    pub fn f64_values(&self, column: &str) -> Result<Vec<Option<f64>>, TableError> {
        Ok(self.float_column(column)?.into_iter().collect())
    }
}
