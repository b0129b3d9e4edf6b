use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::dataset::{SourceDataset, Table, TableError};
use crate::exporter::{CsvExportError, CsvExporter};
use crate::importers::{CsvImportError, CsvImporter};
use crate::transform::{
    coerce_numeric, fill_missing, left_join, CoercionStats, ImputeError, ImputeOutcome,
    ImputeStrategy, JoinSummary,
};

/// Columns every source is joined on
pub const JOIN_KEYS: [&str; 2] = ["Area", "Year"];

/// Numeric columns of the merged table and how their gaps are filled
pub const IMPUTED_COLUMNS: [(&str, ImputeStrategy); 3] = [
    ("pesticides_tonnes", ImputeStrategy::Median),
    ("rainfall_mm", ImputeStrategy::Mean),
    ("temperature", ImputeStrategy::Mean),
];

/// Error types for a merge run
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("Load failed: {0}")]
    Import(#[from] CsvImportError),

    #[error("Merge failed: {0}")]
    Table(#[from] TableError),

    #[error("Imputation failed: {0}")]
    Impute(#[from] ImputeError),

    #[error("Save failed: {0}")]
    Export(#[from] CsvExportError),
}

/// The four normalized source tables
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub pesticides: Table,
    pub rainfall: Table,
    pub temperature: Table,
    pub crop_yield: Table,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub source: String,
    pub path: PathBuf,
    pub rows: usize,
    pub columns: usize,
}

/// Everything a run did, step by step
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub sources: Vec<SourceSummary>,
    pub joins: Vec<JoinSummary>,
    pub coercions: Vec<CoercionStats>,
    pub imputations: Vec<ImputeOutcome>,
    pub output_path: PathBuf,
    pub output_rows: usize,
    pub output_columns: usize,
    pub elapsed_secs: f64,
}

/// Loads the crop yield, pesticide, rainfall and temperature datasets,
/// joins them on (Area, Year), repairs the numeric columns and saves the
/// cleaned table.
pub struct DatasetMerger {
    config: Config,
}

impl DatasetMerger {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the whole pipeline
    ///
    /// 1. Load and normalize the four sources
    /// 2. Left-join yield with pesticides, rainfall, temperature
    /// 3. Coerce the numeric columns
    /// 4. Impute their missing values
    /// 5. Write the result
    #[instrument(skip(self), fields(data_dir = %self.config.data_dir.display()))]
    pub fn run(&self) -> Result<MergeReport, MergeError> {
        let start_time = Instant::now();

        info!("Loading datasets...");
        let (sources, source_summaries) = self.load_sources()?;

        info!("Merging datasets...");
        let (mut merged, joins) = Self::join_sources(sources)?;

        info!("Handling data issues...");
        let (coercions, imputations) = Self::clean(&mut merged)?;

        info!("Saving cleaned data...");
        let output_path = self.persist(&mut merged)?;

        let report = MergeReport {
            sources: source_summaries,
            joins,
            coercions,
            imputations,
            output_path,
            output_rows: merged.height(),
            output_columns: merged.width(),
            elapsed_secs: start_time.elapsed().as_secs_f64(),
        };
        info!(
            "Preprocessing complete! Cleaned data saved to: {}",
            report.output_path.display()
        );
        Ok(report)
    }

    /// Load every source and apply its label normalization
    pub fn load_sources(&self) -> Result<(SourceTables, Vec<SourceSummary>), MergeError> {
        let mut summaries = Vec::with_capacity(SourceDataset::ALL.len());
        let mut load = |source: SourceDataset| -> Result<Table, MergeError> {
            let path = self.config.input_path(source);
            let mut table = CsvImporter::new(&path, source.table_name()).load()?;
            source.normalize(&mut table)?;
            debug!("Normalized columns of {}: {:?}", source, table.column_names());

            summaries.push(SourceSummary {
                source: source.to_string(),
                path,
                rows: table.height(),
                columns: table.width(),
            });
            Ok(table)
        };

        let tables = SourceTables {
            pesticides: load(SourceDataset::Pesticides)?,
            rainfall: load(SourceDataset::Rainfall)?,
            temperature: load(SourceDataset::Temperature)?,
            crop_yield: load(SourceDataset::Yield)?,
        };
        Ok((tables, summaries))
    }

    /// Left-join pesticides, rainfall and temperature onto the yield table
    ///
    /// The result has exactly one row per yield row.
    pub fn join_sources(sources: SourceTables) -> Result<(Table, Vec<JoinSummary>), MergeError> {
        let SourceTables {
            pesticides,
            rainfall,
            temperature,
            crop_yield,
        } = sources;

        let mut merged = crop_yield;
        let mut joins = Vec::with_capacity(3);
        for right in [&pesticides, &rainfall, &temperature] {
            let (joined, summary) = left_join(merged, right, &JOIN_KEYS)?;
            merged = joined;
            joins.push(summary);
        }
        Ok((merged, joins))
    }

    /// Coerce the numeric columns, then fill their missing values
    ///
    /// A column with no observed values keeps its nulls; the run carries on.
    pub fn clean(
        merged: &mut Table,
    ) -> Result<(Vec<CoercionStats>, Vec<ImputeOutcome>), MergeError> {
        let coercions = IMPUTED_COLUMNS
            .iter()
            .map(|(column, _)| coerce_numeric(merged, column))
            .collect::<Result<Vec<_>, _>>()?;

        let imputations = IMPUTED_COLUMNS
            .iter()
            .map(|&(column, strategy)| fill_missing(merged, column, strategy))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((coercions, imputations))
    }

    /// Write the merged table to the configured output file
    pub fn persist(&self, merged: &mut Table) -> Result<PathBuf, MergeError> {
        let output_path = self.config.output_file();
        CsvExporter::new(&output_path).write(merged)?;
        Ok(output_path)
    }
}
