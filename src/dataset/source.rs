use std::fmt;

use tracing::debug;

use super::table::{Table, TableError};

/// Leftover index column written by dataframe tools when saving with an index
pub const INDEX_COLUMN: &str = "Unnamed: 0";

/// The four input datasets, in the order they are loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceDataset {
    Pesticides,
    Rainfall,
    Temperature,
    Yield,
}

impl SourceDataset {
    pub const ALL: [SourceDataset; 4] = [
        SourceDataset::Pesticides,
        SourceDataset::Rainfall,
        SourceDataset::Temperature,
        SourceDataset::Yield,
    ];

    /// File name inside the data directory
    pub fn file_name(self) -> &'static str {
        match self {
            SourceDataset::Pesticides => "pesticides.csv",
            SourceDataset::Rainfall => "rainfall.csv",
            SourceDataset::Temperature => "temp.csv",
            SourceDataset::Yield => "yield_df.csv",
        }
    }

    pub fn table_name(self) -> &'static str {
        match self {
            SourceDataset::Pesticides => "pesticides",
            SourceDataset::Rainfall => "rainfall",
            SourceDataset::Temperature => "temperature",
            SourceDataset::Yield => "yield",
        }
    }

    /// Column renames that bring this source's labels to the canonical names
    pub fn renames(self) -> &'static [(&'static str, &'static str)] {
        match self {
            SourceDataset::Pesticides => &[("Value", "Unit")],
            SourceDataset::Rainfall => &[("average_rain_fall_mm_per_year", "rainfall_mm")],
            SourceDataset::Temperature => &[
                ("country", "Area"),
                ("year", "Year"),
                ("avg_temp", "temperature"),
            ],
            SourceDataset::Yield => &[],
        }
    }

    /// Strip labels, apply the renames and drop the leftover index column
    pub fn normalize(self, table: &mut Table) -> Result<(), TableError> {
        table.strip_labels()?;

        for (from, to) in self.renames() {
            if let Some(label) = table.rename_column(from, to)? {
                debug!("Renamed '{}' -> '{}' in {}", from, label, table.name());
            }
        }

        if self == SourceDataset::Yield && table.drop_column_if_present(INDEX_COLUMN)? {
            debug!("Dropped index column '{}' from {}", INDEX_COLUMN, table.name());
        }

        Ok(())
    }
}

impl fmt::Display for SourceDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}
