use std::env;
use std::path::PathBuf;

use crate::dataset::SourceDataset;

pub const DEFAULT_DATA_DIR: &str = "../data";
pub const OUTPUT_SUBDIR: &str = "processed";
pub const OUTPUT_FILE_NAME: &str = "cleaned_data.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    /// Standard layout: inputs in `data_dir`, output in `data_dir/processed`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Config {
            output_dir: data_dir.join(OUTPUT_SUBDIR),
            data_dir,
        }
    }

    pub fn from_env() -> Self {
        let config = Config::new(
            env::var("CROP_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
        );
        match env::var("CROP_OUTPUT_DIR") {
            Ok(dir) => config.with_output_dir(dir),
            Err(_) => config,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn input_path(&self, source: SourceDataset) -> PathBuf {
        self.data_dir.join(source.file_name())
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_dir.join(OUTPUT_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(
            config.input_path(SourceDataset::Temperature),
            PathBuf::from("../data/temp.csv")
        );
        assert_eq!(
            config.output_file(),
            PathBuf::from("../data/processed/cleaned_data.csv")
        );
    }

    #[test]
    fn test_output_dir_override() {
        let config = Config::new("/srv/crops").with_output_dir("/tmp/out");
        assert_eq!(
            config.input_path(SourceDataset::Yield),
            PathBuf::from("/srv/crops/yield_df.csv")
        );
        assert_eq!(config.output_file(), PathBuf::from("/tmp/out/cleaned_data.csv"));
    }
}
