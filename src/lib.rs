pub mod config;
pub mod dataset;
pub mod exporter;
pub mod importers;
pub mod services;
pub mod transform;
pub mod utils;
