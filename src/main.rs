use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crop_yield_preprocessor::config::Config;
use crop_yield_preprocessor::services::{DatasetMerger, MergeReport};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!("Starting crop yield preprocessing with config: {:?}", config);

    let report = DatasetMerger::new(config).run()?;
    debug!("Run report: {}", serde_json::to_string(&report)?);

    print_summary(&report);
    Ok(())
}

fn print_summary(report: &MergeReport) {
    println!("\n{}", "=".repeat(60));
    println!("Preprocessing Summary");
    println!("{}", "=".repeat(60));
    for source in &report.sources {
        println!("{:<20}{} rows", format!("{}:", source.source), source.rows);
    }
    println!("{}", "-".repeat(60));
    for join in &report.joins {
        println!(
            "{:<20}{} matched, {} unmatched, {} duplicate keys",
            format!("+ {}:", join.right_table),
            join.matched_rows,
            join.unmatched_rows,
            join.duplicate_right_keys
        );
    }
    println!("{}", "-".repeat(60));
    for (coercion, imputation) in report.coercions.iter().zip(&report.imputations) {
        let fill = match imputation.fill_value {
            Some(value) => format!("{} {:.4}", imputation.strategy, value),
            None => "nothing (no observed values)".to_string(),
        };
        println!(
            "{:<20}{} unparseable, {} filled with {}",
            format!("{}:", imputation.column),
            coercion.unparseable,
            imputation.filled,
            fill
        );
    }
    println!("{}", "-".repeat(60));
    println!(
        "Output:             {} rows x {} columns",
        report.output_rows, report.output_columns
    );
    println!("Saved to:           {}", report.output_path.display());
    println!("Total Time:         {:.2}s", report.elapsed_secs);
    println!("{}", "=".repeat(60));
}
