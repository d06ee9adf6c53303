use anyhow::Context;
use clap::Parser;
use cohort_etl::EtlConfig;
use log::info;
use std::path::PathBuf;

/// Build sparse mortality-prediction features from a clinical event log.
#[derive(Debug, Parser)]
#[command(name = "cohort-etl", version, about)]
struct Args {
    /// Directory containing events.csv, mortality_events.csv and
    /// event_feature_map.csv
    #[arg(long, default_value = "data/train")]
    input_dir: PathBuf,

    /// Directory receiving checkpoint tables and sparse feature files
    #[arg(long, default_value = "deliverables")]
    output_dir: PathBuf,

    /// Observation window length in days, ending at the index date
    #[arg(long, default_value_t = 2000)]
    observation_window: u64,

    /// Days before the death date anchoring a deceased patient's index date
    #[arg(long, default_value_t = 30)]
    prediction_window: u64,

    /// Highest feature index aggregated by count rather than sum
    #[arg(long, default_value_t = 2680)]
    count_threshold: u32,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = EtlConfig {
        input_dir: args.input_dir,
        deliverables_dir: args.output_dir,
        observation_window_days: args.observation_window,
        prediction_window_days: args.prediction_window,
        count_threshold: args.count_threshold,
    };

    info!(
        "Building features from {} into {}",
        config.input_dir.display(),
        config.deliverables_dir.display()
    );

    let summary = cohort_etl::run_pipeline(&config)
        .with_context(|| format!("ETL run failed for input {}", config.input_dir.display()))?;

    info!(
        "Serialized {} patients ({} aggregated feature rows, {} of {} events in window)",
        summary.patients_serialized,
        summary.aggregated_rows,
        summary.events_in_window,
        summary.events_loaded
    );
    Ok(())
}
