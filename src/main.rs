use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use chrono::Local;
use tracing_subscriber::EnvFilter;

use raptor_metrics::adapters::json_file::JsonFileSource;
use raptor_metrics::config::load_config;
use raptor_metrics::domain::engine::{EngineOptions, compute_metrics};
use raptor_metrics::export::export_csv;
use raptor_metrics::ports::source::VehicleDataSource;

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("config.yaml"),
        exe_dir().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: raptor-metrics <vehicles.json> [out.csv]");
    };
    let csv_path = args.next();

    let config = load_config(&find_config_path())?;
    let options = EngineOptions::from(&config.engine);

    let source = JsonFileSource::new(&input);
    let vehicles = source.vehicles()?;
    tracing::info!(count = vehicles.len(), "computing metrics");

    // Capture "now" once so a long run doesn't straddle a month boundary.
    let reference = Local::now().date_naive();

    let mut reports = Vec::with_capacity(vehicles.len());
    for vehicle in vehicles {
        let metrics = compute_metrics(
            vehicle.daily_pricing.as_deref(),
            &vehicle.profile,
            reference,
            &options,
        );
        println!("# {}", vehicle.label());
        println!("{metrics}");
        reports.push((vehicle, metrics));
    }

    if let Some(path) = csv_path {
        let file = std::fs::File::create(&path)?;
        export_csv(file, &reports, &config.export)?;
        tracing::info!(rows = reports.len(), path = %path, "wrote CSV export");
    }

    Ok(())
}
