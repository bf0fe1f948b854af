use std::io::Write;

use crate::config::types::ExportConfig;
use crate::domain::reporter::RevenueMetrics;
use crate::domain::vehicle::VehicleRecord;
use crate::error::Result;

fn amount(value: f64, config: &ExportConfig) -> String {
    if config.round_to_cents {
        format!("{value:.2}")
    } else {
        value.to_string()
    }
}

/// Flatten per-vehicle metrics into CSV, one row per vehicle: identity and
/// summary columns followed by one named column per trailing month.
/// Unavailable ROI/utilization become empty cells, not zeros.
pub fn export_csv<W: Write>(
    out: W,
    reports: &[(VehicleRecord, RevenueMetrics)],
    config: &ExportConfig,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    let Some((_, first)) = reports.first() else {
        return Ok(());
    };

    let mut header: Vec<String> = [
        "id",
        "make",
        "model",
        "year",
        "currency",
        "average_monthly",
        "previous_year_total",
        "roi_percent",
        "utilization_percent",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    header.extend(first.monthly.iter().map(|b| b.month.to_string()));
    writer.write_record(&header)?;

    for (vehicle, metrics) in reports {
        let mut row = vec![
            vehicle.id.clone(),
            vehicle.make.clone().unwrap_or_default(),
            vehicle.model.clone().unwrap_or_default(),
            vehicle.year.map(|y| y.to_string()).unwrap_or_default(),
            metrics.currency.clone(),
            amount(metrics.average_monthly, config),
            amount(metrics.previous_year_total, config),
            metrics
                .roi
                .map(|r| format!("{r:.2}"))
                .unwrap_or_default(),
            metrics
                .utilization_rate
                .map(|u| format!("{u:.2}"))
                .unwrap_or_default(),
        ];
        row.extend(metrics.monthly.iter().map(|b| amount(b.total, config)));
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
