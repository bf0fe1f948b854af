#![allow(clippy::cast_precision_loss)]

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::allocator::MonthBucket;
use super::currency::currency_symbol;
use super::pricing::{DailyRate, MonthKey};
use super::vehicle::VehicleProfile;

/// Mean Gregorian month length in days, used to turn an observation window
/// into a monthly run rate.
pub const AVG_DAYS_PER_MONTH: f64 = 30.44;

/// Summary metrics derived from the monthly series and vehicle metadata.
///
/// `roi` and `utilization_rate` are `None` when their required inputs are
/// missing, so consumers can tell "no signal" apart from a zero value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueMetrics {
    pub monthly: Vec<MonthBucket>,
    pub average_monthly: f64,
    pub previous_year_total: f64,
    pub roi: Option<f64>,
    pub utilization_rate: Option<f64>,
    pub currency: String,
}

fn previous_year_start(reference: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(reference.year() - 1, 1, 1)
        .expect("January 1st exists for every year")
}

/// Start of the ROI/utilization observation window: the later of the listing
/// date and January 1st of the previous calendar year.
pub fn observation_start(listed_on: Option<NaiveDate>, reference: NaiveDate) -> NaiveDate {
    let floor = previous_year_start(reference);
    match listed_on {
        Some(listed) if listed > floor => listed,
        _ => floor,
    }
}

/// Derive summary statistics from the monthly series.
pub fn summarize(
    monthly: Vec<MonthBucket>,
    profile: &VehicleProfile,
    daily: Option<&[DailyRate]>,
    reference: NaiveDate,
) -> RevenueMetrics {
    let active: Vec<f64> = monthly
        .iter()
        .map(|b| b.total)
        .filter(|t| *t > 0.0)
        .collect();
    let average_monthly = if active.is_empty() {
        0.0
    } else {
        active.iter().sum::<f64>() / active.len() as f64
    };

    let previous_year_total = monthly
        .iter()
        .filter(|b| b.month.year == reference.year() - 1)
        .map(|b| b.total)
        .sum();

    let window_start = observation_start(profile.listed_on, reference);
    let window_days = (reference - window_start).num_days();

    // ROI needs both a market value and a listing date; anything else is
    // "unavailable", never zero.
    let roi = profile
        .market_value
        .as_ref()
        .zip(profile.listed_on)
        .and_then(|(mv, _)| {
            let market_value = mv.midpoint();
            if market_value <= 0.0 || window_days <= 0 {
                return None;
            }
            let start_month = MonthKey::from_date(window_start);
            let window_revenue: f64 = monthly
                .iter()
                .filter(|b| b.month >= start_month)
                .map(|b| b.total)
                .sum();
            let monthly_run_rate = window_revenue / (window_days as f64 / AVG_DAYS_PER_MONTH);
            Some(monthly_run_rate * 12.0 / market_value * 100.0)
        });

    // Utilization works over the raw day records, not the buckets. The
    // window is half-open, matching the elapsed-day denominator, so a
    // fully booked window is exactly 100%.
    let utilization_rate = daily.and_then(|records| {
        if window_days <= 0 {
            return None;
        }
        let booked = records
            .iter()
            .filter(|d| d.booked && d.date >= window_start && d.date < reference)
            .count();
        Some(booked as f64 / window_days as f64 * 100.0)
    });

    let currency = monthly
        .first()
        .map_or_else(|| "USD".to_string(), |b| b.currency.clone());

    RevenueMetrics {
        monthly,
        average_monthly,
        previous_year_total,
        roi,
        utilization_rate,
        currency,
    }
}

impl std::fmt::Display for RevenueMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = currency_symbol(&self.currency);
        writeln!(f, "Revenue metrics ({})", self.currency)?;
        writeln!(
            f,
            "Avg monthly (active months): {sym}{:.2}",
            self.average_monthly
        )?;
        writeln!(f, "Previous year total: {sym}{:.2}", self.previous_year_total)?;
        match self.roi {
            Some(roi) => writeln!(f, "ROI: {roi:.1}%")?,
            None => writeln!(f, "ROI: n/a")?,
        }
        match self.utilization_rate {
            Some(util) => writeln!(f, "Utilization: {util:.1}%")?,
            None => writeln!(f, "Utilization: n/a")?,
        }
        writeln!(f, "{}", "-".repeat(24))?;
        writeln!(f, "{:<10} {:>12}", "Month", "Revenue")?;
        for bucket in &self.monthly {
            let label = format!("{} {}", bucket.month.short_name(), bucket.month.year);
            let amount = format!("{sym}{:.2}", bucket.total);
            writeln!(f, "{label:<10} {amount:>12}")?;
        }
        Ok(())
    }
}
