#![allow(clippy::cast_precision_loss)]

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::discount::PricedSegment;
use super::pricing::{DailyRate, MonthKey};

/// Revenue accumulated in one calendar month of the trailing window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthBucket {
    pub month: MonthKey,
    pub total: f64,
    pub currency: String,
}

/// The 12 calendar months ending at (and including) the reference month,
/// oldest first.
pub fn trailing_months(reference: NaiveDate) -> Vec<MonthKey> {
    let current = MonthKey::from_date(reference);
    (0..12).rev().map(|i| current.minus_months(i)).collect()
}

/// Currency for the whole series, taken from the first usable day record.
pub fn seed_currency(days: &[DailyRate], fallback: &str) -> String {
    days.iter()
        .find(|d| d.is_valid())
        .and_then(|d| d.currency.clone())
        .unwrap_or_else(|| fallback.to_string())
}

/// Distribute priced segments into the trailing 12-month window.
///
/// A segment contained in one month adds in full; a segment spanning months
/// splits pro-rata by booked-day count. Shares falling outside the window are
/// dropped. The optional take rate is the host's retained share of gross,
/// applied per segment before allocation.
pub fn allocate(
    segments: &[PricedSegment],
    take_rate: Option<f64>,
    currency: &str,
    reference: NaiveDate,
) -> Vec<MonthBucket> {
    let mut totals: BTreeMap<MonthKey, f64> = trailing_months(reference)
        .into_iter()
        .map(|m| (m, 0.0))
        .collect();

    for priced in segments {
        let days = &priced.segment.days;
        if days.is_empty() {
            continue;
        }
        let revenue = take_rate.map_or(priced.revenue, |rate| priced.revenue * rate);
        let months: Vec<MonthKey> = days.iter().map(|d| MonthKey::from_date(d.date)).collect();

        if months.first() == months.last() {
            if let Some(total) = totals.get_mut(&months[0]) {
                *total += revenue;
            }
        } else {
            let share = revenue / days.len() as f64;
            for month in months {
                if let Some(total) = totals.get_mut(&month) {
                    *total += share;
                }
            }
        }
    }

    totals
        .into_iter()
        .map(|(month, total)| MonthBucket {
            month,
            total,
            currency: currency.to_string(),
        })
        .collect()
}
