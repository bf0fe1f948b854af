use chrono::NaiveDate;

use super::allocator::{allocate, seed_currency};
use super::discount::PricingStrategy;
use super::pricing::DailyRate;
use super::reporter::{RevenueMetrics, summarize};
use super::segmenter::segment;
use super::vehicle::VehicleProfile;

/// Per-invocation knobs for the pipeline. Usually built from the loaded
/// config; defaults match it.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub apply_discounts: bool,
    pub apply_take_rate: bool,
    pub fallback_currency: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            apply_discounts: true,
            apply_take_rate: false,
            fallback_currency: "USD".into(),
        }
    }
}

/// Run the full pipeline for one vehicle: segment, price, allocate,
/// summarize.
///
/// Pure in all inputs; `reference` is the "now" captured once by the caller,
/// so repeated calls with the same arguments give identical output. A missing
/// day feed degrades to a fully zeroed trailing window rather than an error.
pub fn compute_metrics(
    daily: Option<&[DailyRate]>,
    profile: &VehicleProfile,
    reference: NaiveDate,
    options: &EngineOptions,
) -> RevenueMetrics {
    let Some(days) = daily else {
        let monthly = allocate(&[], None, &options.fallback_currency, reference);
        return summarize(monthly, profile, None, reference);
    };

    let segments = segment(days);
    let strategy = if options.apply_discounts {
        PricingStrategy::Tiered(profile.discounts.clone())
    } else {
        PricingStrategy::Undiscounted
    };
    let priced = strategy.price_all(segments);
    tracing::debug!(segments = priced.len(), "priced booking segments");

    let take_rate = if options.apply_take_rate {
        profile.host_take_rate
    } else {
        None
    };
    let currency = seed_currency(days, &options.fallback_currency);
    let monthly = allocate(&priced, take_rate, &currency, reference);
    summarize(monthly, profile, Some(days), reference)
}
