use serde::{Deserialize, Serialize};

use super::segmenter::BookingSegment;

/// Length-of-stay discount tiers from the vehicle's rate configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscountTiers {
    #[serde(default)]
    pub weekly_percent: Option<f64>,
    #[serde(default)]
    pub monthly_percent: Option<f64>,
}

/// Minimum booked days before the weekly discount tier applies.
pub const WEEKLY_MIN_DAYS: usize = 7;
/// Minimum booked days before the monthly discount tier applies.
pub const MONTHLY_MIN_DAYS: usize = 31;

/// How a segment's gross revenue is turned into billable revenue.
///
/// Selected once at the call boundary; the take-rate multiplier is a separate
/// concern applied by the allocator.
#[derive(Debug, Clone)]
pub enum PricingStrategy {
    Undiscounted,
    Tiered(DiscountTiers),
}

/// A booking segment with its billable revenue attached.
#[derive(Debug, Clone)]
pub struct PricedSegment {
    pub segment: BookingSegment,
    pub revenue: f64,
}

impl PricingStrategy {
    /// Billable revenue for one segment.
    ///
    /// At most one discount applies: monthly at 31+ booked days, otherwise
    /// weekly at 7+. Shorter stays always bill gross.
    pub fn price(&self, segment: &BookingSegment) -> f64 {
        let gross = segment.gross_revenue();
        let Self::Tiered(tiers) = self else {
            return gross;
        };
        let booked_days = segment.days.len();
        if booked_days < WEEKLY_MIN_DAYS {
            return gross;
        }
        if booked_days >= MONTHLY_MIN_DAYS
            && let Some(pct) = tiers.monthly_percent
        {
            return gross * (1.0 - pct / 100.0);
        }
        if let Some(pct) = tiers.weekly_percent {
            return gross * (1.0 - pct / 100.0);
        }
        gross
    }

    pub fn price_all(&self, segments: Vec<BookingSegment>) -> Vec<PricedSegment> {
        segments
            .into_iter()
            .map(|segment| PricedSegment {
                revenue: self.price(&segment),
                segment,
            })
            .collect()
    }
}
