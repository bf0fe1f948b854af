use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One calendar day of a vehicle's availability/price feed.
///
/// Price and currency are optional on the wire; a record is only *valid*
/// (usable for revenue) when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyRate {
    pub date: NaiveDate,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub booked: bool,
    #[serde(default)]
    pub custom_price: bool,
}

impl DailyRate {
    pub fn is_valid(&self) -> bool {
        self.price.is_some() && self.currency.is_some()
    }
}

/// A calendar month, ordered by `(year, month)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl MonthKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Months since year zero, for month arithmetic.
    fn index(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn minus_months(self, n: u32) -> Self {
        let total = self.index() - i64::from(n);
        Self {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn short_name(self) -> &'static str {
        SHORT_MONTH_NAMES[(self.month.saturating_sub(1) as usize).min(11)]
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
