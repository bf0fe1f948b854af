use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::discount::DiscountTiers;
use super::pricing::DailyRate;

/// Low/average market value estimates for the vehicle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MarketValueRange {
    pub low: f64,
    pub average: f64,
}

impl MarketValueRange {
    /// Single figure used for ROI: the midpoint of the two estimates.
    pub fn midpoint(&self) -> f64 {
        f64::midpoint(self.low, self.average)
    }
}

/// Vehicle metadata from the enrichment collaborator. Every field that the
/// upstream feed may omit is an explicit `Option`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VehicleProfile {
    #[serde(default)]
    pub discounts: DiscountTiers,
    #[serde(default)]
    pub host_take_rate: Option<f64>,
    #[serde(default)]
    pub market_value: Option<MarketValueRange>,
    #[serde(default)]
    pub listed_on: Option<NaiveDate>,
}

/// One vehicle as delivered by a data source: identity, the raw day feed,
/// and the enrichment profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub daily_pricing: Option<Vec<DailyRate>>,
    #[serde(default)]
    pub profile: VehicleProfile,
}

impl VehicleRecord {
    /// Human label like "2021 Tesla Model 3 (12345)".
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(year) = self.year {
            parts.push(year.to_string());
        }
        if let Some(ref make) = self.make {
            parts.push(make.clone());
        }
        if let Some(ref model) = self.model {
            parts.push(model.clone());
        }
        if parts.is_empty() {
            format!("vehicle {}", self.id)
        } else {
            format!("{} ({})", parts.join(" "), self.id)
        }
    }
}
