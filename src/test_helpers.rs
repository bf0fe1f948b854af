use std::sync::Mutex;

use chrono::NaiveDate;

use crate::domain::pricing::DailyRate;
use crate::domain::vehicle::{VehicleProfile, VehicleRecord};
use crate::error::Result;
use crate::ports::source::VehicleDataSource;

// --- Factory functions ---

pub fn make_day(date: NaiveDate, price: f64, booked: bool) -> DailyRate {
    DailyRate {
        date,
        price: Some(price),
        currency: Some("USD".to_string()),
        booked,
        custom_price: false,
    }
}

/// `len` consecutive booked days starting at `start`, all at `price`.
pub fn booked_run(start: NaiveDate, len: usize, price: f64) -> Vec<DailyRate> {
    (0..len)
        .map(|i| make_day(start + chrono::TimeDelta::days(i as i64), price, true))
        .collect()
}

pub fn make_vehicle(id: &str) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        make: Some("Toyota".to_string()),
        model: Some("Corolla".to_string()),
        year: Some(2021),
        daily_pricing: None,
        profile: VehicleProfile::default(),
    }
}

// --- Mock data source ---

type VehiclesFn = Box<dyn Fn() -> Result<Vec<VehicleRecord>> + Send + Sync>;

pub struct MockVehicleSource {
    vehicles_fn: Mutex<VehiclesFn>,
}

impl MockVehicleSource {
    pub fn new(records: Vec<VehicleRecord>) -> Self {
        Self {
            vehicles_fn: Mutex::new(Box::new(move || Ok(records.clone()))),
        }
    }

    #[must_use]
    pub fn with_vehicles(
        self,
        f: impl Fn() -> Result<Vec<VehicleRecord>> + Send + Sync + 'static,
    ) -> Self {
        *self.vehicles_fn.lock().unwrap() = Box::new(f);
        self
    }
}

impl VehicleDataSource for MockVehicleSource {
    fn vehicles(&self) -> Result<Vec<VehicleRecord>> {
        let f = self.vehicles_fn.lock().unwrap();
        f()
    }
}
