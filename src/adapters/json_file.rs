use std::path::PathBuf;

use crate::domain::vehicle::VehicleRecord;
use crate::error::Result;
use crate::ports::source::VehicleDataSource;

/// File-backed source: a JSON array of vehicle records, typically exported
/// from the browser-side collector.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VehicleDataSource for JsonFileSource {
    fn vehicles(&self) -> Result<Vec<VehicleRecord>> {
        let content = std::fs::read_to_string(&self.path)?;
        let records: Vec<VehicleRecord> = serde_json::from_str(&content)?;
        tracing::debug!(
            count = records.len(),
            path = %self.path.display(),
            "loaded vehicle records"
        );
        Ok(records)
    }
}
