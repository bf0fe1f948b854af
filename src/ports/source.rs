use crate::domain::vehicle::VehicleRecord;
use crate::error::{MetricsError, Result};

/// Boundary to the data-retrieval collaborator that supplies vehicle records
/// (identity, day feed, enrichment profile). How records are obtained is the
/// adapter's business; the engine never does I/O itself.
pub trait VehicleDataSource: Send + Sync {
    fn vehicles(&self) -> Result<Vec<VehicleRecord>>;

    fn vehicle(&self, id: &str) -> Result<VehicleRecord> {
        self.vehicles()?
            .into_iter()
            .find(|v| v.id == id)
            .ok_or_else(|| MetricsError::VehicleNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{MockVehicleSource, make_vehicle};

    #[test]
    fn default_lookup_finds_vehicle_by_id() {
        let source = MockVehicleSource::new(vec![make_vehicle("7"), make_vehicle("8")]);
        let vehicle = source.vehicle("8").unwrap();
        assert_eq!(vehicle.id, "8");
    }

    #[test]
    fn default_lookup_reports_missing_vehicle() {
        let source = MockVehicleSource::new(vec![make_vehicle("7")]);
        let err = source.vehicle("99").unwrap_err();
        assert!(matches!(err, MetricsError::VehicleNotFound { .. }));
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn source_errors_propagate_through_lookup() {
        let source = MockVehicleSource::new(vec![]).with_vehicles(|| {
            Err(MetricsError::InvalidInput {
                reason: "truncated feed".into(),
            })
        });
        let err = source.vehicle("7").unwrap_err();
        assert!(matches!(err, MetricsError::InvalidInput { .. }));
    }
}
