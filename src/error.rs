use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Invalid input data: {reason}")]
    InvalidInput { reason: String },

    #[error("Vehicle not found: {id}")]
    VehicleNotFound { id: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = MetricsError::InvalidInput {
            reason: "dates out of order".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("dates out of order"));
        assert!(msg.contains("Invalid input"));
    }

    #[test]
    fn vehicle_not_found_display() {
        let err = MetricsError::VehicleNotFound { id: "1337".into() };
        assert!(err.to_string().contains("1337"));
    }

    #[test]
    fn config_error_display() {
        let err = MetricsError::Config("missing file".into());
        assert!(err.to_string().contains("missing file"));
    }

    #[test]
    fn error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{invalid").unwrap_err();
        let err: MetricsError = json_err.into();
        assert!(matches!(err, MetricsError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }
}
