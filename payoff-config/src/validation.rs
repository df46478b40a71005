//! Custom validation functions for configuration.

use validator::ValidationError;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const REPORT_FORMATS: [&str; 2] = ["table", "json"];

/// Validate a tracing level name.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

/// Validate the report output format.
pub fn validate_format(format: &str) -> Result<(), ValidationError> {
    if REPORT_FORMATS.contains(&format) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_report_format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_levels() {
        assert!(validate_log_level("info").is_ok());
        assert!(validate_log_level("WARN").is_ok());
        assert!(validate_log_level("loud").is_err());
    }

    #[test]
    fn test_formats() {
        assert!(validate_format("table").is_ok());
        assert!(validate_format("json").is_ok());
        assert!(validate_format("csv").is_err());
    }
}
