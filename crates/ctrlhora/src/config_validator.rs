//! Validation utilities.

use std::fmt::Write;

use ctrlhora_config::Config;
use ctrlhora_core::clock::parse_utc_offset;
use ctrlhora_models::GpsPosition;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        let _ = write!(error, "\n  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, reason: &str) {
        let _ = write!(error, "\n  - Invalid env. var.: {} ({})", name, reason);
    }

    let mut error = String::new();

    // Check API configuration
    let root_url = config.api.root_url.trim();
    if root_url.is_empty() {
        _missing(&mut error, "CTRLHORA_API_ROOT_URL");
    } else if !root_url.starts_with("http://") && !root_url.starts_with("https://") {
        _invalid(
            &mut error,
            "CTRLHORA_API_ROOT_URL",
            "must start with http:// or https://",
        );
    }
    if config.api.connect_timeout == 0 {
        _invalid(&mut error, "CTRLHORA_API_CONNECT_TIMEOUT", "must not be zero");
    }
    if config.api.timeout == 0 {
        _invalid(&mut error, "CTRLHORA_API_TIMEOUT", "must not be zero");
    }

    // Check geolocation configuration
    let position = config.geolocation.position.trim();
    if !position.is_empty() {
        if let Err(e) = position.parse::<GpsPosition>() {
            _invalid(&mut error, "CTRLHORA_GEOLOCATION_POSITION", &e.to_string());
        }
    }

    // Check clock configuration
    let utc_offset = config.clock.utc_offset.trim();
    if !utc_offset.is_empty() {
        if let Err(e) = parse_utc_offset(utc_offset) {
            _invalid(&mut error, "CTRLHORA_CLOCK_UTC_OFFSET", &e.to_string());
        }
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
