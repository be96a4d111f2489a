//! Position sources for clock events.

use async_trait::async_trait;
use ctrlhora_config::Config;
use ctrlhora_models::{GpsPosition, GpsPositionError};
use thiserror::Error;

/// Geolocation error.
#[derive(Debug, Error)]
pub enum GeolocationError {
    /// No position source is available.
    #[error("Geolocation unavailable")]
    Unavailable,

    /// A configured position could not be parsed.
    #[error("Invalid position: {source}")]
    InvalidPosition { source: GpsPositionError },
}

impl From<GpsPositionError> for GeolocationError {
    fn from(e: GpsPositionError) -> Self {
        Self::InvalidPosition { source: e }
    }
}

/// Provides the device position.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait GeolocationService: Send + Sync {
    async fn current_position(&self) -> Result<GpsPosition, GeolocationError>;
}

/// Always answers with the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocationService {
    position: GpsPosition,
}

impl FixedGeolocationService {
    pub fn new(position: GpsPosition) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationService for FixedGeolocationService {
    async fn current_position(&self) -> Result<GpsPosition, GeolocationError> {
        Ok(self.position)
    }
}

/// No position source, like a denied permission.
#[derive(Debug, Clone, Copy)]
pub struct UnavailableGeolocationService;

#[async_trait]
impl GeolocationService for UnavailableGeolocationService {
    async fn current_position(&self) -> Result<GpsPosition, GeolocationError> {
        Err(GeolocationError::Unavailable)
    }
}

/// Build the geolocation service described by configuration.
pub fn geolocation_service_from_config(
    config: &Config,
) -> Result<Box<dyn GeolocationService>, GeolocationError> {
    let position = config.geolocation.position.trim();
    if position.is_empty() {
        Ok(Box::new(UnavailableGeolocationService))
    } else {
        Ok(Box::new(FixedGeolocationService::new(position.parse()?)))
    }
}
