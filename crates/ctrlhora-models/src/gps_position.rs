use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GPS position error.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq)]
pub enum GpsPositionError {
    #[error("Malformed GPS position '{}', expected 'latitude,longitude'", value)]
    Malformed { value: String },

    #[error("Latitude out of range [-90, 90]: {}", latitude)]
    LatitudeOutOfRange { latitude: f64 },

    #[error("Longitude out of range [-180, 180]: {}", longitude)]
    LongitudeOutOfRange { longitude: f64 },
}

/// A latitude/longitude pair, sent as `latitude,longitude`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Copy, Clone)]
pub struct GpsPosition {
    latitude: f64,
    longitude: f64,
}

impl GpsPosition {
    /// Creates a position, checking coordinate ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GpsPositionError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GpsPositionError::LatitudeOutOfRange { latitude });
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GpsPositionError::LongitudeOutOfRange { longitude });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude, in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude, in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl Display for GpsPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for GpsPosition {
    type Err = GpsPositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GpsPositionError::Malformed { value: s.into() };

        let (latitude, longitude) = s.split_once(',').ok_or_else(malformed)?;
        let latitude: f64 = latitude.trim().parse().map_err(|_| malformed())?;
        let longitude: f64 = longitude.trim().parse().map_err(|_| malformed())?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(malformed());
        }

        Self::new(latitude, longitude)
    }
}
