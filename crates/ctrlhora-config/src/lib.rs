//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ClockLocale, DriverError, SessionDriver};

/// Default API root URL.
pub const DEFAULT_API_ROOT_URL: &str = "https://ctrl-hora-backend.onrender.com";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API root URL.
    pub root_url: String,
    /// Connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// Whole request timeout (in milliseconds).
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Session driver.
    pub driver: SessionDriver,
    /// Session file path, empty for the default location.
    pub file_path: String,
}

#[derive(Debug, Clone)]
pub struct GeolocationConfig {
    /// Fixed position, as `latitude,longitude`.
    pub position: String,
}

#[derive(Debug, Clone)]
pub struct ClockConfig {
    /// Clock locale.
    pub locale: ClockLocale,
    /// Fixed UTC offset, as `+HH:MM`, empty to use the local offset.
    pub utc_offset: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Session options.
    pub session: SessionConfig,
    /// Geolocation options.
    pub geolocation: GeolocationConfig,
    /// Clock options.
    pub clock: ClockConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            api: ApiConfig {
                root_url: env_to_str("CTRLHORA_API_ROOT_URL", DEFAULT_API_ROOT_URL),
                connect_timeout: env_to_u64("CTRLHORA_API_CONNECT_TIMEOUT", 5000),
                timeout: env_to_u64("CTRLHORA_API_TIMEOUT", 60000),
            },
            session: SessionConfig {
                driver: env_to_parsed("CTRLHORA_SESSION_DRIVER", SessionDriver::File),
                file_path: env_to_str("CTRLHORA_SESSION_FILE_PATH", ""),
            },
            geolocation: GeolocationConfig {
                position: env_to_str("CTRLHORA_GEOLOCATION_POSITION", ""),
            },
            clock: ClockConfig {
                locale: env_to_parsed("CTRLHORA_CLOCK_LOCALE", ClockLocale::EsCl),
                utc_offset: env_to_str("CTRLHORA_CLOCK_UTC_OFFSET", ""),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("CTRLHORA_LOGGING_USE_BUNYAN", false),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_parsed<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(value) => value.parse().unwrap_or(default),
        Err(_) => default,
    }
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}
