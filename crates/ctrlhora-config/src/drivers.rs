use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid driver kind: {kind}")]
    InvalidDriverKind { kind: String },
    #[error("Invalid clock locale: {locale}")]
    InvalidClockLocale { locale: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionDriver {
    Memory,
    File,
}

impl FromStr for SessionDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

/// Locale used to render the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockLocale {
    /// Chilean Spanish, `vie, 16 oct 2026, 14:03:22`.
    EsCl,
    /// US English, `Fri, Oct 16, 2026, 14:03:22`.
    EnUs,
}

impl FromStr for ClockLocale {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase().replace('_', "-")[..] {
            "es" | "es-cl" => Ok(Self::EsCl),
            "en" | "en-us" => Ok(Self::EnUs),
            _ => Err(DriverError::InvalidClockLocale { locale: s.into() }),
        }
    }
}
