use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Clock event kind error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ClockEventKindError {
    /// Unknown clock event kind.
    #[error("Unknown clock event kind: {}", kind)]
    UnknownClockEventKind { kind: String },
}

/// Clock event kind.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Copy, Clone, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClockEventKind {
    /// Start of a work period.
    Entry,
    /// End of a work period.
    Exit,
}

impl ClockEventKind {
    /// API path used to register this event.
    pub fn path(self) -> &'static str {
        match self {
            Self::Entry => "/entry",
            Self::Exit => "/exit",
        }
    }

    /// Capitalized label, for messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Exit => "Exit",
        }
    }

    /// Convert kind to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl Display for ClockEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for ClockEventKind {
    type Err = ClockEventKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(Self::Entry),
            "exit" => Ok(Self::Exit),
            e => Err(ClockEventKindError::UnknownClockEventKind { kind: e.into() }),
        }
    }
}

impl From<ClockEventKind> for &'static str {
    fn from(kind: ClockEventKind) -> Self {
        match kind {
            ClockEventKind::Entry => "entry",
            ClockEventKind::Exit => "exit",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn paths_and_labels() {
        assert_eq!(ClockEventKind::Entry.path(), "/entry");
        assert_eq!(ClockEventKind::Exit.path(), "/exit");
        assert_eq!(ClockEventKind::Exit.label(), "Exit");
        assert_eq!(ClockEventKind::Entry.to_string(), "entry");
    }

    #[test]
    fn from_str() {
        assert_eq!(
            ClockEventKind::from_str("exit").unwrap(),
            ClockEventKind::Exit
        );
        assert!(ClockEventKind::from_str("lunch").is_err());
    }
}
