//! Severity levels understood by `minimum-level` directives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity of a log event, from the most to the least verbose.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    /// Anything and everything.
    Verbose,
    /// Internal system events.
    Debug,
    /// The lifeblood of operational intelligence.
    Information,
    /// Degraded service or unexpected conditions.
    Warning,
    /// Functionality is unavailable.
    Error,
    /// The application cannot continue.
    Fatal,
}

impl LogLevel {
    /// Every level, ordered from the most to the least verbose.
    pub const ALL: [Self; 6] = [
        Self::Verbose,
        Self::Debug,
        Self::Information,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Name written into directive values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "Verbose",
            Self::Debug => "Debug",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`LogLevel`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Parses a level name. Matching is case-sensitive, mirroring the names
    /// the levels are written with.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_owned()))
    }
}
