// ============================================================================
// logargs-core/src/severity.rs
// ============================================================================
//
// SEVERITY SCALE: The Five Levels Accepted by `--log`
//
// This module defines the severity scale used throughout the crate and its
// mapping onto the `log` facade, which only knows four of our five levels
// plus `Trace`.
//
// KEY COMPONENTS:
// - Severity: DEBUG < INFO < WARNING < ERROR < CRITICAL, with numeric ranks
// - ParseSeverityError: exact, case-sensitive name lookup failure
// - Record helpers: recover the severity carried on a `log::Record`

// ---- External crate imports ----
use clap::ValueEnum;
use log::kv::{Key, Source as _};
use thiserror::Error;

// ---- Standard library imports ----
use std::fmt;
use std::str::FromStr;

// ---- Internal crate imports ----
use crate::config::SEVERITY_KEY;

/// Importance of a log event.
///
/// Variants are declared from least to most severe, so the derived ordering
/// is the threshold ordering: an event is emitted when its severity is
/// greater than or equal to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum Severity {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
}

impl Severity {
    /// All severities, least severe first.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// Numeric rank on the conventional 10..=50 scale.
    pub const fn rank(self) -> u8 {
        match self {
            Severity::Debug => 10,
            Severity::Info => 20,
            Severity::Warning => 30,
            Severity::Error => 40,
            Severity::Critical => 50,
        }
    }

    /// Upper-case name, as accepted by `--log` and printed in log lines.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// The `log` level records of this severity are emitted at.
    pub const fn to_level(self) -> log::Level {
        match self {
            Severity::Debug => log::Level::Debug,
            Severity::Info => log::Level::Info,
            Severity::Warning => log::Level::Warn,
            Severity::Error | Severity::Critical => log::Level::Error,
        }
    }

    /// Severity of a record that only carries a `log` level.
    ///
    /// `Trace` has no counterpart and is folded into `DEBUG`.
    pub const fn from_level(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warning,
            log::Level::Error => Severity::Error,
        }
    }

    /// Most severe value a record at `level` may carry.
    pub(crate) const fn ceiling(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Critical,
            other => Self::from_level(other),
        }
    }

    /// Severity of a record, preferring the `severity` key-value over its level.
    pub fn of_record(record: &log::Record<'_>) -> Self {
        record
            .key_values()
            .get(Key::from_str(SEVERITY_KEY))
            .and_then(|value| value.to_string().parse().ok())
            .unwrap_or_else(|| Self::from_level(record.level()))
    }
}

impl Default for Severity {
    fn default() -> Self {
        crate::config::DEFAULT_SEVERITY
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A name that is not one of the five severities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown severity '{0}' (expected one of DEBUG, INFO, WARNING, ERROR, CRITICAL)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.name() == s)
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_matches_rank() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
        assert_eq!(Severity::Warning.rank(), 30);
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!("CRITICAL".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warning));
        assert!("warning".parse::<Severity>().is_err());
        assert!("WARN".parse::<Severity>().is_err());
        assert!(" INFO".parse::<Severity>().is_err());
    }

    #[test]
    fn test_default_is_warning() {
        assert_eq!(Severity::default(), Severity::Warning);
    }

    #[test]
    fn test_record_without_key_uses_level() {
        let record = log::Record::builder()
            .level(log::Level::Trace)
            .target("plain")
            .build();
        assert_eq!(Severity::of_record(&record), Severity::Debug);

        let record = log::Record::builder()
            .level(log::Level::Warn)
            .target("plain")
            .build();
        assert_eq!(Severity::of_record(&record), Severity::Warning);
    }

    #[test]
    fn test_record_key_overrides_level() {
        let kvs = (SEVERITY_KEY, "CRITICAL");
        let record = log::Record::builder()
            .level(log::Level::Error)
            .target("keyed")
            .key_values(&kvs)
            .build();
        assert_eq!(Severity::of_record(&record), Severity::Critical);
    }
}
