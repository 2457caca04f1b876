//! Global time configuration
//!
//! A process-wide override time sourced from the environment:
//! `GLOBAL_TIME_TRAVEL_TIME` (a full timestamp, preferred) with
//! `GLOBAL_TIME_TRAVEL_DATE` (date-only) as fallback. Empty values count as
//! unset. The parsed value is memoized on first access and stays stable even
//! if the environment changes afterwards, until explicitly reset.

use std::env;

use chrono::{DateTime, Utc};
use nutype::nutype;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::parse_instant;
use crate::error::{Error, Result};

/// Environment variable carrying a full timestamp; wins when both are set
pub const GLOBAL_TIME_VAR: &str = "GLOBAL_TIME_TRAVEL_TIME";
/// Environment variable carrying a date-only value; the fallback source
pub const GLOBAL_DATE_VAR: &str = "GLOBAL_TIME_TRAVEL_DATE";

/// A non-empty raw value read from one of the global time variables
#[nutype(validate(not_empty), derive(Debug, Clone, PartialEq, Eq, AsRef, Display))]
pub struct GlobalTimeSource(String);

/// Process-scoped global time state.
///
/// Constructed once at harness startup and passed by reference; there is no
/// implicit global. `reset` exists so the harness's own tests can isolate
/// themselves from each other.
#[derive(Debug, Default)]
pub struct GlobalTime {
    cached: RwLock<Option<DateTime<Utc>>>,
}

impl GlobalTime {
    /// A global time that reads the environment lazily on first access
    pub fn from_env() -> Self {
        Self::default()
    }

    /// A global time pinned to a known instant, bypassing the environment.
    /// Intended for harness tests and embedded use.
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self {
            cached: RwLock::new(Some(instant)),
        }
    }

    /// Whether a global time is available, either memoized or present in the
    /// environment
    pub fn configured(&self) -> bool {
        self.cached.read().is_some() || self.source().is_some()
    }

    /// The configured global time.
    ///
    /// Parses the environment source on first call and memoizes the result;
    /// an unparsable source is an error every time, never retried against a
    /// changed environment within the memoized window.
    pub fn global_time(&self) -> Result<DateTime<Utc>> {
        if let Some(cached) = *self.cached.read() {
            return Ok(cached);
        }
        let source = self.source().ok_or(Error::GlobalTimeNotConfigured)?.into_inner();
        let parsed = parse_instant(&source)?;
        debug!(%source, time = %parsed, "resolved global time from environment");
        *self.cached.write() = Some(parsed);
        Ok(parsed)
    }

    /// Drops the memoized value so the next access re-reads the environment
    pub fn reset(&self) {
        *self.cached.write() = None;
    }

    fn source(&self) -> Option<GlobalTimeSource> {
        read_var(GLOBAL_TIME_VAR).or_else(|| read_var(GLOBAL_DATE_VAR))
    }
}

fn read_var(name: &str) -> Option<GlobalTimeSource> {
    env::var(name)
        .ok()
        .and_then(|raw| GlobalTimeSource::try_new(raw).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // Environment-driven behavior is covered in tests/global_time.rs, which
    // owns its process's environment. These stay env-free.

    #[test]
    fn test_fixed_is_configured_and_stable() {
        let instant = Utc.with_ymd_and_hms(2015, 2, 9, 0, 0, 0).unwrap();
        let global = GlobalTime::fixed(instant);
        assert!(global.configured());
        assert_eq!(global.global_time().unwrap(), instant);
        assert_eq!(global.global_time().unwrap(), instant);
    }

    #[test]
    fn test_empty_source_rejected_by_validation() {
        assert!(GlobalTimeSource::try_new(String::new()).is_err());
    }
}
