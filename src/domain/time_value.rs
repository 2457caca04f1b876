//! Time operations and concrete time-like values
//!
//! A directive resolves to a [`TimeOp`] and a [`TimeValue`]. The value keeps
//! its declared representation (timestamp, calendar date, or raw string)
//! because trip matching cares about the representation, not just the instant
//! it denotes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The two supported time mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TimeOp {
    /// Hold the observed current time constant at a fixed instant
    #[display("freeze")]
    Freeze,
    /// Shift the observed current time to a starting instant, after which
    /// real time continues to advance
    #[display("travel")]
    Travel,
}

impl TimeOp {
    /// The metadata key that declares this operation
    pub fn metadata_key(&self) -> &'static str {
        match self {
            Self::Freeze => super::metadata::keys::FREEZE,
            Self::Travel => super::metadata::keys::TRAVEL,
        }
    }
}

/// A concrete time-like value as declared by a test example
///
/// Two values are the same trip start only when both the variant and the
/// contained value are equal: `Date(2016-07-15)` and
/// `Timestamp(2016-07-15T00:00:00Z)` denote the same instant but are
/// deliberately distinct. The derived `PartialEq` gives exactly that
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeValue {
    /// An absolute instant
    Timestamp(DateTime<Utc>),
    /// A calendar date; normalizes to that date's start of day in UTC
    Date(NaiveDate),
    /// A textual representation, parsed when a concrete instant is needed
    Text(String),
}

impl TimeValue {
    /// The concrete instant this value denotes.
    ///
    /// Dates normalize to start of day UTC, timestamps pass through, and
    /// strings are parsed. A malformed string surfaces here, before any test
    /// body runs.
    pub fn baseline(&self) -> Result<DateTime<Utc>> {
        match self {
            Self::Timestamp(instant) => Ok(*instant),
            Self::Date(date) => Ok(start_of_day(*date)),
            Self::Text(input) => parse_instant(input),
        }
    }
}

impl From<DateTime<Utc>> for TimeValue {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Timestamp(instant)
    }
}

impl From<NaiveDate> for TimeValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for TimeValue {
    fn from(input: &str) -> Self {
        Self::Text(input.to_string())
    }
}

/// Midnight UTC on the given date
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

/// Parses a time-like string into an instant.
///
/// Accepted forms, in order: RFC 3339, `YYYY-MM-DD HH:MM:SS` (assumed UTC),
/// and `YYYY-MM-DD` (start of day UTC).
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(start_of_day(date));
    }
    Err(Error::unparsable(input))
}
