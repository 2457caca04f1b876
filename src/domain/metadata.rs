//! Per-example metadata declarations
//!
//! Host adapters translate whatever the test runner exposes into a
//! [`Metadata`] map. The recognized keys are `freeze`, `travel`, and the
//! presence-only `skip_global_time` opt-out; anything else is carried but
//! ignored.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use derive_more::From;

use super::time_value::TimeValue;

/// Recognized metadata keys
pub mod keys {
    /// Declares a freeze directive; the value is a time or deferred time
    pub const FREEZE: &str = "freeze";
    /// Declares a travel directive; the value is a time or deferred time
    pub const TRAVEL: &str = "travel";
    /// Opts the example out of global time; presence alone is what counts
    pub const SKIP_GLOBAL_TIME: &str = "skip_global_time";
}

/// A time computation deferred until interpretation, evaluated against the
/// example's subject exactly once per run
#[derive(Clone)]
pub struct DeferredTime(Arc<dyn Fn(&dyn Any) -> TimeValue + Send + Sync>);

impl DeferredTime {
    pub fn new(compute: impl Fn(&dyn Any) -> TimeValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(compute))
    }

    pub fn evaluate(&self, subject: &dyn Any) -> TimeValue {
        (self.0)(subject)
    }
}

impl fmt::Debug for DeferredTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeferredTime(..)")
    }
}

/// A declared time: either concrete or deferred
#[derive(Debug, Clone, From)]
pub enum TimeSpec {
    Value(TimeValue),
    Deferred(DeferredTime),
}

/// A metadata value as supplied by the host runner
#[derive(Debug, Clone, From)]
pub enum MetadataValue {
    Time(TimeSpec),
    Flag(bool),
}

impl From<TimeValue> for MetadataValue {
    fn from(value: TimeValue) -> Self {
        Self::Time(TimeSpec::Value(value))
    }
}

impl From<DeferredTime> for MetadataValue {
    fn from(deferred: DeferredTime) -> Self {
        Self::Time(TimeSpec::Deferred(deferred))
    }
}

/// The metadata an example declares, keyed by name
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    entries: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style insert for adapter construction
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_freeze(self, time: impl Into<MetadataValue>) -> Self {
        self.with(keys::FREEZE, time)
    }

    pub fn with_travel(self, time: impl Into<MetadataValue>) -> Self {
        self.with(keys::TRAVEL, time)
    }

    pub fn with_skip_global_time(self) -> Self {
        self.with(keys::SKIP_GLOBAL_TIME, true)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
