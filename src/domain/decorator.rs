//! Metadata interpretation for one example
//!
//! Resolves an example's declared intent (an explicit freeze/travel
//! directive, or an applicable global time) into a single effective
//! operation and time value.

use tracing::warn;

use super::example::Example;
use super::metadata::{keys, MetadataValue, TimeSpec};
use super::time_value::{TimeOp, TimeValue};
use crate::config::GlobalTime;
use crate::error::{Error, Result};

/// Read-only interpreter over a borrowed example and the process-wide global
/// time configuration
pub struct ExampleDecorator<'a> {
    example: &'a dyn Example,
    global: &'a GlobalTime,
}

impl<'a> ExampleDecorator<'a> {
    pub fn new(example: &'a dyn Example, global: &'a GlobalTime) -> Self {
        Self { example, global }
    }

    /// Whether any time directive applies to this example
    pub fn applies(&self) -> bool {
        self.local_directive().is_some() || self.global_applies()
    }

    /// The locally declared operation, if any. When both `freeze` and
    /// `travel` are declared, `freeze` wins; that precedence is documented
    /// behavior, not an error.
    pub fn local_directive(&self) -> Option<TimeOp> {
        let metadata = self.example.metadata();
        if metadata.contains(keys::FREEZE) {
            Some(TimeOp::Freeze)
        } else if metadata.contains(keys::TRAVEL) {
            Some(TimeOp::Travel)
        } else {
            None
        }
    }

    /// Whether the global time applies: configured, and the example has not
    /// declared the opt-out key. The opt-out is presence-only; its value is
    /// ignored, even `false`.
    pub fn global_applies(&self) -> bool {
        self.global.configured() && !self.example.metadata().contains(keys::SKIP_GLOBAL_TIME)
    }

    /// The effective operation: local if declared, else travel when the
    /// global time applies
    pub fn operation(&self) -> Option<TimeOp> {
        self.local_directive()
            .or_else(|| self.global_applies().then_some(TimeOp::Travel))
    }

    /// The effective time value, evaluating a deferred computation against
    /// the example's subject exactly once
    pub fn time(&self) -> Result<Option<TimeValue>> {
        if let Some(op) = self.local_directive() {
            return self.local_time(op).map(Some);
        }
        if self.global_applies() {
            return Ok(Some(TimeValue::Timestamp(self.global.global_time()?)));
        }
        Ok(None)
    }

    /// The resolved `(operation, time)` pair, or `None` when the example runs
    /// under real time
    pub fn effective(&self) -> Result<Option<(TimeOp, TimeValue)>> {
        let metadata = self.example.metadata();
        if metadata.contains(keys::FREEZE) && metadata.contains(keys::TRAVEL) {
            warn!("example declares both `freeze` and `travel`; `freeze` takes precedence");
        }
        match self.operation() {
            None => Ok(None),
            Some(op) => Ok(self.time()?.map(|time| (op, time))),
        }
    }

    fn local_time(&self, op: TimeOp) -> Result<TimeValue> {
        let key = op.metadata_key();
        match self.example.metadata().get(key) {
            Some(MetadataValue::Time(TimeSpec::Value(value))) => Ok(value.clone()),
            Some(MetadataValue::Time(TimeSpec::Deferred(deferred))) => {
                Ok(deferred.evaluate(self.example.subject()))
            }
            Some(MetadataValue::Flag(_)) | None => Err(Error::InvalidDirective { key }),
        }
    }
}
