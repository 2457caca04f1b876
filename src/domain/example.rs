//! The consumed test-example protocol
//!
//! The core never owns examples; it borrows them from the host runner for one
//! invocation. Adapters implement [`Example`] over whatever the host exposes,
//! by composition rather than by wrapping the host type itself.

use std::any::Any;

use super::metadata::Metadata;

/// Outcome of running a test body. Failures carry whatever error the body
/// raised; the runners propagate them unchanged.
pub type ExampleResult = anyhow::Result<()>;

/// Read access to one test example plus the ability to run its body
pub trait Example {
    /// The metadata the example declares
    fn metadata(&self) -> &Metadata;

    /// Executes the example body once
    fn run(&mut self) -> ExampleResult;

    /// The receiver that deferred time computations are evaluated against
    fn subject(&self) -> &dyn Any;
}
