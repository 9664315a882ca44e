//! Diagnostic sinks receiving the final argument list.

use tracing::debug;

use crate::arguments::Arguments;

/// Receives every argument list produced by an
/// [`ArgumentSerializer`](crate::ArgumentSerializer).
///
/// Sinks observe the output only; they cannot alter it. Any
/// `Fn(&Arguments)` closure is a sink.
pub trait DiagnosticSink {
    /// Called once per successful serialization.
    fn record(&self, arguments: &Arguments);
}

/// Emits the argument list as a `debug` event on the `compiler_args` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, arguments: &Arguments) {
        debug!(
            target: "compiler_args",
            count = arguments.len(),
            "compilation arguments:\n{}",
            arguments.diagnostic()
        );
    }
}

/// Discards argument lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _arguments: &Arguments) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Arguments),
{
    fn record(&self, arguments: &Arguments) {
        self(arguments);
    }
}
