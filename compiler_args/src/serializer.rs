//! Entry point tying the introspector, assembly, and diagnostics together.

use crate::arguments::{ArgumentEntry, Arguments};
use crate::error::ArgsResult;
use crate::introspect::Introspector;
use crate::options::SerializerOptions;
use crate::schema::Configuration;
use crate::sink::{DiagnosticSink, TracingSink};

/// Converts configurations into argument lists.
///
/// The serializer holds no per-call state: the same instance can be shared
/// across threads and reused for any number of configurations, and repeated
/// calls with the same input produce identical output.
///
/// ```
/// use compiler_args::{ArgumentSerializer, Configuration, SerializerOptions};
///
/// #[derive(Configuration)]
/// struct Options {
///     output: String,
/// }
///
/// let serializer = ArgumentSerializer::new().with_options(SerializerOptions {
///     marker: '+',
///     ..SerializerOptions::default()
/// });
/// let args = serializer.arguments(Some(&Options { output: "app.swf".to_owned() }))?;
/// assert_eq!(args.as_slice(), ["+output=app.swf"]);
/// assert!(serializer.arguments(None::<&Options>)?.is_empty());
/// # Ok::<(), compiler_args::ArgsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgumentSerializer<S = TracingSink> {
    options: SerializerOptions,
    sink: S,
}

impl ArgumentSerializer {
    /// Serializer with default options, logging through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: DiagnosticSink> ArgumentSerializer<S> {
    /// Replaces the options.
    #[must_use]
    pub fn with_options(self, options: SerializerOptions) -> Self {
        Self {
            options,
            sink: self.sink,
        }
    }

    /// Replaces the diagnostic sink.
    #[must_use]
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> ArgumentSerializer<T> {
        ArgumentSerializer {
            options: self.options,
            sink,
        }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &SerializerOptions {
        &self.options
    }

    /// Collects `(flag, values)` groups for `config` without assembling
    /// tokens. A missing configuration yields no groups.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError`](crate::ArgsError) if a schema names an unknown
    /// property or sub-field, an accessor fails, or a configuration contains
    /// itself. No partial result is returned.
    pub fn entries<C>(&self, config: Option<&C>) -> ArgsResult<Vec<ArgumentEntry>>
    where
        C: Configuration + ?Sized,
    {
        let Some(config) = config else {
            return Ok(Vec::new());
        };
        Introspector::new(self.options.naming()).entries(config)
    }

    /// Serializes `config` into argument tokens and reports them to the sink.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`entries`](Self::entries); the
    /// sink is not called on failure.
    pub fn arguments<C>(&self, config: Option<&C>) -> ArgsResult<Arguments>
    where
        C: Configuration + ?Sized,
    {
        let entries = self.entries(config)?;
        let arguments = Arguments::from_entries(entries, self.options.marker);
        self.sink.record(&arguments);
        Ok(arguments)
    }
}

/// Serializes `config` with default options and `tracing` diagnostics.
///
/// # Errors
///
/// See [`ArgumentSerializer::arguments`].
pub fn to_arguments<C>(config: &C) -> ArgsResult<Arguments>
where
    C: Configuration + ?Sized,
{
    ArgumentSerializer::new().arguments(Some(config))
}
