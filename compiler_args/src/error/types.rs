//! Primary error enum for argument serialization.

use thiserror::Error;

use super::AccessError;

/// Result alias used throughout the crate.
pub type ArgsResult<T> = Result<T, ArgsError>;

/// Errors that abort argument serialization.
///
/// Every variant indicates a defect in the configuration types rather than a
/// transient condition, so serialization stops at the first error and never
/// returns a partial argument list. `path` is the dotted route from the root
/// configuration to the offending property, e.g.
/// `compiler.namespaces[1].manifest`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArgsError {
    /// A schema names a property or sub-field its accessor does not know.
    #[error("schema violation at '{path}': {message}")]
    SchemaViolation {
        /// Route to the offending property or sub-field.
        path: String,
        /// Human-readable description of the mismatch.
        message: String,
    },

    /// An accessor failed while reading a value.
    #[error("failed to read '{path}': {source}")]
    Introspection {
        /// Route to the property or sub-field being read.
        path: String,
        /// Failure reported by the accessor.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration appeared again inside its own subtree.
    #[error("cyclic configuration at '{path}': `{type_name}` is already being serialized")]
    CyclicConfiguration {
        /// Route at which the repeated configuration was reached.
        path: String,
        /// Type name of the repeated configuration.
        type_name: &'static str,
    },
}

impl ArgsError {
    /// Attaches the property route to an accessor failure.
    ///
    /// `owner` names the type whose accessor failed; it only appears in the
    /// schema-violation message.
    pub(crate) fn from_access(path: String, owner: &str, err: AccessError) -> Self {
        match err {
            AccessError::Unknown { name } => Self::SchemaViolation {
                path,
                message: format!("`{owner}` declares '{name}' but has no accessor for it"),
            },
            AccessError::Failed(source) => Self::Introspection { path, source },
        }
    }

    /// Returns the property route attached to the error.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::SchemaViolation { path, .. }
            | Self::Introspection { path, .. }
            | Self::CyclicConfiguration { path, .. } => path,
        }
    }
}
