//! Errors reported by property and sub-field accessors.

use thiserror::Error;

/// Failure returned by [`Configuration::read`](crate::Configuration::read)
/// and [`ArgumentRecord::field`](crate::ArgumentRecord::field).
///
/// Derived implementations only ever produce [`AccessError::Unknown`], and
/// only when asked for a name outside their own schema. Hand-written
/// implementations backed by fallible lookups use [`AccessError::Failed`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AccessError {
    /// The accessor has no property or sub-field with this name.
    #[error("no accessor named '{name}'")]
    Unknown {
        /// Name that was requested.
        name: String,
    },

    /// The accessor exists but could not produce a value.
    #[error(transparent)]
    Failed(Box<dyn std::error::Error + Send + Sync>),
}

impl AccessError {
    /// Builds an [`AccessError::Unknown`] for `name`.
    #[must_use]
    pub fn unknown(name: &str) -> Self {
        Self::Unknown {
            name: name.to_owned(),
        }
    }

    /// Wraps an accessor failure.
    pub fn failed<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Failed(source.into())
    }
}
