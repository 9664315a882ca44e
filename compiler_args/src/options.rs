//! Serializer settings.

use serde::{Deserialize, Serialize};

use crate::naming::{DEFAULT_ACCESSOR_PREFIX, DEFAULT_NESTED_SUFFIX, Naming};

/// Flag marker used when none is configured.
pub const DEFAULT_MARKER: char = '-';

/// Settings controlling flag syntax and naming.
///
/// Deserializes from kebab-case keys with every field optional, so host
/// applications can embed it in their own configuration files:
///
/// ```
/// use compiler_args::SerializerOptions;
///
/// let options: SerializerOptions =
///     serde_json::from_str(r#"{ "nested-suffix": "-options" }"#)?;
/// assert_eq!(options.marker, '-');
/// assert_eq!(options.nested_suffix, "-options");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SerializerOptions {
    /// Character introducing every flag token.
    pub marker: char,
    /// Accessor prefix removed from property names; `None` keeps names whole.
    pub accessor_prefix: Option<String>,
    /// Suffix removed from nested group names, matched by content.
    pub nested_suffix: String,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            accessor_prefix: Some(DEFAULT_ACCESSOR_PREFIX.to_owned()),
            nested_suffix: DEFAULT_NESTED_SUFFIX.to_owned(),
        }
    }
}

impl SerializerOptions {
    /// Naming rules borrowed from these options.
    #[must_use]
    pub fn naming(&self) -> Naming<'_> {
        Naming::new(self.accessor_prefix.as_deref(), &self.nested_suffix)
    }
}
