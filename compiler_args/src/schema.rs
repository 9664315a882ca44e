//! Capability traits describing configuration types.
//!
//! The introspector never inspects values at runtime to discover their
//! structure. Instead each configuration type publishes a static table of
//! its properties and each argument record publishes the order of its
//! sub-fields; both are normally generated by the derive macros.

use crate::error::AccessError;
use crate::shape::{Fragment, Shape};

/// Static description of one configuration property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property {
    name: &'static str,
    flag: Option<&'static str>,
}

impl Property {
    /// Describes a property whose flag name is derived from `name`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name, flag: None }
    }

    /// Uses `flag` verbatim instead of deriving the flag from the name.
    #[must_use]
    pub const fn with_flag(self, flag: &'static str) -> Self {
        Self {
            name: self.name,
            flag: Some(flag),
        }
    }

    /// Name passed to [`Configuration::read`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Explicit flag override, if any.
    #[must_use]
    pub const fn flag(&self) -> Option<&'static str> {
        self.flag
    }
}

/// A group of compiler options.
///
/// Implementations list their properties in declaration order through
/// [`schema`](Self::schema) and classify each property's current value
/// through [`read`](Self::read). Every name in the schema must be readable;
/// a name the accessor rejects is reported as a schema violation.
///
/// ```
/// use compiler_args::{AccessError, Configuration, Property, Shape, ToShape};
///
/// struct Warnings {
///     level: u8,
/// }
///
/// impl Configuration for Warnings {
///     fn schema(&self) -> &'static [Property] {
///         const SCHEMA: &[Property] = &[Property::new("level")];
///         SCHEMA
///     }
///
///     fn read(&self, property: &str) -> Result<Shape<'_>, AccessError> {
///         match property {
///             "level" => Ok(self.level.to_shape()),
///             other => Err(AccessError::unknown(other)),
///         }
///     }
/// }
///
/// let args = compiler_args::to_arguments(&Warnings { level: 2 })?;
/// assert_eq!(args.as_slice(), ["-level=2"]);
/// # Ok::<(), compiler_args::ArgsError>(())
/// ```
pub trait Configuration {
    /// Properties in the order they are rendered.
    fn schema(&self) -> &'static [Property];

    /// Reads and classifies the named property.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Unknown`] for names outside the schema and
    /// [`AccessError::Failed`] when the value cannot be produced.
    fn read(&self, property: &str) -> Result<Shape<'_>, AccessError>;

    /// Fully qualified type name used in diagnostics and cycle detection.
    ///
    /// Together with the object's address this identifies a configuration
    /// on the descent path, so overrides must stay distinct per type,
    /// including per instantiation of a generic type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A structured compiler argument rendered as a flag followed by values.
///
/// [`order`](Self::order) lists the sub-fields to render, independent of
/// their declaration order. Sub-fields not listed are never read.
pub trait ArgumentRecord {
    /// Sub-field names in render order.
    fn order(&self) -> &'static [&'static str];

    /// Reads the named sub-field.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Unknown`] when `order` names a sub-field the
    /// record cannot read and [`AccessError::Failed`] when the value cannot
    /// be produced.
    fn field(&self, name: &str) -> Result<Fragment, AccessError>;

    /// Type name used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
