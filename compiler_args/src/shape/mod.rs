//! Compile-time classification of property values.
//!
//! Every property value is converted into a [`Shape`] through [`ToShape`].
//! The trait impls encode the classification priority: derived
//! configurations become [`Shape::Nested`], derived records become
//! [`Shape::Records`], sequences become either records or a plain list
//! depending on their element type ([`ShapeElement`]), and everything else
//! with a canonical text form becomes [`Shape::Scalar`].

use std::sync::Arc;

use crate::schema::{ArgumentRecord, Configuration};

mod fragment;
mod scalar;

pub use fragment::{EntryValue, Fragment, ToFragment};
pub use scalar::ScalarText;

/// Classified value of a configuration property.
pub enum Shape<'a> {
    /// No value; the property is skipped.
    Absent,
    /// A nested option group flattened with dotted flag names.
    Nested(&'a dyn Configuration),
    /// One or more structured arguments, each rendered as its own flag.
    Records(Vec<&'a dyn ArgumentRecord>),
    /// Plain values rendered with the additive `=`/`+=` protocol.
    List(Vec<String>),
    /// A single value rendered as `name=value`.
    Scalar(String),
}

impl Shape<'_> {
    /// Short label for the variant, used in trace output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Nested(_) => "nested",
            Self::Records(_) => "records",
            Self::List(_) => "list",
            Self::Scalar(_) => "scalar",
        }
    }
}

impl std::fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Nested(config) => f.debug_tuple("Nested").field(&config.type_name()).finish(),
            Self::Records(records) => f
                .debug_tuple("Records")
                .field(&records.iter().map(|r| r.type_name()).collect::<Vec<_>>())
                .finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Scalar(text) => f.debug_tuple("Scalar").field(text).finish(),
        }
    }
}

/// Conversion of a property value into its [`Shape`].
///
/// Maps only have a rendering as argument record sub-fields
/// ([`ToFragment`]), so a map-typed configuration property is rejected at
/// compile time:
///
/// ```compile_fail,E0277
/// use std::collections::BTreeMap;
///
/// use compiler_args::Configuration;
///
/// #[derive(Configuration)]
/// struct Options {
///     defines: BTreeMap<String, String>,
/// }
/// ```
pub trait ToShape {
    /// Classifies `self`.
    fn to_shape(&self) -> Shape<'_>;
}

/// Element types allowed inside a sequence-valued property.
///
/// Scalars collect into [`Shape::List`]; derived argument records collect
/// into [`Shape::Records`].
pub trait ShapeElement: Sized {
    /// Classifies a sequence of elements.
    fn sequence_shape(items: &[Self]) -> Shape<'_>;
}

impl<T: ToShape> ToShape for Option<T> {
    fn to_shape(&self) -> Shape<'_> {
        self.as_ref().map_or(Shape::Absent, |value| value.to_shape())
    }
}

impl<T: ToShape + ?Sized> ToShape for &T {
    fn to_shape(&self) -> Shape<'_> {
        (**self).to_shape()
    }
}

impl<T: ToShape + ?Sized> ToShape for Box<T> {
    fn to_shape(&self) -> Shape<'_> {
        (**self).to_shape()
    }
}

impl<T: ToShape + ?Sized> ToShape for Arc<T> {
    fn to_shape(&self) -> Shape<'_> {
        (**self).to_shape()
    }
}

impl<T: ShapeElement> ToShape for Vec<T> {
    fn to_shape(&self) -> Shape<'_> {
        T::sequence_shape(self)
    }
}

impl<T: ShapeElement> ToShape for [T] {
    fn to_shape(&self) -> Shape<'_> {
        T::sequence_shape(self)
    }
}

impl<T: ShapeElement, const N: usize> ToShape for [T; N] {
    fn to_shape(&self) -> Shape<'_> {
        T::sequence_shape(self)
    }
}
