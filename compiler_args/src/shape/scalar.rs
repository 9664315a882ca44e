//! Canonical text form of scalar values.

use std::path::{Path, PathBuf};

use camino::{Utf8Path, Utf8PathBuf};

use super::{EntryValue, Fragment, Shape, ShapeElement, ToFragment, ToShape};

/// Canonical, locale-independent text form of a scalar argument value.
///
/// Numbers and booleans use their `Display` output, strings are passed
/// through verbatim, and paths render as written (lossily for non-UTF-8
/// `std::path` values).
pub trait ScalarText {
    /// Renders the value as a single argument token.
    fn to_arg_text(&self) -> String;
}

impl<T: ScalarText + ?Sized> ScalarText for &T {
    fn to_arg_text(&self) -> String {
        (**self).to_arg_text()
    }
}

macro_rules! display_text {
    ($($ty:ty),* $(,)?) => {$(
        impl ScalarText for $ty {
            fn to_arg_text(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

display_text!(
    str, String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

impl ScalarText for Path {
    fn to_arg_text(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl ScalarText for PathBuf {
    fn to_arg_text(&self) -> String {
        self.as_path().to_arg_text()
    }
}

impl ScalarText for Utf8Path {
    fn to_arg_text(&self) -> String {
        self.as_str().to_owned()
    }
}

impl ScalarText for Utf8PathBuf {
    fn to_arg_text(&self) -> String {
        self.as_str().to_owned()
    }
}

/// Shape and fragment conversions shared by every scalar type.
macro_rules! scalar_shapes {
    (@base $($ty:ty),* $(,)?) => {$(
        impl ToShape for $ty {
            fn to_shape(&self) -> Shape<'_> {
                Shape::Scalar(self.to_arg_text())
            }
        }

        impl ToFragment for $ty {
            fn to_fragment(&self) -> Fragment {
                Fragment::Single(self.to_arg_text())
            }
        }
    )*};
    ($($ty:ty),* $(,)?) => {$(
        scalar_shapes!(@base $ty);

        impl ShapeElement for $ty {
            fn sequence_shape(items: &[Self]) -> Shape<'_> {
                Shape::List(items.iter().map(ScalarText::to_arg_text).collect())
            }
        }

        impl EntryValue for $ty {
            fn entry_text(&self) -> Option<String> {
                Some(self.to_arg_text())
            }
        }
    )*};
}

scalar_shapes!(@base str, Path, Utf8Path);
scalar_shapes!(
    String,
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    PathBuf,
    Utf8PathBuf,
);

impl<T: ScalarText + ?Sized> ShapeElement for &T {
    fn sequence_shape(items: &[Self]) -> Shape<'_> {
        Shape::List(items.iter().map(ScalarText::to_arg_text).collect())
    }
}

impl<T: ScalarText + ?Sized> EntryValue for &T {
    fn entry_text(&self) -> Option<String> {
        Some(self.to_arg_text())
    }
}
