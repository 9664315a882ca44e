//! Values of argument record sub-fields.

use std::collections::BTreeMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;

use super::ScalarText;

/// Rendered value of one argument record sub-field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// No value; the sub-field contributes nothing.
    Absent,
    /// A single token.
    Single(String),
    /// One token per element.
    Many(Vec<String>),
    /// Map entries, each rendered as its key followed by its value when
    /// present.
    Entries(Vec<(String, Option<String>)>),
}

impl Fragment {
    /// Appends the fragment's tokens to `tokens`.
    pub fn append_to(self, tokens: &mut Vec<String>) {
        match self {
            Self::Absent => {}
            Self::Single(text) => tokens.push(text),
            Self::Many(items) => tokens.extend(items),
            Self::Entries(entries) => {
                for (key, value) in entries {
                    tokens.push(key);
                    tokens.extend(value);
                }
            }
        }
    }
}

/// Conversion of a sub-field value into a [`Fragment`].
pub trait ToFragment {
    /// Renders `self` as a record fragment.
    fn to_fragment(&self) -> Fragment;
}

/// Value side of a map entry inside a record sub-field.
///
/// `None` renders the key on its own.
pub trait EntryValue {
    /// Text of the value, if any.
    fn entry_text(&self) -> Option<String>;
}

impl<T: ScalarText> EntryValue for Option<T> {
    fn entry_text(&self) -> Option<String> {
        self.as_ref().map(ScalarText::to_arg_text)
    }
}

impl<T: ToFragment + ?Sized> ToFragment for &T {
    fn to_fragment(&self) -> Fragment {
        (**self).to_fragment()
    }
}

impl<T: ToFragment> ToFragment for Option<T> {
    fn to_fragment(&self) -> Fragment {
        self.as_ref().map_or(Fragment::Absent, |value| value.to_fragment())
    }
}

impl<T: ToFragment + ?Sized> ToFragment for Box<T> {
    fn to_fragment(&self) -> Fragment {
        (**self).to_fragment()
    }
}

impl<T: ScalarText> ToFragment for Vec<T> {
    fn to_fragment(&self) -> Fragment {
        self.as_slice().to_fragment()
    }
}

impl<T: ScalarText> ToFragment for [T] {
    fn to_fragment(&self) -> Fragment {
        Fragment::Many(self.iter().map(ScalarText::to_arg_text).collect())
    }
}

impl<T: ScalarText, const N: usize> ToFragment for [T; N] {
    fn to_fragment(&self) -> Fragment {
        self.as_slice().to_fragment()
    }
}

fn entries<'a, K, V, I>(iter: I) -> Fragment
where
    K: ScalarText + 'a,
    V: EntryValue + 'a,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    Fragment::Entries(
        iter.map(|(key, value)| (key.to_arg_text(), value.entry_text()))
            .collect(),
    )
}

impl<K: ScalarText, V: EntryValue> ToFragment for BTreeMap<K, V> {
    fn to_fragment(&self) -> Fragment {
        entries(self.iter())
    }
}

impl<K: ScalarText, V: EntryValue, S: BuildHasher> ToFragment for IndexMap<K, V, S> {
    fn to_fragment(&self) -> Fragment {
        entries(self.iter())
    }
}
