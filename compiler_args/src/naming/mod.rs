//! Property name to flag name conversion.
//!
//! Flag names are the kebab-case form of the property name, with an optional
//! accessor prefix removed first. Names of nested configuration groups also
//! lose the conventional `-configuration` suffix so that a property called
//! `compiler_configuration` (or `getCompilerConfiguration`) contributes the
//! `compiler.` prefix to its children's flags.

use std::borrow::Cow;

use heck::ToKebabCase;

use crate::schema::Property;

/// Accessor prefix stripped from property names by default.
pub const DEFAULT_ACCESSOR_PREFIX: &str = "get";

/// Suffix stripped from nested group names by default.
pub const DEFAULT_NESTED_SUFFIX: &str = "-configuration";

/// Naming rules applied while rendering flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Naming<'a> {
    accessor_prefix: Option<&'a str>,
    nested_suffix: &'a str,
}

impl Default for Naming<'static> {
    fn default() -> Self {
        Self::new(Some(DEFAULT_ACCESSOR_PREFIX), DEFAULT_NESTED_SUFFIX)
    }
}

impl<'a> Naming<'a> {
    /// Creates naming rules with the given accessor prefix and group suffix.
    ///
    /// The suffix is matched against the kebab-case group name, so it should
    /// itself be kebab-case (e.g. `-configuration`). An empty suffix disables
    /// stripping.
    #[must_use]
    pub const fn new(accessor_prefix: Option<&'a str>, nested_suffix: &'a str) -> Self {
        Self {
            accessor_prefix,
            nested_suffix,
        }
    }

    /// Converts a property name into its flag name.
    ///
    /// ```
    /// use compiler_args::Naming;
    ///
    /// let naming = Naming::default();
    /// assert_eq!(naming.flag_name("fooBar"), "foo-bar");
    /// assert_eq!(naming.flag_name("getXMLParser"), "xml-parser");
    /// assert_eq!(naming.flag_name("source_path"), "source-path");
    /// ```
    #[must_use]
    pub fn flag_name(&self, property: &str) -> String {
        split_digit_upper(self.strip_accessor_prefix(property)).to_kebab_case()
    }

    /// Converts a nested configuration property name into its group prefix.
    ///
    /// The configured suffix is removed by content, never by length; names
    /// that do not end with it, or consist only of it, are left whole.
    ///
    /// ```
    /// use compiler_args::Naming;
    ///
    /// let naming = Naming::default();
    /// assert_eq!(naming.group_name("compilerOptionsConfiguration"), "compiler-options");
    /// assert_eq!(naming.group_name("metadata"), "metadata");
    /// ```
    #[must_use]
    pub fn group_name(&self, property: &str) -> String {
        let flag = self.flag_name(property);
        match flag.strip_suffix(self.nested_suffix) {
            Some(stem) if !stem.is_empty() && !self.nested_suffix.is_empty() => stem.to_owned(),
            _ => flag,
        }
    }

    /// Flag name for a scalar, list or record property.
    #[must_use]
    pub fn property_flag(&self, property: &Property) -> String {
        property
            .flag()
            .map_or_else(|| self.flag_name(property.name()), str::to_owned)
    }

    /// Group prefix for a nested configuration property.
    #[must_use]
    pub fn property_group(&self, property: &Property) -> String {
        property
            .flag()
            .map_or_else(|| self.group_name(property.name()), str::to_owned)
    }

    /// Removes the accessor prefix when it is followed by a word boundary.
    ///
    /// `getDebug` and `get_debug` lose the prefix; `getter` and `target` do
    /// not.
    fn strip_accessor_prefix<'n>(&self, name: &'n str) -> &'n str {
        let Some(prefix) = self.accessor_prefix.filter(|p| !p.is_empty()) else {
            return name;
        };
        let Some(rest) = name.strip_prefix(prefix) else {
            return name;
        };
        match rest.chars().next() {
            Some(c) if c.is_ascii_uppercase() => rest,
            Some('_') => match rest.trim_start_matches('_') {
                "" => name,
                trimmed => trimmed,
            },
            _ => name,
        }
    }
}

/// Inserts a `_` boundary wherever a digit is followed by an uppercase
/// letter.
///
/// `heck` only splits before an uppercase letter that follows a lowercase
/// one, so `X11Y` would otherwise stay a single word.
fn split_digit_upper(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars().peekable();
    let mut out = String::with_capacity(name.len() + 1);
    let mut changed = false;
    while let Some(c) = chars.next() {
        out.push(c);
        if c.is_ascii_digit() && chars.peek().is_some_and(char::is_ascii_uppercase) {
            out.push('_');
            changed = true;
        }
    }
    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(name)
    }
}
