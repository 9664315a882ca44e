//! Flag groups and the assembled argument vector.

use std::fmt;

mod entry;

pub use entry::ArgumentEntry;

/// Ordered argument tokens ready to hand to a process launcher.
///
/// Tokens beginning with the marker character introduce a flag; any bare
/// tokens that follow belong to that flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    tokens: Vec<String>,
    marker: char,
}

impl Arguments {
    /// Assembles tokens from flag groups.
    ///
    /// Each entry contributes `<marker><flag>` followed by its values, in
    /// order. Nothing is reordered, merged, or deduplicated.
    ///
    /// ```
    /// use compiler_args::{ArgumentEntry, Arguments};
    ///
    /// let args = Arguments::from_entries(
    ///     [
    ///         ArgumentEntry::flag("debug=true"),
    ///         ArgumentEntry::with_values("namespace", ["http://x", "m.xml"]),
    ///     ],
    ///     '-',
    /// );
    /// assert_eq!(args.as_slice(), ["-debug=true", "-namespace", "http://x", "m.xml"]);
    /// ```
    pub fn from_entries<I>(entries: I, marker: char) -> Self
    where
        I: IntoIterator<Item = ArgumentEntry>,
    {
        let mut tokens = Vec::new();
        for entry in entries {
            let (flag, values) = entry.into_parts();
            tokens.push(format!("{marker}{flag}"));
            tokens.extend(values.into_iter().flatten());
        }
        Self { tokens, marker }
    }

    /// Tokens in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    /// Iterates over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Marker character introducing flags.
    #[must_use]
    pub const fn marker(&self) -> char {
        self.marker
    }

    /// Consumes the list, returning the raw tokens.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }

    /// Splits the tokens back into flag groups at marker boundaries.
    ///
    /// Flags without following bare tokens yield `None` values, so a record
    /// whose sub-fields were all absent comes back as a bare flag. A value
    /// token that itself begins with the marker is indistinguishable from a
    /// flag and starts a new group. Bare tokens before the first flag are
    /// grouped under an empty flag name.
    #[must_use]
    pub fn groups(&self) -> Vec<ArgumentEntry> {
        let mut groups: Vec<ArgumentEntry> = Vec::new();
        for token in &self.tokens {
            if let Some(flag) = token.strip_prefix(self.marker) {
                groups.push(ArgumentEntry::flag(flag));
                continue;
            }
            match groups.last_mut() {
                Some(group) => group.push_value(token.clone()),
                None => groups.push(ArgumentEntry::with_values("", [token.clone()])),
            }
        }
        groups
    }

    /// Multi-line rendering for logs: one flag and its values per line.
    #[must_use]
    pub const fn diagnostic(&self) -> Diagnostic<'_> {
        Diagnostic { arguments: self }
    }
}

impl AsRef<[String]> for Arguments {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

impl From<Arguments> for Vec<String> {
    fn from(arguments: Arguments) -> Self {
        arguments.tokens
    }
}

impl IntoIterator for Arguments {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Display adapter returned by [`Arguments::diagnostic`].
///
/// A line break precedes every flag token after the first; bare tokens are
/// separated from the preceding token by a single space.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    arguments: &'a Arguments,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.arguments.tokens.iter().enumerate() {
            if index > 0 {
                let separator = if token.starts_with(self.arguments.marker) {
                    '\n'
                } else {
                    ' '
                };
                fmt::Write::write_char(f, separator)?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}
