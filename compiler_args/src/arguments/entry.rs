//! A single flag and its trailing values.

/// One flag group produced by the introspector.
///
/// `values` is `None` for flags that carry their value inline
/// (`name=value`, `name+=value`, `name=`) and `Some` for argument records,
/// whose sub-field tokens follow the flag as separate arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentEntry {
    flag: String,
    values: Option<Vec<String>>,
}

impl ArgumentEntry {
    /// A flag with no trailing values.
    pub fn flag(flag: impl Into<String>) -> Self {
        Self {
            flag: flag.into(),
            values: None,
        }
    }

    /// A flag followed by bare value tokens.
    pub fn with_values<I>(flag: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            flag: flag.into(),
            values: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Flag name without the marker.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.flag
    }

    /// Trailing value tokens, if the entry carries any.
    #[must_use]
    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    /// Splits the entry into its flag and values.
    #[must_use]
    pub fn into_parts(self) -> (String, Option<Vec<String>>) {
        (self.flag, self.values)
    }

    /// Prefixes the flag with a nested group name.
    pub(crate) fn nest_under(&mut self, group: &str) {
        self.flag = format!("{group}.{}", self.flag);
    }

    /// Appends a trailing value, turning a bare flag into a valued one.
    pub(crate) fn push_value(&mut self, value: String) {
        self.values.get_or_insert_with(Vec::new).push(value);
    }
}
