//! Descent bookkeeping: the property route and the ancestor chain.

use crate::error::{ArgsError, ArgsResult};

/// Identity of a configuration on the current descent path.
///
/// The address alone is ambiguous because a struct and its first field
/// share one, so the fully qualified type name is part of the identity.
type Identity = (*const (), &'static str);

#[derive(Default)]
pub(super) struct WalkPath {
    segments: Vec<String>,
    ancestors: Vec<Identity>,
}

impl WalkPath {
    /// Registers a configuration as the innermost ancestor.
    ///
    /// Fails if the same configuration is already being walked.
    pub(super) fn enter(&mut self, address: *const (), type_name: &'static str) -> ArgsResult<()> {
        let identity = (address, type_name);
        if self.ancestors.contains(&identity) {
            return Err(ArgsError::CyclicConfiguration {
                path: self.render(),
                type_name,
            });
        }
        self.ancestors.push(identity);
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.ancestors.pop();
    }

    pub(super) fn push(&mut self, segment: &str) {
        self.segments.push(segment.to_owned());
    }

    pub(super) fn pop(&mut self) {
        self.segments.pop();
    }

    /// Dotted route to the current property, e.g. `compiler.debug`.
    pub(super) fn render(&self) -> String {
        self.segments.join(".")
    }

    /// Route to a record sub-field, e.g. `compiler.namespace[1].uri`.
    pub(super) fn render_field(&self, index: usize, field: &str) -> String {
        format!("{}[{index}].{field}", self.render())
    }
}
