//! Recursive walk over a configuration tree.
//!
//! Properties are visited in schema order. Each property is read once,
//! classified by its [`Shape`], and rendered into zero or more
//! [`ArgumentEntry`] values. Nested configurations are walked in place and
//! their entries are renamed under the parent's group prefix, so a child's
//! flags occupy the position of the property that holds it.

use tracing::trace;

use crate::arguments::ArgumentEntry;
use crate::error::{ArgsError, ArgsResult};
use crate::naming::Naming;
use crate::schema::{Configuration, Property};
use crate::shape::Shape;

mod path;
mod record;

use path::WalkPath;

/// Walks configurations with a fixed set of naming rules.
pub(crate) struct Introspector<'n> {
    naming: Naming<'n>,
}

impl<'n> Introspector<'n> {
    pub(crate) const fn new(naming: Naming<'n>) -> Self {
        Self { naming }
    }

    /// Collects the flag groups for `config`.
    ///
    /// Fails on the first schema violation, accessor failure or cycle.
    pub(crate) fn entries<C>(&self, config: &C) -> ArgsResult<Vec<ArgumentEntry>>
    where
        C: Configuration + ?Sized,
    {
        let mut path = WalkPath::default();
        let mut out = Vec::new();
        self.visit(config, &mut path, &mut out)?;
        Ok(out)
    }

    fn visit<C>(
        &self,
        config: &C,
        path: &mut WalkPath,
        out: &mut Vec<ArgumentEntry>,
    ) -> ArgsResult<()>
    where
        C: Configuration + ?Sized,
    {
        let type_name = config.type_name();
        path.enter(std::ptr::from_ref(config).cast::<()>(), type_name)?;
        for property in config.schema() {
            path.push(property.name());
            let shape = config
                .read(property.name())
                .map_err(|err| ArgsError::from_access(path.render(), type_name, err))?;
            trace!(property = %path.render(), kind = shape.kind(), "classified property");
            self.render(property, shape, path, out)?;
            path.pop();
        }
        path.leave();
        Ok(())
    }

    fn render(
        &self,
        property: &Property,
        shape: Shape<'_>,
        path: &mut WalkPath,
        out: &mut Vec<ArgumentEntry>,
    ) -> ArgsResult<()> {
        match shape {
            Shape::Absent => {}
            Shape::Nested(child) => {
                let group = self.naming.property_group(property);
                let start = out.len();
                self.visit(child, path, out)?;
                for entry in out.iter_mut().skip(start) {
                    entry.nest_under(&group);
                }
            }
            Shape::Records(records) => {
                let flag = self.naming.property_flag(property);
                for (index, record) in records.into_iter().enumerate() {
                    let values = record::tokens(record, path, index)?;
                    out.push(ArgumentEntry::with_values(flag.clone(), values));
                }
            }
            Shape::List(items) => {
                let flag = self.naming.property_flag(property);
                if items.is_empty() {
                    out.push(ArgumentEntry::flag(format!("{flag}=")));
                }
                let mut assign = "=";
                for item in items {
                    out.push(ArgumentEntry::flag(format!("{flag}{assign}{item}")));
                    assign = "+=";
                }
            }
            Shape::Scalar(text) => {
                let flag = self.naming.property_flag(property);
                out.push(ArgumentEntry::flag(format!("{flag}={text}")));
            }
        }
        Ok(())
    }
}
