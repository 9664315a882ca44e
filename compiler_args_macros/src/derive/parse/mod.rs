//! Attribute parsing for the `compiler_args` derives.
//!
//! Both derives share the `#[compiler_args(...)]` attribute namespace. Keys
//! that are not recognised are rejected so typos surface at compile time
//! instead of silently changing the rendered argument list.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Ident, LitStr};

mod input;
mod literals;

pub(crate) use input::{ParsedField, ParsedInput, parse_input};
use literals::lit_str;

/// Struct-level attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the path used to reach `compiler_args` in generated code.
    pub crate_path: Option<syn::Path>,
    /// Declared sub-field render order, only valid on argument records.
    pub order: Option<Vec<Ident>>,
}

/// Field-level attributes.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
    pub flag: Option<LitStr>,
}

/// Iterate every `#[compiler_args(...)]` attribute and apply a callback.
fn parse_compiler_args<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("compiler_args")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Extracts `#[compiler_args(...)]` metadata applied to a struct.
///
/// Recognises `crate = "path"` and `order(a, b, ...)`. Duplicate entries in
/// `order` are rejected because a record renders each sub-field once.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_compiler_args(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            out.crate_path = Some(s.parse()?);
            Ok(())
        } else if meta.path.is_ident("order") {
            if out.order.is_some() {
                return Err(meta.error("order declared more than once"));
            }
            let mut names: Vec<Ident> = Vec::new();
            meta.parse_nested_meta(|nested| {
                let ident = nested
                    .path
                    .get_ident()
                    .cloned()
                    .ok_or_else(|| nested.error("order entries must be field names"))?;
                if names.iter().any(|seen| *seen == ident) {
                    return Err(nested.error(format!("`{ident}` appears twice in order")));
                }
                names.push(ident);
                Ok(())
            })?;
            out.order = Some(names);
            Ok(())
        } else {
            Err(meta.error("unrecognised compiler_args struct attribute"))
        }
    })?;
    Ok(out)
}

/// Extracts `#[compiler_args(...)]` metadata applied to a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_compiler_args(attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else if meta.path.is_ident("flag") {
            let s = lit_str(meta, "flag")?;
            if s.value().is_empty() {
                return Err(syn::Error::new(s.span(), "flag must not be empty"));
            }
            out.flag = Some(s);
            Ok(())
        } else {
            Err(meta.error("unrecognised compiler_args field attribute"))
        }
    })?;
    Ok(out)
}
