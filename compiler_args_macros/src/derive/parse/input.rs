//! Input parsing for the `compiler_args` derives.
//!
//! This module gathers the struct identifier, generics, fields, and attribute
//! metadata in one pass so expansion can fail fast with useful errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A named field together with its parsed attributes.
pub(crate) struct ParsedField {
    pub ident: Ident,
    pub ty: Type,
    pub attrs: FieldAttrs,
}

impl ParsedField {
    /// Property name as written in source, without any `r#` prefix.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// Everything the generators need from the derive input.
pub(crate) struct ParsedInput {
    pub ident: Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

/// Gathers information from the user-provided struct.
///
/// `derive_name` is only used in error messages. Unit structs are accepted
/// and treated as having no fields; tuple structs, enums and unions are
/// rejected.
pub(crate) fn parse_input(input: &DeriveInput, derive_name: &str) -> syn::Result<ParsedInput> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    format!("{derive_name} requires named fields"),
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("{derive_name} can only be derived for structs"),
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        fields.push(ParsedField {
            ident,
            ty: field.ty.clone(),
            attrs: parse_field_attrs(&field.attrs)?,
        });
    }

    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}
