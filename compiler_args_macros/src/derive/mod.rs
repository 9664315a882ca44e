//! Derive entry points.
//!
//! Each entry point parses the input once, validates the attributes that
//! only make sense for its derive, and hands off to the matching generator.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
mod generate;
mod parse;

use parse::parse_input;

/// Expands `#[derive(Configuration)]`.
pub(crate) fn configuration(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse_input(input, "Configuration")?;
    if parsed.attrs.order.is_some() {
        return Err(syn::Error::new_spanned(
            &parsed.ident,
            "order is only valid on ArgumentRecord types",
        ));
    }
    let krate = crate_path::resolve(parsed.attrs.crate_path.as_ref());
    Ok(generate::configuration::expand(&parsed, &krate))
}

/// Expands `#[derive(ArgumentRecord)]`.
pub(crate) fn argument_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse_input(input, "ArgumentRecord")?;
    if let Some(field) = parsed
        .fields
        .iter()
        .find(|f| f.attrs.skip || f.attrs.flag.is_some())
    {
        return Err(syn::Error::new_spanned(
            &field.ident,
            "skip and flag apply to Configuration fields; records render only their declared order",
        ));
    }
    let krate = crate_path::resolve(parsed.attrs.crate_path.as_ref());
    generate::record::expand(&parsed, &krate)
}
