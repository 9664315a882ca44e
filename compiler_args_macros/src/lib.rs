//! Procedural macros for `compiler_args`.
//!
//! [`Configuration`] generates the static property table and accessor used by
//! the introspector, while [`ArgumentRecord`] generates the ordered sub-field
//! table for structured compiler arguments. Both derives also implement the
//! shape conversion traits, so derived types can be used directly as
//! property values, inside `Option`, or (for records) inside `Vec`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `compiler_args::Configuration`.
///
/// Every named field becomes a property, visited in declaration order.
/// Field types must implement `compiler_args::ToShape`.
///
/// Recognised attributes:
///
/// - `#[compiler_args(crate = "path")]` on the struct selects the path used
///   to reach `compiler_args` in generated code.
/// - `#[compiler_args(skip)]` on a field removes it from the schema.
/// - `#[compiler_args(flag = "name")]` on a field sets the flag name verbatim.
#[proc_macro_derive(Configuration, attributes(compiler_args))]
pub fn derive_configuration(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::configuration(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for `compiler_args::ArgumentRecord`.
///
/// The struct must declare its render order with
/// `#[compiler_args(order(first, second, ...))]`. Each listed name must be
/// a field whose type implements `compiler_args::ToFragment`; unlisted fields
/// are never rendered.
#[proc_macro_derive(ArgumentRecord, attributes(compiler_args))]
pub fn derive_argument_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::argument_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
