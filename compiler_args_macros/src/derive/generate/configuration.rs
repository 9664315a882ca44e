//! `Configuration` trait implementation generator.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::parse::{ParsedField, ParsedInput};

/// Tokens constructing the `Property` descriptor for one field.
fn property_descriptor(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let name = field.name();
    match &field.attrs.flag {
        Some(flag) => quote! { #krate::Property::new(#name).with_flag(#flag) },
        None => quote! { #krate::Property::new(#name) },
    }
}

/// Match arm reading one field through its `ToShape` implementation.
fn read_arm(field: &ParsedField, krate: &TokenStream) -> TokenStream {
    let name = field.name();
    let ident = &field.ident;
    let ty = &field.ty;
    quote! {
        #name => ::core::result::Result::Ok(
            <#ty as #krate::ToShape>::to_shape(&self.#ident)
        ),
    }
}

/// Generates the `Configuration` and `ToShape` implementations.
///
/// Skipped fields appear in neither the schema nor the accessor.
pub(crate) fn expand(input: &ParsedInput, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let visible: Vec<&ParsedField> = input.fields.iter().filter(|f| !f.attrs.skip).collect();
    let descriptors = visible.iter().map(|f| property_descriptor(f, krate));
    let arms = visible.iter().map(|f| read_arm(f, krate));

    quote! {
        impl #impl_generics #krate::Configuration for #ident #ty_generics #where_clause {
            fn schema(&self) -> &'static [#krate::Property] {
                const SCHEMA: &[#krate::Property] = &[ #( #descriptors ),* ];
                SCHEMA
            }

            fn read(
                &self,
                property: &str,
            ) -> ::core::result::Result<#krate::Shape<'_>, #krate::AccessError> {
                match property {
                    #( #arms )*
                    other => ::core::result::Result::Err(#krate::AccessError::unknown(other)),
                }
            }
        }

        impl #impl_generics #krate::ToShape for #ident #ty_generics #where_clause {
            fn to_shape(&self) -> #krate::Shape<'_> {
                #krate::Shape::Nested(self)
            }
        }
    }
}
