//! `ArgumentRecord` trait implementation generator.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

use crate::derive::parse::{ParsedField, ParsedInput};

/// Resolves every `order(...)` entry to its field, in declared order.
///
/// A missing `order` attribute or an entry naming no field is a compile
/// error pointing at the offending tokens.
fn ordered_fields<'a>(input: &'a ParsedInput) -> syn::Result<Vec<&'a ParsedField>> {
    let Some(order) = &input.attrs.order else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ArgumentRecord requires #[compiler_args(order(...))] naming the sub-fields to render",
        ));
    };
    order
        .iter()
        .map(|name| {
            input
                .fields
                .iter()
                .find(|f| f.ident.unraw() == name.unraw())
                .ok_or_else(|| {
                    syn::Error::new_spanned(
                        name,
                        format!("`{name}` is not a field of `{}`", input.ident),
                    )
                })
        })
        .collect()
}

/// Generates the `ArgumentRecord`, `ToShape` and `ShapeElement`
/// implementations.
pub(crate) fn expand(input: &ParsedInput, krate: &TokenStream) -> syn::Result<TokenStream> {
    let ordered = ordered_fields(input)?;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let names: Vec<String> = ordered.iter().map(|f| f.name()).collect();
    let arms = ordered.iter().map(|f| {
        let name = f.name();
        let field_ident = &f.ident;
        let ty = &f.ty;
        quote! {
            #name => ::core::result::Result::Ok(
                <#ty as #krate::ToFragment>::to_fragment(&self.#field_ident)
            ),
        }
    });

    Ok(quote! {
        impl #impl_generics #krate::ArgumentRecord for #ident #ty_generics #where_clause {
            fn order(&self) -> &'static [&'static str] {
                &[ #( #names ),* ]
            }

            fn field(
                &self,
                name: &str,
            ) -> ::core::result::Result<#krate::Fragment, #krate::AccessError> {
                match name {
                    #( #arms )*
                    other => ::core::result::Result::Err(#krate::AccessError::unknown(other)),
                }
            }
        }

        impl #impl_generics #krate::ToShape for #ident #ty_generics #where_clause {
            fn to_shape(&self) -> #krate::Shape<'_> {
                #krate::Shape::Records(::std::vec![self as &dyn #krate::ArgumentRecord])
            }
        }

        impl #impl_generics #krate::ShapeElement for #ident #ty_generics #where_clause {
            fn sequence_shape(items: &[Self]) -> #krate::Shape<'_> {
                #krate::Shape::Records(
                    items
                        .iter()
                        .map(|item| item as &dyn #krate::ArgumentRecord)
                        .collect(),
                )
            }
        }
    })
}
