//! Literal parsing helpers for derive attributes.

use syn::{Lit, LitStr};

/// Parses the string literal assigned to `key`, as in `flag = "debug"`.
///
/// Any other literal kind is rejected with an error spanning the literal.
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(text) => Ok(text),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}
