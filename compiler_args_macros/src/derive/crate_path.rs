//! Path under which generated code refers to the runtime crate.
//!
//! Generated impls name every trait and type through this prefix. The
//! default is the absolute `::compiler_args`, so a local module of the same
//! name cannot capture it; `#[compiler_args(crate = "...")]` replaces it for
//! renamed dependencies, re-exports, and the runtime crate's own tests.

use proc_macro2::TokenStream;
use quote::quote;

/// Tokens prefixing runtime paths in generated code.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    match crate_path {
        Some(path) => quote! { #path },
        None => quote! { ::compiler_args },
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, ensure};
    use rstest::rstest;

    use super::resolve;

    #[rstest]
    #[case::absolute_default(None, ":: compiler_args")]
    #[case::renamed(Some("args_alias"), "args_alias")]
    #[case::reexported(Some("toolchain::compiler_args"), "toolchain :: compiler_args")]
    #[case::own_crate(Some("crate"), "crate")]
    fn runtime_path_tokens(#[case] input: Option<&str>, #[case] expected: &str) -> Result<()> {
        let parsed = input.map(syn::parse_str::<syn::Path>).transpose()?;
        let tokens = resolve(parsed.as_ref()).to_string();
        ensure!(tokens == expected, "unexpected path {tokens}");
        Ok(())
    }
}
