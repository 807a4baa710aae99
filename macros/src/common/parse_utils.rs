//! Common parsing utilities
//!
//! Shared parsing helpers for consistent syntax across macros.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Ident, Token,
};

// =============================================================================
// Operation Table
// =============================================================================

/// Operation names in the parameter order of `Ops<..>`.
pub const OPERATIONS: [&str; 6] = [
    "empty",
    "size",
    "first",
    "drop_one",
    "drop_n",
    "chop_destructive",
];

/// `::tola_range::Present` or `::tola_range::Absent`.
pub fn bool_type(value: bool) -> TokenStream2 {
    if value {
        quote! { ::tola_range::Present }
    } else {
        quote! { ::tola_range::Absent }
    }
}

// =============================================================================
// Operation List Parsing: `empty, size, first`
// =============================================================================

/// Comma-separated operation names.
pub struct OpList {
    pub ops: Vec<Ident>,
}

impl Parse for OpList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ops = Punctuated::<Ident, Token![,]>::parse_terminated(input)?;
        Ok(OpList {
            ops: ops.into_iter().collect(),
        })
    }
}

impl OpList {
    /// Parse a bracketed list: `[empty, size]`
    pub fn parse_bracketed(input: ParseStream) -> syn::Result<Self> {
        let content;
        bracketed!(content in input);
        content.parse()
    }

    /// One flag per entry of [`OPERATIONS`].
    ///
    /// Rejects unknown and duplicate names.
    pub fn flags(&self) -> syn::Result<[bool; 6]> {
        let mut flags = [false; 6];
        for op in &self.ops {
            let name = op.to_string();
            let Some(index) = OPERATIONS.iter().position(|known| *known == name) else {
                return Err(syn::Error::new_spanned(
                    op,
                    format!(
                        "unknown operation `{}`\n\
                         \n\
                         Expected one of: {}.",
                        name,
                        OPERATIONS.join(", ")
                    ),
                ));
            };
            if flags[index] {
                return Err(syn::Error::new_spanned(
                    op,
                    format!(
                        "duplicate operation `{}`\n\
                         \n\
                         Each operation should appear only once per direction.",
                        name
                    ),
                ));
            }
            flags[index] = true;
        }
        Ok(flags)
    }

    /// Expand to `::tola_range::Ops<..>`.
    pub fn to_ops_type(&self) -> syn::Result<TokenStream2> {
        let flags: Vec<_> = self.flags()?.into_iter().map(bool_type).collect();
        Ok(quote! { ::tola_range::Ops<#(#flags),*> })
    }
}

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is a specific keyword
pub fn peek_keyword(input: ParseStream, keyword: &str) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            return ident == keyword;
        }
    }
    false
}

/// Consume an identifier if it matches the keyword
pub fn try_parse_keyword(input: ParseStream, keyword: &str) -> syn::Result<bool> {
    if peek_keyword(input, keyword) {
        let _: Ident = input.parse()?;
        Ok(true)
    } else {
        Ok(false)
    }
}
