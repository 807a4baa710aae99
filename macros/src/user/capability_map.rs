//! `capabilities!` - build a capability map type
//!
//! ```ignore
//! type Map = capabilities! {
//!     default: Front,
//!     copy,
//!     Front: [empty, size, first],
//!     Back: [empty, first],
//! };
//! // => ::tola_range::Caps<::tola_range::Front, Ops<..>, Ops<..>, ::tola_range::Present>
//! ```
//!
//! `default` may be omitted and then means `Front`. A direction that is not
//! listed is `Unsupported`.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Ident, Token,
};

use crate::common::{bool_type, try_parse_keyword, OpList};

const DIRECTIONS: [&str; 2] = ["Front", "Back"];

// =============================================================================
// Input Parser
// =============================================================================

pub struct MapInput {
    pub default: Option<Ident>,
    pub copy: bool,
    /// Indexed like `DIRECTIONS`.
    pub directions: [Option<OpList>; 2],
}

fn direction_index(ident: &Ident) -> Option<usize> {
    let name = ident.to_string();
    DIRECTIONS.iter().position(|known| *known == name)
}

impl Parse for MapInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut map = MapInput {
            default: None,
            copy: false,
            directions: [None, None],
        };

        while !input.is_empty() {
            if input.peek(Ident) && input.peek2(Token![:]) && !input.peek2(Token![::]) {
                let key: Ident = input.parse()?;
                input.parse::<Token![:]>()?;

                if key == "default" {
                    let direction: Ident = input.parse()?;
                    if direction_index(&direction).is_none() {
                        return Err(syn::Error::new_spanned(
                            &direction,
                            format!(
                                "unknown direction `{}`, expected `Front` or `Back`",
                                direction
                            ),
                        ));
                    }
                    if map.default.replace(direction).is_some() {
                        return Err(syn::Error::new_spanned(&key, "duplicate `default`"));
                    }
                } else if let Some(index) = direction_index(&key) {
                    let ops = OpList::parse_bracketed(input)?;
                    if map.directions[index].is_some() {
                        return Err(syn::Error::new_spanned(
                            &key,
                            format!(
                                "duplicate direction `{}`\n\
                                 \n\
                                 List all operations of a direction in one entry.",
                                key
                            ),
                        ));
                    }
                    map.directions[index] = Some(ops);
                } else {
                    return Err(syn::Error::new_spanned(
                        &key,
                        format!(
                            "unexpected `{}`, expected `default`, `copy`, `Front` or `Back`",
                            key
                        ),
                    ));
                }
            } else {
                let span = input.span();
                if !try_parse_keyword(input, "copy")? {
                    return Err(syn::Error::new(
                        span,
                        "expected `default: <direction>`, `copy`, or `<direction>: [operations]`",
                    ));
                }
                if map.copy {
                    return Err(syn::Error::new(span, "duplicate `copy`"));
                }
                map.copy = true;
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(map)
    }
}

// =============================================================================
// Expansion
// =============================================================================

pub fn expand_capabilities(input: MapInput) -> syn::Result<TokenStream2> {
    let default = match &input.default {
        Some(ident) => ident.clone(),
        None => Ident::new("Front", proc_macro2::Span::call_site()),
    };
    let default_index = direction_index(&default).unwrap_or(0);
    if input.directions[default_index].is_none() {
        return Err(syn::Error::new_spanned(
            &default,
            format!(
                "default direction `{}` is not listed\n\
                 \n\
                 Add `{}: [..]` with its operations, or choose a listed direction.",
                default, default
            ),
        ));
    }

    let mut sets = Vec::with_capacity(2);
    for entry in &input.directions {
        sets.push(match entry {
            Some(ops) => ops.to_ops_type()?,
            None => quote! { ::tola_range::Unsupported },
        });
    }
    let front = &sets[0];
    let back = &sets[1];
    let copy = bool_type(input.copy);

    Ok(quote! {
        ::tola_range::Caps<::tola_range::#default, #front, #back, #copy>
    })
}
