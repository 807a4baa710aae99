//! Procedural macros for the tola-range capability system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `capabilities!{}` | type position | Build a capability map type |
//! | `ops![]` | type position | Build an operation set type |
//!
//! ## Example
//!
//! ```ignore
//! type Map = capabilities! {
//!     default: Front,
//!     copy,
//!     Front: [empty, size, first, drop_one, drop_n, chop_destructive],
//!     Back: [empty, first],
//! };
//!
//! type Set = ops![empty, first];
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Build a capability map type.
///
/// Entries, separated by commas, in any order:
/// - `default: Front` or `default: Back` (defaults to `Front`)
/// - `copy` to make the map copyable
/// - `Front: [ops..]` / `Back: [ops..]` with operation names from
///   `empty`, `size`, `first`, `drop_one`, `drop_n`, `chop_destructive`
///
/// Unknown or duplicate operations, duplicate entries and a default
/// direction without an entry are compile errors.
///
/// # Usage
/// ```ignore
/// type Forward = capabilities! {
///     copy,
///     Front: [empty, first, drop_one, chop_destructive],
/// };
/// ```
#[proc_macro]
pub fn capabilities(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::MapInput);
    user::expand_capabilities(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Build an operation set type for one direction.
///
/// # Usage
/// ```ignore
/// type Readable = ops![empty, size, first];
/// // => ::tola_range::Ops<Present, Present, Present, Absent, Absent, Absent>
/// ```
#[proc_macro]
pub fn ops(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as common::OpList);
    input
        .to_ops_type()
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
