//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `capabilities!` | type position | Build a `Caps<..>` capability map |
//! | `ops!` | type position | Build an `Ops<..>` operation set |

mod capability_map;

pub use capability_map::{expand_capabilities, MapInput};
