//! # Layer 0: Primitives
//!
//! Basic building blocks for capability maps:
//! - `bool.rs`: Type-level boolean logic (Present/Absent) and implication.

pub mod bool;

// Re-export key types at this level
pub use bool::{Absent, Bool, Implies, IsPresent, Present};
