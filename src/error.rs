//! Error types.
//!
//! Misuse of a capability map is rejected by the compiler. These errors only
//! arise when `Capabilities` values are assembled by hand and checked.

use crate::capability::OpFlags;
use crate::direction::Slot;

/// A runtime capability description failed a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("default direction `{0}` has no capability set")]
    MissingDefaultDirection(Slot),

    #[error("default direction is `{found}` where `{expected}` is required")]
    DefaultDirectionMismatch { expected: Slot, found: Slot },

    #[error("copy is requested but not available")]
    CopyUnavailable,

    #[error("direction `{0}` is not available")]
    MissingDirection(Slot),

    #[error("operations {missing} are not available in direction `{slot}`")]
    MissingOperations { slot: Slot, missing: OpFlags },
}
