//! Structural subset between capability maps.
//!
//! `N: SubsetOf<M>` holds when every flag set in `N` is also set in `M`:
//! one `Implies` bound per flag. The relation is checked entirely by the
//! trait solver, so a narrowing that would add a capability does not compile.

use crate::capability::{CapabilityMap, OpSet};
use crate::primitives::Implies;

/// Every operation (and the key) of `Self` is present in `Of`.
pub trait OpSubset<Of: OpSet>: OpSet {}

impl<S, Of> OpSubset<Of> for S
where
    S: OpSet,
    Of: OpSet,
    S::Key: Implies<Of::Key>,
    S::Empty: Implies<Of::Empty>,
    S::Size: Implies<Of::Size>,
    S::First: Implies<Of::First>,
    S::DropOne: Implies<Of::DropOne>,
    S::DropN: Implies<Of::DropN>,
    S::ChopDestructive: Implies<Of::ChopDestructive>,
{
}

/// `Self` is a structural subset of `Of`.
///
/// Requires the same default direction, copy only if `Of` copies, and for each
/// direction an operation subset.
#[diagnostic::on_unimplemented(
    message = "capability map `{Self}` is not a subset of `{Of}`",
    label = "this map asks for more than the source provides",
    note = "the default direction must match, and every declared operation must exist in the source"
)]
pub trait SubsetOf<Of: CapabilityMap>: CapabilityMap {}

impl<N, Of> SubsetOf<Of> for N
where
    Of: CapabilityMap,
    N: CapabilityMap<DefaultDirection = Of::DefaultDirection>,
    N::Copyable: Implies<Of::Copyable>,
    N::Front: OpSubset<Of::Front>,
    N::Back: OpSubset<Of::Back>,
{
}
