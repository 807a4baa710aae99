//! Conversions between capability maps.
//!
//! Narrowing to a map `N` that is a structural subset of `M` copies the
//! wrapped value and then drops every direction `M` has and `N` lacks, one at
//! a time. Operations removed within a kept direction need no work: the
//! facade simply stops exposing them.

use tracing::trace;

use super::AnyRange;
use super::interface::InterfacePtr;
use crate::capability::{Capabilities, CapabilityMap, SubsetOf};
use crate::primitives::Present;

/// Copy `from`, dropping the directions of `wide` that `narrow` lacks.
fn narrowed<E: 'static>(
    from: &InterfacePtr<E>,
    wide: Capabilities,
    narrow: Capabilities,
) -> InterfacePtr<E> {
    let mut surplus = wide.surplus_directions(&narrow);
    let Some(slot) = surplus.next() else {
        return from.copy();
    };
    let mut implementation = from.lose_direction(slot);
    for slot in surplus {
        implementation = implementation.lose_direction(slot);
    }
    implementation
}

impl<E: 'static, M: CapabilityMap> AnyRange<E, M> {
    /// A copy of this range restricted to the map `N`.
    ///
    /// ```
    /// use tola_range::prelude::*;
    ///
    /// let both = make_any_range(EmptyView::<u8>::new());
    /// let front: AnyRange<u8, Caps<Front, EmptyOps, Unsupported, Present>> = both.narrow();
    /// assert!(front.is_empty());
    /// assert!(!front.capabilities().has_direction(Slot::Back));
    /// ```
    pub fn narrow<N>(&self) -> AnyRange<E, N>
    where
        N: SubsetOf<M> + CapabilityMap<Copyable = Present>,
    {
        trace!(from = %M::DESCRIPTOR, to = %N::DESCRIPTOR, "narrowing copy");
        AnyRange::from_interface(narrowed(
            &self.implementation,
            M::DESCRIPTOR,
            N::DESCRIPTOR,
        ))
    }

    /// Convert into the map `N`, consuming this range.
    ///
    /// When `N` keeps every direction of `M` the adapter is moved as is;
    /// otherwise the value is copied with the surplus directions dropped.
    ///
    /// Known limitation: the target must be copyable, even when nothing is
    /// lost. A split-only range cannot give up `first` by value:
    ///
    /// ```compile_fail
    /// use tola_range::prelude::*;
    /// use tola_range::UniqueOps;
    ///
    /// type SplitOnly = Caps<Front, Ops<Present, Absent, Present, Absent, Absent, Present>>;
    ///
    /// fn read_once(range: AnyRange<u8, SplitOnly>) -> AnyRange<u8, Caps<Front, UniqueOps>> {
    ///     range.into_narrowed()
    /// }
    /// ```
    pub fn into_narrowed<N>(self) -> AnyRange<E, N>
    where
        N: SubsetOf<M> + CapabilityMap<Copyable = Present>,
    {
        if M::DESCRIPTOR
            .surplus_directions(&N::DESCRIPTOR)
            .next()
            .is_none()
        {
            return AnyRange::from_interface(self.implementation);
        }
        self.narrow()
    }
}

impl<E: 'static, M, N> From<&AnyRange<E, M>> for AnyRange<E, N>
where
    M: CapabilityMap,
    N: SubsetOf<M> + CapabilityMap<Copyable = Present>,
{
    fn from(range: &AnyRange<E, M>) -> Self {
        range.narrow()
    }
}
