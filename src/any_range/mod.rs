//! # AnyRange
//!
//! A type-erased sequence whose available operations are fixed by a
//! capability map.
//!
//! ```text
//! AnyRange<E, M>
//!   `-- Box<dyn Interface<E>>
//!         `-- Adapter<R, E>  (the concrete value + Table bound from M)
//! ```
//!
//! Every operation method carries a `where M: Supports<D, Op>` bound, so a
//! call outside the map is rejected by the compiler, never at run time:
//!
//! ```compile_fail
//! use tola_range::prelude::*;
//!
//! fn size_of(range: &AnyRange<i32>) -> usize {
//!     // ForwardCapabilities does not declare `size`.
//!     range.size()
//! }
//! ```
//!
//! Copying is only available for copyable maps:
//!
//! ```compile_fail
//! use tola_range::prelude::*;
//!
//! fn copy(range: &AnyRange<i32, UniqueCapabilities>) -> AnyRange<i32, UniqueCapabilities> {
//!     range.clone()
//! }
//! ```

use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;

use tracing::trace;

use crate::capability::{
    Admits, Capabilities, CapabilityMap, ForwardCapabilities, Restrict, SubsetOf, Supports, op,
};
use crate::direction::{Back, Direction, Front};
use crate::primitives::Present;
use crate::sequence::Sequence;

mod convert;
mod implementation;
mod interface;

use implementation::Adapter;
use interface::InterfacePtr;

pub use implementation::{Bind, BindCopy, BindRow, Binding, Row, Table};
pub use interface::{Chopped, Orphan};

/// A type-erased sequence of `E` exposing exactly the operations of `M`.
pub struct AnyRange<E, M = ForwardCapabilities> {
    implementation: InterfacePtr<E>,
    capabilities: PhantomData<fn() -> M>,
}

impl<E: 'static, M: CapabilityMap> AnyRange<E, M> {
    /// Wrap `range`, viewing it only in the default direction of `M`.
    pub fn new<R>(range: R) -> Self
    where
        R: Sequence + 'static,
        M: SubsetOf<R::Capabilities> + Bind<R, E>,
        (): Admits<M>,
    {
        Self::with_directions(range, ())
    }

    /// Wrap `range`, viewing it in the given directions.
    ///
    /// `directions` is `()`, `(D,)` or `(D1, D2)` and must cover every
    /// direction `M` declares.
    pub fn with_directions<R, Dirs>(range: R, _directions: Dirs) -> Self
    where
        R: Sequence + 'static,
        M: SubsetOf<R::Capabilities> + Bind<R, E>,
        Dirs: Admits<M>,
    {
        const {
            assert!(
                M::DESCRIPTOR.is_valid(),
                "the default direction of a capability map must be one of its directions"
            )
        };
        let capabilities = M::DESCRIPTOR;
        trace!(
            sequence = core::any::type_name::<R>(),
            capabilities = %capabilities,
            "wrapped sequence"
        );
        let table = <M as Bind<R, E>>::table();
        Self::from_interface(Box::new(Adapter::new(range, table)))
    }

    #[inline]
    fn from_interface(implementation: InterfacePtr<E>) -> Self {
        AnyRange {
            implementation,
            capabilities: PhantomData,
        }
    }

    #[inline]
    pub fn default_direction(&self) -> M::DefaultDirection {
        M::DefaultDirection::default()
    }

    /// Runtime description of `M`.
    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        M::DESCRIPTOR
    }

    // =========================================================================
    // Default direction
    // =========================================================================

    #[inline]
    pub fn is_empty(&self) -> bool
    where
        M: Supports<<M as CapabilityMap>::DefaultDirection, op::Empty>,
    {
        self.empty_from(self.default_direction())
    }

    #[inline]
    pub fn size(&self) -> usize
    where
        M: Supports<<M as CapabilityMap>::DefaultDirection, op::Size>,
    {
        self.size_from(self.default_direction())
    }

    #[inline]
    pub fn first(&self) -> E
    where
        M: Supports<<M as CapabilityMap>::DefaultDirection, op::First>,
    {
        self.first_from(self.default_direction())
    }

    #[inline]
    pub fn drop_one(&self) -> Self
    where
        M: Supports<<M as CapabilityMap>::DefaultDirection, op::DropOne>,
    {
        self.drop_one_from(self.default_direction())
    }

    #[inline]
    pub fn drop_n(&self, n: usize) -> Self
    where
        M: Supports<<M as CapabilityMap>::DefaultDirection, op::DropN>,
    {
        self.drop_n_from(self.default_direction(), n)
    }

    #[inline]
    pub fn chop_in_place(&mut self) -> E
    where
        M: Supports<<M as CapabilityMap>::DefaultDirection, op::ChopDestructive>,
    {
        self.chop_in_place_from(self.default_direction())
    }

    #[inline]
    pub fn chop_destructive(&mut self) -> Chopped<E, Orphan<E>>
    where
        M: Supports<<M as CapabilityMap>::DefaultDirection, op::ChopDestructive>,
    {
        self.chop_destructive_from(self.default_direction())
    }

    #[inline]
    pub fn chop(self) -> (E, Self)
    where
        M: Supports<<M as CapabilityMap>::DefaultDirection, op::ChopDestructive>,
    {
        let direction = self.default_direction();
        self.chop_from(direction)
    }

    // =========================================================================
    // Explicit direction
    // =========================================================================

    pub fn empty_from<D: Direction>(&self, _direction: D) -> bool
    where
        M: Supports<D, op::Empty>,
    {
        self.implementation.empty(D::SLOT)
    }

    pub fn size_from<D: Direction>(&self, _direction: D) -> usize
    where
        M: Supports<D, op::Size>,
    {
        self.implementation.size(D::SLOT)
    }

    pub fn first_from<D: Direction>(&self, _direction: D) -> E
    where
        M: Supports<D, op::First>,
    {
        self.implementation.first(D::SLOT)
    }

    /// A new range without the first element from `D`.
    pub fn drop_one_from<D: Direction>(&self, _direction: D) -> Self
    where
        M: Supports<D, op::DropOne>,
    {
        Self::from_interface(self.implementation.drop_one(D::SLOT))
    }

    /// A new range without the first `n` elements from `D`.
    pub fn drop_n_from<D: Direction>(&self, _direction: D, n: usize) -> Self
    where
        M: Supports<D, op::DropN>,
    {
        Self::from_interface(self.implementation.drop_n(D::SLOT, n))
    }

    /// Remove and return the first element from `D`.
    ///
    /// If the wrapped value can only be split, the replaced adapter is
    /// released after the element has been taken.
    pub fn chop_in_place_from<D: Direction>(&mut self, direction: D) -> E
    where
        M: Supports<D, op::ChopDestructive>,
    {
        self.chop_destructive_from(direction).move_first()
    }

    /// Like [`chop_in_place_from`](Self::chop_in_place_from), handing back the
    /// token that owns a replaced adapter.
    pub fn chop_destructive_from<D: Direction>(
        &mut self,
        _direction: D,
    ) -> Chopped<E, Orphan<E>>
    where
        M: Supports<D, op::ChopDestructive>,
    {
        interface::chop_destructive(&mut self.implementation, D::SLOT)
    }

    /// Split into the first element from `D` and the rest.
    pub fn chop_from<D: Direction>(mut self, direction: D) -> (E, Self)
    where
        M: Supports<D, op::ChopDestructive>,
    {
        let first = self.chop_in_place_from(direction);
        (first, self)
    }
}

/// Wrap `range` with its own full capability map, in both directions.
pub fn make_any_range<R>(range: R) -> AnyRange<R::Element, R::Capabilities>
where
    R: Sequence + 'static,
    R::Element: 'static,
    R::Capabilities: SubsetOf<R::Capabilities> + Bind<R, R::Element>,
    (Front, Back): Admits<R::Capabilities>,
{
    AnyRange::with_directions(range, (Front, Back))
}

/// Wrap `range` with its own capability map limited to `directions`.
///
/// The default direction of the sequence must be among `directions`.
///
/// ```
/// use tola_range::prelude::*;
///
/// type Both = <EmptyView<u8> as Sequence>::Capabilities;
/// let front = make_any_range_with(EmptyView::<u8>::new(), (Front,));
/// assert!(front.is_empty());
/// assert!(!front.capabilities().has_direction(Slot::Back));
/// assert!(supports!(Both, Back => Size));
/// ```
pub fn make_any_range_with<R, Dirs>(
    range: R,
    directions: Dirs,
) -> AnyRange<R::Element, <Dirs as Restrict<R::Capabilities>>::Map>
where
    R: Sequence + 'static,
    R::Element: 'static,
    Dirs: Restrict<R::Capabilities>,
    Dirs: Admits<<Dirs as Restrict<R::Capabilities>>::Map>,
    <Dirs as Restrict<R::Capabilities>>::Map:
        SubsetOf<R::Capabilities> + Bind<R, R::Element>,
{
    AnyRange::with_directions(range, directions)
}

impl<E: 'static, M> Clone for AnyRange<E, M>
where
    M: CapabilityMap<Copyable = Present>,
{
    fn clone(&self) -> Self {
        Self::from_interface(self.implementation.copy())
    }
}

impl<E: 'static, M> Iterator for AnyRange<E, M>
where
    M: CapabilityMap
        + Supports<<M as CapabilityMap>::DefaultDirection, op::Empty>
        + Supports<<M as CapabilityMap>::DefaultDirection, op::ChopDestructive>,
{
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.is_empty() {
            None
        } else {
            Some(self.chop_in_place())
        }
    }
}

impl<E, M: CapabilityMap> fmt::Debug for AnyRange<E, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyRange")
            .field("capabilities", &M::DESCRIPTOR)
            .finish_non_exhaustive()
    }
}
