//! The erased interface and the destructive-consumption protocol.
//!
//! Every `AnyRange` owns exactly one [`InterfacePtr`]. Operations are
//! dispatched by [`Slot`]; which slots and operations are bound is decided by
//! the capability map when the value is wrapped, and the facade only exposes
//! calls the map declares.

use alloc::boxed::Box;
use core::fmt;

use crate::direction::Slot;

/// Owned pointer to an erased adapter.
pub(crate) type InterfacePtr<E> = Box<dyn Interface<E>>;

/// Outcome of a destructive consumption at the adapter level.
pub(crate) enum Consumed<E> {
    /// The value was mutated; the adapter is unchanged.
    InPlace(E),
    /// The value was split; the second field is the adapter over the rest.
    Replaced(E, InterfacePtr<E>),
}

/// Dispatch surface shared by all adapters with element type `E`.
pub(crate) trait Interface<E> {
    fn empty(&self, slot: Slot) -> bool;
    fn size(&self, slot: Slot) -> usize;
    fn first(&self, slot: Slot) -> E;
    fn drop_one(&self, slot: Slot) -> InterfacePtr<E>;
    fn drop_n(&self, slot: Slot, n: usize) -> InterfacePtr<E>;
    fn chop_destructive(&mut self, slot: Slot) -> Consumed<E>;
    /// Deep copy. Bound only for copyable maps.
    fn copy(&self) -> InterfacePtr<E>;
    /// Deep copy with `slot` unbound. Bound only for copyable maps.
    fn lose_direction(&self, slot: Slot) -> InterfacePtr<E>;
}

/// Consume the first element from `slot`, swapping in the replacement adapter
/// if the value had to be split.
///
/// The previous adapter is handed back inside the result rather than dropped
/// here, so the caller controls when it goes away.
pub(crate) fn chop_destructive<E: 'static>(
    this: &mut InterfacePtr<E>,
    slot: Slot,
) -> Chopped<E, Orphan<E>> {
    match this.chop_destructive(slot) {
        Consumed::InPlace(first) => Chopped::new(first, None),
        Consumed::Replaced(first, next) => {
            let spent = core::mem::replace(this, next);
            Chopped::new(first, Some(Orphan(spent)))
        }
    }
}

/// Result of a destructive consumption.
///
/// Holds the consumed element and, if the wrapped value had to be replaced,
/// the token owning the discarded adapter. Dropping the result releases the
/// token.
pub struct Chopped<E, P> {
    first: E,
    discardable: Option<P>,
}

impl<E, P> Chopped<E, P> {
    pub fn new(first: E, discardable: Option<P>) -> Self {
        Chopped { first, discardable }
    }

    #[inline]
    pub fn first(&self) -> &E {
        &self.first
    }

    /// `true` iff the wrapped value was replaced and a token is held.
    #[inline]
    pub fn is_replaced(&self) -> bool {
        self.discardable.is_some()
    }

    pub fn into_parts(self) -> (E, Option<P>) {
        (self.first, self.discardable)
    }

    /// Take the element, releasing the token.
    pub fn move_first(self) -> E {
        self.first
    }
}

impl<E: fmt::Debug, P> fmt::Debug for Chopped<E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chopped")
            .field("first", &self.first)
            .field("replaced", &self.is_replaced())
            .finish()
    }
}

/// An adapter left behind by a split consumption. Opaque; drop it.
pub struct Orphan<E>(InterfacePtr<E>);

impl<E> fmt::Debug for Orphan<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Orphan")
    }
}
