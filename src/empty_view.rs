//! A view that is empty from every direction.

use core::fmt;
use core::marker::PhantomData;

use crate::capability::{Caps, Ops};
use crate::direction::{Direction, Front};
use crate::primitives::{Absent, Present};
use crate::sequence::{Empty, Sequence, Size};

/// Emptiness and size, nothing else.
pub type EmptyOps = Ops<Present, Present, Absent, Absent, Absent, Absent>;

/// An empty sequence of `T`, usable from both directions with `Front` as its
/// default.
pub struct EmptyView<T>(PhantomData<fn() -> T>);

impl<T> EmptyView<T> {
    pub const fn new() -> Self {
        EmptyView(PhantomData)
    }
}

impl<T> Default for EmptyView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyView<T> {}

impl<T> fmt::Debug for EmptyView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyView")
    }
}

impl<T> Sequence for EmptyView<T> {
    type Element = T;
    type Capabilities = Caps<Front, EmptyOps, EmptyOps, Present>;
}

impl<T, D: Direction> Empty<D> for EmptyView<T> {
    #[inline]
    fn empty(&self, _: D) -> bool {
        true
    }
}

impl<T, D: Direction> Size<D> for EmptyView<T> {
    #[inline]
    fn size(&self, _: D) -> usize {
        0
    }
}
