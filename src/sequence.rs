//! The sequence protocol.
//!
//! A concrete sequence states its capabilities through [`Sequence`] and
//! implements one trait per operation and direction it supports. Nothing is
//! discovered: the declared map and the implemented traits must agree, and
//! wrapping a value whose traits do not cover the requested map fails to
//! compile.
//!
//! ```
//! use tola_range::prelude::*;
//!
//! /// Counts down from `n` to 1.
//! struct Countdown(u32);
//!
//! impl Sequence for Countdown {
//!     type Element = u32;
//!     type Capabilities = Caps<Front, Ops<Present, Present, Present, Absent, Absent, Present>>;
//! }
//!
//! impl Empty<Front> for Countdown {
//!     fn empty(&self, _: Front) -> bool { self.0 == 0 }
//! }
//! impl Size<Front> for Countdown {
//!     fn size(&self, _: Front) -> usize { self.0 as usize }
//! }
//! impl First<Front> for Countdown {
//!     fn first(&self, _: Front) -> u32 { self.0 }
//! }
//! impl ChopInPlace<Front> for Countdown {
//!     fn chop_in_place(&mut self, _: Front) -> u32 {
//!         self.0 -= 1;
//!         self.0 + 1
//!     }
//! }
//! impl ChopDestructive<Front> for Countdown {
//!     type Mode = InPlace;
//! }
//!
//! let range: AnyRange<u32, UniqueCapabilities> = AnyRange::new(Countdown(3));
//! assert_eq!(range.collect::<Vec<_>>(), [3, 2, 1]);
//! ```

use crate::capability::CapabilityMap;
use crate::direction::Direction;

/// A sequence type and its static capability map.
pub trait Sequence {
    type Element;
    /// Everything this type can do, per direction.
    type Capabilities: CapabilityMap;
}

pub trait Empty<D: Direction>: Sequence {
    fn empty(&self, direction: D) -> bool;
}

pub trait Size<D: Direction>: Sequence {
    fn size(&self, direction: D) -> usize;
}

pub trait First<D: Direction>: Sequence {
    fn first(&self, direction: D) -> Self::Element;
}

/// Drop the first element, leaving the receiver untouched.
pub trait DropOne<D: Direction>: Sequence + Sized {
    fn drop_one(&self, direction: D) -> Self;
}

/// Drop the first `n` elements, leaving the receiver untouched.
pub trait DropN<D: Direction>: Sequence + Sized {
    fn drop_n(&self, direction: D, n: usize) -> Self;
}

/// Remove and return the first element by mutation.
pub trait ChopInPlace<D: Direction>: Sequence {
    fn chop_in_place(&mut self, direction: D) -> Self::Element;
}

/// Split into the first element and the rest.
pub trait Chop<D: Direction>: Sequence + Sized {
    fn chop(self, direction: D) -> (Self::Element, Self);
}

/// Destructive consumption, realized either in place or by splitting.
///
/// `Mode` is [`InPlace`] (requires [`ChopInPlace`]) or [`BySplit`]
/// (requires [`Chop`]). A wrapped split-only value is replaced by its rest
/// after each consumption.
pub trait ChopDestructive<D: Direction>: Sequence + Sized {
    type Mode: ChopMode<Self, D>;
}

/// Consume through [`ChopInPlace`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InPlace;

/// Consume through [`Chop`], replacing the value with the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct BySplit;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::InPlace {}
    impl Sealed for super::BySplit {}
}

/// How a sequence consumes its first element. Implemented by [`InPlace`]
/// and [`BySplit`] only.
pub trait ChopMode<R: Sequence, D: Direction>: sealed::Sealed {
    #[doc(hidden)]
    fn entry<E>() -> ChopEntry<R, E>
    where
        R::Element: Into<E>;
}

/// Dispatch entry for destructive consumption.
#[doc(hidden)]
pub enum ChopEntry<R, E> {
    InPlace(fn(&mut R) -> E),
    Split(fn(R) -> (E, R)),
}

impl<R, E> Clone for ChopEntry<R, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, E> Copy for ChopEntry<R, E> {}

fn chop_in_place_into<R, D, E>(range: &mut R) -> E
where
    R: ChopInPlace<D>,
    D: Direction,
    R::Element: Into<E>,
{
    range.chop_in_place(D::default()).into()
}

fn chop_into<R, D, E>(range: R) -> (E, R)
where
    R: Chop<D>,
    D: Direction,
    R::Element: Into<E>,
{
    let (first, rest) = range.chop(D::default());
    (first.into(), rest)
}

impl<R: ChopInPlace<D>, D: Direction> ChopMode<R, D> for InPlace {
    fn entry<E>() -> ChopEntry<R, E>
    where
        R::Element: Into<E>,
    {
        ChopEntry::InPlace(chop_in_place_into::<R, D, E> as fn(&mut R) -> E)
    }
}

impl<R: Chop<D>, D: Direction> ChopMode<R, D> for BySplit {
    fn entry<E>() -> ChopEntry<R, E>
    where
        R::Element: Into<E>,
    {
        ChopEntry::Split(chop_into::<R, D, E> as fn(R) -> (E, R))
    }
}
