#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std support in thiserror and tracing

//! # tola-range
//!
//! Type-erased sequences with capabilities checked at compile time.
//!
//! A sequence can be traversed in one or more directions (`Front`, `Back`),
//! and in each direction supports some of six operations: `empty`, `size`,
//! `first`, `drop_one`, `drop_n` and `chop_destructive`. A concrete type
//! declares which, per direction, through its [`Sequence::Capabilities`] map.
//!
//! [`AnyRange<E, M>`] hides the concrete type behind one boxed interface and
//! exposes exactly the operations of the map `M`. Calling anything else does
//! not compile.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present / Absent, Implies, IsPresent                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability Maps                                         |
//! |  - Direction (Front, Back), Operation markers (op::*)             |
//! |  - OpSet, CapabilityMap, Supports, SubsetOf                       |
//! |  - Capabilities / OpFlags (const runtime mirror)                  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Erasure                                                 |
//! |  - Sequence protocol, Adapter + Table, AnyRange facade            |
//! |  - narrowing conversions, chop protocol (Chopped / Orphan)        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_range::prelude::*;
//!
//! #[derive(Clone)]
//! struct Letters(&'static str);
//!
//! impl Sequence for Letters {
//!     type Element = char;
//!     type Capabilities = capabilities! {
//!         default: Front,
//!         copy,
//!         Front: [empty, first, drop_one, chop_destructive],
//!         Back: [empty, first, drop_one, chop_destructive],
//!     };
//! }
//!
//! impl<D: Direction> Empty<D> for Letters {
//!     fn empty(&self, _: D) -> bool { self.0.is_empty() }
//! }
//! impl First<Front> for Letters {
//!     fn first(&self, _: Front) -> char { self.0.chars().next().unwrap() }
//! }
//! impl First<Back> for Letters {
//!     fn first(&self, _: Back) -> char { self.0.chars().next_back().unwrap() }
//! }
//! impl DropOne<Front> for Letters {
//!     fn drop_one(&self, d: Front) -> Self {
//!         Letters(&self.0[self.first(d).len_utf8()..])
//!     }
//! }
//! impl DropOne<Back> for Letters {
//!     fn drop_one(&self, d: Back) -> Self {
//!         Letters(&self.0[..self.0.len() - self.first(d).len_utf8()])
//!     }
//! }
//! impl ChopInPlace<Front> for Letters {
//!     fn chop_in_place(&mut self, d: Front) -> char {
//!         let first = self.first(d);
//!         *self = self.drop_one(d);
//!         first
//!     }
//! }
//! impl ChopInPlace<Back> for Letters {
//!     fn chop_in_place(&mut self, d: Back) -> char {
//!         let first = self.first(d);
//!         *self = self.drop_one(d);
//!         first
//!     }
//! }
//! impl<D: Direction> ChopDestructive<D> for Letters
//! where
//!     Letters: ChopInPlace<D>,
//! {
//!     type Mode = InPlace;
//! }
//!
//! // Forward only: the back end is not reachable through `range`.
//! let range: AnyRange<char> = AnyRange::new(Letters("abc"));
//! assert_eq!(range.first(), 'a');
//! assert_eq!(range.drop_one().first(), 'b');
//!
//! // Both directions, with the element widened to `u32`.
//! type Both = capabilities! {
//!     default: Front,
//!     copy,
//!     Front: [empty, first],
//!     Back: [empty, first, chop_destructive],
//! };
//! let mut both: AnyRange<u32, Both> = AnyRange::with_directions(Letters("xyz"), (Front, Back));
//! assert_eq!(both.chop_in_place_from(Back), 'z' as u32);
//! assert_eq!(both.first_from(Back), 'y' as u32);
//! ```
//!
//! ## Static rejection
//!
//! Wrapping with a map the sequence cannot provide is a compile error:
//!
//! ```compile_fail
//! use tola_range::prelude::*;
//!
//! // EmptyView has no `first`.
//! let range: AnyRange<i32> = AnyRange::new(EmptyView::<i32>::new());
//! ```
//!
//! So is a map whose default direction is not one of its directions:
//!
//! ```compile_fail
//! use tola_range::prelude::*;
//!
//! // Front is the default, but only Back is declared.
//! type Broken = Caps<Front, Unsupported, ops![empty, size], Present>;
//! let range: AnyRange<i32, Broken> =
//!     AnyRange::with_directions(EmptyView::<i32>::new(), (Front, Back));
//! ```

// Allow `::tola_range` to work inside the crate itself
extern crate self as tola_range;

extern crate alloc;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability Maps
// =============================================================================
pub mod capability;
pub mod direction;
pub mod error;

// =============================================================================
// Layer 2: Erasure
// =============================================================================
pub mod any_range;
pub mod empty_view;
pub mod sequence;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use any_range::{AnyRange, Bind, Chopped, Orphan, make_any_range, make_any_range_with};
pub use capability::{
    Admits, AllOps, BidirectionalCapabilities, Capabilities, CapabilityMap, Caps, DirectionSet,
    ForwardCapabilities, ForwardOps, Keep, OpFlags, OpSet, OpSubset, Operation, Ops,
    RandomAccessCapabilities, Restrict, SubsetOf, Supports, UniqueCapabilities, UniqueOps,
    Unsupported, op,
};
pub use direction::{Back, Direction, Front, Slot};
pub use empty_view::{EmptyOps, EmptyView};
pub use error::CapabilityError;
pub use primitives::{Absent, Bool, Implies, IsPresent, Present};
pub use sequence::{
    BySplit, Chop, ChopDestructive, ChopInPlace, ChopMode, DropN, DropOne, Empty, First, InPlace,
    Sequence, Size,
};

// Re-export proc-macros
pub use macros::{capabilities, ops};

/// Common items for defining and using sequences.
pub mod prelude {
    pub use crate::any_range::{AnyRange, Chopped, make_any_range, make_any_range_with};
    pub use crate::capability::{
        BidirectionalCapabilities, CapabilityMap, Caps, ForwardCapabilities, Ops,
        RandomAccessCapabilities, UniqueCapabilities, Unsupported,
    };
    pub use crate::direction::{Back, Direction, Front, Slot};
    pub use crate::empty_view::{EmptyOps, EmptyView};
    pub use crate::primitives::{Absent, Present};
    pub use crate::sequence::{
        BySplit, Chop, ChopDestructive, ChopInPlace, DropN, DropOne, Empty, First, InPlace,
        Sequence, Size,
    };
    pub use crate::supports;
    pub use macros::{capabilities, ops};
}
