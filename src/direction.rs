//! Traversal directions.
//!
//! A direction is a zero-sized tag naming the end of a sequence an operation
//! addresses. Each direction owns one slot of a capability map.

use core::fmt;

use crate::capability::{CapabilityMap, OpSet};
use crate::primitives::{Absent, Bool, Present};

/// Runtime mirror of a direction: the index of its row in a capability map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Front = 0,
    Back = 1,
}

impl Slot {
    /// Every slot, in row order.
    pub const ALL: [Slot; 2] = [Slot::Front, Slot::Back];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn reverse(self) -> Slot {
        match self {
            Slot::Front => Slot::Back,
            Slot::Back => Slot::Front,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Slot::Front => "front",
            Slot::Back => "back",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A traversal direction.
///
/// Directions carry no data, so a value can always be produced with
/// `Default::default()`.
pub trait Direction: Copy + Default + fmt::Debug + 'static {
    /// Row of this direction in a capability map.
    const SLOT: Slot;

    /// The opposite end.
    type Reverse: Direction;

    /// `Present` iff this is `Front`.
    type IsFront: Bool;
    /// `Present` iff this is `Back`.
    type IsBack: Bool;

    /// The operation set `M` declares for this direction.
    type Entry<M: CapabilityMap>: OpSet;

    #[inline]
    fn reverse(self) -> Self::Reverse {
        Self::Reverse::default()
    }
}

/// Traversal from the first element onwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Front;

/// Traversal from the last element backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Back;

impl Direction for Front {
    const SLOT: Slot = Slot::Front;
    type Reverse = Back;
    type IsFront = Present;
    type IsBack = Absent;
    type Entry<M: CapabilityMap> = M::Front;
}

impl Direction for Back {
    const SLOT: Slot = Slot::Back;
    type Reverse = Front;
    type IsFront = Absent;
    type IsBack = Present;
    type Entry<M: CapabilityMap> = M::Back;
}
