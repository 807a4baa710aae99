//! # Capability Maps
//!
//! Type-level description of what a sequence can do.
//!
//! ## Structure
//!
//! ```text
//! CapabilityMap (Caps<Default, Front, Back, Copyable>)
//!   |-- DefaultDirection : Front | Back
//!   |-- Copyable         : Present | Absent
//!   |-- Front            : OpSet (Ops<..> or Unsupported)
//!   `-- Back             : OpSet
//!
//! OpSet (Ops<Empty, Size, First, DropOne, DropN, ChopDestructive>)
//!   `-- one Present/Absent flag per operation, plus Key (is the direction there?)
//! ```
//!
//! A query such as "can `M` do `First` from the `Back`?" is the type
//! `<op::First as Operation>::In<<Back as Direction>::Entry<M>>`, which is
//! either `Present` or `Absent`. [`Supports`] turns that into a bound.
//!
//! Every map also has a const runtime mirror, [`CapabilityMap::DESCRIPTOR`],
//! used for logging, diagnostics and by the conversion algebra to decide which
//! directions have to be dropped.

use core::marker::PhantomData;

use crate::direction::{Direction, Front};
use crate::primitives::{Absent, Bool, Implies, IsPresent, Present};

pub mod descriptor;
pub mod subset;

pub use descriptor::{Capabilities, OpFlags};
pub use subset::{OpSubset, SubsetOf};

// =============================================================================
// Operations
// =============================================================================

/// A primitive sequence operation.
pub trait Operation: Copy + Default + 'static {
    /// Lower-case name, as written in `capabilities!`.
    const NAME: &'static str;
    /// Bit of this operation in [`OpFlags`].
    const FLAG: OpFlags;
    /// The flag an operation set declares for this operation.
    type In<S: OpSet>: Bool;
    /// Dispatch entry for a sequence `R` viewed with element type `E`.
    #[doc(hidden)]
    type Entry<R, E>: Copy;
}

// Generates the marker struct, the `Operation` impl and the `OpFlags`
// constant for each operation from one table.
macro_rules! operations {
    ($( $(#[$doc:meta])* $name:ident / $snake:ident = $bit:literal => $entry:ty ),* $(,)?) => {
        paste::paste! {
            /// Operation markers.
            pub mod op {
                use super::{OpFlags, OpSet, Operation};
                use crate::sequence::ChopEntry;

                $(
                    $(#[$doc])*
                    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                    pub struct $name;

                    impl Operation for $name {
                        const NAME: &'static str = stringify!($snake);
                        const FLAG: OpFlags = OpFlags::[<$snake:upper>];
                        type In<S: OpSet> = S::$name;
                        type Entry<R, E> = $entry;
                    }
                )*
            }

            impl OpFlags {
                $(
                    pub const [<$snake:upper>]: OpFlags = OpFlags::from_bits(1 << $bit);
                )*

                /// Every operation with its name, in bit order.
                pub const NAMED: [(&'static str, OpFlags); 6] = [
                    $( (stringify!($snake), OpFlags::[<$snake:upper>]) ),*
                ];
            }
        }
    };
}

operations! {
    /// Emptiness test.
    Empty / empty = 0 => fn(&R) -> bool,
    /// Number of elements.
    Size / size = 1 => fn(&R) -> usize,
    /// Read the first element.
    First / first = 2 => fn(&R) -> E,
    /// A new sequence without the first element.
    DropOne / drop_one = 3 => fn(&R) -> R,
    /// A new sequence without the first `n` elements.
    DropN / drop_n = 4 => fn(&R, usize) -> R,
    /// Consume the first element, mutating the sequence.
    ChopDestructive / chop_destructive = 5 => ChopEntry<R, E>,
}

// =============================================================================
// Operation Sets
// =============================================================================

/// The operations available in one direction.
pub trait OpSet: 'static {
    /// `Present` iff the direction is a key of the map at all.
    type Key: Bool;
    type Empty: Bool;
    type Size: Bool;
    type First: Bool;
    type DropOne: Bool;
    type DropN: Bool;
    type ChopDestructive: Bool;

    /// Runtime mirror; `None` when the direction is absent.
    const FLAGS: Option<OpFlags> = if <Self::Key as Bool>::VALUE {
        Some(OpFlags::collect([
            <Self::Empty as Bool>::VALUE,
            <Self::Size as Bool>::VALUE,
            <Self::First as Bool>::VALUE,
            <Self::DropOne as Bool>::VALUE,
            <Self::DropN as Bool>::VALUE,
            <Self::ChopDestructive as Bool>::VALUE,
        ]))
    } else {
        None
    };
}

/// A present direction with the given operation flags.
pub struct Ops<Em = Absent, Sz = Absent, Fi = Absent, D1 = Absent, Dn = Absent, Ch = Absent>(
    PhantomData<(Em, Sz, Fi, D1, Dn, Ch)>,
);

impl<Em, Sz, Fi, D1, Dn, Ch> OpSet for Ops<Em, Sz, Fi, D1, Dn, Ch>
where
    Em: Bool,
    Sz: Bool,
    Fi: Bool,
    D1: Bool,
    Dn: Bool,
    Ch: Bool,
{
    type Key = Present;
    type Empty = Em;
    type Size = Sz;
    type First = Fi;
    type DropOne = D1;
    type DropN = Dn;
    type ChopDestructive = Ch;
}

/// A direction that is not part of the map.
pub struct Unsupported;

impl OpSet for Unsupported {
    type Key = Absent;
    type Empty = Absent;
    type Size = Absent;
    type First = Absent;
    type DropOne = Absent;
    type DropN = Absent;
    type ChopDestructive = Absent;
}

/// Every operation.
pub type AllOps = Ops<Present, Present, Present, Present, Present, Present>;

/// Empty, first, drop one, chop.
pub type ForwardOps = Ops<Present, Absent, Present, Present, Absent, Present>;

/// Empty and chop only: a sequence that can be read exactly once.
pub type UniqueOps = Ops<Present, Absent, Absent, Absent, Absent, Present>;

// =============================================================================
// Capability Maps
// =============================================================================

/// Full static description of a sequence type's operations per direction.
pub trait CapabilityMap: 'static {
    type DefaultDirection: Direction;
    /// `Present` iff the sequence can be copied.
    type Copyable: Bool;
    type Front: OpSet;
    type Back: OpSet;

    /// Runtime mirror of this map.
    const DESCRIPTOR: Capabilities = Capabilities::from_parts(
        <Self::DefaultDirection as Direction>::SLOT,
        <Self::Copyable as Bool>::VALUE,
        [<Self::Front as OpSet>::FLAGS, <Self::Back as OpSet>::FLAGS],
    );
}

/// The standard capability map.
///
/// `Dd` is the default direction, `Fr`/`Bk` the operation sets for `Front`
/// and `Back`, `Cp` the copy flag. The default direction must be a key;
/// wrapping a value with a map that violates this fails at compile time.
pub struct Caps<Dd, Fr, Bk = Unsupported, Cp = Absent>(PhantomData<(Dd, Fr, Bk, Cp)>);

impl<Dd, Fr, Bk, Cp> CapabilityMap for Caps<Dd, Fr, Bk, Cp>
where
    Dd: Direction,
    Fr: OpSet,
    Bk: OpSet,
    Cp: Bool,
{
    type DefaultDirection = Dd;
    type Copyable = Cp;
    type Front = Fr;
    type Back = Bk;
}

/// Read once, front only, not copyable.
pub type UniqueCapabilities = Caps<Front, UniqueOps>;

/// Forward traversal with copying. The default for `AnyRange`.
pub type ForwardCapabilities = Caps<Front, ForwardOps, Unsupported, Present>;

/// Forward and backward traversal with copying.
pub type BidirectionalCapabilities = Caps<Front, ForwardOps, ForwardOps, Present>;

/// Every operation in both directions, with copying.
pub type RandomAccessCapabilities = Caps<Front, AllOps, AllOps, Present>;

// =============================================================================
// Queries
// =============================================================================

/// `Self` declares operation `Op` in direction `D`.
///
/// This is the bound every per-operation method of `AnyRange` carries, so an
/// operation outside the map is not a method of the type at all.
#[diagnostic::on_unimplemented(
    message = "operation `{Op}` is not declared for direction `{D}` in `{Self}`",
    label = "this capability map does not allow the call",
    note = "narrowing never adds capabilities; wrap with a map that declares the operation"
)]
pub trait Supports<D: Direction, Op: Operation>: CapabilityMap {}

impl<M, D, Op> Supports<D, Op> for M
where
    M: CapabilityMap,
    D: Direction,
    Op: Operation,
    <Op as Operation>::In<<D as Direction>::Entry<M>>: IsPresent,
{
}

/// A set of directions given when wrapping a value.
///
/// `()` stands for the default direction of `M`.
pub trait DirectionSet<M: CapabilityMap> {
    type Front: Bool;
    type Back: Bool;
}

impl<M: CapabilityMap> DirectionSet<M> for () {
    type Front = <M::DefaultDirection as Direction>::IsFront;
    type Back = <M::DefaultDirection as Direction>::IsBack;
}

impl<M: CapabilityMap, D: Direction> DirectionSet<M> for (D,) {
    type Front = D::IsFront;
    type Back = D::IsBack;
}

impl<M: CapabilityMap, D1: Direction, D2: Direction> DirectionSet<M> for (D1, D2) {
    type Front = <D1::IsFront as Bool>::Or<D2::IsFront>;
    type Back = <D1::IsBack as Bool>::Or<D2::IsBack>;
}

/// Every direction `M` uses is in `Self`.
#[diagnostic::on_unimplemented(
    message = "`{M}` uses a direction that is not in `{Self}`",
    label = "the wrapped value is only viewed in these directions",
    note = "pass every direction of the map to `AnyRange::with_directions`"
)]
pub trait Admits<M: CapabilityMap>: DirectionSet<M> {}

impl<Dirs, M> Admits<M> for Dirs
where
    M: CapabilityMap,
    Dirs: DirectionSet<M>,
    <M::Front as OpSet>::Key: Implies<<Dirs as DirectionSet<M>>::Front>,
    <M::Back as OpSet>::Key: Implies<<Dirs as DirectionSet<M>>::Back>,
{
}

/// Keeps the operation set `S` when `Self` is `Present`, otherwise drops the
/// whole direction.
pub trait Keep<S: OpSet>: Bool {
    type Output: OpSet;
}

impl<S: OpSet> Keep<S> for Present {
    type Output = S;
}

impl<S: OpSet> Keep<S> for Absent {
    type Output = Unsupported;
}

/// The part of `M` reachable through the directions `Self`.
///
/// The default direction and copyability of `M` are kept; a default direction
/// outside `Self` leaves an invalid map, which wrapping rejects.
pub trait Restrict<M: CapabilityMap>: DirectionSet<M> {
    type Map: CapabilityMap;
}

impl<Dirs, M> Restrict<M> for Dirs
where
    M: CapabilityMap,
    Dirs: DirectionSet<M>,
    <Dirs as DirectionSet<M>>::Front: Keep<<M as CapabilityMap>::Front>,
    <Dirs as DirectionSet<M>>::Back: Keep<<M as CapabilityMap>::Back>,
{
    type Map = Caps<
        <M as CapabilityMap>::DefaultDirection,
        <<Dirs as DirectionSet<M>>::Front as Keep<<M as CapabilityMap>::Front>>::Output,
        <<Dirs as DirectionSet<M>>::Back as Keep<<M as CapabilityMap>::Back>>::Output,
        <M as CapabilityMap>::Copyable,
    >;
}

/// Compile-time probe: does map `$map` declare `$op` for `$dir`?
///
/// Evaluates to a `bool` constant. Uses the inherent-const fallback: an
/// inherent const shadows the trait const only when the bound holds.
///
/// ```
/// use tola_range::{supports, Back, Front, ForwardCapabilities};
///
/// assert!(supports!(ForwardCapabilities, Front => First));
/// assert!(!supports!(ForwardCapabilities, Back => First));
/// assert!(!supports!(ForwardCapabilities, Front => Size));
/// ```
#[macro_export]
macro_rules! supports {
    ($map:ty, $dir:ty => $op:ident) => {{
        struct __Probe<T>(core::marker::PhantomData<T>);

        trait __Fallback {
            const VAL: bool = false;
        }
        impl<T> __Fallback for __Probe<T> {}

        impl<T: $crate::Supports<$dir, $crate::op::$op>> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$map>::VAL
    }};
}
