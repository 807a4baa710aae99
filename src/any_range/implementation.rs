//! Concrete adapters behind the erased interface.
//!
//! An [`Adapter`] owns one concrete sequence and a [`Table`] of function
//! pointers, one row per direction. The table is assembled once, when the
//! value is wrapped, by walking the requested capability map: a `Present` flag
//! binds the forwarding function for that operation, an `Absent` flag binds
//! nothing. The bounds required to bind a `Present` flag are the sequence
//! protocol traits, so assembling the table doubles as the check that the
//! sequence really implements what the map declares.

use alloc::boxed::Box;

use tracing::trace;

use super::interface::{Consumed, Interface, InterfacePtr};
use crate::capability::{CapabilityMap, OpSet, Operation, op};
use crate::direction::{Back, Direction, Front, Slot};
use crate::primitives::{Absent, Bool, Present};
use crate::sequence::{self, ChopEntry, ChopMode, Sequence};

// =============================================================================
// Dispatch tables
// =============================================================================

/// Entries bound for one direction.
pub struct Row<R, E> {
    empty: Option<fn(&R) -> bool>,
    size: Option<fn(&R) -> usize>,
    first: Option<fn(&R) -> E>,
    drop_one: Option<fn(&R) -> R>,
    drop_n: Option<fn(&R, usize) -> R>,
    chop: Option<ChopEntry<R, E>>,
}

impl<R, E> Row<R, E> {
    const UNBOUND: Self = Row {
        empty: None,
        size: None,
        first: None,
        drop_one: None,
        drop_n: None,
        chop: None,
    };
}

impl<R, E> Clone for Row<R, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, E> Copy for Row<R, E> {}

/// Entries bound for a whole capability map.
pub struct Table<R, E> {
    rows: [Row<R, E>; 2],
    copy: Option<fn(&R) -> R>,
}

impl<R, E> Table<R, E> {
    /// The same table with one direction unbound.
    fn without(mut self, slot: Slot) -> Self {
        self.rows[slot.index()] = Row::UNBOUND;
        self
    }
}

impl<R, E> Clone for Table<R, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, E> Copy for Table<R, E> {}

// =============================================================================
// Binding
// =============================================================================

fn empty<R: sequence::Empty<D>, D: Direction>(range: &R) -> bool {
    range.empty(D::default())
}

fn size<R: sequence::Size<D>, D: Direction>(range: &R) -> usize {
    range.size(D::default())
}

fn first<R, D, E>(range: &R) -> E
where
    R: sequence::First<D>,
    D: Direction,
    R::Element: Into<E>,
{
    range.first(D::default()).into()
}

fn drop_one<R: sequence::DropOne<D>, D: Direction>(range: &R) -> R {
    range.drop_one(D::default())
}

fn drop_n<R: sequence::DropN<D>, D: Direction>(range: &R, n: usize) -> R {
    range.drop_n(D::default(), n)
}

/// Binds the entry for operation `Op` in direction `D` when `Self` is
/// `Present`.
pub trait Binding<R, D, E, Op: Operation>: Bool {
    fn bind() -> Option<Op::Entry<R, E>>;
}

impl<R, D, E, Op: Operation> Binding<R, D, E, Op> for Absent {
    #[inline]
    fn bind() -> Option<Op::Entry<R, E>> {
        None
    }
}

impl<R: sequence::Empty<D>, D: Direction, E> Binding<R, D, E, op::Empty> for Present {
    fn bind() -> Option<fn(&R) -> bool> {
        Some(empty::<R, D> as fn(&R) -> bool)
    }
}

impl<R: sequence::Size<D>, D: Direction, E> Binding<R, D, E, op::Size> for Present {
    fn bind() -> Option<fn(&R) -> usize> {
        Some(size::<R, D> as fn(&R) -> usize)
    }
}

impl<R, D, E> Binding<R, D, E, op::First> for Present
where
    R: sequence::First<D>,
    D: Direction,
    R::Element: Into<E>,
{
    fn bind() -> Option<fn(&R) -> E> {
        Some(first::<R, D, E> as fn(&R) -> E)
    }
}

impl<R: sequence::DropOne<D>, D: Direction, E> Binding<R, D, E, op::DropOne> for Present {
    fn bind() -> Option<fn(&R) -> R> {
        Some(drop_one::<R, D> as fn(&R) -> R)
    }
}

impl<R: sequence::DropN<D>, D: Direction, E> Binding<R, D, E, op::DropN> for Present {
    fn bind() -> Option<fn(&R, usize) -> R> {
        Some(drop_n::<R, D> as fn(&R, usize) -> R)
    }
}

impl<R, D, E> Binding<R, D, E, op::ChopDestructive> for Present
where
    R: sequence::ChopDestructive<D>,
    D: Direction,
    R::Element: Into<E>,
{
    fn bind() -> Option<ChopEntry<R, E>> {
        Some(<R::Mode as ChopMode<R, D>>::entry::<E>())
    }
}

/// Binds one row of the table.
pub trait BindRow<R, D, E>: OpSet {
    fn row() -> Row<R, E>;
}

impl<S, R, D, E> BindRow<R, D, E> for S
where
    S: OpSet,
    D: Direction,
    S::Empty: Binding<R, D, E, op::Empty>,
    S::Size: Binding<R, D, E, op::Size>,
    S::First: Binding<R, D, E, op::First>,
    S::DropOne: Binding<R, D, E, op::DropOne>,
    S::DropN: Binding<R, D, E, op::DropN>,
    S::ChopDestructive: Binding<R, D, E, op::ChopDestructive>,
{
    fn row() -> Row<R, E> {
        Row {
            empty: <S::Empty as Binding<R, D, E, op::Empty>>::bind(),
            size: <S::Size as Binding<R, D, E, op::Size>>::bind(),
            first: <S::First as Binding<R, D, E, op::First>>::bind(),
            drop_one: <S::DropOne as Binding<R, D, E, op::DropOne>>::bind(),
            drop_n: <S::DropN as Binding<R, D, E, op::DropN>>::bind(),
            chop: <S::ChopDestructive as Binding<R, D, E, op::ChopDestructive>>::bind(),
        }
    }
}

/// Binds the copy entry when `Self` is `Present`.
pub trait BindCopy<R>: Bool {
    fn bind() -> Option<fn(&R) -> R>;
}

impl<R> BindCopy<R> for Absent {
    #[inline]
    fn bind() -> Option<fn(&R) -> R> {
        None
    }
}

impl<R: Clone> BindCopy<R> for Present {
    fn bind() -> Option<fn(&R) -> R> {
        Some(R::clone as fn(&R) -> R)
    }
}

/// The sequence `R` implements every operation of `Self`, with elements
/// convertible to `E`.
#[diagnostic::on_unimplemented(
    message = "`{R}` does not implement every operation declared by `{Self}`",
    label = "cannot bind this capability map",
    note = "each declared operation needs the matching protocol trait (`Empty<D>`, `First<D>`, ...) with `Element: Into<{E}>`, and copy needs `Clone`"
)]
pub trait Bind<R, E>: CapabilityMap {
    fn table() -> Table<R, E>;
}

impl<M, R, E> Bind<R, E> for M
where
    M: CapabilityMap,
    M::Front: BindRow<R, Front, E>,
    M::Back: BindRow<R, Back, E>,
    M::Copyable: BindCopy<R>,
{
    fn table() -> Table<R, E> {
        Table {
            rows: [
                <M::Front as BindRow<R, Front, E>>::row(),
                <M::Back as BindRow<R, Back, E>>::row(),
            ],
            copy: <M::Copyable as BindCopy<R>>::bind(),
        }
    }
}

// =============================================================================
// Adapter
// =============================================================================

/// Owns one concrete sequence. `underlying` is `None` only once the value has
/// been split off by a destructive consumption.
pub(crate) struct Adapter<R, E> {
    underlying: Option<R>,
    table: Table<R, E>,
}

#[cold]
fn unbound(operation: &str, slot: Slot) -> ! {
    unreachable!("bug in any_range: `{operation}` is not bound for direction `{slot}`")
}

#[cold]
fn spent() -> ! {
    unreachable!("bug in any_range: adapter used after its value was split off")
}

impl<R: Sequence + 'static, E: 'static> Adapter<R, E> {
    pub(crate) fn new(underlying: R, table: Table<R, E>) -> Self {
        Adapter {
            underlying: Some(underlying),
            table,
        }
    }

    fn boxed(underlying: R, table: Table<R, E>) -> InterfacePtr<E> {
        Box::new(Adapter::new(underlying, table))
    }

    #[inline]
    fn value(&self) -> &R {
        match &self.underlying {
            Some(value) => value,
            None => spent(),
        }
    }

    #[inline]
    fn row(&self, slot: Slot) -> &Row<R, E> {
        &self.table.rows[slot.index()]
    }

    fn clone_value(&self) -> R {
        match self.table.copy {
            Some(copy) => copy(self.value()),
            None => unreachable!("bug in any_range: copy is not bound"),
        }
    }
}

impl<R: Sequence + 'static, E: 'static> Interface<E> for Adapter<R, E> {
    fn empty(&self, slot: Slot) -> bool {
        match self.row(slot).empty {
            Some(empty) => empty(self.value()),
            None => unbound("empty", slot),
        }
    }

    fn size(&self, slot: Slot) -> usize {
        match self.row(slot).size {
            Some(size) => size(self.value()),
            None => unbound("size", slot),
        }
    }

    fn first(&self, slot: Slot) -> E {
        match self.row(slot).first {
            Some(first) => first(self.value()),
            None => unbound("first", slot),
        }
    }

    fn drop_one(&self, slot: Slot) -> InterfacePtr<E> {
        match self.row(slot).drop_one {
            Some(drop_one) => Self::boxed(drop_one(self.value()), self.table),
            None => unbound("drop_one", slot),
        }
    }

    fn drop_n(&self, slot: Slot, n: usize) -> InterfacePtr<E> {
        match self.row(slot).drop_n {
            Some(drop_n) => Self::boxed(drop_n(self.value(), n), self.table),
            None => unbound("drop_n", slot),
        }
    }

    fn chop_destructive(&mut self, slot: Slot) -> Consumed<E> {
        match self.row(slot).chop {
            Some(ChopEntry::InPlace(chop)) => match &mut self.underlying {
                Some(value) => Consumed::InPlace(chop(value)),
                None => spent(),
            },
            Some(ChopEntry::Split(chop)) => {
                let Some(value) = self.underlying.take() else {
                    spent()
                };
                let (first, rest) = chop(value);
                trace!(direction = %slot, "split consumption, replacing adapter");
                Consumed::Replaced(first, Self::boxed(rest, self.table))
            }
            None => unbound("chop_destructive", slot),
        }
    }

    fn copy(&self) -> InterfacePtr<E> {
        Self::boxed(self.clone_value(), self.table)
    }

    fn lose_direction(&self, slot: Slot) -> InterfacePtr<E> {
        trace!(direction = %slot, "dropping direction");
        Self::boxed(self.clone_value(), self.table.without(slot))
    }
}
