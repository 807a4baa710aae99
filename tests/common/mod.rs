//! Concrete sequences shared by the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use tola_range::prelude::*;
use tola_range::{AllOps, ForwardOps, UniqueOps};

// =============================================================================
// Indexed: random access over a shared slice
// =============================================================================

/// A window `[start, end)` into a shared slice. Every operation, both ends.
pub struct Indexed<T> {
    items: Rc<[T]>,
    start: usize,
    end: usize,
}

impl<T> Indexed<T> {
    pub fn new(items: Vec<T>) -> Self {
        let items: Rc<[T]> = items.into();
        let end = items.len();
        Indexed {
            items,
            start: 0,
            end,
        }
    }
}

impl<T> Clone for Indexed<T> {
    fn clone(&self) -> Self {
        Indexed {
            items: Rc::clone(&self.items),
            start: self.start,
            end: self.end,
        }
    }
}

impl<T: Clone> Sequence for Indexed<T> {
    type Element = T;
    type Capabilities = Caps<Front, AllOps, AllOps, Present>;
}

impl<T: Clone, D: Direction> Empty<D> for Indexed<T> {
    fn empty(&self, _: D) -> bool {
        self.start == self.end
    }
}

impl<T: Clone, D: Direction> Size<D> for Indexed<T> {
    fn size(&self, _: D) -> usize {
        self.end - self.start
    }
}

impl<T: Clone> First<Front> for Indexed<T> {
    fn first(&self, _: Front) -> T {
        self.items[self.start].clone()
    }
}

impl<T: Clone> First<Back> for Indexed<T> {
    fn first(&self, _: Back) -> T {
        self.items[self.end - 1].clone()
    }
}

impl<T: Clone> DropN<Front> for Indexed<T> {
    fn drop_n(&self, _: Front, n: usize) -> Self {
        assert!(n <= self.end - self.start, "dropping past the end");
        Indexed {
            start: self.start + n,
            ..self.clone()
        }
    }
}

impl<T: Clone> DropN<Back> for Indexed<T> {
    fn drop_n(&self, _: Back, n: usize) -> Self {
        assert!(n <= self.end - self.start, "dropping past the start");
        Indexed {
            end: self.end - n,
            ..self.clone()
        }
    }
}

impl<T: Clone, D: Direction> DropOne<D> for Indexed<T>
where
    Indexed<T>: DropN<D>,
{
    fn drop_one(&self, direction: D) -> Self {
        self.drop_n(direction, 1)
    }
}

macro_rules! indexed_chop {
    ($($direction:ident),*) => {$(
        impl<T: Clone> ChopInPlace<$direction> for Indexed<T> {
            fn chop_in_place(&mut self, direction: $direction) -> T {
                let first = self.first(direction);
                *self = self.drop_one(direction);
                first
            }
        }
    )*};
}

indexed_chop!(Front, Back);

impl<T: Clone, D: Direction> ChopDestructive<D> for Indexed<T>
where
    Indexed<T>: ChopInPlace<D>,
{
    type Mode = InPlace;
}

// =============================================================================
// Chain: a singly linked list that can only be split
// =============================================================================

struct Node<T> {
    value: T,
    next: Chain<T>,
}

/// Front only, not copyable; consumption is by splitting off the head.
pub struct Chain<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> Chain<T> {
    pub fn new() -> Self {
        Chain { head: None }
    }

    pub fn push_front(self, value: T) -> Self {
        Chain {
            head: Some(Box::new(Node { value, next: self })),
        }
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        values
            .into_iter()
            .rev()
            .fold(Chain::new(), |chain, value| chain.push_front(value))
    }
}

// Iterative, so long chains do not overflow the stack.
impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.head.take();
        }
    }
}

pub type ChainOps = Ops<Present, Absent, Present, Absent, Absent, Present>;

impl<T: Clone> Sequence for Chain<T> {
    type Element = T;
    type Capabilities = Caps<Front, ChainOps>;
}

impl<T: Clone> Empty<Front> for Chain<T> {
    fn empty(&self, _: Front) -> bool {
        self.head.is_none()
    }
}

impl<T: Clone> First<Front> for Chain<T> {
    fn first(&self, _: Front) -> T {
        match &self.head {
            Some(node) => node.value.clone(),
            None => panic!("first of an empty chain"),
        }
    }
}

impl<T: Clone> Chop<Front> for Chain<T> {
    fn chop(mut self, _: Front) -> (T, Self) {
        let Some(node) = self.head.take() else {
            panic!("chop of an empty chain");
        };
        let Node { value, next } = *node;
        (value, next)
    }
}

impl<T: Clone> ChopDestructive<Front> for Chain<T> {
    type Mode = BySplit;
}

// =============================================================================
// Counter: an endless, read-once source
// =============================================================================

/// Yields `next, next + 1, ...` forever. Counts how often it was consumed.
pub struct Counter {
    pub next: u64,
    pub consumed: Rc<Cell<usize>>,
}

impl Counter {
    pub fn starting_at(next: u64) -> Self {
        Counter {
            next,
            consumed: Rc::new(Cell::new(0)),
        }
    }
}

impl Sequence for Counter {
    type Element = u64;
    type Capabilities = Caps<Front, UniqueOps>;
}

impl Empty<Front> for Counter {
    fn empty(&self, _: Front) -> bool {
        false
    }
}

impl ChopInPlace<Front> for Counter {
    fn chop_in_place(&mut self, _: Front) -> u64 {
        self.consumed.set(self.consumed.get() + 1);
        self.next += 1;
        self.next - 1
    }
}

impl ChopDestructive<Front> for Counter {
    type Mode = InPlace;
}

// =============================================================================
// Stack: back is the default direction
// =============================================================================

/// Read from the top (`Back`) of a vector.
#[derive(Clone)]
pub struct Stack<T>(pub Vec<T>);

pub type StackOps = Ops<Present, Present, Present, Absent, Absent, Present>;

impl<T: Clone> Sequence for Stack<T> {
    type Element = T;
    type Capabilities = Caps<Back, Unsupported, StackOps, Present>;
}

impl<T: Clone> Empty<Back> for Stack<T> {
    fn empty(&self, _: Back) -> bool {
        self.0.is_empty()
    }
}

impl<T: Clone> Size<Back> for Stack<T> {
    fn size(&self, _: Back) -> usize {
        self.0.len()
    }
}

impl<T: Clone> First<Back> for Stack<T> {
    fn first(&self, _: Back) -> T {
        match self.0.last() {
            Some(top) => top.clone(),
            None => panic!("first of an empty stack"),
        }
    }
}

impl<T: Clone> ChopInPlace<Back> for Stack<T> {
    fn chop_in_place(&mut self, _: Back) -> T {
        match self.0.pop() {
            Some(top) => top,
            None => panic!("chop of an empty stack"),
        }
    }
}

impl<T: Clone> ChopDestructive<Back> for Stack<T> {
    type Mode = InPlace;
}

/// Forward ops on the front only, copyable.
pub type FrontForward = Caps<Front, ForwardOps, Unsupported, Present>;
