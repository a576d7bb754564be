//! Producer/consumer bulk transfers
//!
//! A parameter that only supplies `T`s to an operation is a producer and
//! accepts anything yielding items that convert *into* `T`. A parameter that
//! only receives `T`s is a consumer and accepts any sink for a type `T`
//! converts into. A parameter used both ways stays exactly `T`.
//!
//! Rust has no subclassing, so "subtype of `T`" is expressed as `Into<T>`;
//! `Square: Into<Box<dyn Figure>>` plays the part of `Square extends Figure`.
//!
//! ```
//! use sovran_typekit::variance::{transfer_in, transfer_out, Stack};
//!
//! let mut wide: Stack<i64> = Stack::new();
//! let narrow: Vec<i32> = vec![1, 2, 3];
//! transfer_in(&mut wide, narrow);
//!
//! let mut sink: Vec<i128> = Vec::new();
//! transfer_out(&mut wide, &mut sink);
//! assert_eq!(sink, vec![3, 2, 1]);
//! assert!(wide.is_empty());
//! ```

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::Hash;
use tracing::trace;

/// The minimal shape a bulk transfer needs from a collection
///
/// Method names stay clear of the inherent ones on `Vec` and `VecDeque`, so
/// importing this trait never changes what `vec.iter()` or `vec.insert(..)`
/// resolve to.
pub trait Container<T> {
    /// Adds one item in the collection's natural position
    fn add(&mut self, item: T);

    /// Takes one item out, or `None` when empty
    fn remove_one(&mut self) -> Option<T>;

    /// Borrows every item, in the order `remove_one` would take them
    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Anything that accepts items of type `T`
///
/// The write-only counterpart of [`Container`]: consumers only need this.
pub trait Sink<T> {
    fn accept(&mut self, item: T);
}

impl<T> Sink<T> for Vec<T> {
    fn accept(&mut self, item: T) {
        self.push(item);
    }
}

impl<T> Sink<T> for VecDeque<T> {
    fn accept(&mut self, item: T) {
        self.push_back(item);
    }
}

impl<T: Ord> Sink<T> for BTreeSet<T> {
    fn accept(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T: Eq + Hash> Sink<T> for HashSet<T> {
    fn accept(&mut self, item: T) {
        self.insert(item);
    }
}

impl<T> Sink<T> for Stack<T> {
    fn accept(&mut self, item: T) {
        self.push(item);
    }
}

/// Moves every item a producer yields into `dst`
///
/// Returns the number of items moved. The producer is drained to exhaustion.
pub fn transfer_in<T, C, I>(dst: &mut C, src: I) -> usize
where
    C: Container<T> + ?Sized,
    I: IntoIterator,
    I::Item: Into<T>,
{
    let mut moved = 0;
    for item in src {
        dst.add(item.into());
        moved += 1;
    }
    trace!(moved, "variance: transfer_in");
    moved
}

/// Drains `src` into a consumer of any type `T` converts into
///
/// Returns the number of items moved. `src` is empty afterwards.
pub fn transfer_out<T, U, C, S>(src: &mut C, dst: &mut S) -> usize
where
    C: Container<T> + ?Sized,
    T: Into<U>,
    S: Sink<U> + ?Sized,
{
    let mut moved = 0;
    while let Some(item) = src.remove_one() {
        dst.accept(item.into());
        moved += 1;
    }
    trace!(moved, "variance: transfer_out");
    moved
}

/// A growable last-in first-out stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    elements: Vec<T>,
}

impl<T> Stack<T> {
    const DEFAULT_INITIAL_CAPACITY: usize = 16;

    /// Creates an empty stack with room for a few items
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(Self::DEFAULT_INITIAL_CAPACITY),
        }
    }

    /// Pushes an item onto the top
    pub fn push(&mut self, item: T) {
        self.elements.push(item);
    }

    /// Removes the top item, or returns `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Borrows the top item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the stack holds nothing
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Pushes everything a producer yields; see [`transfer_in`]
    pub fn push_all<I>(&mut self, src: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        transfer_in(self, src)
    }

    /// Pops everything into a consumer; see [`transfer_out`]
    pub fn pop_all<U, S>(&mut self, dst: &mut S) -> usize
    where
        T: Into<U>,
        S: Sink<U> + ?Sized,
    {
        transfer_out(self, dst)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> Container<T> for Stack<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn remove_one(&mut self) -> Option<T> {
        self.pop()
    }

    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.elements.iter().rev()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Container<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }

    fn remove_one(&mut self) -> Option<T> {
        self.pop()
    }

    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter().rev()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// Removal order is first-in first-out
impl<T> Container<T> for VecDeque<T> {
    fn add(&mut self, item: T) {
        self.push_back(item);
    }

    fn remove_one(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn items<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Stack::new();
        stack.push('a');
        stack.push('b');
        assert_eq!(stack.peek(), Some(&'b'));
        assert_eq!(stack.pop(), Some('b'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_push_all_from_narrower_producer() {
        let mut stack: Stack<f64> = Stack::new();
        let moved = stack.push_all([1.5f32, 2.5f32]);
        assert_eq!(moved, 2);
        assert_eq!(stack.items().copied().collect::<Vec<_>>(), vec![2.5, 1.5]);
    }

    #[test]
    fn test_pop_all_into_wider_consumer() {
        let mut stack: Stack<u8> = [1u8, 2, 3].into_iter().collect();
        let mut sink: BTreeSet<u32> = BTreeSet::new();
        assert_eq!(stack.pop_all(&mut sink), 3);
        assert!(stack.is_empty());
        assert_eq!(sink.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_exhaustion_is_not_an_error() {
        let mut empty: Vec<String> = Vec::new();
        let mut sink: Vec<String> = Vec::new();
        assert_eq!(transfer_out(&mut empty, &mut sink), 0);
        assert_eq!(transfer_in(&mut sink, Vec::<&str>::new()), 0);
    }

    #[test]
    fn test_vec_deque_drains_in_fifo_order() {
        let mut queue: VecDeque<&str> = VecDeque::new();
        transfer_in(&mut queue, ["first", "second"]);
        assert_eq!(Container::len(&queue), 2);

        let mut out: Vec<String> = Vec::new();
        transfer_out(&mut queue, &mut out);
        assert_eq!(out, vec!["first".to_string(), "second".to_string()]);
        assert!(Container::is_empty(&queue));
    }

    #[test]
    fn test_stack_round_trips_through_vec() {
        let mut stack = Stack::default();
        stack.extend(["x", "y"]);
        let mut v: Vec<&str> = Vec::new();
        stack.pop_all(&mut v);
        assert_eq!(v, vec!["y", "x"]);
    }
}
