//! Stateless values handed out under any type parameter
//!
//! Each value here never reads, stores, or branches on a `T`, so the same
//! behavior serves every instantiation. They are zero-sized, `Copy`, and
//! `Send + Sync` whatever `T` is, which makes them safe to share between
//! threads without locking.
//!
//! ```
//! use sovran_typekit::shared::{empty_container, identity, reverse_order};
//!
//! assert_eq!(identity::<&str>()("same"), "same");
//! assert!(empty_container::<String>().is_empty());
//!
//! let mut scores = vec![3, 9, 1];
//! scores.sort_by(reverse_order::<i32>().as_fn());
//! assert_eq!(scores, vec![9, 3, 1]);
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::iter;
use std::marker::PhantomData;

fn identity_fn<T>(value: T) -> T {
    value
}

/// A function returning its argument unchanged
pub fn identity<T>() -> fn(T) -> T {
    identity_fn::<T>
}

/// A container that is always empty
pub struct EmptyContainer<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> EmptyContainer<T> {
    /// Always 0
    pub fn len(&self) -> usize {
        0
    }

    /// Always true
    pub fn is_empty(&self) -> bool {
        true
    }

    /// Always false
    pub fn contains(&self, _item: &T) -> bool {
        false
    }

    /// Always `None`
    pub fn get(&self, _index: usize) -> Option<&T> {
        None
    }

    /// An iterator that yields nothing
    pub fn iter(&self) -> iter::Empty<&T> {
        iter::empty()
    }
}

impl<T> Clone for EmptyContainer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EmptyContainer<T> {}

impl<T> fmt::Debug for EmptyContainer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[]")
    }
}

impl<T> IntoIterator for EmptyContainer<T> {
    type Item = T;
    type IntoIter = iter::Empty<T>;

    fn into_iter(self) -> Self::IntoIter {
        iter::empty()
    }
}

/// The empty container, for any element type
pub fn empty_container<T>() -> EmptyContainer<T> {
    EmptyContainer {
        _marker: PhantomData,
    }
}

/// A comparator imposing the reverse of `T`'s natural order
pub struct ReverseOrder<T: ?Sized> {
    _marker: PhantomData<fn(&T, &T)>,
}

fn reverse_cmp<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

impl<T: Ord + ?Sized> ReverseOrder<T> {
    /// Compares `a` and `b` in reverse of their natural order
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        reverse_cmp(a, b)
    }

    /// The comparator as a plain function, for `sort_by` and friends
    pub fn as_fn(&self) -> fn(&T, &T) -> Ordering {
        reverse_cmp::<T>
    }
}

impl<T: ?Sized> Clone for ReverseOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ReverseOrder<T> {}

impl<T: ?Sized> fmt::Debug for ReverseOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReverseOrder")
    }
}

/// The reverse-order comparator, for any ordered type
pub fn reverse_order<T: Ord + ?Sized>() -> ReverseOrder<T> {
    ReverseOrder {
        _marker: PhantomData,
    }
}

/// The union of two producers, into a set of anything both convert into
pub fn union<E, A, B>(a: A, b: B) -> BTreeSet<E>
where
    E: Ord,
    A: IntoIterator,
    A::Item: Into<E>,
    B: IntoIterator,
    B::Item: Into<E>,
{
    a.into_iter()
        .map(Into::into)
        .chain(b.into_iter().map(Into::into))
        .collect()
}

/// The largest item a producer yields, or `None` if it yields nothing
pub fn max<T, I>(items: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    items.into_iter().max()
}
