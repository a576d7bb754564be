//! Self-typed builders for product hierarchies
//!
//! A product family is a trait extending [`Product`], with one concrete type
//! per member. Each member has a builder implementing [`ProductBuilder`].
//! The shared chaining operations are written once, as default methods on
//! the trait, and return `Self`, which is always the concrete builder. The
//! associated `Product` type makes `build()` return the concrete product.
//!
//! ```
//! use sovran_typekit::pizza::{NyPizza, Size, Topping};
//! use sovran_typekit::{ProductBuilder, TypeKitError};
//!
//! let pizza: NyPizza = NyPizza::builder()
//!     .size(Size::Large)
//!     .with_option(Topping::Ham)
//!     .with_option(Topping::Onion)
//!     .build()?;
//!
//! // no cast needed to reach NyPizza-only accessors
//! assert_eq!(pizza.size(), Size::Large);
//! # Ok::<(), TypeKitError>(())
//! ```

use crate::error::TypeKitError;
use std::collections::btree_set::{self, BTreeSet};
use std::fmt;

/// An ordered set of enumerated options accumulated by a builder
///
/// Products receive their own copy at build time, so further changes to a
/// builder (or a clone of it) never reach an already built product.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OptionSet<O: Ord> {
    items: BTreeSet<O>,
}

impl<O: Ord + Copy> OptionSet<O> {
    /// Creates an empty set
    pub fn new() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }

    /// Adds an option, returning false if it was already present
    pub fn insert(&mut self, option: O) -> bool {
        self.items.insert(option)
    }

    /// Removes an option, returning false if it wasn't present
    pub fn remove(&mut self, option: &O) -> bool {
        self.items.remove(option)
    }

    /// Returns true if the option has been added
    pub fn contains(&self, option: &O) -> bool {
        self.items.contains(option)
    }

    /// Iterates over copies of the options in ascending order
    pub fn iter(&self) -> impl Iterator<Item = O> + '_ {
        self.items.iter().copied()
    }

    /// Returns the number of distinct options
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no option has been added
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<O: Ord + Copy> Default for OptionSet<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Ord + fmt::Debug> fmt::Debug for OptionSet<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<O: Ord + Copy> FromIterator<O> for OptionSet<O> {
    fn from_iter<I: IntoIterator<Item = O>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<O: Ord + Copy> Extend<O> for OptionSet<O> {
    fn extend<I: IntoIterator<Item = O>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<O: Ord> IntoIterator for OptionSet<O> {
    type Item = O;
    type IntoIter = btree_set::IntoIter<O>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// The base of every product family
pub trait Product {
    type Opt: Ord + Copy + fmt::Debug;

    /// The options this product was built with
    fn options(&self) -> &OptionSet<Self::Opt>;

    fn has_option(&self, option: Self::Opt) -> bool {
        self.options().contains(&option)
    }
}

/// The base of every concrete builder
///
/// Implementors provide [`option_set`](Self::option_set) and
/// [`build`](Self::build); the chaining methods come for free and keep the
/// concrete builder type through the whole chain.
///
/// Builders are not thread-safe for concurrent mutation. `build` takes the
/// builder by value, so a builder can't be touched once it has produced a
/// product; clone it first to keep a template around.
pub trait ProductBuilder: Sized + Clone {
    type Opt: Ord + Copy + fmt::Debug;
    type Product: Product<Opt = Self::Opt>;

    /// Access to the accumulated options of the concrete builder
    fn option_set(&mut self) -> &mut OptionSet<Self::Opt>;

    /// Validates the accumulated state and produces the concrete product
    ///
    /// # Errors
    ///
    /// `TypeKitError::MissingRequiredField` if a required attribute was never
    /// set, `TypeKitError::InvariantViolation` if attributes conflict.
    fn build(self) -> Result<Self::Product, TypeKitError>;

    /// Adds one option
    fn with_option(mut self, option: Self::Opt) -> Self {
        self.option_set().insert(option);
        self
    }

    /// Adds every option a producer yields
    ///
    /// Anything convertible into the option type is accepted, not only the
    /// option type itself.
    fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self::Opt>,
    {
        self.option_set()
            .extend(options.into_iter().map(Into::into));
        self
    }

    /// Removes an option added earlier in the chain
    fn without_option(mut self, option: Self::Opt) -> Self {
        self.option_set().remove(&option);
        self
    }
}

/// Fails with `MissingRequiredField` when a required attribute is unset
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, TypeKitError> {
    value.ok_or(TypeKitError::MissingRequiredField { field })
}
