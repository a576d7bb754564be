//! # sovran-typekit
//!
//! Compile-time type safety for values whose types are only known by key,
//! or that are built through a family of related builders.
//!
//! `sovran-typekit` bundles four small tools:
//!
//! - **[`TypeToken`] and [`TypeMap`]**: a heterogeneous container holding one
//!   value per type, handing each back as exactly the type it was stored as
//! - **[`ProductBuilder`]**: self-typed builders whose chaining keeps the
//!   concrete builder type and whose `build()` returns the concrete product
//!   ([`pizza`], [`figure`]), plus a flat builder for comparison
//!   ([`nutrition`])
//! - **[`shared`]**: stateless values (identity, empty container, reverse
//!   order) handed out under any type parameter
//! - **[`variance`]**: bulk transfers that accept narrower producers and wider
//!   consumers
//!
//! Nothing here blocks, performs I/O, or synchronizes. `TypeMap`, builders
//! and [`variance::Stack`] are plain mutable values; wrap them in a lock to
//! share them between threads.
//!
//! ## Usage Examples
//!
//! ### Storing Unrelated Types Together
//!
//! ```rust
//! use sovran_typekit::{TypeKitError, TypeMap, TypeToken};
//!
//! fn main() -> Result<(), TypeKitError> {
//!     let mut favorites = TypeMap::new();
//!
//!     favorites.put(TypeToken::<String>::of(), "Java".to_string())?;
//!     favorites.put(TypeToken::<i64>::of(), 42)?;
//!     favorites.put(TypeToken::<Vec<&str>>::of(), vec!["Hello"])?;
//!
//!     // The token decides the return type; no casts at the call site
//!     let text: Option<&String> = favorites.get(TypeToken::of());
//!     let number: Option<&i64> = favorites.get(TypeToken::of());
//!
//!     println!("Text: {:?}", text);
//!     println!("Number: {:?}", number);
//!
//!     // Update a value in place
//!     favorites.with_mut(TypeToken::<Vec<&str>>::of(), |v| v.push("World!"))?;
//!
//!     // Absence is not an error
//!     assert!(favorites.get(TypeToken::<bool>::of()).is_none());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Building Through a Hierarchy
//!
//! ```rust
//! use sovran_typekit::pizza::{Calzone, NyPizza, PizzaBuilder, Size, Topping};
//! use sovran_typekit::{ProductBuilder, TypeKitError};
//!
//! fn main() -> Result<(), TypeKitError> {
//!     let pizza = NyPizza::builder()
//!         .size(Size::Small)
//!         .add_topping(Topping::Sausage)
//!         .with_option(Topping::Onion)
//!         .build()?;
//!
//!     let calzone = Calzone::builder()
//!         .add_topping(Topping::Ham)
//!         .sauce_inside()
//!         .build()?;
//!
//!     // build() returned NyPizza and Calzone, not a base type
//!     println!("{} / size {:?}", pizza, pizza.size());
//!     println!("{} / sauce inside: {}", calzone, calzone.is_sauce_inside());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_typekit::figure::{Circle, FigureBuilder};
//! use sovran_typekit::{AnyValue, ProductBuilder, TypeKey, TypeKitError, TypeMap};
//!
//! let mut map = TypeMap::new();
//!
//! // The unchecked entry point verifies the value against the key
//! match map.put_erased(TypeKey::of::<String>(), AnyValue::new(7u8)) {
//!     Ok(()) => println!("stored"),
//!     Err(TypeKitError::TypeMismatch { expected, found }) => {
//!         println!("expected {}, got {}", expected, found)
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! // Builders report what is missing or inconsistent
//! match Circle::builder().max_area(1.0).build() {
//!     Ok(circle) => println!("Circle: {:?}", circle),
//!     Err(TypeKitError::MissingRequiredField { field }) => println!("{} is required", field),
//!     Err(TypeKitError::InvariantViolation { rule, detail }) => println!("{}: {}", rule, detail),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

mod any_value;
mod builder;
mod error;
mod map;
mod token;

pub mod figure;
pub mod nutrition;
pub mod pizza;
pub mod shared;
pub mod variance;

pub use any_value::AnyValue;
pub use builder::{OptionSet, Product, ProductBuilder};
pub use error::TypeKitError;
pub use map::TypeMap;
pub use token::{TypeKey, TypeToken};

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
