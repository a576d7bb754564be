//! A pizza family built with [`ProductBuilder`]
//!
//! [`NyPizza`] needs a size; [`Calzone`] has a sauce flag no other pizza has.
//! Both builders get `with_option`/`with_options` from [`ProductBuilder`],
//! `add_topping` from [`PizzaBuilder`], and add their own chaining methods on
//! top.

use crate::builder::{required, OptionSet, Product, ProductBuilder};
use crate::error::TypeKitError;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topping {
    Ham,
    Mushroom,
    Onion,
    Pepper,
    Sausage,
}

/// Every pizza, whatever its style
pub trait Pizza: Product<Opt = Topping> {
    fn toppings(&self) -> &OptionSet<Topping> {
        self.options()
    }

    fn describe(&self) -> String;
}

/// Chaining shared by every pizza builder
pub trait PizzaBuilder: ProductBuilder<Opt = Topping> {
    fn add_topping(self, topping: Topping) -> Self {
        self.with_option(topping)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// New York style pizza
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NyPizza {
    size: Size,
    toppings: OptionSet<Topping>,
}

impl NyPizza {
    /// Starts a builder with no size and no toppings
    pub fn builder() -> NyPizzaBuilder {
        NyPizzaBuilder::default()
    }

    /// The size of the pizza
    pub fn size(&self) -> Size {
        self.size
    }
}

impl Product for NyPizza {
    type Opt = Topping;

    fn options(&self) -> &OptionSet<Topping> {
        &self.toppings
    }
}

impl Pizza for NyPizza {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NyPizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NyPizza[size={:?}, toppings={:?}]", self.size, self.toppings)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NyPizzaBuilder {
    size: Option<Size>,
    toppings: OptionSet<Topping>,
}

impl NyPizzaBuilder {
    /// A builder with the required size already set
    pub fn with_size(size: Size) -> Self {
        Self::default().size(size)
    }

    /// Sets the required size
    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

impl ProductBuilder for NyPizzaBuilder {
    type Opt = Topping;
    type Product = NyPizza;

    fn option_set(&mut self) -> &mut OptionSet<Topping> {
        &mut self.toppings
    }

    fn build(self) -> Result<NyPizza, TypeKitError> {
        let pizza = NyPizza {
            size: required(self.size, "size")?,
            toppings: self.toppings,
        };
        debug!(pizza = %pizza, "built pizza");
        Ok(pizza)
    }
}

impl PizzaBuilder for NyPizzaBuilder {}

/// A folded pizza, optionally with the sauce inside
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calzone {
    sauce_inside: bool,
    toppings: OptionSet<Topping>,
}

impl Calzone {
    /// Starts a builder with the sauce on top and no toppings
    pub fn builder() -> CalzoneBuilder {
        CalzoneBuilder::default()
    }

    /// Returns true if the sauce is inside the fold
    pub fn is_sauce_inside(&self) -> bool {
        self.sauce_inside
    }
}

impl Product for Calzone {
    type Opt = Topping;

    fn options(&self) -> &OptionSet<Topping> {
        &self.toppings
    }
}

impl Pizza for Calzone {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Calzone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calzone[sauceInside={}, toppings={:?}]",
            self.sauce_inside, self.toppings
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalzoneBuilder {
    sauce_inside: bool,
    toppings: OptionSet<Topping>,
}

impl CalzoneBuilder {
    /// Puts the sauce inside the fold
    pub fn sauce_inside(mut self) -> Self {
        self.sauce_inside = true;
        self
    }
}

impl ProductBuilder for CalzoneBuilder {
    type Opt = Topping;
    type Product = Calzone;

    fn option_set(&mut self) -> &mut OptionSet<Topping> {
        &mut self.toppings
    }

    fn build(self) -> Result<Calzone, TypeKitError> {
        let calzone = Calzone {
            sauce_inside: self.sauce_inside,
            toppings: self.toppings,
        };
        debug!(calzone = %calzone, "built calzone");
        Ok(calzone)
    }
}

impl PizzaBuilder for CalzoneBuilder {}
