//! Demonstrates self-typed builders across a small pizza hierarchy.
//!
//! Run with: cargo run --example pizza

use sovran_typekit::nutrition::NutritionFacts;
use sovran_typekit::pizza::{Calzone, NyPizza, NyPizzaBuilder, Pizza, PizzaBuilder, Size, Topping};
use sovran_typekit::{ProductBuilder, TypeKitError};

fn main() -> Result<(), TypeKitError> {
    // Shared methods (with_option) and subtype methods (size) chain freely
    let ny: NyPizza = NyPizza::builder()
        .with_option(Topping::Sausage)
        .size(Size::Small)
        .add_topping(Topping::Onion)
        .build()?;
    println!("Built {}", ny);
    println!("  size without a cast: {:?}", ny.size());

    let calzone: Calzone = Calzone::builder()
        .add_topping(Topping::Ham)
        .sauce_inside()
        .build()?;
    println!("Built {}", calzone);
    println!("  sauce inside: {}", calzone.is_sauce_inside());

    // Clone a builder to keep it as a template
    let template = NyPizzaBuilder::with_size(Size::Large).add_topping(Topping::Mushroom);
    let plain = template.clone().build()?;
    let loaded = template
        .with_options([Topping::Pepper, Topping::Ham])
        .build()?;
    println!("Template: {} / {}", plain, loaded);

    let menu: Vec<Box<dyn Pizza>> = vec![Box::new(ny), Box::new(calzone), Box::new(loaded)];
    println!("\nMenu:");
    for pizza in &menu {
        println!("  {} ({} toppings)", pizza.describe(), pizza.toppings().len());
    }

    // Required fields are reported by name
    match NyPizza::builder().add_topping(Topping::Ham).build() {
        Ok(p) => println!("This shouldn't happen: {}", p),
        Err(e) => println!("\nRejected: {}", e),
    }

    // A flat builder has no base to share with
    let facts = NutritionFacts::builder()
        .serving_size(240)
        .servings(8)
        .calories(100)
        .sodium(35)
        .carbohydrate(27)
        .build()?;
    println!("Nutrition: {:?}", facts);

    if let Err(e) = NutritionFacts::builder()
        .serving_size(240)
        .servings(8)
        .calories(50)
        .fat(10)
        .build()
    {
        println!("Rejected: {}", e);
    }

    Ok(())
}
