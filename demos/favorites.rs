//! Demonstrates TypeMap as a container of one favorite value per type.
//!
//! The token is the key and also fixes the type you get back, so there is
//! nothing to cast and no way to read a value as the wrong type.
//!
//! Run with: cargo run --example favorites

use sovran_typekit::{AnyValue, TypeKey, TypeKitError, TypeMap, TypeToken};

#[derive(Debug)]
struct Color {
    name: &'static str,
    hex: u32,
}

fn main() -> Result<(), TypeKitError> {
    let mut favorites = TypeMap::new();

    // Tokens for the same type are interchangeable, so they can live anywhere
    let string_token = TypeToken::<String>::of();
    let number_token = TypeToken::<i64>::of();

    favorites.put(string_token, "Java".to_string())?;
    favorites.put(number_token, 0xcafe_babe)?;
    favorites.put(
        TypeToken::of(),
        Color {
            name: "teal",
            hex: 0x008080,
        },
    )?;

    println!("Stored {} favorites", favorites.len());
    for key in favorites.keys() {
        println!("  - {}", key.type_name());
    }

    if let Some(text) = favorites.get(string_token) {
        println!("Favorite string: {}", text);
    }
    if let Some(number) = favorites.get(number_token) {
        println!("Favorite number: {:#x}", number);
    }
    favorites.with(TypeToken::<Color>::of(), |color| {
        println!("Favorite color: {} (#{:06x})", color.name, color.hex);
    })?;

    // Replacing a value hands back the old one
    let old = favorites.put(string_token, "Rust".to_string())?;
    println!("Replaced {:?} with {:?}", old, favorites.get(string_token));

    // Missing types are simply absent
    match favorites.get(TypeToken::<bool>::of()) {
        Some(flag) => println!("Favorite bool: {}", flag),
        None => println!("No favorite bool yet"),
    }

    // The erased entry point checks the value against the key
    match favorites.put_erased(TypeKey::of::<i64>(), AnyValue::new("not a number")) {
        Ok(()) => println!("This shouldn't happen"),
        Err(TypeKitError::TypeMismatch { expected, found }) => {
            println!("Correctly rejected a {} stored as {}", found, expected)
        }
        Err(e) => println!("Unexpected error: {}", e),
    }

    Ok(())
}
