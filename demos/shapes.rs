//! Demonstrates producer/consumer transfers and shared generic values.
//!
//! Run with: cargo run --example shapes

use sovran_typekit::figure::{
    Circle, Figure, FigureBuilder, Rectangle, Rectangular, RectangularBuilder, Square, Style,
};
use sovran_typekit::shared::{empty_container, identity, max, reverse_order, union};
use sovran_typekit::variance::{transfer_in, transfer_out, Stack};
use sovran_typekit::{ProductBuilder, TypeKitError};

fn main() -> Result<(), TypeKitError> {
    let squares = vec![
        Square::builder().side(1.0).build()?,
        Square::builder().side(2.0).style(Style::Filled).build()?,
    ];

    // A producer of squares feeds a stack of figures
    let mut figures: Stack<Box<dyn Figure>> = Stack::new();
    figures.push(Circle::builder().radius(1.5).build()?.into());
    let moved = transfer_in(&mut figures, squares);
    println!("Moved {} squares into a stack of {} figures", moved, figures.len());

    // A stack of squares drains into a consumer of figures
    let mut more: Stack<Square> = Stack::new();
    more.push(Square::builder().side(3.0).max_area(10.0).build()?);
    transfer_out(&mut more, &mut figures);
    println!("Stack now holds {} figures", figures.len());

    let mut drained: Vec<Box<dyn Figure>> = Vec::new();
    figures.pop_all(&mut drained);
    for figure in &drained {
        println!("  {:<6} area {:>7.3}", figure.name(), figure.area());
    }

    // The area bound is checked after the area is derived
    if let Err(e) = Square::builder().side(4.0).max_area(10.0).build() {
        println!("Rejected: {}", e);
    }

    // Rounded corners come from the rectangular level, shared by both builders
    let mut rectangles: Stack<Rectangle> = Stack::new();
    rectangles.push(Rectangle::builder().length(3.0).width(1.0).rounded(0.5).build()?);
    rectangles.push_all(vec![Square::builder().rounded(0.25).side(2.0).build()?]);
    while let Some(rectangle) = rectangles.pop() {
        println!(
            "  {} x {} corners {} diagonal {:.3}",
            rectangle.length(),
            rectangle.width(),
            rectangle.corner_radius(),
            rectangle.diagonal()
        );
    }

    // One behavior serves every type parameter
    println!("\nidentity: {} / {}", identity::<&str>()("same"), identity::<i32>()(7));
    println!(
        "empty: {:?} has {} items, {:?} has {} items",
        empty_container::<String>(),
        empty_container::<String>().len(),
        empty_container::<f64>(),
        empty_container::<f64>().len()
    );

    let mut sides = vec![2, 9, 4];
    sides.sort_by(reverse_order::<i32>().as_fn());
    println!("reverse order: {:?}", sides);

    let combined = union::<i64, _, _>(vec![1i32, 5], vec![5u8, 7]);
    println!("union: {:?}, max: {:?}", combined, max(combined.iter().copied()));

    Ok(())
}
