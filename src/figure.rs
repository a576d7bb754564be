//! Plane figures built with [`ProductBuilder`]
//!
//! The family has two levels below [`Figure`]: [`Circle`] is a figure, and
//! [`Rectangle`] and [`Square`] are [`Rectangular`] figures. The builders
//! mirror that. [`FigureBuilder`] holds what every figure builder can do,
//! [`RectangularBuilder`] adds rounded corners for the rectangular ones, and
//! each concrete builder adds its own dimensions. Every level returns the
//! concrete builder, so the calls chain in any order.
//!
//! ```
//! use sovran_typekit::figure::{FigureBuilder, RectangularBuilder, Square, Style};
//! use sovran_typekit::{ProductBuilder, TypeKitError};
//!
//! let square: Square = Square::builder()
//!     .style(Style::Outlined)
//!     .rounded(0.5)
//!     .side(2.0)
//!     .max_area(4.0)
//!     .build()?;
//!
//! assert_eq!(square.side(), 2.0);
//! # Ok::<(), TypeKitError>(())
//! ```

use crate::builder::{required, OptionSet, Product, ProductBuilder};
use crate::error::TypeKitError;
use std::f64::consts::PI;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Style {
    Filled,
    Outlined,
    Dashed,
    Shadowed,
}

/// Every figure
pub trait Figure: Product<Opt = Style> + fmt::Debug {
    fn area(&self) -> f64;

    fn name(&self) -> &'static str;

    fn styles(&self) -> &OptionSet<Style> {
        self.options()
    }
}

/// Figures with four right-angled, optionally rounded, corners
pub trait Rectangular: Figure {
    fn length(&self) -> f64;

    fn width(&self) -> f64;

    /// Radius of the rounded corners, 0 for sharp ones
    fn corner_radius(&self) -> f64;

    fn diagonal(&self) -> f64 {
        self.length().hypot(self.width())
    }
}

/// Chaining shared by every figure builder
///
/// Implementors expose where the area bound lives; `style` and `max_area`
/// are written once here.
pub trait FigureBuilder: ProductBuilder<Opt = Style> {
    /// Access to the optional upper bound on the derived area
    fn area_bound(&mut self) -> &mut Option<f64>;

    fn style(self, style: Style) -> Self {
        self.with_option(style)
    }

    /// Rejects the figure at build time if its area comes out larger
    fn max_area(mut self, bound: f64) -> Self {
        *self.area_bound() = Some(bound);
        self
    }
}

/// Chaining shared by the builders of [`Rectangular`] figures
pub trait RectangularBuilder: FigureBuilder {
    /// Access to the optional corner radius
    fn corner(&mut self) -> &mut Option<f64>;

    /// Rounds the corners; the radius may be at most half the shorter side
    fn rounded(mut self, radius: f64) -> Self {
        *self.corner() = Some(radius);
        self
    }
}

fn check_dimension(rule: &'static str, value: f64) -> Result<f64, TypeKitError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TypeKitError::invariant(rule, format!("got {}", value)))
    }
}

fn check_corner(radius: Option<f64>, shorter_side: f64) -> Result<f64, TypeKitError> {
    match radius {
        None => Ok(0.0),
        Some(r) if r.is_finite() && r >= 0.0 && r * 2.0 <= shorter_side => Ok(r),
        Some(r) => Err(TypeKitError::invariant(
            "corner radius must fit the shorter side",
            format!("radius {} with shorter side {}", r, shorter_side),
        )),
    }
}

fn check_area(area: f64, max_area: Option<f64>) -> Result<(), TypeKitError> {
    if !area.is_finite() {
        return Err(TypeKitError::invariant(
            "area must be finite",
            format!("got {}", area),
        ));
    }
    match max_area {
        Some(bound) if bound.is_nan() || area > bound => Err(TypeKitError::invariant(
            "area must not exceed max_area",
            format!("area {:.3} > max_area {}", area, bound),
        )),
        _ => Ok(()),
    }
}

/// Area of a rectangle whose four corners are quarter circles of `radius`
fn rounded_area(length: f64, width: f64, radius: f64) -> f64 {
    length * width - (4.0 - PI) * radius * radius
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
    styles: OptionSet<Style>,
}

impl Circle {
    /// Starts a builder with no radius set
    pub fn builder() -> CircleBuilder {
        CircleBuilder::default()
    }

    /// The radius of the circle
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The length of the outline
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl Product for Circle {
    type Opt = Style;

    fn options(&self) -> &OptionSet<Style> {
        &self.styles
    }
}

impl Figure for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn name(&self) -> &'static str {
        "circle"
    }
}

impl From<Circle> for Box<dyn Figure> {
    fn from(circle: Circle) -> Self {
        Box::new(circle)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CircleBuilder {
    radius: Option<f64>,
    max_area: Option<f64>,
    styles: OptionSet<Style>,
}

impl CircleBuilder {
    /// Sets the required radius
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

impl ProductBuilder for CircleBuilder {
    type Opt = Style;
    type Product = Circle;

    fn option_set(&mut self) -> &mut OptionSet<Style> {
        &mut self.styles
    }

    fn build(self) -> Result<Circle, TypeKitError> {
        let radius = check_dimension("radius must be positive", required(self.radius, "radius")?)?;
        let circle = Circle {
            radius,
            styles: self.styles,
        };
        check_area(circle.area(), self.max_area)?;
        debug!(radius, area = circle.area(), "built circle");
        Ok(circle)
    }
}

impl FigureBuilder for CircleBuilder {
    fn area_bound(&mut self) -> &mut Option<f64> {
        &mut self.max_area
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    length: f64,
    width: f64,
    corner_radius: f64,
    styles: OptionSet<Style>,
}

impl Rectangle {
    /// Starts a builder with no dimensions set
    pub fn builder() -> RectangleBuilder {
        RectangleBuilder::default()
    }
}

impl Product for Rectangle {
    type Opt = Style;

    fn options(&self) -> &OptionSet<Style> {
        &self.styles
    }
}

impl Figure for Rectangle {
    fn area(&self) -> f64 {
        rounded_area(self.length, self.width, self.corner_radius)
    }

    fn name(&self) -> &'static str {
        "rectangle"
    }
}

impl Rectangular for Rectangle {
    fn length(&self) -> f64 {
        self.length
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
}

impl From<Rectangle> for Box<dyn Figure> {
    fn from(rectangle: Rectangle) -> Self {
        Box::new(rectangle)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RectangleBuilder {
    length: Option<f64>,
    width: Option<f64>,
    corner: Option<f64>,
    max_area: Option<f64>,
    styles: OptionSet<Style>,
}

impl RectangleBuilder {
    /// Sets the required length
    pub fn length(mut self, length: f64) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the required width
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

impl ProductBuilder for RectangleBuilder {
    type Opt = Style;
    type Product = Rectangle;

    fn option_set(&mut self) -> &mut OptionSet<Style> {
        &mut self.styles
    }

    fn build(self) -> Result<Rectangle, TypeKitError> {
        let length = check_dimension("length must be positive", required(self.length, "length")?)?;
        let width = check_dimension("width must be positive", required(self.width, "width")?)?;
        let rectangle = Rectangle {
            length,
            width,
            corner_radius: check_corner(self.corner, length.min(width))?,
            styles: self.styles,
        };
        check_area(rectangle.area(), self.max_area)?;
        debug!(length, width, area = rectangle.area(), "built rectangle");
        Ok(rectangle)
    }
}

impl FigureBuilder for RectangleBuilder {
    fn area_bound(&mut self) -> &mut Option<f64> {
        &mut self.max_area
    }
}

impl RectangularBuilder for RectangleBuilder {
    fn corner(&mut self) -> &mut Option<f64> {
        &mut self.corner
    }
}

/// A rectangle with equal sides
#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    side: f64,
    corner_radius: f64,
    styles: OptionSet<Style>,
}

impl Square {
    /// Starts a builder with no side set
    pub fn builder() -> SquareBuilder {
        SquareBuilder::default()
    }

    /// The length of each side
    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Product for Square {
    type Opt = Style;

    fn options(&self) -> &OptionSet<Style> {
        &self.styles
    }
}

impl Figure for Square {
    fn area(&self) -> f64 {
        rounded_area(self.side, self.side, self.corner_radius)
    }

    fn name(&self) -> &'static str {
        "square"
    }
}

impl Rectangular for Square {
    fn length(&self) -> f64 {
        self.side
    }

    fn width(&self) -> f64 {
        self.side
    }

    fn corner_radius(&self) -> f64 {
        self.corner_radius
    }
}

impl From<Square> for Box<dyn Figure> {
    fn from(square: Square) -> Self {
        Box::new(square)
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        Rectangle {
            length: square.side,
            width: square.side,
            corner_radius: square.corner_radius,
            styles: square.styles,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SquareBuilder {
    side: Option<f64>,
    corner: Option<f64>,
    max_area: Option<f64>,
    styles: OptionSet<Style>,
}

impl SquareBuilder {
    /// Sets the required side length
    pub fn side(mut self, side: f64) -> Self {
        self.side = Some(side);
        self
    }
}

impl ProductBuilder for SquareBuilder {
    type Opt = Style;
    type Product = Square;

    fn option_set(&mut self) -> &mut OptionSet<Style> {
        &mut self.styles
    }

    fn build(self) -> Result<Square, TypeKitError> {
        let side = check_dimension("side must be positive", required(self.side, "side")?)?;
        let square = Square {
            side,
            corner_radius: check_corner(self.corner, side)?,
            styles: self.styles,
        };
        check_area(square.area(), self.max_area)?;
        debug!(side, area = square.area(), "built square");
        Ok(square)
    }
}

impl FigureBuilder for SquareBuilder {
    fn area_bound(&mut self) -> &mut Option<f64> {
        &mut self.max_area
    }
}

impl RectangularBuilder for SquareBuilder {
    fn corner(&mut self) -> &mut Option<f64> {
        &mut self.corner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_returns_concrete_figures() -> Result<(), TypeKitError> {
        let circle: Circle = Circle::builder().radius(1.0).style(Style::Filled).build()?;
        let square: Square = Square::builder()
            .with_option(Style::Dashed)
            .side(3.0)
            .build()?;

        // subtype-only accessors, no downcast
        assert!((circle.circumference() - 2.0 * PI).abs() < 1e-9);
        assert!((square.diagonal() - 3.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
        assert!(circle.has_option(Style::Filled));
        assert!(square.styles().contains(&Style::Dashed));
        Ok(())
    }

    #[test]
    fn test_every_level_chains_through_the_deepest_builder() -> Result<(), TypeKitError> {
        // ProductBuilder, FigureBuilder, RectangularBuilder and SquareBuilder
        // methods interleaved; each call still returns SquareBuilder
        let square: Square = Square::builder()
            .rounded(0.5)
            .with_option(Style::Shadowed)
            .side(4.0)
            .style(Style::Filled)
            .max_area(16.0)
            .rounded(1.0)
            .build()?;

        assert_eq!(square.side(), 4.0);
        assert_eq!(square.corner_radius(), 1.0);
        assert!((square.area() - (16.0 - (4.0 - PI))).abs() < 1e-9);
        assert_eq!(square.styles().len(), 2);
        Ok(())
    }

    #[test]
    fn test_generic_code_over_intermediate_level() -> Result<(), TypeKitError> {
        fn soft_and_dashed<B: RectangularBuilder>(builder: B) -> Result<B::Product, TypeKitError> {
            builder.rounded(0.25).style(Style::Dashed).build()
        }

        let rectangle: Rectangle = soft_and_dashed(Rectangle::builder().length(2.0).width(1.0))?;
        let square: Square = soft_and_dashed(Square::builder().side(1.0))?;

        assert_eq!(rectangle.corner_radius(), 0.25);
        assert_eq!(rectangle.length(), 2.0);
        assert_eq!(square.corner_radius(), 0.25);
        assert!(square.has_option(Style::Dashed));
        Ok(())
    }

    #[test]
    fn test_square_is_a_rectangle() -> Result<(), TypeKitError> {
        let square = Square::builder().side(3.0).style(Style::Outlined).build()?;
        let area = square.area();

        let rectangle: Rectangle = square.into();
        assert_eq!(rectangle.length(), rectangle.width());
        assert_eq!(rectangle.area(), area);
        assert!(rectangle.has_option(Style::Outlined));
        Ok(())
    }

    #[test]
    fn test_missing_dimension_is_named() {
        assert_eq!(
            Circle::builder().build().unwrap_err(),
            TypeKitError::MissingRequiredField { field: "radius" }
        );
        assert_eq!(
            Square::builder().max_area(4.0).build().unwrap_err(),
            TypeKitError::MissingRequiredField { field: "side" }
        );
        assert_eq!(
            Rectangle::builder().length(1.0).build().unwrap_err(),
            TypeKitError::MissingRequiredField { field: "width" }
        );
    }

    #[test]
    fn test_non_positive_dimension_rejected() {
        for side in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Square::builder().side(side).build().unwrap_err();
            assert!(
                matches!(err, TypeKitError::InvariantViolation { rule: "side must be positive", .. }),
                "side {} gave {:?}",
                side,
                err
            );
        }
    }

    #[test]
    fn test_corner_must_fit() {
        let err = Rectangle::builder()
            .length(4.0)
            .width(1.0)
            .rounded(0.6)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            TypeKitError::InvariantViolation {
                rule: "corner radius must fit the shorter side",
                detail: "radius 0.6 with shorter side 1".to_string(),
            }
        );

        let err = Square::builder().side(1.0).rounded(-0.1).build().unwrap_err();
        assert!(matches!(err, TypeKitError::InvariantViolation { .. }));
    }

    #[test]
    fn test_area_bound() -> Result<(), TypeKitError> {
        let square = Square::builder().side(2.0).max_area(4.0).build()?;
        assert_eq!(square.area(), 4.0);

        let err = Square::builder().side(3.0).max_area(4.0).build().unwrap_err();
        assert_eq!(
            err,
            TypeKitError::InvariantViolation {
                rule: "area must not exceed max_area",
                detail: "area 9.000 > max_area 4".to_string(),
            }
        );

        let err = Circle::builder().radius(2.0).max_area(10.0).build().unwrap_err();
        assert!(matches!(err, TypeKitError::InvariantViolation { .. }));
        Ok(())
    }

    #[test]
    fn test_overflowing_area_rejected() {
        // each dimension is finite, the derived area is not
        let err = Circle::builder().radius(1e200).build().unwrap_err();
        assert!(matches!(
            err,
            TypeKitError::InvariantViolation { rule: "area must be finite", .. }
        ));

        let err = Circle::builder()
            .radius(1e200)
            .max_area(f64::INFINITY)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            TypeKitError::InvariantViolation { rule: "area must be finite", .. }
        ));

        let err = Rectangle::builder().length(1e200).width(1e200).build().unwrap_err();
        assert!(matches!(err, TypeKitError::InvariantViolation { .. }));
    }

    #[test]
    fn test_figures_upcast_into_boxed_base() -> Result<(), TypeKitError> {
        let figures: Vec<Box<dyn Figure>> = vec![
            Circle::builder().radius(1.0).build()?.into(),
            Rectangle::builder().length(1.0).width(2.0).build()?.into(),
            Square::builder().side(2.0).build()?.into(),
        ];
        let names: Vec<&str> = figures.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["circle", "rectangle", "square"]);
        Ok(())
    }
}
