//! Geometric shape templates (translates the `Shape` hierarchy of the C++
//! catalogue).
//!
//! The deep `Shape`/`Circle`/`Rectangle`/`Triangle` class hierarchy becomes a
//! single [`Shape`] struct holding a closed [`Geometry`] tagged variant, with
//! `area` and `perimeter` dispatching on the tag. Both are pure functions of
//! the stored dimensions.
//!
//! Validation policy: constructors **reject** bad geometry with an
//! `InvalidArgument` error. Non-positive dimensions and side triples that
//! violate the triangle inequality never produce a value. (The C++ version
//! silently reset an invalid triangle to unit sides, which masks caller
//! errors; that behaviour is deliberately not reproduced.)

use std::any::Any;
use std::f64::consts::PI;

use dp_core::{errors::Result, Error, Prototype, Real};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Horizontal coordinate.
    pub x: Real,
    /// Vertical coordinate.
    pub y: Real,
}

/// An RGB colour. Byte components make the 0–255 range a type guarantee
/// rather than a runtime clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
}

/// A circle with a strictly positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    radius: Real,
}

impl Circle {
    /// Create a circle. Fails unless `radius > 0`.
    pub fn new(radius: Real) -> Result<Self> {
        if !(radius > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        Ok(Circle { radius })
    }

    /// The radius.
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// πr².
    pub fn area(&self) -> Real {
        PI * self.radius * self.radius
    }

    /// 2πr.
    pub fn perimeter(&self) -> Real {
        2.0 * PI * self.radius
    }
}

/// An axis-aligned rectangle with strictly positive dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    width: Real,
    height: Real,
}

impl Rectangle {
    /// Create a rectangle. Fails unless both dimensions are positive.
    pub fn new(width: Real, height: Real) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "rectangle dimensions must be positive, got {width} x {height}"
            )));
        }
        Ok(Rectangle { width, height })
    }

    /// The width.
    pub fn width(&self) -> Real {
        self.width
    }

    /// The height.
    pub fn height(&self) -> Real {
        self.height
    }

    /// Width times height.
    pub fn area(&self) -> Real {
        self.width * self.height
    }

    /// 2(w + h).
    pub fn perimeter(&self) -> Real {
        2.0 * (self.width + self.height)
    }
}

/// A triangle whose sides satisfy the triangle inequality.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    a: Real,
    b: Real,
    c: Real,
}

impl Triangle {
    /// Create a triangle. Fails unless every side is positive and each pair
    /// of sides sums to more than the third.
    pub fn new(a: Real, b: Real, c: Real) -> Result<Self> {
        if !(a > 0.0 && b > 0.0 && c > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "triangle sides must be positive, got ({a}, {b}, {c})"
            )));
        }
        if !(a + b > c && a + c > b && b + c > a) {
            return Err(Error::InvalidArgument(format!(
                "sides ({a}, {b}, {c}) violate the triangle inequality"
            )));
        }
        Ok(Triangle { a, b, c })
    }

    /// The three side lengths.
    pub fn sides(&self) -> (Real, Real, Real) {
        (self.a, self.b, self.c)
    }

    /// Heron's formula.
    pub fn area(&self) -> Real {
        let s = (self.a + self.b + self.c) / 2.0;
        (s * (s - self.a) * (s - self.b) * (s - self.c)).sqrt()
    }

    /// Sum of the sides.
    pub fn perimeter(&self) -> Real {
        self.a + self.b + self.c
    }
}

/// The closed set of shape geometries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    /// A circle.
    Circle(Circle),
    /// A rectangle.
    Rectangle(Rectangle),
    /// A triangle.
    Triangle(Triangle),
}

impl Geometry {
    /// A validated circle geometry.
    pub fn circle(radius: Real) -> Result<Self> {
        Circle::new(radius).map(Geometry::Circle)
    }

    /// A validated rectangle geometry.
    pub fn rectangle(width: Real, height: Real) -> Result<Self> {
        Rectangle::new(width, height).map(Geometry::Rectangle)
    }

    /// A validated triangle geometry.
    pub fn triangle(a: Real, b: Real, c: Real) -> Result<Self> {
        Triangle::new(a, b, c).map(Geometry::Triangle)
    }

    /// The enclosed area.
    pub fn area(&self) -> Real {
        match self {
            Geometry::Circle(c) => c.area(),
            Geometry::Rectangle(r) => r.area(),
            Geometry::Triangle(t) => t.area(),
        }
    }

    /// The boundary length.
    pub fn perimeter(&self) -> Real {
        match self {
            Geometry::Circle(c) => c.perimeter(),
            Geometry::Rectangle(r) => r.perimeter(),
            Geometry::Triangle(t) => t.perimeter(),
        }
    }

    /// The variant name.
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Circle(_) => "Circle",
            Geometry::Rectangle(_) => "Rectangle",
            Geometry::Triangle(_) => "Triangle",
        }
    }
}

/// A cloneable, positioned, coloured shape template.
///
/// ```
/// use dp_prototype::Shape;
///
/// let template = Shape::triangle("Right Triangle", 3.0, 4.0, 5.0).unwrap();
/// assert_eq!(template.area(), 6.0);
///
/// // Sides (1, 1, 5) cannot form a triangle and are rejected.
/// assert!(Shape::triangle("Bad", 1.0, 1.0, 5.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    label: String,
    geometry: Geometry,
    position: Position,
    color: Color,
    visible: bool,
}

impl Shape {
    /// Create a shape at the origin, black, visible.
    pub fn new(label: &str, geometry: Geometry) -> Self {
        Shape {
            label: label.to_string(),
            geometry,
            position: Position::default(),
            color: Color::default(),
            visible: true,
        }
    }

    /// A circle shape. Fails on a non-positive radius.
    pub fn circle(label: &str, radius: Real) -> Result<Self> {
        Ok(Shape::new(label, Geometry::circle(radius)?))
    }

    /// A rectangle shape. Fails on non-positive dimensions.
    pub fn rectangle(label: &str, width: Real, height: Real) -> Result<Self> {
        Ok(Shape::new(label, Geometry::rectangle(width, height)?))
    }

    /// A triangle shape. Fails on invalid side lengths.
    pub fn triangle(label: &str, a: Real, b: Real, c: Real) -> Result<Self> {
        Ok(Shape::new(label, Geometry::triangle(a, b, c)?))
    }

    /// The geometry variant.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Replace the geometry. The new geometry was already validated at its
    /// own construction, so this cannot fail.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
    }

    /// The enclosed area. Pure function of the stored dimensions.
    pub fn area(&self) -> Real {
        self.geometry.area()
    }

    /// The boundary length. Pure function of the stored dimensions.
    pub fn perimeter(&self) -> Real {
        self.geometry.perimeter()
    }

    /// The position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Move the shape.
    pub fn set_position(&mut self, x: Real, y: Real) {
        self.position = Position { x, y };
    }

    /// The fill colour.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the fill colour.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// `true` if the shape is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the shape.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Prototype for Shape {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
