//! Branching on numbers and shapes.
//!
//! Geometry uses canvas coordinates: `top` grows downward.

use std::fmt;

/// Result of [`get_fizz_buzz`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzz {
    /// Not a multiple of 3 or 5; the number itself.
    Number(u64),
    /// Multiple of 3 only.
    Fizz,
    /// Multiple of 5 only.
    Buzz,
    /// Multiple of 15.
    FizzBuzz,
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Fizz => f.write_str("Fizz"),
            Self::Buzz => f.write_str("Buzz"),
            Self::FizzBuzz => f.write_str("FizzBuzz"),
        }
    }
}

/// Classify `n` by divisibility by 3 and 5.
///
/// ```
/// use kata_loops::{FizzBuzz, get_fizz_buzz};
///
/// assert_eq!(get_fizz_buzz(15), FizzBuzz::FizzBuzz);
/// assert_eq!(get_fizz_buzz(7), FizzBuzz::Number(7));
/// ```
#[must_use]
pub const fn get_fizz_buzz(n: u64) -> FizzBuzz {
    if n % 15 == 0 {
        FizzBuzz::FizzBuzz
    } else if n % 5 == 0 {
        FizzBuzz::Buzz
    } else if n % 3 == 0 {
        FizzBuzz::Fizz
    } else {
        FizzBuzz::Number(n)
    }
}

/// True if a non-degenerate triangle has sides `a`, `b`, `c`.
#[must_use]
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    let sum = a + b + c;
    [a, b, c].iter().all(|&side| side < sum - side)
}

/// An axis-aligned rectangle in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    /// Distance of the upper edge from the origin.
    pub top: f64,
    /// Distance of the left edge from the origin.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl CanvasRect {
    /// Create a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// True if the rectangles share any area or edge.
///
/// Compares center distance against half the combined extent on each axis.
#[must_use]
pub fn does_rectangles_overlap(r1: &CanvasRect, r2: &CanvasRect) -> bool {
    let (c1, c2) = (r1.center(), r2.center());
    let x_overlap = (c2.x - c1.x).abs() <= (r1.width + r2.width) / 2.0;
    let y_overlap = (c2.y - c1.y).abs() <= (r1.height + r2.height) / 2.0;
    x_overlap && y_overlap
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius.
    pub radius: f64,
}

/// True if `point` lies strictly inside `circle`.
#[must_use]
pub fn is_inside_circle(circle: &Circle, point: &Point) -> bool {
    (circle.center.x - point.x).hypot(circle.center.y - point.y) < circle.radius
}

/// Interval notation for the bounds `a` and `b`, smaller bound first.
///
/// ```
/// assert_eq!(kata_loops::get_interval_string(5, 3, true, false), "[3, 5)");
/// ```
#[must_use]
pub fn get_interval_string<T>(a: T, b: T, start_included: bool, end_included: bool) -> String
where
    T: PartialOrd + fmt::Display,
{
    let (low, high) = if b < a { (b, a) } else { (a, b) };
    let open = if start_included { '[' } else { '(' };
    let close = if end_included { ']' } else { ')' };
    format!("{open}{low}, {high}{close}")
}
