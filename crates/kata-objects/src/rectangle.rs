//! A plain rectangle.

use serde::{Deserialize, Serialize};

use crate::error::ObjectError;
use crate::json::{FromPositional, PositionalFields};

/// Width and height with a computed area.
///
/// ```
/// let r = kata_objects::Rectangle::new(10.0, 20.0);
/// assert!((r.area() - 200.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl FromPositional for Rectangle {
    const ARITY: usize = 2;

    fn from_fields(fields: &mut PositionalFields) -> Result<Self, ObjectError> {
        let width = fields.take()?;
        let height = fields.take()?;
        Ok(Self::new(width, height))
    }
}
