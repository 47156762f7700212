//! Value objects and JSON round trips.
//!
//! # Scope
//!
//! This crate implements:
//! - **[`Rectangle`]** - a width/height value with a computed area
//! - **JSON encoding** ([`get_json`]) - compact JSON text for any `Serialize` value
//! - **Positional decoding** ([`from_json`]) - rebuild a value from a JSON
//!   object by handing its values, in key order, to the type's
//!   [`FromPositional`] constructor

/// Decoding and encoding errors.
pub mod error;
/// JSON encoding and positional reconstruction.
pub mod json;
/// The rectangle value object.
pub mod rectangle;

pub use error::ObjectError;
pub use json::{FromPositional, PositionalFields, from_json, get_json};
pub use rectangle::Rectangle;
