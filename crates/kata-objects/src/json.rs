//! JSON encoding and positional reconstruction.
//!
//! Encoding is plain `serde_json`. Decoding does not match keys to field
//! names: the object's values are read in the order they appear in the text
//! and passed, one by one, to the target type's constructor. A type opts in
//! by implementing [`FromPositional`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ObjectError;

/// Compact JSON text for `value`.
///
/// Struct fields are written in declaration order, map entries in iteration
/// order.
///
/// ```
/// assert_eq!(kata_objects::get_json(&[1, 2, 3])?, "[1,2,3]");
/// # Ok::<(), kata_objects::ObjectError>(())
/// ```
///
/// # Errors
/// [`ObjectError::Json`] if the value's `Serialize` impl fails (for example a
/// map with non-string keys).
pub fn get_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    Ok(serde_json::to_string(value)?)
}

/// A type that can be rebuilt from an ordered list of JSON values.
pub trait FromPositional: Sized {
    /// Number of values the constructor consumes.
    const ARITY: usize;

    /// Build the value, taking exactly [`Self::ARITY`] values from `fields`.
    ///
    /// # Errors
    /// [`ObjectError::Field`] when a value does not convert to the field type.
    fn from_fields(fields: &mut PositionalFields) -> Result<Self, ObjectError>;
}

/// Cursor over an object's values in key order.
#[derive(Debug)]
pub struct PositionalFields {
    values: std::vec::IntoIter<Value>,
    index: usize,
    len: usize,
}

impl PositionalFields {
    fn new(values: Vec<Value>) -> Self {
        Self {
            len: values.len(),
            values: values.into_iter(),
            index: 0,
        }
    }

    /// Convert the next value to `T`.
    ///
    /// # Errors
    /// [`ObjectError::Arity`] when no values remain,
    /// [`ObjectError::Field`] when the value does not convert.
    pub fn take<T: DeserializeOwned>(&mut self) -> Result<T, ObjectError> {
        let index = self.index;
        let value = self.values.next().ok_or(ObjectError::Arity {
            expected: index + 1,
            found: self.len,
        })?;
        self.index += 1;
        serde_json::from_value(value).map_err(|source| ObjectError::Field { index, source })
    }
}

/// Rebuild a `T` from a JSON object, positionally.
///
/// ```
/// use kata_objects::{Rectangle, from_json};
///
/// let r: Rectangle = from_json(r#"{ "width": 10, "height": 20 }"#)?;
/// assert_eq!(r, Rectangle::new(10.0, 20.0));
/// # Ok::<(), kata_objects::ObjectError>(())
/// ```
///
/// # Errors
/// - [`ObjectError::Json`] for malformed text
/// - [`ObjectError::NotAnObject`] when the top-level value is not an object
/// - [`ObjectError::Arity`] when the entry count differs from `T::ARITY`, or
///   when `T::from_fields` leaves values unread
/// - [`ObjectError::Field`] when a value does not fit its position
pub fn from_json<T: FromPositional>(json: &str) -> Result<T, ObjectError> {
    let values = match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => map.into_iter().map(|(_, value)| value).collect::<Vec<_>>(),
        other => {
            return Err(ObjectError::NotAnObject {
                found: json_type_name(&other),
            });
        }
    };

    if values.len() != T::ARITY {
        return Err(ObjectError::Arity {
            expected: T::ARITY,
            found: values.len(),
        });
    }

    let mut fields = PositionalFields::new(values);
    let value = T::from_fields(&mut fields)?;
    if fields.index != fields.len {
        return Err(ObjectError::Arity {
            expected: fields.len,
            found: fields.index,
        });
    }
    Ok(value)
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
