//! Tests for rectangle, JSON encoding, and positional reconstruction.

use std::collections::BTreeMap;

use kata_objects::{FromPositional, ObjectError, PositionalFields, Rectangle, from_json, get_json};
use serde::Serialize;

#[test]
fn test_rectangle_area() {
    let r = Rectangle::new(10.0, 20.0);
    assert!((r.width - 10.0).abs() < f64::EPSILON);
    assert!((r.height - 20.0).abs() < f64::EPSILON);
    assert!((r.area() - 200.0).abs() < f64::EPSILON);
}

// Encoding

#[test]
fn test_get_json_plain_values() {
    assert_eq!(get_json(&[1, 2, 3]).unwrap(), "[1,2,3]");
    assert_eq!(get_json("text").unwrap(), "\"text\"");

    let mut map = BTreeMap::new();
    let _ = map.insert("a", 1);
    let _ = map.insert("b", 2);
    assert_eq!(get_json(&map).unwrap(), r#"{"a":1,"b":2}"#);
}

#[test]
fn test_get_json_rectangle_field_order() {
    let json = get_json(&Rectangle::new(10.0, 20.0)).unwrap();
    assert_eq!(json, r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_get_json_rejects_non_string_keys() {
    let mut map = BTreeMap::new();
    let _ = map.insert(vec![1], 1);
    assert!(matches!(get_json(&map), Err(ObjectError::Json(_))));
}

// Decoding

#[test]
fn test_from_json_rectangle() {
    let r: Rectangle = from_json(r#"{ "width": 10, "height": 20 }"#).unwrap();
    assert_eq!(r, Rectangle::new(10.0, 20.0));
    assert!((r.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_from_json_is_positional() {
    // keys are ignored; the first value becomes the first field
    let r: Rectangle = from_json(r#"{ "height": 3, "width": 7 }"#).unwrap();
    assert_eq!(r, Rectangle::new(3.0, 7.0));
}

#[test]
fn test_round_trip_through_json() {
    let original = Rectangle::new(4.5, 2.0);
    let back: Rectangle = from_json(&get_json(&original).unwrap()).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_from_json_malformed() {
    let err = from_json::<Rectangle>("{ width: 1 ").unwrap_err();
    assert!(matches!(err, ObjectError::Json(_)));
}

#[test]
fn test_from_json_not_an_object() {
    let err = from_json::<Rectangle>("[1, 2]").unwrap_err();
    assert!(matches!(err, ObjectError::NotAnObject { found: "array" }));
    assert_eq!(err.to_string(), "expected a JSON object, found array");
}

#[test]
fn test_from_json_wrong_arity() {
    let err = from_json::<Rectangle>(r#"{ "width": 1 }"#).unwrap_err();
    assert!(matches!(
        err,
        ObjectError::Arity {
            expected: 2,
            found: 1
        }
    ));
}

#[test]
fn test_from_json_bad_field_type() {
    let err = from_json::<Rectangle>(r#"{ "width": 1, "height": "tall" }"#).unwrap_err();
    assert!(matches!(err, ObjectError::Field { index: 1, .. }));
}

/// Declares two positions but only reads the first.
#[derive(Debug)]
struct Truncated;

impl FromPositional for Truncated {
    const ARITY: usize = 2;

    fn from_fields(fields: &mut PositionalFields) -> Result<Self, ObjectError> {
        let _: f64 = fields.take()?;
        Ok(Self)
    }
}

#[test]
fn test_from_json_rejects_unread_values() {
    let err = from_json::<Truncated>(r#"{ "width": 1, "height": 2 }"#).unwrap_err();
    assert!(matches!(
        err,
        ObjectError::Arity {
            expected: 2,
            found: 1
        }
    ));
}

/// A second positional type with mixed field types.
#[derive(Debug, PartialEq, Serialize)]
struct Person {
    name: String,
    age: u8,
    tags: Vec<String>,
}

impl FromPositional for Person {
    const ARITY: usize = 3;

    fn from_fields(fields: &mut PositionalFields) -> Result<Self, ObjectError> {
        Ok(Self {
            name: fields.take()?,
            age: fields.take()?,
            tags: fields.take()?,
        })
    }
}

#[test]
fn test_from_json_custom_type() {
    let person: Person = from_json(r#"{"n":"Ada","a":36,"t":["math","engines"]}"#).unwrap();
    assert_eq!(
        person,
        Person {
            name: "Ada".to_string(),
            age: 36,
            tags: vec!["math".to_string(), "engines".to_string()],
        }
    );
    assert_eq!(
        get_json(&person).unwrap(),
        r#"{"name":"Ada","age":36,"tags":["math","engines"]}"#
    );
}
