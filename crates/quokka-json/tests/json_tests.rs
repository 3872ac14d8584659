//! Integration tests for the JSON boundary helpers.

use quokka_json::{DecodeError, Rect, from_json, to_json};

#[test]
fn test_rect_area_is_the_product_of_its_extents() {
    let rect = Rect::new(10.0, 20.0);
    assert!((rect.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_to_json_uses_field_declaration_order() {
    let text = to_json(&Rect::new(10.0, 20.0)).unwrap();
    assert_eq!(text, r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_to_json_encodes_plain_collections() {
    assert_eq!(to_json(&vec![1, 2, 3]).unwrap(), "[1,2,3]");
}

#[test]
fn test_from_json_restores_the_capability_set() {
    // The decoded value exposes Rect's capabilities, area() included.
    let rect: Rect = from_json(r#"{"width":10,"height":20}"#).unwrap();
    assert!((rect.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_malformed_text_fails_with_decode_error() {
    let result: Result<Rect, DecodeError> = from_json(r#"{"width":10,"#);
    assert!(result.is_err());
}

#[test]
fn test_shape_mismatch_fails_with_decode_error() {
    // Well-formed JSON that lacks the target's fields is still a decode
    // failure — structural checks are all the decoder performs.
    let result: Result<Rect, DecodeError> = from_json(r#"{"w":10,"h":20}"#);
    assert!(result.is_err());
}
