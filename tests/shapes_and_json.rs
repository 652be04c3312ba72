//! Integration tests for the rectangle and JSON helper exercises.

use cssb::{CssbError, Rectangle, json};

// ============================================================================
// RECTANGLE
// ============================================================================

#[test]
fn test_rectangle_area() {
    let rect = Rectangle::new(10.0, 20.0);
    assert_eq!(rect.area(), 200.0);
}

#[test]
fn test_rectangle_fields_are_public() {
    let rect = Rectangle::new(3.5, 2.0);
    assert_eq!(rect.width, 3.5);
    assert_eq!(rect.height, 2.0);
    assert_eq!(rect.area(), 7.0);
}

// ============================================================================
// JSON HELPERS
// ============================================================================

#[test]
fn test_to_json() -> Result<(), CssbError> {
    let text = json::to_json(&Rectangle::new(10.0, 20.0))?;
    assert_eq!(text, r#"{"width":10.0,"height":20.0}"#);
    Ok(())
}

#[test]
fn test_from_json_restores_behavior() -> Result<(), CssbError> {
    // The parsed value is a full Rectangle, methods included.
    let rect: Rectangle = json::from_json(r#"{"width":10.0,"height":20.0}"#)?;
    assert_eq!(rect.area(), 200.0);
    Ok(())
}

#[test]
fn test_from_json_rejects_malformed_input() {
    let result: Result<Rectangle, _> = json::from_json("{not json");
    assert!(matches!(result, Err(CssbError::Json(_))));
}

#[test]
fn test_helpers_are_generic() -> Result<(), CssbError> {
    let names: Vec<String> = json::from_json(r#"["a","b"]"#)?;
    assert_eq!(names, ["a", "b"]);
    assert_eq!(json::to_json(&names)?, r#"["a","b"]"#);
    Ok(())
}
