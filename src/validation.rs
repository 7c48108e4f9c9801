use serde_json::{Map, Value};

use crate::error::{ApiError, FieldError};

/// Parses a path identifier. Anything that is not a strictly positive
/// integer is rejected before any query runs.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidId),
    }
}

pub fn as_object(body: &Value) -> Result<&Map<String, Value>, ApiError> {
    body.as_object().ok_or_else(|| {
        ApiError::Validation(vec![FieldError::new("body", "must be a JSON object")])
    })
}

pub fn required_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match map.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            errors.push(FieldError::new(field, "must be a non-empty string"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

/// Like `required_string`, but absence is not an error. Used for PATCH
/// payloads where any subset of fields may appear.
pub fn optional_string(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match map.get(field) {
        None => None,
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::String(_)) => {
            errors.push(FieldError::new(field, "must be a non-empty string"));
            None
        }
        Some(_) => {
            errors.push(FieldError::new(field, "must be a string"));
            None
        }
    }
}

pub fn required_positive_number(
    map: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    match map.get(field) {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(v) if v > 0.0 => Some(v),
            _ => {
                errors.push(FieldError::new(field, "must be a positive number"));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new(field, "must be a number"));
            None
        }
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("42").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_everything_else() {
        for raw in ["abc", "-1", "0", "1.5", "", " 1", "1 ", "+"] {
            assert!(parse_id(raw).is_err(), "expected {raw:?} to be rejected");
        }
    }

    #[test]
    fn required_string_rejects_missing_empty_and_mistyped() {
        let map = json!({ "empty": "", "number": 3 });
        let map = map.as_object().unwrap();
        let mut errors = Vec::new();

        assert!(required_string(map, "absent", &mut errors).is_none());
        assert!(required_string(map, "empty", &mut errors).is_none());
        assert!(required_string(map, "number", &mut errors).is_none());
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].message, "is required");
        assert_eq!(errors[1].message, "must be a non-empty string");
        assert_eq!(errors[2].message, "must be a string");
    }

    #[test]
    fn optional_string_skips_absent_fields_silently() {
        let map = json!({ "name": "Ann" });
        let map = map.as_object().unwrap();
        let mut errors = Vec::new();

        assert_eq!(optional_string(map, "name", &mut errors).as_deref(), Some("Ann"));
        assert!(optional_string(map, "absent", &mut errors).is_none());
        assert!(errors.is_empty());
    }

    #[test]
    fn positive_number_rejects_zero_negative_and_strings() {
        let map = json!({ "zero": 0, "neg": -2.5, "text": "10" });
        let map = map.as_object().unwrap();
        let mut errors = Vec::new();

        assert!(required_positive_number(map, "zero", &mut errors).is_none());
        assert!(required_positive_number(map, "neg", &mut errors).is_none());
        assert!(required_positive_number(map, "text", &mut errors).is_none());
        assert!(required_positive_number(map, "absent", &mut errors).is_none());
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn positive_number_accepts_integers_and_floats() {
        let map = json!({ "int": 5, "float": 9.99 });
        let map = map.as_object().unwrap();
        let mut errors = Vec::new();

        assert_eq!(required_positive_number(map, "int", &mut errors), Some(5.0));
        assert_eq!(required_positive_number(map, "float", &mut errors), Some(9.99));
        assert!(errors.is_empty());
    }
}
