use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::validation::{as_object, required_positive_number, required_string};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub about: String,
    pub price: f64,
}

/// Normalized create payload. A price that is not strictly positive never
/// makes it past this point.
#[derive(Debug)]
pub struct NewProduct {
    pub name: String,
    pub about: String,
    pub price: f64,
}

impl NewProduct {
    pub fn parse(body: &Value) -> Result<Self, ApiError> {
        let map = as_object(body)?;
        let mut errors = Vec::new();

        let name = required_string(map, "name", &mut errors);
        let about = required_string(map, "about", &mut errors);
        let price = required_positive_number(map, "price", &mut errors);

        match (name, about, price) {
            (Some(name), Some(about), Some(price)) => Ok(Self { name, about, price }),
            _ => Err(ApiError::Validation(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_payload_parses() {
        let p = NewProduct::parse(&json!({ "name": "Sword", "about": "Sharp", "price": 9.99 }))
            .unwrap();
        assert_eq!(p.name, "Sword");
        assert_eq!(p.about, "Sharp");
        assert_eq!(p.price, 9.99);
    }

    #[test]
    fn zero_or_negative_price_is_rejected() {
        for price in [json!(0), json!(-1), json!(-0.01)] {
            let err =
                NewProduct::parse(&json!({ "name": "x", "about": "y", "price": price }))
                    .unwrap_err();
            match err {
                ApiError::Validation(details) => {
                    assert_eq!(details[0].field, "price");
                    assert_eq!(details[0].message, "must be a positive number");
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn price_as_string_is_rejected() {
        let err = NewProduct::parse(&json!({ "name": "x", "about": "y", "price": "10" }))
            .unwrap_err();
        match err {
            ApiError::Validation(details) => {
                assert_eq!(details[0].message, "must be a number");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let err = NewProduct::parse(&json!({ "name": "x" })).unwrap_err();
        match err {
            ApiError::Validation(details) => {
                let fields: Vec<_> = details.iter().map(|d| d.field.as_str()).collect();
                assert_eq!(fields, ["about", "price"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
