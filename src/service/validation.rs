//! Creation-input validation: presence, integer types and the price range.

use crate::error::{AppError, ValidationError};
use crate::models::NewRestaurantPizza;
use serde_json::Value;

pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 30;

/// Checks a candidate price: absent first, then the inclusive `[MIN_PRICE, MAX_PRICE]` range.
pub fn validate_price(candidate: Option<i64>) -> Result<i64, ValidationError> {
    let price = candidate.ok_or(ValidationError::MissingField { field: "price" })?;
    if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
        return Err(ValidationError::OutOfRange {
            field: "price",
            value: price,
            min: MIN_PRICE,
            max: MAX_PRICE,
        });
    }
    Ok(price)
}

impl NewRestaurantPizza {
    /// Parse a request body. Presence of every field is checked before types, types before the price range.
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let obj = body
            .as_object()
            .ok_or_else(|| AppError::BadRequest("body must be a JSON object".into()))?;

        const FIELDS: [&str; 3] = ["price", "restaurant_id", "pizza_id"];
        for field in FIELDS {
            if obj.get(field).map_or(true, Value::is_null) {
                return Err(ValidationError::MissingField { field }.into());
            }
        }
        let int = |field: &'static str| match obj.get(field) {
            Some(v) if v.is_i64() || v.is_u64() => Ok(v.as_i64()),
            _ => Err(ValidationError::InvalidType { field }),
        };
        // `None` below means an integer past i64::MAX.
        let price = int("price")?;
        let restaurant_id = int("restaurant_id")?;
        let pizza_id = int("pizza_id")?;

        let price = validate_price(Some(price.unwrap_or(i64::MAX)))?;
        let restaurant_id = restaurant_id.ok_or(ValidationError::UnknownReference {
            field: "restaurant_id",
            id: i64::MAX,
        })?;
        let pizza_id = pizza_id.ok_or(ValidationError::UnknownReference {
            field: "pizza_id",
            id: i64::MAX,
        })?;

        Ok(NewRestaurantPizza {
            price,
            restaurant_id,
            pizza_id,
        })
    }
}
