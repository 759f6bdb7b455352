//! Product-related DTOs for API requests and responses.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{NewProduct, Product};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new product.
///
/// Presence of all three fields is enforced by deserialization; the non-empty
/// rules are business validation applied before any store interaction.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddProductRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    #[schema(min_length = 1, example = "New Product")]
    pub name: String,
    #[validate(length(min = 1, message = "Colour must not be empty"))]
    #[schema(min_length = 1, example = "Blue")]
    pub colour: String,
    /// Decimal price; accepted as a JSON number or string.
    #[schema(value_type = String, example = "150.00")]
    pub price: BigDecimal,
}

impl AddProductRequest {
    /// Converts the request DTO into a NewProduct model for staging.
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            colour: self.colour,
            price: self.price,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for product data.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub colour: String,
    #[schema(value_type = String, example = "150.00")]
    pub price: BigDecimal,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            colour: product.colour,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn empty_name_fails_validation() {
        let request = AddProductRequest {
            name: String::new(),
            colour: "Red".to_string(),
            price: BigDecimal::from_str("100").unwrap(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn empty_colour_fails_validation() {
        let request = AddProductRequest {
            name: "Invalid Product".to_string(),
            colour: String::new(),
            price: BigDecimal::from_str("-50").unwrap(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("colour"));
    }

    #[test]
    fn negative_price_is_structurally_valid() {
        // No lower bound is enforced on price in this API.
        let request = AddProductRequest {
            name: "Discounted".to_string(),
            colour: "Red".to_string(),
            price: BigDecimal::from_str("-1").unwrap(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn price_deserializes_from_json_number() {
        let request: AddProductRequest =
            serde_json::from_str(r#"{"name":"P","colour":"Blue","price":150}"#).unwrap();
        assert_eq!(request.price, BigDecimal::from_str("150").unwrap());
    }
}
