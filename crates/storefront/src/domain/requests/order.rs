use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub user_id: Uuid,

    #[schema(example = 42.0)]
    pub total: Option<f64>,

    #[serde(default = "default_status")]
    #[schema(example = "Pending")]
    pub status: String,
}

fn default_status() -> String {
    "Pending".to_string()
}

/// Both fields are optional on the wire so that a missing value surfaces as a
/// validation message instead of a deserialization error. A zero is treated as
/// missing by the order service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddOrderProductRequest {
    #[validate(required(message = "product_id is required"))]
    #[schema(example = 3)]
    pub product_id: Option<i32>,

    #[validate(required(message = "quantity is required"))]
    #[schema(example = 1)]
    pub quantity: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_pending() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"user_id":"6f1c2f8e-4b7a-4d8e-9a52-0c6b7f0e2d11","total":10.0}"#,
        )
        .unwrap();
        assert_eq!(req.status, "Pending");
    }

    #[test]
    fn order_product_requires_both_fields() {
        let req: AddOrderProductRequest = serde_json::from_str(r#"{"product_id":3}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn negative_quantity_passes_validation() {
        let req = AddOrderProductRequest {
            product_id: Some(3),
            quantity: Some(-1),
        };
        assert!(req.validate().is_ok());
    }
}
