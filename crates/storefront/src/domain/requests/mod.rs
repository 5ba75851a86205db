mod cart;
mod favorite;
mod order;
mod product;

pub use self::cart::{AddToCartRequest, RemoveCartItemRequest, UpdateCartItemRequest};
pub use self::favorite::AddFavoriteRequest;
pub use self::order::{AddOrderProductRequest, CreateOrderRequest};
pub use self::product::{CreateProductRequest, UpdateProductRequest};

use shared::errors::ServiceError;
use uuid::Uuid;

/// Parses a path identifier that must be a UUID, before any store access.
pub fn parse_uuid(value: &str, field: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(value).map_err(|_| ServiceError::InvalidId(format!("Invalid {field} format")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hyphenated_uuid() {
        let id = parse_uuid("6f1c2f8e-4b7a-4d8e-9a52-0c6b7f0e2d11", "user_id").unwrap();
        assert_eq!(id.to_string(), "6f1c2f8e-4b7a-4d8e-9a52-0c6b7f0e2d11");
    }

    #[test]
    fn names_the_field_on_failure() {
        match parse_uuid("not-a-uuid", "order_id") {
            Err(ServiceError::InvalidId(msg)) => assert_eq!(msg, "Invalid order_id format"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
