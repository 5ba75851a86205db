use crate::model::{CartItem, CartLine};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub cart_id: i32,
    pub user_id: Uuid,
    pub product_id: i32,
    pub quantity: i32,
    pub added_at: Option<String>,
}

impl From<CartItem> for CartItemResponse {
    fn from(value: CartItem) -> Self {
        CartItemResponse {
            cart_id: value.cart_id,
            user_id: value.user_id,
            product_id: value.product_id,
            quantity: value.quantity,
            added_at: value.added_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartLineResponse {
    pub cart_id: i32,
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub added_at: Option<String>,
}

impl From<CartLine> for CartLineResponse {
    fn from(value: CartLine) -> Self {
        CartLineResponse {
            cart_id: value.cart_id,
            product_id: value.product_id,
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
            image_url: value.image_url,
            added_at: value.added_at.map(|dt| dt.to_string()),
        }
    }
}
