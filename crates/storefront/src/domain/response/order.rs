use crate::model::{Order, OrderProduct, OrderProductLine, OrderTotal};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub total: f64,
    pub status: String,
    pub created_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            order_id: value.order_id,
            user_id: value.user_id,
            total: value.total,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderProductResponse {
    pub order_id: Uuid,
    pub product_id: i32,
    pub quantity: i32,
}

impl From<OrderProduct> for OrderProductResponse {
    fn from(value: OrderProduct) -> Self {
        OrderProductResponse {
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderProductLineResponse {
    pub order_id: Uuid,
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

impl From<OrderProductLine> for OrderProductLineResponse {
    fn from(value: OrderProductLine) -> Self {
        OrderProductLineResponse {
            order_id: value.order_id,
            product_id: value.product_id,
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
        }
    }
}

/// `total` is null when the user has no orders: `SUM` over zero rows.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderTotalResponse {
    pub total: Option<f64>,
}

impl From<OrderTotal> for OrderTotalResponse {
    fn from(value: OrderTotal) -> Self {
        OrderTotalResponse { total: value.total }
    }
}
