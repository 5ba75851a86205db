use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub cart_id: i32,
    pub user_id: Uuid,
    pub product_id: i32,
    pub quantity: i32,
    pub added_at: Option<NaiveDateTime>,
}

/// A cart row joined with the product it points at.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartLine {
    pub cart_id: i32,
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub added_at: Option<NaiveDateTime>,
}
