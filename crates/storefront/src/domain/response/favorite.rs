use crate::model::FavoriteLine;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FavoriteLineResponse {
    pub favorite_id: i32,
    pub product_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image_url: Option<String>,
    pub added_at: Option<String>,
}

impl From<FavoriteLine> for FavoriteLineResponse {
    fn from(value: FavoriteLine) -> Self {
        FavoriteLineResponse {
            favorite_id: value.favorite_id,
            product_id: value.product_id,
            name: value.name,
            description: value.description,
            price: value.price,
            image_url: value.image_url,
            added_at: value.added_at.map(|dt| dt.to_string()),
        }
    }
}
