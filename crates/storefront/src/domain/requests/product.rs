use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ceramic mug")]
    pub name: String,

    #[schema(example = "350ml, dishwasher safe")]
    pub description: Option<String>,

    #[schema(example = 12.5)]
    pub price: f64,

    #[schema(example = 40)]
    pub stock: i32,

    #[schema(example = "images/mug.png")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Ceramic mug")]
    pub name: String,

    pub description: Option<String>,

    #[schema(example = 14.0)]
    pub price: f64,

    #[schema(example = 25)]
    pub stock: i32,

    pub image_url: Option<String>,
}
