use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddFavoriteRequest {
    pub user_id: Uuid,

    #[schema(example = 1)]
    pub product_id: i32,
}
