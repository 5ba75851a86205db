use crate::{
    domain::{
        requests::{AddToCartRequest, RemoveCartItemRequest, UpdateCartItemRequest},
        response::{CartItemResponse, CartLineResponse, MessageResponse},
    },
    model::{CartItem, CartLine},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<CartLine>, RepositoryError>;
    /// Inserts the item or adds `quantity` to the existing row for the same
    /// (user_id, product_id) pair.
    async fn upsert_item(&self, req: &AddToCartRequest) -> Result<CartItem, RepositoryError>;
    async fn update_quantity(
        &self,
        req: &UpdateCartItemRequest,
    ) -> Result<Option<CartItem>, RepositoryError>;
    async fn remove_item(&self, req: &RemoveCartItemRequest) -> Result<u64, RepositoryError>;
    async fn clear(&self, user_id: Uuid) -> Result<u64, RepositoryError>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<CartLineResponse>, ServiceError>;
    async fn add_item(&self, req: &AddToCartRequest) -> Result<CartItemResponse, ServiceError>;
    async fn update_quantity(
        &self,
        req: &UpdateCartItemRequest,
    ) -> Result<CartItemResponse, ServiceError>;
    async fn remove_item(&self, req: &RemoveCartItemRequest)
    -> Result<MessageResponse, ServiceError>;
    async fn clear(&self, user_id: &str) -> Result<MessageResponse, ServiceError>;
}
