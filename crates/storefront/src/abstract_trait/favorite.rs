use crate::{
    domain::{
        requests::AddFavoriteRequest,
        response::{FavoriteLineResponse, MessageResponse},
    },
    model::{Favorite, FavoriteLine},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynFavoriteRepository = Arc<dyn FavoriteRepositoryTrait + Send + Sync>;
pub type DynFavoriteService = Arc<dyn FavoriteServiceTrait + Send + Sync>;

#[async_trait]
pub trait FavoriteRepositoryTrait {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<FavoriteLine>, RepositoryError>;
    /// Fails with `RepositoryError::AlreadyExists` when the pair is already stored.
    async fn add_favorite(&self, req: &AddFavoriteRequest) -> Result<Favorite, RepositoryError>;
}

#[async_trait]
pub trait FavoriteServiceTrait {
    async fn find_by_user(&self, user_id: &str)
    -> Result<Vec<FavoriteLineResponse>, ServiceError>;
    async fn add_favorite(&self, req: &AddFavoriteRequest) -> Result<MessageResponse, ServiceError>;
}
