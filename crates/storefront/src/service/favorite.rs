use crate::{
    abstract_trait::{DynFavoriteRepository, FavoriteServiceTrait},
    domain::{
        requests::{AddFavoriteRequest, parse_uuid},
        response::{FavoriteLineResponse, MessageResponse},
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics},
};
use tokio::time::Instant;

#[derive(Clone)]
pub struct FavoriteService {
    repository: DynFavoriteRepository,
    metrics: Metrics,
}

impl FavoriteService {
    pub fn new(repository: DynFavoriteRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::registered(registry, "favorite_service", "FavoriteService");
        Self {
            repository,
            metrics,
        }
    }
}

#[async_trait]
impl FavoriteServiceTrait for FavoriteService {
    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<FavoriteLineResponse>, ServiceError> {
        let user_id = parse_uuid(user_id, "user_id")?;

        let started = Instant::now();
        let result = self.repository.find_by_user(user_id).await;
        self.metrics.observe(Method::Get, started, &result);

        Ok(result?.into_iter().map(FavoriteLineResponse::from).collect())
    }

    async fn add_favorite(
        &self,
        req: &AddFavoriteRequest,
    ) -> Result<MessageResponse, ServiceError> {
        let started = Instant::now();
        let result = self.repository.add_favorite(req).await;
        self.metrics.observe(Method::Post, started, &result);

        result?;
        Ok(MessageResponse::success("Product added to favorites"))
    }
}
