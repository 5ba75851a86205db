use crate::{
    abstract_trait::{CartServiceTrait, DynCartRepository},
    domain::{
        requests::{AddToCartRequest, RemoveCartItemRequest, UpdateCartItemRequest, parse_uuid},
        response::{CartItemResponse, CartLineResponse, MessageResponse},
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics},
};
use tokio::time::Instant;
use tracing::info;

#[derive(Clone)]
pub struct CartService {
    repository: DynCartRepository,
    metrics: Metrics,
}

impl CartService {
    pub fn new(repository: DynCartRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::registered(registry, "cart_service", "CartService");
        Self {
            repository,
            metrics,
        }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<CartLineResponse>, ServiceError> {
        let user_id = parse_uuid(user_id, "user_id")?;

        let started = Instant::now();
        let result = self.repository.find_by_user(user_id).await;
        self.metrics.observe(Method::Get, started, &result);

        Ok(result?.into_iter().map(CartLineResponse::from).collect())
    }

    async fn add_item(&self, req: &AddToCartRequest) -> Result<CartItemResponse, ServiceError> {
        info!(
            "➕ Adding {} x product {} to cart of {}",
            req.quantity, req.product_id, req.user_id
        );

        let started = Instant::now();
        let result = self.repository.upsert_item(req).await;
        self.metrics.observe(Method::Post, started, &result);

        Ok(CartItemResponse::from(result?))
    }

    async fn update_quantity(
        &self,
        req: &UpdateCartItemRequest,
    ) -> Result<CartItemResponse, ServiceError> {
        let started = Instant::now();
        let result = self.repository.update_quantity(req).await;
        self.metrics.observe(Method::Put, started, &result);

        result?
            .map(CartItemResponse::from)
            .ok_or_else(|| ServiceError::NotFound("Item not found in cart".to_string()))
    }

    async fn remove_item(
        &self,
        req: &RemoveCartItemRequest,
    ) -> Result<MessageResponse, ServiceError> {
        let started = Instant::now();
        let result = self.repository.remove_item(req).await;
        self.metrics.observe(Method::Delete, started, &result);

        if result? == 0 {
            return Err(ServiceError::NotFound("Item not found in cart".to_string()));
        }

        Ok(MessageResponse::success("Item removed from cart"))
    }

    async fn clear(&self, user_id: &str) -> Result<MessageResponse, ServiceError> {
        let user_id = parse_uuid(user_id, "user_id")?;

        let started = Instant::now();
        let result = self.repository.clear(user_id).await;
        self.metrics.observe(Method::Delete, started, &result);

        // Clearing an already empty cart is still a success.
        result?;
        Ok(MessageResponse::success("Cart cleared"))
    }
}
