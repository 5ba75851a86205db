use crate::{
    domain::{
        requests::{AddOrderProductRequest, CreateOrderRequest},
        response::{
            OrderProductLineResponse, OrderProductResponse, OrderResponse, OrderTotalResponse,
        },
    },
    model::{Order, OrderProduct, OrderProductLine, OrderTotal},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait {
    async fn find_first_by_user(&self, user_id: Uuid) -> Result<Option<Order>, RepositoryError>;
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, RepositoryError>;
    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, RepositoryError>;
    async fn find_products(&self, order_id: Uuid)
    -> Result<Vec<OrderProductLine>, RepositoryError>;
    async fn total_by_user(&self, user_id: Uuid) -> Result<Option<OrderTotal>, RepositoryError>;
    async fn add_product(
        &self,
        order_id: Uuid,
        product_id: i32,
        quantity: i32,
    ) -> Result<OrderProduct, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    /// Looks up the caller's first existing order; it does not insert one.
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<Option<OrderResponse>, ServiceError>;
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn find_by_id(&self, order_id: &str) -> Result<OrderResponse, ServiceError>;
    async fn find_products(
        &self,
        order_id: &str,
    ) -> Result<Vec<OrderProductLineResponse>, ServiceError>;
    async fn total_by_user(&self, user_id: &str) -> Result<OrderTotalResponse, ServiceError>;
    async fn add_product(
        &self,
        order_id: &str,
        req: &AddOrderProductRequest,
    ) -> Result<OrderProductResponse, ServiceError>;
}
