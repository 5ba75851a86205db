use crate::{
    abstract_trait::{DynOrderRepository, OrderServiceTrait},
    domain::{
        requests::{AddOrderProductRequest, CreateOrderRequest, parse_uuid},
        response::{
            OrderProductLineResponse, OrderProductResponse, OrderResponse, OrderTotalResponse,
        },
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics},
};
use tokio::time::Instant;
use tracing::{info, warn};

#[derive(Clone)]
pub struct OrderService {
    repository: DynOrderRepository,
    metrics: Metrics,
}

impl OrderService {
    pub fn new(repository: DynOrderRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::registered(registry, "order_service", "OrderService");
        Self {
            repository,
            metrics,
        }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<Option<OrderResponse>, ServiceError> {
        // TODO: insert a new order from `total`/`status` once the intended contract of
        // POST /orders is confirmed; until then it returns the user's first order.
        warn!(
            "⚠️ POST /orders does not insert: returning the first order of {} (total {:?}, status {})",
            req.user_id, req.total, req.status
        );

        let started = Instant::now();
        let result = self.repository.find_first_by_user(req.user_id).await;
        self.metrics.observe(Method::Post, started, &result);

        Ok(result?.map(OrderResponse::from))
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<OrderResponse>, ServiceError> {
        let user_id = parse_uuid(user_id, "user_id")?;

        let started = Instant::now();
        let result = self.repository.find_by_user(user_id).await;
        self.metrics.observe(Method::Get, started, &result);

        let orders = result?;
        if orders.is_empty() {
            return Err(ServiceError::NotFound("Orders not found".to_string()));
        }

        info!("✅ Found {} orders for {}", orders.len(), user_id);
        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    async fn find_by_id(&self, order_id: &str) -> Result<OrderResponse, ServiceError> {
        let order_id = parse_uuid(order_id, "order_id")?;

        let started = Instant::now();
        let result = self.repository.find_by_id(order_id).await;
        self.metrics.observe(Method::Get, started, &result);

        result?
            .map(OrderResponse::from)
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_string()))
    }

    async fn find_products(
        &self,
        order_id: &str,
    ) -> Result<Vec<OrderProductLineResponse>, ServiceError> {
        let order_id = parse_uuid(order_id, "order_id")?;

        let started = Instant::now();
        let result = self.repository.find_products(order_id).await;
        self.metrics.observe(Method::Get, started, &result);

        let lines = result?;
        if lines.is_empty() {
            return Err(ServiceError::NotFound(
                "No products found for this order".to_string(),
            ));
        }

        Ok(lines.into_iter().map(OrderProductLineResponse::from).collect())
    }

    async fn total_by_user(&self, user_id: &str) -> Result<OrderTotalResponse, ServiceError> {
        let user_id = parse_uuid(user_id, "user_id")?;

        let started = Instant::now();
        let result = self.repository.total_by_user(user_id).await;
        self.metrics.observe(Method::Get, started, &result);

        result?
            .map(OrderTotalResponse::from)
            .ok_or_else(|| ServiceError::NotFound("Orders not found".to_string()))
    }

    async fn add_product(
        &self,
        order_id: &str,
        req: &AddOrderProductRequest,
    ) -> Result<OrderProductResponse, ServiceError> {
        // A zero counts as missing.
        let present = |value: Option<i32>| value.filter(|v| *v != 0);
        let (Some(product_id), Some(quantity)) = (present(req.product_id), present(req.quantity))
        else {
            return Err(ServiceError::Validation(vec![
                "product_id and quantity are required".to_string(),
            ]));
        };
        let order_id = parse_uuid(order_id, "order_id")?;

        let started = Instant::now();
        let result = self
            .repository
            .add_product(order_id, product_id, quantity)
            .await;
        self.metrics.observe(Method::Post, started, &result);

        Ok(OrderProductResponse::from(result?))
    }
}
