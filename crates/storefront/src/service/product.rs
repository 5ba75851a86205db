use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::ProductResponse,
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
pub struct ProductService {
    repository: DynProductRepository,
    metrics: Metrics,
}

impl ProductService {
    pub fn new(repository: DynProductRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::registered(registry, "product_service", "ProductService");
        Self {
            repository,
            metrics,
        }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.repository.find_all().await;
        self.metrics.observe(Method::Get, started, &result);

        Ok(result?.into_iter().map(ProductResponse::from).collect())
    }

    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product '{}'", req.name);

        let started = Instant::now();
        let result = self.repository.create_product(req).await;
        self.metrics.observe(Method::Post, started, &result);

        Ok(ProductResponse::from(result?))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<ProductResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.repository.update_product(id, req).await;
        self.metrics.observe(Method::Put, started, &result);

        Ok(result?.map(ProductResponse::from))
    }

    async fn update_existing_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        match self.update_product(id, req).await? {
            Some(product) => Ok(product),
            None => {
                warn!("⚠️ Product {} not found for update", id);
                Err(ServiceError::NotFound("Product not found".to_string()))
            }
        }
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        let started = Instant::now();
        let result = self.repository.delete_product(id).await;
        self.metrics.observe(Method::Delete, started, &result);

        result?;
        Ok(())
    }
}
