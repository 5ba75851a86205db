use crate::{
    abstract_trait::OrderRepositoryTrait,
    model::{Order, OrderProduct, OrderProductLine, OrderTotal},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn find_first_by_user(&self, user_id: Uuid) -> Result<Option<Order>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE user_id = $1 ORDER BY created_at LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to look up orders of {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(order)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, RepositoryError> {
        info!("📦 Fetching orders for user {}", user_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders for {}: {:?}", user_id, e);
                RepositoryError::from(e)
            })?;

        Ok(orders)
    }

    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, RepositoryError> {
        info!("🆔 Fetching order {}", order_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE order_id = $1")
            .bind(order_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {}: {:?}", order_id, e);
                RepositoryError::from(e)
            })?;

        Ok(order)
    }

    async fn find_products(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderProductLine>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let lines = sqlx::query_as::<_, OrderProductLine>(
            r#"
            SELECT op.order_id, op.product_id, p.name, p.description, p.price, op.quantity
            FROM order_products op
            JOIN product p ON op.product_id = p.product_id
            WHERE op.order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products of order {}: {:?}", order_id, e);
            RepositoryError::from(e)
        })?;

        Ok(lines)
    }

    async fn total_by_user(&self, user_id: Uuid) -> Result<Option<OrderTotal>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let total = sqlx::query_as::<_, OrderTotal>(
            "SELECT SUM(total) AS total FROM orders WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to sum orders of {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(total)
    }

    async fn add_product(
        &self,
        order_id: Uuid,
        product_id: i32,
        quantity: i32,
    ) -> Result<OrderProduct, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let link = sqlx::query_as::<_, OrderProduct>(
            r#"
            INSERT INTO order_products (order_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to add product {} to order {}: {:?}",
                product_id, order_id, e
            );
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Added {} x product {} to order {}",
            link.quantity, link.product_id, link.order_id
        );
        Ok(link)
    }
}
