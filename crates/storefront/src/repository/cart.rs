use crate::{
    abstract_trait::CartRepositoryTrait,
    domain::requests::{AddToCartRequest, RemoveCartItemRequest, UpdateCartItemRequest},
    model::{CartItem, CartLine},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct CartRepository {
    db: ConnectionPool,
}

impl CartRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<CartLine>, RepositoryError> {
        info!("🛒 Fetching cart for user {}", user_id);

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let lines = sqlx::query_as::<_, CartLine>(
            r#"
            SELECT c.cart_id, p.product_id, p.name, p.description, p.price,
                   c.quantity, p.image_url, c.added_at
            FROM cart c
            JOIN product p ON c.product_id = p.product_id
            WHERE c.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cart for user {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(lines)
    }

    async fn upsert_item(&self, req: &AddToCartRequest) -> Result<CartItem, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItem>(
            r#"
            INSERT INTO cart (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = cart.quantity + EXCLUDED.quantity
            RETURNING *
            "#,
        )
        .bind(req.user_id)
        .bind(req.product_id)
        .bind(req.quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to add product {} to cart of {}: {:?}",
                req.product_id, req.user_id, e
            );
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Cart {} now holds {} x product {}",
            item.cart_id, item.quantity, item.product_id
        );
        Ok(item)
    }

    async fn update_quantity(
        &self,
        req: &UpdateCartItemRequest,
    ) -> Result<Option<CartItem>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let item = sqlx::query_as::<_, CartItem>(
            r#"
            UPDATE cart
            SET quantity = $1
            WHERE user_id = $2 AND product_id = $3
            RETURNING *
            "#,
        )
        .bind(req.quantity)
        .bind(req.user_id)
        .bind(req.product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to update quantity of product {} for {}: {:?}",
                req.product_id, req.user_id, e
            );
            RepositoryError::from(e)
        })?;

        Ok(item)
    }

    async fn remove_item(&self, req: &RemoveCartItemRequest) -> Result<u64, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM cart WHERE user_id = $1 AND product_id = $2")
            .bind(req.user_id)
            .bind(req.product_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to remove product {} from cart of {}: {:?}",
                    req.product_id, req.user_id, e
                );
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn clear(&self, user_id: Uuid) -> Result<u64, RepositoryError> {
        info!("🧹 Clearing cart for user {}", user_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM cart WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to clear cart for {}: {:?}", user_id, e);
                RepositoryError::from(e)
            })?;

        info!("✅ Removed {} cart rows", result.rows_affected());
        Ok(result.rows_affected())
    }
}
