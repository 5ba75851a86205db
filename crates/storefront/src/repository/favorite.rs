use crate::{
    abstract_trait::FavoriteRepositoryTrait,
    domain::requests::AddFavoriteRequest,
    model::{Favorite, FavoriteLine},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct FavoriteRepository {
    db: ConnectionPool,
}

impl FavoriteRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FavoriteRepositoryTrait for FavoriteRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<FavoriteLine>, RepositoryError> {
        info!("⭐ Fetching favorites for user {}", user_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let lines = sqlx::query_as::<_, FavoriteLine>(
            r#"
            SELECT f.favorite_id, p.product_id, p.name, p.description, p.price,
                   p.image_url, f.added_at
            FROM favorites f
            JOIN product p ON f.product_id = p.product_id
            WHERE f.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch favorites for {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(lines)
    }

    async fn add_favorite(&self, req: &AddFavoriteRequest) -> Result<Favorite, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // The unique (user_id, product_id) constraint decides; no row back means a duplicate.
        let inserted = sqlx::query_as::<_, Favorite>(
            r#"
            INSERT INTO favorites (user_id, product_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, product_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(req.user_id)
        .bind(req.product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to add product {} to favorites of {}: {:?}",
                req.product_id, req.user_id, e
            );
            RepositoryError::from(e)
        })?;

        match inserted {
            Some(favorite) => {
                info!(
                    "✅ Favorite {} created for user {}",
                    favorite.favorite_id, favorite.user_id
                );
                Ok(favorite)
            }
            None => Err(RepositoryError::AlreadyExists(
                "Product is already in favorites".to_string(),
            )),
        }
    }
}
