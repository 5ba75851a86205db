use crate::{
    abstract_trait::DynFavoriteService,
    domain::{
        requests::AddFavoriteRequest,
        response::{FavoriteLineResponse, MessageResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/favorites/{user_id}",
    tag = "Favorite",
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Favorites joined with their products", body = Vec<FavoriteLineResponse>),
        (status = 400, description = "Malformed user_id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_favorites(
    Extension(service): Extension<DynFavoriteService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let favorites = service
        .find_by_user(&user_id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to fetch favorites"))?;

    Ok((StatusCode::OK, Json(favorites)))
}

#[utoipa::path(
    post,
    path = "/favorites",
    tag = "Favorite",
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Added to favorites", body = MessageResponse),
        (status = 400, description = "Already in favorites, or validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn add_favorite(
    Extension(service): Extension<DynFavoriteService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddFavoriteRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let message = service
        .add_favorite(&body)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to add product to favorites"))?;

    Ok((StatusCode::CREATED, Json(message)))
}

pub fn favorite_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/favorites", post(add_favorite))
        .route("/favorites/{user_id}", get(get_favorites))
        .layer(Extension(app_state.di_container.favorite_service.clone()))
}
