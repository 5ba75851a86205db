use crate::{
    abstract_trait::DynCartService,
    domain::{
        requests::{AddToCartRequest, RemoveCartItemRequest, UpdateCartItemRequest},
        response::{CartItemResponse, CartLineResponse, MessageResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/cart/{user_id}",
    tag = "Cart",
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Cart lines joined with their products", body = Vec<CartLineResponse>),
        (status = 400, description = "Malformed user_id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let lines = service
        .find_by_user(&user_id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to fetch cart"))?;

    Ok((StatusCode::OK, Json(lines)))
}

#[utoipa::path(
    post,
    path = "/cart",
    tag = "Cart",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Item added; quantity accumulates for an existing item", body = CartItemResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn add_to_cart(
    Extension(service): Extension<DynCartService>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddToCartRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service
        .add_item(&body)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to add item to cart"))?;

    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/cart",
    tag = "Cart",
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Quantity updated", body = CartItemResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Item not found in cart", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_cart_item(
    Extension(service): Extension<DynCartService>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let item = service
        .update_quantity(&body)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to update item quantity"))?;

    Ok((StatusCode::OK, Json(item)))
}

#[utoipa::path(
    delete,
    path = "/cart",
    tag = "Cart",
    request_body = RemoveCartItemRequest,
    responses(
        (status = 200, description = "Item removed", body = MessageResponse),
        (status = 404, description = "Item not found in cart", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn remove_cart_item(
    Extension(service): Extension<DynCartService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RemoveCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let message = service
        .remove_item(&body)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to remove item from cart"))?;

    Ok((StatusCode::OK, Json(message)))
}

#[utoipa::path(
    delete,
    path = "/cart/{user_id}",
    tag = "Cart",
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Cart cleared, even when it was already empty", body = MessageResponse),
        (status = 400, description = "Malformed user_id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn clear_cart(
    Extension(service): Extension<DynCartService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let message = service
        .clear(&user_id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to clear cart"))?;

    Ok((StatusCode::OK, Json(message)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/cart", post(add_to_cart))
        .route("/cart", put(update_cart_item))
        .route("/cart", delete(remove_cart_item))
        .route("/cart/{user_id}", get(get_cart))
        .route("/cart/{user_id}", delete(clear_cart))
        .layer(Extension(app_state.di_container.cart_service.clone()))
}
