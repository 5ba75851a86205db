use crate::{
    abstract_trait::DynOrderService,
    domain::{
        requests::{AddOrderProductRequest, CreateOrderRequest},
        response::{
            OrderProductLineResponse, OrderProductResponse, OrderResponse, OrderTotalResponse,
        },
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "First existing order of the user; empty body when there is none", body = OrderResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<Response, HttpError> {
    let order = service
        .create_order(&body)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to create order"))?;

    Ok(match order {
        Some(order) => (StatusCode::CREATED, Json(order)).into_response(),
        None => StatusCode::CREATED.into_response(),
    })
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Orders of the user", body = Vec<OrderResponse>),
        (status = 400, description = "Malformed user_id", body = ErrorResponse),
        (status = 404, description = "Orders not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user_orders(
    Extension(service): Extension<DynOrderService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let orders = service
        .find_by_user(&user_id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to fetch orders"))?;

    Ok((StatusCode::OK, Json(orders)))
}

#[utoipa::path(
    get,
    path = "/orders/total/{user_id}",
    tag = "Order",
    params(("user_id" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Sum of the user's order totals", body = OrderTotalResponse),
        (status = 400, description = "Malformed user_id", body = ErrorResponse),
        (status = 404, description = "Orders not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_orders_total(
    Extension(service): Extension<DynOrderService>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let total = service
        .total_by_user(&user_id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to compute order total"))?;

    Ok((StatusCode::OK, Json(total)))
}

#[utoipa::path(
    get,
    path = "/orders/detail/{order_id}",
    tag = "Order",
    params(("order_id" = String, Path, description = "Order UUID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 400, description = "Malformed order_id", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderService>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let order = service
        .find_by_id(&order_id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to fetch order"))?;

    Ok((StatusCode::OK, Json(order)))
}

#[utoipa::path(
    post,
    path = "/orders/{id}/products",
    tag = "Order",
    params(("id" = String, Path, description = "Order UUID")),
    request_body = AddOrderProductRequest,
    responses(
        (status = 201, description = "Product linked to the order", body = OrderProductResponse),
        (status = 400, description = "product_id or quantity missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn add_order_product(
    Extension(service): Extension<DynOrderService>,
    Path(order_id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddOrderProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let link = service
        .add_product(&order_id, &body)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to add product to order"))?;

    Ok((StatusCode::CREATED, Json(link)))
}

#[utoipa::path(
    get,
    path = "/order_products/{order_id}",
    tag = "Order",
    params(("order_id" = String, Path, description = "Order UUID")),
    responses(
        (status = 200, description = "Products of the order", body = Vec<OrderProductLineResponse>),
        (status = 400, description = "Malformed order_id", body = ErrorResponse),
        (status = 404, description = "No products found for this order", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_order_products(
    Extension(service): Extension<DynOrderService>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let lines = service
        .find_products(&order_id)
        .await
        .map_err(|e| HttpError::from_service(e, "Failed to fetch order products"))?;

    Ok((StatusCode::OK, Json(lines)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/orders", post(create_order))
        .route("/orders/{id}", get(get_user_orders))
        .route("/orders/{id}/products", post(add_order_product))
        .route("/orders/total/{user_id}", get(get_orders_total))
        .route("/orders/detail/{order_id}", get(get_order))
        .route("/order_products/{order_id}", get(get_order_products))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
