use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl HttpError {
    /// Maps a service failure to an HTTP error, replacing store failures with
    /// `fallback` so that database details never reach the client.
    pub fn from_service(err: ServiceError, fallback: &str) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::BadRequest(errors.join("; ")),
            ServiceError::InvalidId(msg) => HttpError::BadRequest(msg),
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::AlreadyExists(msg) => HttpError::BadRequest(msg),
                RepositoryError::Sqlx(cause) => {
                    error!("❌ {fallback}: {cause:?}");
                    HttpError::Internal(fallback.to_string())
                }
            },

            ServiceError::Internal(msg) => {
                error!("❌ {fallback}: {msg}");
                HttpError::Internal(fallback.to_string())
            }
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        HttpError::from_service(err, "Internal server error")
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_hide_their_cause() {
        let err = ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        match HttpError::from_service(err, "Failed to fetch cart") {
            HttpError::Internal(msg) => assert_eq!(msg, "Failed to fetch cart"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn duplicates_are_bad_requests() {
        let err = ServiceError::Repo(RepositoryError::AlreadyExists("already there".into()));
        let response = HttpError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_ids_and_missing_rows_map_to_client_errors() {
        let bad = HttpError::from(ServiceError::InvalidId("Invalid order_id format".into()));
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = HttpError::from(ServiceError::NotFound("Order not found".into()));
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
    }
}
