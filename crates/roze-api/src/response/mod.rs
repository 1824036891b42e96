//! Response types and error handling for API endpoints
//!
//! Only the relay and health endpoints speak HTTP errors; the
//! interactions endpoint converts its failures into chat replies long
//! before they reach this layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roze_common::{AppError, ErrorResponse};
use tracing::error;

/// API error wrapper implementing IntoResponse
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] AppError);

impl ApiError {
    /// Create a not found error
    pub fn not_found(resource: impl std::fmt::Display) -> Self {
        Self(AppError::not_found(resource))
    }
}

impl From<roze_core::DomainError> for ApiError {
    fn from(err: roze_core::DomainError) -> Self {
        Self(AppError::from(err))
    }
}

impl From<roze_service::ServiceError> for ApiError {
    fn from(err: roze_service::ServiceError) -> Self {
        match err {
            roze_service::ServiceError::Domain(e) => Self(AppError::from(e)),
            other => Self(AppError::internal(other)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, "request failed");
        }

        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// 204 No Content response
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roze_core::DomainError;

    #[test]
    fn test_not_found_maps_to_404() {
        let response =
            ApiError::from(DomainError::RozeIdNotFound("ab12".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let response =
            ApiError::from(DomainError::DatabaseError("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_no_content() {
        let response = NoContent.into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
