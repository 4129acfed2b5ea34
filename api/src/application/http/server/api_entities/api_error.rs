use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use insightchef_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const UNAVAILABLE_MESSAGE: &str =
    "The recipe service is temporarily unavailable. Please try again later.";
pub const TIMEOUT_MESSAGE: &str = "Request took too long. Please try again.";
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again later.";
pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body is too large.";

/// Errors returned to HTTP callers. Every variant renders a fixed, user-safe
/// message; only `BadRequest` carries text, and that text comes from input
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("{}", PAYLOAD_TOO_LARGE_MESSAGE)]
    PayloadTooLarge,

    #[error("{}", RATE_LIMITED_MESSAGE)]
    TooManyRequests,

    #[error("{}", GENERIC_ERROR_MESSAGE)]
    InternalServerError,

    #[error("{}", UNAVAILABLE_MESSAGE)]
    BadGateway,

    #[error("{}", UNAVAILABLE_MESSAGE)]
    ServiceUnavailable,

    #[error("{}", TIMEOUT_MESSAGE)]
    GatewayTimeout,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::UpstreamUnavailable(detail) => {
                tracing::error!("Recipe generation failed upstream: {}", detail);
                ApiError::BadGateway
            }
            CoreError::NotConfigured => {
                tracing::error!("Recipe generation requested without an API key");
                ApiError::ServiceUnavailable
            }
            CoreError::Timeout => {
                tracing::warn!("Recipe generation timed out");
                ApiError::GatewayTimeout
            }
            CoreError::Internal(detail) => {
                tracing::error!("Recipe generation failed: {}", detail);
                ApiError::InternalServerError
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
