use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use daylog_core::errors::{Error as CoreError, ValidationError};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Methods served by the activities endpoint, as sent in `Allow`.
pub const ACTIVITIES_ALLOW: &str = "GET, POST, DELETE";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("Method {0} not allowed")]
    MethodNotAllowed(Method),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Core(CoreError::Validation(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Core(CoreError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string())))
                    .into_response()
            }
            ApiError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(reason))).into_response()
            }
            ApiError::MethodNotAllowed(method) => {
                let body = ErrorResponse::new(format!("Method {} not allowed", method));
                let mut response = (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response();
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static(ACTIVITIES_ALLOW));
                response
            }
            ApiError::Core(err) => {
                tracing::error!("API error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::server_error(err.to_string())),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
