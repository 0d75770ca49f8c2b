use crate::utils::error::SyncError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 對外錯誤：一律回 500，附帶情境訊息與原始錯誤
#[derive(Debug)]
pub struct ApiError {
    message: String,
    source: SyncError,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
    error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>, source: SyncError) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(
            "❌ {} ({:?}): {}",
            self.message,
            self.source.category(),
            self.source
        );

        let body = ErrorResponse {
            message: self.message,
            error: self.source.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// 為 Result 加上對外錯誤訊息
pub trait ResultExt<T> {
    fn context(self, message: &str) -> ApiResult<T>;
}

impl<T> ResultExt<T> for crate::utils::error::Result<T> {
    fn context(self, message: &str) -> ApiResult<T> {
        self.map_err(|e| ApiError::new(message, e))
    }
}
