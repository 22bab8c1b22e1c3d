//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod auth;
mod cases;
mod chat;
mod session;

pub use auth::*;
pub use cases::*;
pub use chat::*;
pub use session::*;

use axum::{
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;

/// JSON body extractor whose rejections use the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}
