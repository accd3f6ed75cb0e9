use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::errors::RosterError;

/// Header carrying the opaque projection spec produced by the caller's
/// query-shape resolver. The value is forwarded to storage verbatim.
pub const PROJECTION_HEADER: &str = "x-projection";

#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

#[derive(Serialize, ToSchema)]
pub struct BulkDeleteResponse {
    /// True iff at least one user transitioned to Deleted.
    pub deleted: bool,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page number, defaults to 1.
    pub page: Option<u64>,
    /// Page size, defaults to 10.
    pub limit: Option<u64>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for RosterError to implement IntoResponse
pub struct ApiError(pub RosterError);

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            RosterError::UserNotFound(_) => StatusCode::NOT_FOUND,
            RosterError::AlreadyDeleted(_) | RosterError::NotDeleted(_) => StatusCode::CONFLICT,
            RosterError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
