use crate::{
    api::models::{
        ApiError, BulkDeleteRequest, BulkDeleteResponse, CreateUserRequest, ErrorResponse,
        ListParams, PROJECTION_HEADER,
    },
    core::{
        errors::RosterError,
        models::{Projection, User, UserPatch},
        services::UserService,
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use std::sync::Arc;

type Service = Arc<UserService<InMemoryStorage>>;

/// Lifts the projection spec off the request without parsing it. Absent or
/// non-UTF-8 header means "all fields".
fn projection_from(headers: &HeaderMap) -> Projection {
    headers
        .get(PROJECTION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(Projection::from_spec)
        .unwrap_or_default()
}

// Define API routes
pub fn api_routes(service: Service) -> Router {
    Router::new()
        .route(
            "/users",
            axum::routing::get(list_users).post(create_user),
        )
        .route("/users/bulk_delete", axum::routing::post(bulk_delete_users))
        .route(
            "/users/{id}",
            axum::routing::get(get_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route("/users/{id}/restore", axum::routing::post(restore_user))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(ListParams),
    responses(
        (status = 200, description = "Active users for the requested page", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn list_users(
    State(service): State<Service>,
    Query(params): Query<ListParams>,
    headers: HeaderMap,
) -> Result<Json<Vec<User>>, ApiError> {
    let projection = projection_from(&headers);
    let users = service
        .list_users(params.page, params.limit, &projection)
        .await?;
    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_user(
    State(service): State<Service>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = service.create_user(req.name, req.email).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user(
    State(service): State<Service>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = service
        .get_user(id)
        .await?
        .ok_or(RosterError::UserNotFound(id))?;
    Ok(Json(user))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    request_body = UserPatch,
    params(
        ("id" = i64, Path, description = "ID of the user to update")
    ),
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn update_user(
    State(service): State<Service>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    let projection = projection_from(&headers);
    let user = service.update_user(id, patch, &projection).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = i64, Path, description = "ID of the user to soft delete")
    ),
    responses(
        (status = 200, description = "User soft deleted", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "User already deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_user(
    State(service): State<Service>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = service.delete_user(id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users/{id}/restore",
    params(
        ("id" = i64, Path, description = "ID of the user to restore")
    ),
    responses(
        (status = 200, description = "User restored", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "User is not soft-deleted", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn restore_user(
    State(service): State<Service>,
    Path(id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = service.restore_user(id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users/bulk_delete",
    request_body = BulkDeleteRequest,
    responses(
        (status = 200, description = "Batch processed; deleted is true iff at least one user transitioned", body = BulkDeleteResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn bulk_delete_users(
    State(service): State<Service>,
    Json(req): Json<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>, ApiError> {
    let deleted = service.bulk_delete_users(&req.ids).await?;
    Ok(Json(BulkDeleteResponse { deleted }))
}
