use utoipa::OpenApi;

use crate::{
    api::models::{
        BulkDeleteRequest, BulkDeleteResponse, CreateUserRequest, ErrorResponse,
    },
    core::models::{User, UserPatch},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_users,
        super::handlers::create_user,
        super::handlers::get_user,
        super::handlers::update_user,
        super::handlers::delete_user,
        super::handlers::restore_user,
        super::handlers::bulk_delete_users
    ),
    components(schemas(
        CreateUserRequest,
        BulkDeleteRequest,
        BulkDeleteResponse,
        ErrorResponse,
        User,
        UserPatch
    )),
    info(
        title = "Roster API",
        description = "API for managing user records with soft delete and restore",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
