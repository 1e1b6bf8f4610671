use utoipa::OpenApi;

use crate::{
    api::models::{StandardError, ValidationError},
    core::{
        errors::FieldError,
        models::user::{UserRequest, UserResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::find_user_by_id,
        super::handlers::find_all_users,
        super::handlers::update_user,
        super::handlers::delete_user
    ),
    components(schemas(
        UserRequest,
        UserResponse,
        StandardError,
        ValidationError,
        FieldError
    )),
    info(
        title = "User CRUD API",
        description = "API for creating, reading, updating and deleting users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
