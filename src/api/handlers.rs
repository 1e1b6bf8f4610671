use crate::{
    api::models::*,
    core::{
        mapper::DefaultUserMapper,
        models::user::{User, UserRequest, UserResponse},
        services::UserService,
        validation::{ValidationMode, validate_user_request},
    },
    infrastructure::storage::in_memory::InMemoryUserRepository,
};
use axum::{
    Json, Router,
    extract::{OriginalUri, Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use futures::TryStreamExt;

use std::sync::Arc;

pub type SharedUserService = Arc<UserService<InMemoryUserRepository, DefaultUserMapper>>;

// Define API routes
pub fn api_routes(service: SharedUserService) -> Router {
    Router::new()
        .route("/users", get(find_all_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(find_user_by_id).patch(update_user).delete(delete_user),
        )
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created, Location header points at it"),
        (status = 400, description = "Validation failed or email already registered", body = ValidationError)
    )
)]
pub async fn create_user(
    State(service): State<SharedUserService>,
    OriginalUri(uri): OriginalUri,
    Json(req): Json<UserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let path = uri.path();
    validate_user_request(&req, ValidationMode::Create).map_err(|e| ApiError::new(e, path))?;
    let user = service.save(req).await.map_err(|e| ApiError::new(e, path))?;
    let location = format!("{}/{}", path.trim_end_matches('/'), user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 404, description = "User not found", body = StandardError)
    )
)]
pub async fn find_user_by_id(
    State(service): State<SharedUserService>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = service
        .find_by_id(&user_id)
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;
    Ok(Json(service.to_response(&user)))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users, possibly none", body = [UserResponse])
    )
)]
pub async fn find_all_users(
    State(service): State<SharedUserService>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users: Vec<User> = service
        .find_all()
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?
        .try_collect()
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;
    Ok(Json(users.iter().map(|u| service.to_response(u)).collect()))
}

#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to update")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated, absent fields kept", body = UserResponse),
        (status = 400, description = "Validation failed or email already registered", body = ValidationError),
        (status = 404, description = "User not found", body = StandardError)
    )
)]
pub async fn update_user(
    State(service): State<SharedUserService>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<String>,
    Json(req): Json<UserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let path = uri.path();
    validate_user_request(&req, ValidationMode::Patch).map_err(|e| ApiError::new(e, path))?;
    let user = service
        .update(&user_id, req)
        .await
        .map_err(|e| ApiError::new(e, path))?;
    Ok(Json(service.to_response(&user)))
}

#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = StandardError)
    )
)]
pub async fn delete_user(
    State(service): State<SharedUserService>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service
        .delete(&user_id)
        .await
        .map_err(|e| ApiError::new(e, uri.path()))?;
    Ok(StatusCode::OK)
}
