use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};

use service::auth::Claims;
use service::user::domain::{UpdateUser, User, UserProfile};

use super::auth::ServerState;
use crate::errors::ApiError;

#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile with recent activity", body = crate::openapi::UserProfileDoc),
        (status = 401, description = "Missing or invalid token", body = crate::openapi::ErrorResponse),
        (status = 404, description = "User not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn me(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserProfile>, ApiError> {
    let profile = state.users.profile(claims.user_id).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    patch,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = crate::openapi::UpdateUserDoc,
    responses(
        (status = 200, description = "Updated user", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation failed or invalid input", body = crate::openapi::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::openapi::ErrorResponse),
        (status = 404, description = "User not found", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Email or phone taken", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update_me(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<UpdateUser>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(input) = payload?;
    let user = state.users.update(claims.user_id, input).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Account anonymized"),
        (status = 401, description = "Missing or invalid token", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete_me(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
) -> Result<StatusCode, ApiError> {
    state.users.delete(claims.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
