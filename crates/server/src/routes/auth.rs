use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use service::auth::domain::{AuthSession, CreateUser, LoginInput};
use service::auth::{AuthService, TokenIssuer};
use service::station::repository::StationRepository;
use service::station::StationService;
use service::user::repository::UserRepository;
use service::user::UserService;
use service::validation::Validator;

use crate::errors::ApiError;

/// Shared handler state. Services sit behind trait objects so any repository can back them.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService<dyn UserRepository>>,
    pub users: Arc<UserService<dyn UserRepository>>,
    pub stations: Arc<StationService<dyn StationRepository>>,
}

impl ServerState {
    pub fn new(users: Arc<dyn UserRepository>, stations: Arc<dyn StationRepository>, tokens: TokenIssuer) -> Self {
        let validator = Validator::new();
        Self {
            auth: Arc::new(AuthService::new(users.clone(), validator.clone(), tokens)),
            users: Arc::new(UserService::new(users, validator.clone())),
            stations: Arc::new(StationService::new(stations, validator)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub user: CreateUser,
}

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = crate::openapi::RegisterRequestDoc,
    responses(
        (status = 201, description = "Registered", body = crate::openapi::AuthResponseDoc),
        (status = 400, description = "Validation failed or invalid input", body = crate::openapi::ErrorResponse),
        (status = 409, description = "User already exists", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthSession>), ApiError> {
    let Json(body) = payload?;
    let session = state.auth.register(body.user).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = crate::openapi::LoginRequestDoc,
    responses(
        (status = 200, description = "Logged in", body = crate::openapi::AuthResponseDoc),
        (status = 400, description = "Invalid credentials or invalid input", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Internal error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<AuthSession>, ApiError> {
    let Json(input) = payload?;
    let session = state.auth.login(input).await?;
    Ok(Json(session))
}

/// Require `Authorization: Bearer <jwt>` and expose the verified claims to handlers.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_owned();
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned);

    let Some(token) = token else {
        warn!(path = %path, "missing or malformed Authorization header");
        return Err(ApiError::unauthorized("missing bearer token"));
    };

    let claims = state.auth.authenticate(&token).await.map_err(|e| {
        warn!(path = %path, err = %e, "token validation failed");
        ApiError::from(e)
    })?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
