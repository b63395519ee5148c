pub mod auth;
pub mod stations;
pub mod users;

use std::time::Duration;

use std::any::Any;

use axum::{
    http::{HeaderName, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use self::auth::{require_bearer_token, ServerState};
use crate::errors::ApiError;
use crate::openapi::ApiDoc;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `TimeoutLayer` answers with an empty 408; give it the usual error body.
async fn timeout_as_json(res: Response) -> Response {
    if res.status() == StatusCode::REQUEST_TIMEOUT {
        return ApiError::new(StatusCode::REQUEST_TIMEOUT, "request timeout").into_response();
    }
    res
}

fn panic_as_json(_: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}

/// Build the full application router, including public and token-protected routes
pub fn build_router(state: ServerState, cors: CorsLayer, request_timeout: Duration) -> Router {
    // Public routes
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login));

    // Bearer-protected routes
    let protected = Router::new()
        .route("/users/me", get(users::me).patch(users::update_me).delete(users::delete_me))
        .route("/stations", post(stations::create))
        .route("/stations/:id", get(stations::get).delete(stations::delete))
        .route("/stations/:id/location", put(stations::update_location))
        .route("/stations/:id/bikes-available", post(stations::bikes_available))
        .route("/stations/:id/bikes-total", post(stations::bikes_total))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer_token));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Compose
    public.merge(protected).with_state(state).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http()
                    // span per request with method and path, at INFO
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    // status code and latency
                    .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                    // 5xx and friends at ERROR
                    .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
            )
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(CatchPanicLayer::custom(panic_as_json))
            .layer(middleware::map_response(timeout_as_json))
            .layer(TimeoutLayer::new(request_timeout))
            .layer(cors),
    )
}
