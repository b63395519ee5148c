use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use service::station::domain::{BikeDelta, Station, StationLocation};

use super::auth::ServerState;
use crate::errors::ApiError;

type IdPath = Result<Path<i64>, PathRejection>;
type Body<T> = Result<Json<T>, JsonRejection>;

#[utoipa::path(
    post,
    path = "/stations",
    tag = "stations",
    security(("bearer_auth" = [])),
    request_body = crate::openapi::StationLocationDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StationDoc),
        (status = 400, description = "Validation failed or invalid input", body = crate::openapi::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Body<StationLocation>,
) -> Result<(StatusCode, Json<Station>), ApiError> {
    let Json(input) = payload?;
    let station = state.stations.create(input).await?;
    Ok((StatusCode::CREATED, Json(station)))
}

#[utoipa::path(
    get,
    path = "/stations/{id}",
    tag = "stations",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Station id")),
    responses(
        (status = 200, description = "Station", body = crate::openapi::StationDoc),
        (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, id: IdPath) -> Result<Json<Station>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.stations.by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/stations/{id}/location",
    tag = "stations",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Station id")),
    request_body = crate::openapi::StationLocationDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StationDoc),
        (status = 400, description = "Validation failed or invalid input", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update_location(
    State(state): State<ServerState>,
    id: IdPath,
    payload: Body<StationLocation>,
) -> Result<Json<Station>, ApiError> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(state.stations.update_location(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/stations/{id}",
    tag = "stations",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Station id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Station still has bicycles", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<ServerState>, id: IdPath) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.stations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/stations/{id}/bikes-available",
    tag = "stations",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Station id")),
    request_body = crate::openapi::BikeDeltaDoc,
    responses(
        (status = 200, description = "Counter updated", body = crate::openapi::StationDoc),
        (status = 400, description = "Counter would become negative", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn bikes_available(
    State(state): State<ServerState>,
    id: IdPath,
    payload: Body<BikeDelta>,
) -> Result<Json<Station>, ApiError> {
    let Path(id) = id?;
    let Json(BikeDelta { delta }) = payload?;
    Ok(Json(state.stations.update_bikes_available(id, delta).await?))
}

#[utoipa::path(
    post,
    path = "/stations/{id}/bikes-total",
    tag = "stations",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Station id")),
    request_body = crate::openapi::BikeDeltaDoc,
    responses(
        (status = 200, description = "Counter updated", body = crate::openapi::StationDoc),
        (status = 400, description = "Counter would become negative", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn bikes_total(
    State(state): State<ServerState>,
    id: IdPath,
    payload: Body<BikeDelta>,
) -> Result<Json<Station>, ApiError> {
    let Path(id) = id?;
    let Json(BikeDelta { delta }) = payload?;
    Ok(Json(state.stations.update_bikes_total(id, delta).await?))
}
