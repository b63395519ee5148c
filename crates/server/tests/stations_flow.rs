mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, register, send, send_raw};

#[tokio::test]
async fn test_station_lifecycle() {
    let app = app();
    let (_, token) = register(&app, "ops@example.com", "+300").await;
    let t = Some(token.as_str());

    let (status, body) = send(&app, "POST", "/stations", t, Some(json!({"location_street": "short"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "field location_street is not valid");

    let (status, body) = send(&app, "POST", "/stations", t, Some(json!({"location_street": "Harbour Road 4"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["bikes_available"], 0);

    let uri = format!("/stations/{id}/location");
    let (status, body) = send(&app, "PUT", &uri, t, Some(json!({"location_street": "Market Square 10"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location_street"], "Market Square 10");

    let (status, body) = send(&app, "POST", &format!("/stations/{id}/bikes-total"), t, Some(json!({"delta": 5}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bikes_total"], 5);

    let (status, body) = send(&app, "POST", &format!("/stations/{id}/bikes-available"), t, Some(json!({"delta": 3}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bikes_available"], 3);

    let (status, body) = send(&app, "POST", &format!("/stations/{id}/bikes-available"), t, Some(json!({"delta": -4}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bike count cannot become negative");

    let total = format!("/stations/{id}/bikes-total");
    let (status, body) = send(&app, "POST", &total, t, Some(json!({"delta": i32::MAX}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bike count out of range");
    let (status, body) = send(&app, "GET", &format!("/stations/{id}"), t, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bikes_total"], 5);

    let (status, _) = send(&app, "DELETE", &format!("/stations/{id}"), t, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &format!("/stations/{id}"), t, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "station not found");
}

#[tokio::test]
async fn test_station_bad_requests() {
    let app = app();
    let (_, token) = register(&app, "ops@example.com", "+300").await;
    let t = Some(token.as_str());

    let (status, body) = send(&app, "GET", "/stations/abc", t, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid input"}));

    let (status, body) = send_raw(&app, "POST", "/stations/1/bikes-total", t, Some("{\"delta\": \"many\"}".into())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid input"}));

    let (status, _) = send(&app, "GET", "/stations/1", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
