use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use service::reservation::repository::mock::MockReservationRepository;
use tower::ServiceExt;

use server::routes;
use server::state::ServerState;

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn build_app() -> Router {
    let state = ServerState::new(Arc::new(MockReservationRepository::default()));
    routes::build_router(state, cors(), "static")
}

fn alice() -> Value {
    json!({
        "name": "Alice",
        "email": "a@x.com",
        "phone": "555",
        "checkin": "2024-01-01",
        "checkout": "2024-01-02",
        "car_model": "Civic",
        "car_size": "small",
        "license_plate": "ABC123"
    })
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[tokio::test]
async fn test_alice_scenario() -> anyhow::Result<()> {
    let app = build_app();

    let resp = app.clone().oneshot(post_json("/reserve", &alice())).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await?, json!({"message": "Reservation successful!"}));

    let resp = app.clone().oneshot(get("/retrieve/a@x.com")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?, alice());

    let resp = app.clone().oneshot(post_json("/reserve", &alice())).await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(resp).await?,
        json!({"error": "A reservation with this email already exists."})
    );
    Ok(())
}

#[tokio::test]
async fn test_duplicate_does_not_overwrite() -> anyhow::Result<()> {
    let app = build_app();
    app.clone().oneshot(post_json("/reserve", &alice())).await?;

    let mut other = alice();
    other["name"] = json!("Mallory");
    other["license_plate"] = json!("EVIL00");
    let resp = app.clone().oneshot(post_json("/reserve", &other)).await?;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = app.clone().oneshot(get("/retrieve/a@x.com")).await?;
    assert_eq!(body_json(resp).await?, alice());
    Ok(())
}

#[tokio::test]
async fn test_retrieve_unknown_email() -> anyhow::Result<()> {
    let app = build_app();
    let resp = app.oneshot(get("/retrieve/nobody@x.com")).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await?,
        json!({"error": "No reservation found for this email."})
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_field_is_bad_request() -> anyhow::Result<()> {
    let app = build_app();
    let mut body = alice();
    body.as_object_mut().unwrap().remove("license_plate");

    let resp = app.clone().oneshot(post_json("/reserve", &body)).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let v = body_json(resp).await?;
    assert!(v["error"].as_str().unwrap_or_default().contains("license_plate"), "body: {v}");

    // nothing was stored
    let resp = app.oneshot(get("/retrieve/a@x.com")).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_wrong_type_and_garbage_body() -> anyhow::Result<()> {
    let app = build_app();

    let mut body = alice();
    body["phone"] = json!(5551234);
    let resp = app.clone().oneshot(post_json("/reserve", &body)).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = Request::builder()
        .method("POST")
        .uri("/reserve")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;
    let resp = app.clone().oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await?["error"].is_string());

    let req = Request::builder().method("POST").uri("/reserve").body(Body::from(serde_json::to_vec(&alice())?))?;
    let resp = app.oneshot(req).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_blank_field_is_bad_request() -> anyhow::Result<()> {
    let app = build_app();
    let mut body = alice();
    body["name"] = json!("");
    let resp = app.oneshot(post_json("/reserve", &body)).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await?, json!({"error": "name must not be empty"}));
    Ok(())
}

#[tokio::test]
async fn test_whitespace_only_field_round_trips() -> anyhow::Result<()> {
    let app = build_app();
    let mut body = alice();
    body["name"] = json!("   ");
    let resp = app.clone().oneshot(post_json("/reserve", &body)).await?;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.oneshot(get("/retrieve/a@x.com")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?, body);
    Ok(())
}

#[tokio::test]
async fn test_percent_encoded_email_path() -> anyhow::Result<()> {
    let app = build_app();
    let mut body = alice();
    body["email"] = json!("first last+tag@x.com");
    app.clone().oneshot(post_json("/reserve", &body)).await?;

    let resp = app.oneshot(get("/retrieve/first%20last%2Btag@x.com")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?["email"], "first last+tag@x.com");
    Ok(())
}

#[tokio::test]
async fn test_every_response_disables_caching() -> anyhow::Result<()> {
    let app = build_app();
    let responses = vec![
        app.clone().oneshot(post_json("/reserve", &alice())).await?,
        app.clone().oneshot(post_json("/reserve", &alice())).await?,
        app.clone().oneshot(get("/retrieve/a@x.com")).await?,
        app.clone().oneshot(get("/retrieve/ghost@x.com")).await?,
        app.clone().oneshot(get("/health")).await?,
    ];
    for resp in responses {
        let h = resp.headers();
        assert_eq!(h[header::CACHE_CONTROL], "no-cache, no-store, must-revalidate");
        assert_eq!(h[header::PRAGMA], "no-cache");
        assert_eq!(h[header::EXPIRES], "0");
    }
    Ok(())
}

#[tokio::test]
async fn test_openapi_document_served() -> anyhow::Result<()> {
    let app = build_app();
    let resp = app.oneshot(get("/api-docs/openapi.json")).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await?;
    assert!(doc["paths"]["/reserve"]["post"].is_object());
    assert!(doc["paths"]["/retrieve/{email}"]["get"].is_object());
    Ok(())
}
