#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use wms_api::config::ServerConfig;
use wms_api::router::build_app_router;
use wms_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        service_name: "Warehouse Master Data Service".to_string(),
    }
}

/// Build the production router (same middleware stack as `main.rs`) over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, Arc::new(config.clone()));
    build_app_router(state, &config)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: Value) -> Response {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: Value) -> Response {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response {
    send(app, Method::POST, uri, Body::from(raw)).await
}
