//! HTTP-level integration tests for the master-data resources.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, post_raw, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

fn widget() -> Value {
    json!({"sku": "SKU1", "name": "Widget", "unit": "pcs", "weight": 1.5, "dimension": "10x10x10"})
}

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_product_then_duplicate_sku(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/product", widget()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["sku"], "SKU1");
    assert_eq!(json["meta"]["code"], 200);
    assert!(json["data"]["deleted_at"].is_null());

    let response = post_json(app, "/api/v1/product", widget()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["meta"]["message"],
        "Product with this SKU already exists, please use another SKU"
    );
    assert_eq!(json["meta"]["status"], "error");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_required_field_persists_nothing(pool: PgPool) {
    let app = build_test_app(pool);

    let mut input = widget();
    input["unit"] = json!("");
    let response = post_json(app.clone(), "/api/v1/product", input).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["meta"]["message"], "unit is required");

    let json = body_json(get(app, "/api/v1/product").await).await;
    assert_eq!(json["meta"]["pagination"]["total"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_then_get_product(pool: PgPool) {
    let app = build_test_app(pool);
    let created = body_json(post_json(app.clone(), "/api/v1/product", widget()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let mut input = widget();
    input["name"] = json!("Widget XL");
    input["weight"] = json!(2.25);
    let response = put_json(app.clone(), &format!("/api/v1/product/{id}"), input).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app, &format!("/api/v1/product/{id}")).await).await;
    assert_eq!(json["data"]["name"], "Widget XL");
    assert_eq!(json["data"]["weight"], 2.25);
    assert_eq!(json["meta"]["message"], "Product retrieved successfully");
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_unknown_location_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = delete(app, "/api/v1/location/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["meta"]["message"], "location not found");
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn location_soft_delete_is_final(pool: PgPool) {
    let app = build_test_app(pool);
    let location = json!({"code": "A-01", "zone": "A", "type": "rack", "capacity": 40});
    let created = body_json(post_json(app.clone(), "/api/v1/location", location.clone()).await).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["type"], "rack");

    let response = delete(app.clone(), &format!("/api/v1/location/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["meta"]["message"], "Location deleted successfully");

    let response = delete(app.clone(), &format!("/api/v1/location/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app.clone(), &format!("/api/v1/location/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The code is free again once its holder is deleted.
    let response = post_json(app, "/api/v1/location", location).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn supplier_pages_cover_every_row(pool: PgPool) {
    let app = build_test_app(pool);
    for i in 0..5 {
        let supplier = json!({"name": format!("Supplier {i}"), "address": "Dock 4", "contact": "ops@example.com"});
        let response = post_json(app.clone(), "/api/v1/supplier", supplier).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let mut names = Vec::new();
    for page in 1..=3 {
        let json = body_json(get(app.clone(), &format!("/api/v1/supplier?limit=2&page={page}")).await).await;
        assert_eq!(json["meta"]["pagination"]["total"], 5);
        assert_eq!(json["meta"]["pagination"]["last_page"], 3);
        for row in json["data"].as_array().unwrap() {
            names.push(row["name"].as_str().unwrap().to_string());
        }
    }
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 5);

    let json = body_json(get(app, "/api/v1/supplier?limit=2&page=9").await).await;
    assert_eq!(json["data"], json!([]));
}

// ---------------------------------------------------------------------------
// Category / customer
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_with_unknown_parent_is_rejected(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(app.clone(), "/api/v1/categories", json!({"name": "Bolts", "parent_id": 424242})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["meta"]["message"], "parent category not found");

    let root = body_json(post_json(app.clone(), "/api/v1/categories", json!({"name": "Fasteners"})).await).await;
    let parent_id = root["data"]["id"].as_i64().unwrap();
    let response = post_json(app, "/api/v1/categories", json!({"name": "Bolts", "parent_id": parent_id})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["parent_id"], parent_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn customer_body_errors(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_raw(app.clone(), "/api/v1/customers", "").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["meta"]["message"],
        "Missing request body. Please provide a valid JSON payload."
    );

    let response = post_raw(app, "/api/v1/customers", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["meta"]["status"], "error");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_parent_must_be_live_and_not_self(pool: PgPool) {
    let app = build_test_app(pool);
    let root = body_json(post_json(app.clone(), "/api/v1/categories", json!({"name": "Fasteners"})).await).await;
    let root_id = root["data"]["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/categories/{root_id}"),
        json!({"name": "Fasteners", "parent_id": root_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["meta"]["message"], "parent category not found");

    delete(app.clone(), &format!("/api/v1/categories/{root_id}")).await;
    let response = post_json(app, "/api/v1/categories", json!({"name": "Bolts", "parent_id": root_id})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["meta"]["message"], "parent category not found");
}
