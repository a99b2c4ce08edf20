//! Handlers for the `/ota` resource. Releases are addressed by `?app_id=`.

use axum::extract::{Query, State};
use axum::Json;
use wms_core::pagination::PageMeta;
use wms_db::models::ota::{Ota, OtaInput};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::query::{AppIdParams, PageParams};
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/v1/ota
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<OtaInput>,
) -> AppResult<Json<Envelope<Ota>>> {
    let ota = state.otas.create(&input).await?;
    Ok(Json(Envelope::success(ota, "OTA created successfully")))
}

/// GET /api/v1/ota?limit=&page=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Envelope<Vec<Ota>>>> {
    let page = params.page_request();
    let rows = state.otas.list(page).await?;
    let total = state.otas.count().await?;
    Ok(Json(Envelope::paginated(
        rows,
        "OTAs retrieved successfully",
        PageMeta::new(page, total),
    )))
}

/// GET /api/v1/ota/detail?app_id=
pub async fn detail(
    State(state): State<AppState>,
    Query(params): Query<AppIdParams>,
) -> AppResult<Json<Envelope<Ota>>> {
    let ota = state.otas.get_by_app_id(&params.app_id).await?;
    Ok(Json(Envelope::success(ota, "OTA retrieved successfully")))
}

/// PUT /api/v1/ota/edit?app_id=
///
/// A non-empty `app_id` in the query wins over the one in the body.
pub async fn edit(
    State(state): State<AppState>,
    Query(params): Query<AppIdParams>,
    JsonBody(mut input): JsonBody<OtaInput>,
) -> AppResult<Json<Envelope<Ota>>> {
    if !params.app_id.trim().is_empty() {
        input.app_id = params.app_id;
    }
    let ota = state.otas.update(&input.app_id, &input).await?;
    Ok(Json(Envelope::success(ota, "OTA updated successfully")))
}

/// DELETE /api/v1/ota/delete?app_id=
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<AppIdParams>,
) -> AppResult<Json<Envelope<()>>> {
    state.otas.delete(&params.app_id).await?;
    Ok(Json(Envelope::success((), "OTA deleted successfully")))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::router::build_app_router;
    use crate::services::memory::{memory_state, test_config};

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let body = body.map_or_else(Body::empty, |v| Body::from(v.to_string()));
        let request = Request::builder().method(method).uri(uri).body(body).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn release(version_code: i32) -> Value {
        json!({"app_id": "com.app", "version_name": "1.0", "version_code": version_code, "url": "https://x"})
    }

    #[tokio::test]
    async fn create_detail_and_reject_second_release() {
        let app = build_app_router(memory_state(), &test_config());

        let (status, _) = send(&app, Method::POST, "/api/v1/ota", Some(release(1))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, Method::GET, "/api/v1/ota/detail?app_id=com.app", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["version_code"], 1);

        let (status, body) = send(&app, Method::POST, "/api/v1/ota", Some(release(2))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["meta"]["message"], "an OTA update already exists for this app");
    }

    #[tokio::test]
    async fn edit_takes_app_id_from_query() {
        let app = build_app_router(memory_state(), &test_config());
        send(&app, Method::POST, "/api/v1/ota", Some(release(1))).await;

        let mut body = release(5);
        body["app_id"] = json!("ignored");
        let (status, body) = send(&app, Method::PUT, "/api/v1/ota/edit?app_id=com.app", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["app_id"], "com.app");
        assert_eq!(body["data"]["version_code"], 5);
    }

    #[tokio::test]
    async fn delete_then_detail_is_not_found() {
        let app = build_app_router(memory_state(), &test_config());
        send(&app, Method::POST, "/api/v1/ota", Some(release(1))).await;

        let (status, body) = send(&app, Method::DELETE, "/api/v1/ota/delete?app_id=com.app", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["message"], "OTA deleted successfully");

        let (status, body) = send(&app, Method::GET, "/api/v1/ota/detail?app_id=com.app", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["meta"]["message"], "OTA not found");
    }

    #[tokio::test]
    async fn missing_app_id_is_bad_request() {
        let app = build_app_router(memory_state(), &test_config());
        let (status, body) = send(&app, Method::GET, "/api/v1/ota/detail", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["meta"]["message"], "invalid app ID");
    }
}
