use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::ota;
use crate::state::AppState;

/// Routes mounted at `/ota`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /detail?app_id=    -> detail
/// PUT    /edit?app_id=      -> edit
/// DELETE /delete?app_id=    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ota::list).post(ota::create))
        .route("/detail", get(ota::detail))
        .route("/edit", put(ota::edit))
        .route("/delete", delete(ota::delete))
}
