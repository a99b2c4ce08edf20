//! Route tree.
//!
//! [`api_routes`] is mounted at `/api/v1`; [`health::router`] sits at the
//! root so load balancers can probe it without the version prefix.

pub mod health;
pub mod master_data;
pub mod ota;

use axum::Router;
use wms_db::models::category::Category;
use wms_db::models::customer::Customer;
use wms_db::models::location::Location;
use wms_db::models::product::Product;
use wms_db::models::supplier::Supplier;

use crate::state::AppState;

/// Every resource served under `/api/v1`.
///
/// ```text
/// GET              /health
/// /product         master data (sku unique)
/// /location        master data (code unique, PATCH alias)
/// /supplier        master data
/// /customers       master data
/// /categories      master data
/// /ota             OTA releases keyed by ?app_id=
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::api_router())
        .nest("/product", master_data::router::<Product>())
        .nest("/location", master_data::router::<Location>())
        .nest("/supplier", master_data::router::<Supplier>())
        .nest("/customers", master_data::router::<Customer>())
        .nest("/categories", master_data::router::<Category>())
        .nest("/ota", ota::router())
}
