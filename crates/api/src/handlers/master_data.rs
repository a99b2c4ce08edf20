//! Generic handlers for the master-data resources.
//!
//! One set of handlers serves `/product`, `/location`, `/supplier`,
//! `/customers` and `/categories`; each route instantiates them with the
//! entity type, and [`Resource`] picks the matching service out of
//! [`AppState`].

use axum::extract::{Path, Query, State};
use axum::Json;
use wms_core::pagination::PageMeta;
use wms_core::types::DbId;
use wms_db::models::category::Category;
use wms_db::models::customer::Customer;
use wms_db::models::location::Location;
use wms_db::models::product::Product;
use wms_db::models::supplier::Supplier;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::query::PageParams;
use crate::response::Envelope;
use crate::services::{MasterData, MasterDataService};
use crate::state::AppState;

/// A master-data entity exposed over HTTP.
pub trait Resource: MasterData {
    /// Also accept `PATCH /{id}` as a full update.
    const PATCH_ALIAS: bool = false;

    fn service(state: &AppState) -> &MasterDataService<Self>;
}

impl Resource for Product {
    fn service(state: &AppState) -> &MasterDataService<Self> {
        &state.products
    }
}

impl Resource for Location {
    const PATCH_ALIAS: bool = true;

    fn service(state: &AppState) -> &MasterDataService<Self> {
        &state.locations
    }
}

impl Resource for Supplier {
    fn service(state: &AppState) -> &MasterDataService<Self> {
        &state.suppliers
    }
}

impl Resource for Customer {
    fn service(state: &AppState) -> &MasterDataService<Self> {
        &state.customers
    }
}

impl Resource for Category {
    fn service(state: &AppState) -> &MasterDataService<Self> {
        &state.categories
    }
}

/// Path ids arrive as text so a non-numeric id gets an entity-specific message.
fn parse_id<E: Resource>(raw: &str) -> AppResult<DbId> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", E::ENTITY)))
}

/// POST /api/v1/{noun}
pub async fn create<E: Resource>(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<E::Input>,
) -> AppResult<Json<Envelope<E>>> {
    let record = E::service(&state).create(&input).await?;
    Ok(Json(Envelope::success(
        record,
        format!("{} created successfully", E::LABEL),
    )))
}

/// GET /api/v1/{noun}?limit=&page=
pub async fn list<E: Resource>(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Envelope<Vec<E>>>> {
    let page = params.page_request();
    let service = E::service(&state);

    let rows = service.list(page).await?;
    let total = service.count().await?;

    Ok(Json(Envelope::paginated(
        rows,
        format!("{} retrieved successfully", E::PLURAL),
        PageMeta::new(page, total),
    )))
}

/// GET /api/v1/{noun}/{id}
pub async fn get_by_id<E: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Envelope<E>>> {
    let id = parse_id::<E>(&id)?;
    let record = E::service(&state).get_by_id(id).await?;
    Ok(Json(Envelope::success(
        record,
        format!("{} retrieved successfully", E::LABEL),
    )))
}

/// PUT /api/v1/{noun}/{id}
pub async fn update<E: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<E::Input>,
) -> AppResult<Json<Envelope<E>>> {
    let id = parse_id::<E>(&id)?;
    let record = E::service(&state).update(id, &input).await?;
    Ok(Json(Envelope::success(
        record,
        format!("{} updated successfully", E::LABEL),
    )))
}

/// DELETE /api/v1/{noun}/{id}
pub async fn delete<E: Resource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Envelope<()>>> {
    let id = parse_id::<E>(&id)?;
    E::service(&state).delete(id).await?;
    Ok(Json(Envelope::success(
        (),
        format!("{} deleted successfully", E::LABEL),
    )))
}
