use axum::routing::get;
use axum::Router;

use crate::handlers::master_data::{self as handlers, Resource};
use crate::state::AppState;

/// Routes for one master-data noun.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// PATCH  /{id}      -> update (only when E::PATCH_ALIAS)
/// DELETE /{id}      -> delete
/// ```
pub fn router<E: Resource>() -> Router<AppState> {
    let mut item = get(handlers::get_by_id::<E>)
        .put(handlers::update::<E>)
        .delete(handlers::delete::<E>);
    if E::PATCH_ALIAS {
        item = item.patch(handlers::update::<E>);
    }

    Router::new()
        .route("/", get(handlers::list::<E>).post(handlers::create::<E>))
        .route("/{id}", item)
}
