use std::sync::Arc;

use wms_db::models::category::Category;
use wms_db::models::customer::Customer;
use wms_db::models::location::Location;
use wms_db::models::product::Product;
use wms_db::models::supplier::Supplier;
use wms_db::repositories::{
    CategoryRepo, CustomerRepo, LocationRepo, OtaRepo, ProductRepo, SupplierRepo,
};
use wms_db::DbPool;

use crate::config::ServerConfig;
use crate::services::{MasterDataService, OtaService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (every service holds its repository behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly only by the health probe.
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
    pub products: MasterDataService<Product>,
    pub locations: MasterDataService<Location>,
    pub suppliers: MasterDataService<Supplier>,
    pub customers: MasterDataService<Customer>,
    pub categories: MasterDataService<Category>,
    pub otas: OtaService,
}

impl AppState {
    /// Wire every service to its PostgreSQL repository.
    pub fn new(pool: DbPool, config: Arc<ServerConfig>) -> Self {
        Self {
            products: MasterDataService::new(Arc::new(ProductRepo::new(pool.clone()))),
            locations: MasterDataService::new(Arc::new(LocationRepo::new(pool.clone()))),
            suppliers: MasterDataService::new(Arc::new(SupplierRepo::new(pool.clone()))),
            customers: MasterDataService::new(Arc::new(CustomerRepo::new(pool.clone()))),
            categories: MasterDataService::new(Arc::new(CategoryRepo::new(pool.clone()))),
            otas: OtaService::new(Arc::new(OtaRepo::new(pool.clone()))),
            pool,
            config,
        }
    }
}
